//! Hosted DNS provider speaking JSON over HTTP

pub mod client;
pub mod error;
pub mod types;

pub use client::{HostedConfig, HostedProvider};
pub use error::{HostedProviderError, map_error};
pub use types::{ApiRecordSet, ApiZone};

use crate::core::provider::DNSProvider;
use crate::core::record::{HostedZone, RecordSet};
use crate::error::Error;
use async_trait::async_trait;
use types::{to_hosted_zone, to_record_set, to_record_set_request};

#[async_trait]
impl DNSProvider for HostedProvider {
    fn name(&self) -> &str {
        "hosted"
    }

    async fn list_zones(&self, max_items: usize) -> Result<Vec<HostedZone>, Error> {
        HostedProvider::list_zones(self, max_items)
            .await
            .map(|v| v.into_iter().map(to_hosted_zone).collect())
            .map_err(map_error)
    }

    async fn create_zone(&self, name: &str) -> Result<HostedZone, Error> {
        HostedProvider::create_zone(self, name)
            .await
            .map(to_hosted_zone)
            .map_err(map_error)
    }

    async fn delete_zone(&self, zone: &HostedZone, force: bool) -> Result<(), Error> {
        HostedProvider::delete_zone(self, &zone.id, force)
            .await
            .map_err(map_error)
    }

    async fn list_record_sets(&self, zone: &HostedZone) -> Result<Vec<RecordSet>, Error> {
        HostedProvider::list_record_sets(self, &zone.id)
            .await
            .map(|v| v.into_iter().map(to_record_set).collect())
            .map_err(map_error)
    }

    async fn create_record_set(&self, zone: &HostedZone, record: &RecordSet) -> Result<(), Error> {
        let req = to_record_set_request(record);
        HostedProvider::create_record_set(self, &zone.id, &req)
            .await
            .map(|_| ())
            .map_err(map_error)
    }

    async fn update_record_set(&self, zone: &HostedZone, record: &RecordSet) -> Result<(), Error> {
        // Updates address an existing set by its provider id
        let Some(id) = record.id.as_deref() else {
            return Err(Error::InvalidInput(format!(
                "Record set {} has no provider id",
                record.name
            )));
        };
        let req = to_record_set_request(record);
        HostedProvider::update_record_set(self, &zone.id, id, &req)
            .await
            .map(|_| ())
            .map_err(map_error)
    }
}
