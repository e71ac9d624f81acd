use crate::core::record::{HostedZone, RecordSet};
use crate::error::Error;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// Hosted DNS service holding the published zones.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DNSProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn list_zones(&self, max_items: usize) -> Result<Vec<HostedZone>, Error>;
    async fn create_zone(&self, name: &str) -> Result<HostedZone, Error>;
    /// With `force`, record sets held by the zone are removed along with it.
    async fn delete_zone(&self, zone: &HostedZone, force: bool) -> Result<(), Error>;
    async fn list_record_sets(&self, zone: &HostedZone) -> Result<Vec<RecordSet>, Error>;
    async fn create_record_set(&self, zone: &HostedZone, record: &RecordSet) -> Result<(), Error>;
    /// Pushes the ttl and values of an existing set, identified by its `id`.
    async fn update_record_set(&self, zone: &HostedZone, record: &RecordSet) -> Result<(), Error>;
}
