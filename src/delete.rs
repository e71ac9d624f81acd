use log::info;

use crate::core::provider::DNSProvider;
use crate::core::record::{HostedZone, ensure_trailing_dot};
use crate::error::Result;

/// Deletes the hosted zone named `zone`, record sets included.
///
/// Returns the deleted zone, or `None` when no hosted zone has that name.
pub async fn delete_zone(
    provider: &dyn DNSProvider,
    zone: &str,
    max_items: usize,
) -> Result<Option<HostedZone>> {
    let fqdn = ensure_trailing_dot(zone);
    info!("Determined domain name: {fqdn}");

    let zones = provider.list_zones(max_items).await?;
    let Some(target) = zones.into_iter().find(|z| z.name == fqdn) else {
        info!("No hosted zone named {fqdn}; nothing deleted");
        return Ok(None);
    };

    provider.delete_zone(&target, true).await?;
    info!("Deleted zone: {fqdn}");
    Ok(Some(target))
}
