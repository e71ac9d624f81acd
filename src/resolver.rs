use log::{info, warn};

use crate::core::provider::DNSProvider;
use crate::core::record::{HostedZone, RecordTag, ensure_trailing_dot};
use crate::error::{Error, Result};
use crate::zonefile::Zone;

/// Domain the data file describes, taken from its `Z` record.
pub fn zone_domain(zone: &Zone) -> Result<String> {
    let soa = zone
        .get(RecordTag::Soa)
        .filter(|group| !group.is_empty())
        .ok_or(Error::MissingSoa)?;
    if soa.len() > 1 {
        warn!(
            "Zone file has {} SOA names; files with several zones are not supported",
            soa.len()
        );
    }
    let name = soa
        .keys()
        .find(|name| !name.is_empty())
        .ok_or(Error::MissingSoa)?;
    Ok(ensure_trailing_dot(name))
}

/// Finds the hosted zone named `fqdn`, creating it when there is none.
pub async fn find_or_create_zone(
    provider: &dyn DNSProvider,
    fqdn: &str,
    max_items: usize,
) -> Result<HostedZone> {
    let zones = provider.list_zones(max_items).await?;
    if let Some(existing) = zones.into_iter().find(|z| z.name == fqdn) {
        info!("Found hosted zone {} ({})", existing.name, existing.id);
        return Ok(existing);
    }
    let created = provider.create_zone(fqdn).await?;
    info!("Created hosted zone {} ({})", created.name, created.id);
    Ok(created)
}

/// Determines the domain from `zone`, then resolves its hosted zone. Fails
/// before any provider call when the file has no `Z` record.
pub async fn resolve_zone(
    provider: &dyn DNSProvider,
    zone: &Zone,
    max_items: usize,
) -> Result<HostedZone> {
    let fqdn = zone_domain(zone)?;
    info!("Determined domain name: {fqdn}");
    find_or_create_zone(provider, &fqdn, max_items).await
}
