//! Split-horizon suppression.
//!
//! A tinydns line with a location code is only served to clients in that
//! location. Only the default view is published, so those lines are dropped.

use log::info;

use crate::zonefile::RecordGroup;

/// Location field of `+` and `C` lines: `+fqdn:ip:ttl:timestamp:lo`.
pub const LOCATION_FIELD: usize = 3;

/// Removes every line whose `location_field` is set, then every name left
/// with no lines. The returned group replaces the input.
pub fn remove_split_horizon(mut records: RecordGroup, location_field: usize) -> RecordGroup {
    for (name, lines) in records.iter_mut() {
        lines.retain(|line| {
            let location = line.field(location_field);
            if location.is_empty() {
                true
            } else {
                info!("Dropping split-horizon line for {name} (location {location}): {line:?}");
                false
            }
        });
    }

    records.retain(|name, lines| {
        if lines.is_empty() {
            info!("Removing all records for {name}");
            false
        } else {
            true
        }
    });
    records
}
