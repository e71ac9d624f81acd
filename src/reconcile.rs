//! Converges hosted record sets onto the parsed data file.
//!
//! Reconciliation is split into a pure [`plan`] over the local group and the
//! remote record sets, and an [`apply`] that issues the provider calls one at
//! a time. Remote sets with no local counterpart are left alone.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::core::provider::DNSProvider;
use crate::core::record::{DNSRecordType, HostedZone, RecordSet, RecordTag, ensure_trailing_dot};
use crate::error::Result;
use crate::horizon::{self, LOCATION_FIELD};
use crate::zonefile::{RecordGroup, Zone};

const TTL_FIELD: usize = 1;
const TIMESTAMP_FIELD: usize = 2;

/// A record category published to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub tag: RecordTag,
    pub record_type: DNSRecordType,
    pub location_field: usize,
}

pub const ADDRESS: Category = Category {
    tag: RecordTag::Address,
    record_type: DNSRecordType::A,
    location_field: LOCATION_FIELD,
};

pub const ALIAS: Category = Category {
    tag: RecordTag::Alias,
    record_type: DNSRecordType::CNAME,
    location_field: LOCATION_FIELD,
};

pub const CATEGORIES: [Category; 2] = [ADDRESS, ALIAS];

/// What one local name should look like remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredRecordSet {
    pub name: String,
    pub ttl: u32,
    pub timestamp: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Create(RecordSet),
    /// Values are always rewritten; `ttl_changed` tells whether the ttl was too.
    Update { record: RecordSet, ttl_changed: bool },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub updated: usize,
}

/// Escapes wildcard labels the way the provider stores them and makes the
/// name fully qualified.
pub fn normalize_name(name: &str) -> String {
    ensure_trailing_dot(name).replace('*', "\\052")
}

fn resolve_ttl(name: &str, raw: &str, default_ttl: u32) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return default_ttl;
    }
    raw.parse().unwrap_or_else(|_| {
        warn!("Invalid ttl {raw:?} for {name}, using {default_ttl}");
        default_ttl
    })
}

/// Collapses each name's lines into one record set. The first line supplies
/// ttl and timestamp; every line supplies its value, in order, duplicates kept.
pub fn desired_record_sets(group: &RecordGroup, default_ttl: u32) -> Vec<DesiredRecordSet> {
    group
        .iter()
        .filter_map(|(name, lines)| {
            let first = lines.first()?;
            let ttl_field = first.field(TTL_FIELD);
            for other in &lines[1..] {
                let other_ttl = other.field(TTL_FIELD);
                if other_ttl != ttl_field {
                    warn!(
                        "{name} has lines with differing ttls ({ttl_field:?} vs {other_ttl:?}); using the first"
                    );
                    break;
                }
            }
            Some(DesiredRecordSet {
                name: normalize_name(name),
                ttl: resolve_ttl(name, ttl_field, default_ttl),
                timestamp: first.field(TIMESTAMP_FIELD).to_string(),
                values: lines.iter().map(|l| l.field(0).to_string()).collect(),
            })
        })
        .collect()
}

/// Computes the changes needed to bring `existing` in line with `group`.
///
/// Only remote sets of the category's record type are considered, matched
/// by exact name.
pub fn plan(
    category: &Category,
    group: &RecordGroup,
    existing: &[RecordSet],
    default_ttl: u32,
) -> Vec<Change> {
    let existing: HashMap<&str, &RecordSet> = existing
        .iter()
        .filter(|r| r.record_type == category.record_type)
        .map(|r| (r.name.as_str(), r))
        .collect();

    desired_record_sets(group, default_ttl)
        .into_iter()
        .map(|desired| {
            if !desired.timestamp.is_empty() {
                debug!("{} carries timestamp {}", desired.name, desired.timestamp);
            }
            match existing.get(desired.name.as_str()) {
                Some(current) => {
                    let ttl_changed = current.ttl.to_string() != desired.ttl.to_string();
                    let mut record = (*current).clone();
                    record.ttl = desired.ttl;
                    record.values = desired.values;
                    Change::Update {
                        record,
                        ttl_changed,
                    }
                }
                None => Change::Create(RecordSet {
                    id: None,
                    name: desired.name,
                    record_type: category.record_type,
                    ttl: desired.ttl,
                    values: desired.values,
                }),
            }
        })
        .collect()
}

/// Issues `changes` in order, each call finishing before the next starts.
/// The first failure stops the run.
pub async fn apply(
    provider: &dyn DNSProvider,
    zone: &HostedZone,
    changes: &[Change],
) -> Result<Summary> {
    let mut summary = Summary::default();
    for change in changes {
        match change {
            Change::Create(record) => {
                info!(
                    "Adding ({}): {} {:?} {}",
                    record.record_type, record.name, record.values, record.ttl
                );
                provider.create_record_set(zone, record).await?;
                summary.created += 1;
            }
            Change::Update {
                record,
                ttl_changed,
            } => {
                info!(
                    "Updating ({}): {} {:?} {}{}",
                    record.record_type,
                    record.name,
                    record.values,
                    record.ttl,
                    if *ttl_changed { " (ttl changed)" } else { "" }
                );
                provider.update_record_set(zone, record).await?;
                summary.updated += 1;
            }
        }
    }
    Ok(summary)
}

/// Filters and reconciles one category of `zone` against the hosted zone.
///
/// The filtered group replaces the category's group in `zone`.
pub async fn reconcile_category(
    provider: &dyn DNSProvider,
    hosted: &HostedZone,
    zone: &mut Zone,
    category: &Category,
    default_ttl: u32,
) -> Result<Summary> {
    let group = horizon::remove_split_horizon(zone.take(category.tag), category.location_field);
    zone.replace(category.tag, group);

    let Some(group) = zone.get(category.tag) else {
        info!("No {} records to publish", category.record_type);
        return Ok(Summary::default());
    };

    let existing = provider.list_record_sets(hosted).await?;
    for record in &existing {
        debug!("Existing: {} {} {:?}", record.name, record.record_type, record.values);
    }

    let changes = plan(category, group, &existing, default_ttl);
    apply(provider, hosted, &changes).await
}

/// Reconciles every supported category, in order. Groups of other record
/// tags are reported and left untouched.
pub async fn reconcile_zone(
    provider: &dyn DNSProvider,
    hosted: &HostedZone,
    zone: &mut Zone,
    default_ttl: u32,
) -> Result<Vec<(DNSRecordType, Summary)>> {
    let supported: Vec<RecordTag> = CATEGORIES.iter().map(|c| c.tag).collect();
    let mut unsupported: Vec<RecordTag> = zone
        .tags()
        .filter(|t| *t != RecordTag::Soa && !supported.contains(t))
        .collect();
    unsupported.sort();
    for tag in unsupported {
        info!("Record type {tag} is not supported yet; its lines are not published");
    }

    let mut summaries = Vec::with_capacity(CATEGORIES.len());
    for category in &CATEGORIES {
        let summary = reconcile_category(provider, hosted, zone, category, default_ttl).await?;
        summaries.push((category.record_type, summary));
    }
    Ok(summaries)
}
