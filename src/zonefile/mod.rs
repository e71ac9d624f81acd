//! tinydns data file loading.
//!
//! Raw text goes through three stages: comment stripping, expansion of
//! combined records, then grouping into a [`Zone`].

pub mod expand;
pub mod lines;
pub mod parse;

pub use parse::{RecordGroup, Zone};

use std::path::Path;

use log::{debug, info};

use crate::error::Result;

pub async fn load_file(path: impl AsRef<Path>) -> Result<Zone> {
    let path = path.as_ref();
    info!("Loading zone file: {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    Ok(load_str(&text))
}

pub fn load_str(text: &str) -> Zone {
    let lines = lines::remove_comments(text.lines());
    let lines = expand::expand_special_records(lines);
    let zone = parse::parse_lines(lines);

    for tag in zone.tags() {
        if let Some(group) = zone.get(tag) {
            for (name, records) in group {
                debug!("{tag} {name} {records:?}");
            }
        }
    }
    zone
}
