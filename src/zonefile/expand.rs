//! Rewrites combined tinydns records into the primitive ones we publish.

use log::debug;

use crate::core::record::RecordTag;

/// Rewrites every `=` line (address plus reverse pointer) into the
/// equivalent `+` line. The pointer half is dropped: it belongs to a
/// reverse zone, and a data file is treated as holding a single zone.
///
/// Other lines pass through untouched and order is preserved.
pub fn expand_special_records(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            let mut chars = line.chars();
            match chars.next().and_then(RecordTag::from_char) {
                Some(RecordTag::AddressWithPtr) => {
                    let expanded = format!("{}{}", RecordTag::Address, chars.as_str());
                    debug!("Expanded {line} to {expanded}, reverse pointer not published");
                    expanded
                }
                _ => line,
            }
        })
        .collect()
}
