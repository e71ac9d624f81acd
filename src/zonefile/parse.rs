use std::collections::{BTreeMap, HashMap};

use log::warn;

use crate::core::record::{RecordLine, RecordTag, ensure_trailing_dot};

/// Record lines of one tag, grouped by name in file order per name.
pub type RecordGroup = BTreeMap<String, Vec<RecordLine>>;

/// Parsed data file: record tag, then name, then the name's lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Zone {
    groups: HashMap<RecordTag, RecordGroup>,
}

impl Zone {
    pub fn get(&self, tag: RecordTag) -> Option<&RecordGroup> {
        self.groups.get(&tag)
    }

    /// Removes the group for `tag`, leaving the zone without it.
    pub fn take(&mut self, tag: RecordTag) -> RecordGroup {
        self.groups.remove(&tag).unwrap_or_default()
    }

    /// Installs `group` as the canonical state for `tag`.
    pub fn replace(&mut self, tag: RecordTag, group: RecordGroup) {
        if group.is_empty() {
            self.groups.remove(&tag);
        } else {
            self.groups.insert(tag, group);
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = RecordTag> + '_ {
        self.groups.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, tag: RecordTag, name: String, line: RecordLine) {
        self.groups
            .entry(tag)
            .or_default()
            .entry(name)
            .or_default()
            .push(line);
    }
}

/// Splits a data line into its tag, fully-qualified name and remaining
/// fields. An empty name stays empty.
///
/// Returns `None` when the leading character is not a tinydns tag.
pub fn parse_line(line: &str) -> Option<(RecordTag, String, RecordLine)> {
    let mut chars = line.chars();
    let tag = RecordTag::from_char(chars.next()?)?;
    let mut fields = chars.as_str().split(':');
    let name = match fields.next().unwrap_or("") {
        "" => String::new(),
        name => ensure_trailing_dot(name),
    };
    Some((tag, name, fields.collect()))
}

/// Groups lines by tag and name. Short lines are kept as-is; lines with an
/// unknown tag are logged and left out.
pub fn parse_lines<I, S>(lines: I) -> Zone
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut zone = Zone::default();
    for line in lines {
        let line = line.as_ref();
        match parse_line(line) {
            Some((tag, name, record)) => zone.push(tag, name, record),
            None => warn!("Skipping line with unknown record type: {line}"),
        }
    }
    zone
}
