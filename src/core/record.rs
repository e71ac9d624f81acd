use std::fmt;

/// Leading character of a tinydns data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordTag {
    /// `Z`: start of authority.
    Soa,
    /// `+`: address.
    Address,
    /// `C`: canonical alias.
    Alias,
    /// `=`: address plus reverse pointer. Rewritten to `+` before parsing.
    AddressWithPtr,
    /// `.`: name server plus SOA.
    NsSoa,
    /// `&`: delegated name server.
    Ns,
    /// `@`: mail exchanger.
    Mx,
    /// `^`: reverse pointer.
    Ptr,
    /// `'`: text.
    Txt,
    /// `:`: generic record.
    Generic,
    /// `3`: IPv6 address.
    Ipv6,
    /// `6`: IPv6 address plus reverse pointer.
    Ipv6WithPtr,
}

impl RecordTag {
    pub fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'Z' => RecordTag::Soa,
            '+' => RecordTag::Address,
            'C' => RecordTag::Alias,
            '=' => RecordTag::AddressWithPtr,
            '.' => RecordTag::NsSoa,
            '&' => RecordTag::Ns,
            '@' => RecordTag::Mx,
            '^' => RecordTag::Ptr,
            '\'' => RecordTag::Txt,
            ':' => RecordTag::Generic,
            '3' => RecordTag::Ipv6,
            '6' => RecordTag::Ipv6WithPtr,
            _ => return None,
        })
    }

    pub fn as_char(self) -> char {
        match self {
            RecordTag::Soa => 'Z',
            RecordTag::Address => '+',
            RecordTag::Alias => 'C',
            RecordTag::AddressWithPtr => '=',
            RecordTag::NsSoa => '.',
            RecordTag::Ns => '&',
            RecordTag::Mx => '@',
            RecordTag::Ptr => '^',
            RecordTag::Txt => '\'',
            RecordTag::Generic => ':',
            RecordTag::Ipv6 => '3',
            RecordTag::Ipv6WithPtr => '6',
        }
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The colon-separated fields that follow the name on a data line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordLine {
    fields: Vec<String>,
}

impl RecordLine {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// Positional access that yields `""` past the end of the line.
    pub fn field(&self, index: usize) -> &str {
        self.fields.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for RecordLine {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Record types the hosted provider is asked to manage.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DNSRecordType {
    A,
    CNAME,
    Other,
}

impl DNSRecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DNSRecordType::A => "A",
            DNSRecordType::CNAME => "CNAME",
            DNSRecordType::Other => "OTHER",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "A" => DNSRecordType::A,
            "CNAME" => DNSRecordType::CNAME,
            _ => DNSRecordType::Other,
        }
    }
}

impl fmt::Display for DNSRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-side authoritative container for a domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    pub id: String,
    pub name: String,
}

/// A provider-side named, typed group of values sharing one ttl.
///
/// `id` is `None` for a set that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub id: Option<String>,
    pub name: String,
    pub record_type: DNSRecordType,
    pub ttl: u32,
    pub values: Vec<String>,
}

/// Appends the trailing dot a fully-qualified name needs.
pub fn ensure_trailing_dot(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
