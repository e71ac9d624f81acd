use serde::{Deserialize, Serialize};

use crate::core::record::{DNSRecordType, HostedZone, RecordSet};

#[derive(Deserialize, Debug, Clone)]
pub struct ApiZone {
    pub id: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct CreateZoneRequest<'a> {
    pub name: &'a str,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiRecordSet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    #[serde(default)]
    pub records: Vec<String>,
}

#[derive(Serialize, Debug)]
pub struct RecordSetRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub ttl: u32,
    pub records: &'a [String],
}

#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

pub fn to_hosted_zone(z: ApiZone) -> HostedZone {
    HostedZone {
        id: z.id,
        name: z.name,
    }
}

pub fn to_record_set(r: ApiRecordSet) -> RecordSet {
    RecordSet {
        id: Some(r.id),
        name: r.name,
        record_type: DNSRecordType::parse(&r.record_type),
        ttl: r.ttl,
        values: r.records,
    }
}

pub fn to_record_set_request(rec: &RecordSet) -> RecordSetRequest<'_> {
    RecordSetRequest {
        name: &rec.name,
        record_type: rec.record_type.as_str(),
        ttl: rec.ttl,
        records: &rec.values,
    }
}
