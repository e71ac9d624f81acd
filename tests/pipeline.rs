use std::sync::Mutex;

use async_trait::async_trait;

use tinydns_route::Error;
use tinydns_route::core::provider::DNSProvider;
use tinydns_route::core::record::{DNSRecordType, HostedZone, RecordSet};
use tinydns_route::reconcile::{self, ADDRESS, Change, plan};
use tinydns_route::resolver;
use tinydns_route::zonefile::load_str;

const DATA: &str = "\
# example.com data
Zexample.com.:ns1.example.com.:hostmaster.example.com.:2024010101

+example.com.:192.0.2.1:300
+www.example.com.:192.0.2.10:300::
+www.example.com.:192.0.2.11:600::    # second ttl is ignored
+www.example.com.:10.1.1.10:300::in   # internal view
+intranet.example.com.:10.1.1.20:300::in
=mail.example.com.:192.0.2.25:3600
+*.dev.example.com.:192.0.2.99:60
Cftp.example.com.:www.example.com.:300
@example.com.::mail.example.com.:10
";

#[derive(Default)]
struct State {
    zones: Vec<HostedZone>,
    sets: Vec<RecordSet>,
    calls: Vec<String>,
}

#[derive(Default)]
struct FakeProvider {
    state: Mutex<State>,
}

impl FakeProvider {
    fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    fn sets(&self) -> Vec<RecordSet> {
        self.state.lock().unwrap().sets.clone()
    }
}

#[async_trait]
impl DNSProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn list_zones(&self, _max_items: usize) -> Result<Vec<HostedZone>, Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list_zones".into());
        Ok(state.zones.clone())
    }

    async fn create_zone(&self, name: &str) -> Result<HostedZone, Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("create_zone {name}"));
        let zone = HostedZone {
            id: format!("Z{}", state.zones.len() + 1),
            name: name.to_string(),
        };
        state.zones.push(zone.clone());
        Ok(zone)
    }

    async fn delete_zone(&self, zone: &HostedZone, _force: bool) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("delete_zone {}", zone.name));
        state.zones.retain(|z| z.id != zone.id);
        Ok(())
    }

    async fn list_record_sets(&self, _zone: &HostedZone) -> Result<Vec<RecordSet>, Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push("list_record_sets".into());
        Ok(state.sets.clone())
    }

    async fn create_record_set(&self, _zone: &HostedZone, record: &RecordSet) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("create {}", record.name));
        let mut record = record.clone();
        record.id = Some(format!("rs{}", state.sets.len() + 1));
        state.sets.push(record);
        Ok(())
    }

    async fn update_record_set(&self, _zone: &HostedZone, record: &RecordSet) -> Result<(), Error> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(format!("update {}", record.name));
        let slot = state
            .sets
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| Error::NotFound(record.name.clone()))?;
        *slot = record.clone();
        Ok(())
    }
}

async fn publish(provider: &FakeProvider) {
    let mut zone = load_str(DATA);
    let hosted = resolver::resolve_zone(provider, &zone, 2000).await.unwrap();
    reconcile::reconcile_zone(provider, &hosted, &mut zone, 86400)
        .await
        .unwrap();
}

fn find<'a>(sets: &'a [RecordSet], name: &str) -> &'a RecordSet {
    sets.iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no record set {name}"))
}

#[tokio::test]
async fn test_first_run_creates_zone_and_public_records() {
    let provider = FakeProvider::default();
    publish(&provider).await;

    let calls = provider.calls();
    assert_eq!(calls[0], "list_zones");
    assert_eq!(calls[1], "create_zone example.com.");
    assert!(calls.iter().all(|c| !c.starts_with("update")));

    let sets = provider.sets();
    assert_eq!(sets.len(), 5);

    let www = find(&sets, "www.example.com.");
    assert_eq!(www.record_type, DNSRecordType::A);
    assert_eq!(www.ttl, 300);
    assert_eq!(www.values, ["192.0.2.10", "192.0.2.11"]);

    let mail = find(&sets, "mail.example.com.");
    assert_eq!(mail.values, ["192.0.2.25"]);
    assert_eq!(mail.ttl, 3600);

    let wildcard = find(&sets, "\\052.dev.example.com.");
    assert_eq!(wildcard.ttl, 60);

    let ftp = find(&sets, "ftp.example.com.");
    assert_eq!(ftp.record_type, DNSRecordType::CNAME);
    assert_eq!(ftp.values, ["www.example.com."]);

    assert!(sets.iter().all(|r| r.name != "intranet.example.com."));
}

#[tokio::test]
async fn test_second_run_is_a_fixed_point() {
    let provider = FakeProvider::default();
    publish(&provider).await;
    let after_first = provider.sets();
    provider.clear_calls();

    publish(&provider).await;
    let calls = provider.calls();
    assert!(calls.iter().all(|c| !c.starts_with("create")));
    assert_eq!(calls.iter().filter(|c| c.starts_with("update")).count(), 5);
    assert_eq!(provider.sets(), after_first);

    let existing = provider.sets();
    let mut zone = load_str(DATA);
    let group = tinydns_route::horizon::remove_split_horizon(
        zone.take(ADDRESS.tag),
        ADDRESS.location_field,
    );
    for change in plan(&ADDRESS, &group, &existing, 86400) {
        match change {
            Change::Update {
                record,
                ttl_changed,
            } => {
                assert!(!ttl_changed);
                assert_eq!(&record, find(&existing, &record.name));
            }
            Change::Create(record) => panic!("unexpected create for {}", record.name),
        }
    }
}

#[tokio::test]
async fn test_missing_soa_fails_before_provider_calls() {
    let provider = FakeProvider::default();
    let zone = load_str("+www.example.com.:192.0.2.10:300\n");
    let result = resolver::resolve_zone(&provider, &zone, 2000).await;
    assert!(matches!(result, Err(Error::MissingSoa)));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn test_delete_removes_only_the_named_zone() {
    let provider = FakeProvider::default();
    publish(&provider).await;
    provider.create_zone("example.org.").await.unwrap();

    let deleted = tinydns_route::delete::delete_zone(&provider, "example.com", 2000)
        .await
        .unwrap();
    assert_eq!(deleted.map(|z| z.name), Some("example.com.".to_string()));

    let remaining = provider.list_zones(2000).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "example.org.");

    let again = tinydns_route::delete::delete_zone(&provider, "example.com.", 2000)
        .await
        .unwrap();
    assert!(again.is_none());
}
