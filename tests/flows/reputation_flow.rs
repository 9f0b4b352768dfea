//! Safe Browsing / Parental Control reputation flow: candidate-domain
//! hashing against a `ReputationClient`, fronted by a TTL cache that keeps
//! serving a cached verdict after the upstream goes unreachable.

#[path = "../common/mod.rs"]
mod common;

use common::StubReputationClient;
use warden_dns_application::FilterEvaluator;
use warden_dns_domain::{FilterReason, RecordType, RequestFilteringSettings};
use warden_dns_infrastructure::{Evaluator, ReputationService};

fn safe_browsing_on() -> RequestFilteringSettings {
    RequestFilteringSettings {
        safe_browsing_enabled: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn upstream_block_is_reported_as_safe_browsing() {
    let client = StubReputationClient::blocking("wmconvirus.narod.ru");
    let safe_browsing = ReputationService::new(client, 1024, 30, FilterReason::FilteredSafeBrowsing);
    let evaluator = Evaluator::new("", &[], &[], Some(safe_browsing), None, None);

    let result = evaluator
        .check_host("test.wmconvirus.narod.ru", RecordType::A, &safe_browsing_on())
        .await
        .unwrap();
    assert!(result.is_filtered);
    assert_eq!(result.reason, FilterReason::FilteredSafeBrowsing);
}

#[tokio::test]
async fn a_cached_verdict_survives_the_upstream_going_unreachable() {
    let client = StubReputationClient::blocking("wmconvirus.narod.ru");
    let safe_browsing = ReputationService::new(
        std::sync::Arc::clone(&client),
        1024,
        30,
        FilterReason::FilteredSafeBrowsing,
    );
    let evaluator = Evaluator::new("", &[], &[], Some(safe_browsing), None, None);
    let settings = safe_browsing_on();

    let first = evaluator
        .check_host("test.wmconvirus.narod.ru", RecordType::A, &settings)
        .await
        .unwrap();
    assert!(first.is_filtered);

    client.go_unreachable();

    let second = evaluator
        .check_host("test.wmconvirus.narod.ru", RecordType::A, &settings)
        .await
        .unwrap();
    assert!(second.is_filtered, "cached verdict must survive upstream failure");
}

#[tokio::test]
async fn a_clean_host_with_an_unreachable_upstream_fails_open() {
    let client = StubReputationClient::blocking("wmconvirus.narod.ru");
    client.go_unreachable();
    let safe_browsing = ReputationService::new(client, 1024, 30, FilterReason::FilteredSafeBrowsing);
    let evaluator = Evaluator::new("", &[], &[], Some(safe_browsing), None, None);

    let result = evaluator
        .check_host("example.org", RecordType::A, &safe_browsing_on())
        .await
        .unwrap();
    assert!(!result.is_filtered);
    assert_eq!(result.reason, FilterReason::NotFilteredNotFound);
}
