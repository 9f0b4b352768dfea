//! The cross-cutting invariants from the spec's testable-properties
//! section: is_filtered/reason consistency, idempotence, case
//! independence, allowlist dominance, and per-client override priority.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::StubReputationClient;
use warden_dns_application::FilterEvaluator;
use warden_dns_domain::{
    Filter, FilterKind, FilterReason, RecordType, RequestFilteringSettings, ServiceEntry,
};
use warden_dns_infrastructure::{Evaluator, ReputationService};

fn all_enabled() -> RequestFilteringSettings {
    RequestFilteringSettings {
        filtering_enabled: true,
        safe_browsing_enabled: true,
        parental_enabled: true,
        safe_search_enabled: true,
        services_rules: Vec::new(),
    }
}

#[tokio::test]
async fn is_filtered_always_matches_its_reason_tag() {
    let evaluator = Evaluator::new("0.0.0.0 blocked.example", &[], &[], None, None, None);
    for (host, expect_filtered) in [("blocked.example", true), ("clean.example", false)] {
        let result = evaluator
            .check_host(host, RecordType::A, &all_enabled())
            .await
            .unwrap();
        assert_eq!(result.is_filtered, expect_filtered);
        assert_eq!(result.is_filtered, result.reason.is_filtered());
    }
}

#[tokio::test]
async fn repeated_calls_are_idempotent() {
    let client = StubReputationClient::blocking("bad.example");
    let safe_browsing = ReputationService::new(client, 1024, 30, FilterReason::FilteredSafeBrowsing);
    let evaluator = Evaluator::new("", &[], &[], Some(safe_browsing), None, None);

    let settings = all_enabled();
    let first = evaluator
        .check_host("sub.bad.example", RecordType::A, &settings)
        .await
        .unwrap();
    let second = evaluator
        .check_host("sub.bad.example", RecordType::A, &settings)
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn matching_is_case_independent() {
    let block = vec![Filter::new(
        1,
        FilterKind::Block,
        vec![Arc::from("||ads.example^")],
    )];
    let evaluator = Evaluator::new("", &block, &[], None, None, None);

    let lower = evaluator
        .check_host("ads.example", RecordType::A, &all_enabled())
        .await
        .unwrap();
    let upper = evaluator
        .check_host("ADS.EXAMPLE", RecordType::A, &all_enabled())
        .await
        .unwrap();
    assert_eq!(lower, upper);
}

#[tokio::test]
async fn an_allowlist_match_suppresses_reputation_checks() {
    let allow = vec![Filter::new(
        1,
        FilterKind::Allow,
        vec![Arc::from("@@||example.org^")],
    )];
    let client = StubReputationClient::blocking("example.org");
    let safe_browsing = ReputationService::new(client, 1024, 30, FilterReason::FilteredSafeBrowsing);
    let evaluator = Evaluator::new("", &[], &allow, Some(safe_browsing), None, None);

    let result = evaluator
        .check_host("example.org", RecordType::A, &all_enabled())
        .await
        .unwrap();
    assert_eq!(result.reason, FilterReason::NotFilteredAllowList);
}

#[tokio::test]
async fn a_blocked_service_override_wins_regardless_of_other_flags() {
    let evaluator = Evaluator::new("", &[], &[], None, None, None);
    let mut settings = RequestFilteringSettings::default();
    settings.services_rules.push(ServiceEntry {
        name: Arc::from("tiktok"),
        rules: Arc::from([Arc::from("||tiktok.com^")]),
    });

    let result = evaluator
        .check_host("tiktok.com", RecordType::A, &settings)
        .await
        .unwrap();
    assert_eq!(result.reason, FilterReason::FilteredBlockedService);
}
