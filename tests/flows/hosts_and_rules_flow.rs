//! Hosts-table and block/allow rule engine flow.
//!
//! Covers the spec's hosts-file scenarios (exact match, family-mismatch
//! NODATA, first-line-wins) and rule precedence scenarios (allowlist vs.
//! important block, `$dnstype` restriction).

use warden_dns_application::FilterEvaluator;
use warden_dns_domain::{Filter, FilterKind, FilterReason, RecordType, RequestFilteringSettings};
use warden_dns_infrastructure::Evaluator;
use std::sync::Arc;

fn filtering_on() -> RequestFilteringSettings {
    RequestFilteringSettings {
        filtering_enabled: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn hosts_file_exact_match_returns_its_ip() {
    let evaluator = Evaluator::new(
        "216.239.38.120 google.com www.google.com",
        &[],
        &[],
        None,
        None,
        None,
    );
    let result = evaluator
        .check_host("google.com", RecordType::A, &filtering_on())
        .await
        .unwrap();
    assert!(result.is_filtered);
    assert_eq!(result.ip, Some("216.239.38.120".parse().unwrap()));
}

#[tokio::test]
async fn family_mismatch_is_an_implicit_nodata() {
    let evaluator = Evaluator::new("0.0.0.0 block.com", &[], &[], None, None, None);
    let result = evaluator
        .check_host("block.com", RecordType::AAAA, &filtering_on())
        .await
        .unwrap();
    assert!(result.is_filtered);
    assert!(result.ip.is_none());
    assert_eq!(result.rules.len(), 1);
}

#[tokio::test]
async fn first_hosts_line_wins_for_a_duplicate_host() {
    let evaluator = Evaluator::new(
        "0.0.0.1 host2\n0.0.0.2 host2\n",
        &[],
        &[],
        None,
        None,
        None,
    );
    let result = evaluator
        .check_host("host2", RecordType::A, &filtering_on())
        .await
        .unwrap();
    assert_eq!(result.ip, Some("0.0.0.1".parse().unwrap()));
}

#[tokio::test]
async fn important_block_beats_non_important_allowlist() {
    let allow = vec![Filter::new(
        1,
        FilterKind::Allow,
        vec![Arc::from("@@||example.org^")],
    )];
    let block = vec![Filter::new(
        2,
        FilterKind::Block,
        vec![Arc::from("||test.example.org^$important")],
    )];
    let evaluator = Evaluator::new("", &block, &allow, None, None, None);

    let blocked = evaluator
        .check_host("test.example.org", RecordType::A, &filtering_on())
        .await
        .unwrap();
    assert_eq!(blocked.reason, FilterReason::FilteredBlockList);

    let allowed = evaluator
        .check_host("example.org", RecordType::A, &filtering_on())
        .await
        .unwrap();
    assert_eq!(allowed.reason, FilterReason::NotFilteredAllowList);
    assert!(!allowed.is_filtered);
}

#[tokio::test]
async fn dnstype_modifier_restricts_the_match_to_its_record_types() {
    let block = vec![Filter::new(
        1,
        FilterKind::Block,
        vec![Arc::from("||example.org^$dnstype=AAAA")],
    )];
    let evaluator = Evaluator::new("", &block, &[], None, None, None);

    let a_result = evaluator
        .check_host("example.org", RecordType::A, &filtering_on())
        .await
        .unwrap();
    assert!(!a_result.is_filtered);

    let aaaa_result = evaluator
        .check_host("example.org", RecordType::AAAA, &filtering_on())
        .await
        .unwrap();
    assert!(aaaa_result.is_filtered);
}

#[tokio::test]
async fn round_trips_the_original_hosts_line_text() {
    let line = "216.239.38.120   google.com   www.google.com  # comment";
    let evaluator = Evaluator::new(line, &[], &[], None, None, None);
    let result = evaluator
        .check_host("google.com", RecordType::A, &filtering_on())
        .await
        .unwrap();
    assert_eq!(result.rules[0].text.as_ref(), line);
}
