//! Safe Search rewrite flow: hardcoded-IP targets bypass the resolver
//! entirely, named targets go through the `Resolver` port and are cached
//! under the original hostname.

#[path = "../common/mod.rs"]
mod common;

use std::sync::Arc;

use common::StubResolver;
use warden_dns_application::FilterEvaluator;
use warden_dns_domain::{FilterReason, RecordType, RequestFilteringSettings};
use warden_dns_infrastructure::{Evaluator, SafeSearchService};

fn safe_search_on() -> RequestFilteringSettings {
    RequestFilteringSettings {
        safe_search_enabled: true,
        ..Default::default()
    }
}

#[tokio::test]
async fn yandex_rewrites_to_the_hardcoded_safe_ip_case_insensitively() {
    let safe_search = SafeSearchService::new(Arc::new(StubResolver(vec![])), 16, 30);
    let evaluator = Evaluator::new("", &[], &[], None, None, Some(safe_search));

    let result = evaluator
        .check_host("YANdex.COM", RecordType::A, &safe_search_on())
        .await
        .unwrap();
    assert!(result.is_filtered);
    assert_eq!(result.reason, FilterReason::FilteredSafeSearch);
    assert_eq!(result.ip, Some("213.180.193.56".parse().unwrap()));
}

#[tokio::test]
async fn google_cctld_resolves_through_the_resolver_port() {
    let resolver = Arc::new(StubResolver(vec!["1.2.3.4".parse().unwrap()]));
    let safe_search = SafeSearchService::new(resolver, 16, 30);
    let evaluator = Evaluator::new("", &[], &[], None, None, Some(safe_search));

    let result = evaluator
        .check_host("www.google.co.in", RecordType::A, &safe_search_on())
        .await
        .unwrap();
    assert!(result.is_filtered);
    assert_eq!(result.ip, Some("1.2.3.4".parse().unwrap()));
    assert_eq!(
        result.canon_name.as_deref(),
        Some("forcesafesearch.google.com")
    );
}

#[tokio::test]
async fn safe_search_domain_reports_the_rewrite_target_without_resolving() {
    let safe_search = SafeSearchService::new(Arc::new(StubResolver(vec![])), 16, 30);
    let evaluator = Evaluator::new("", &[], &[], None, None, Some(safe_search));

    assert_eq!(
        evaluator.safe_search_domain("www.google.com").as_deref(),
        Some("forcesafesearch.google.com")
    );
    assert!(evaluator.safe_search_domain("yandex.com").is_none());
    assert!(evaluator.safe_search_domain("example.org").is_none());
}

#[tokio::test]
async fn unrelated_hosts_are_not_filtered() {
    let safe_search = SafeSearchService::new(Arc::new(StubResolver(vec![])), 16, 30);
    let evaluator = Evaluator::new("", &[], &[], None, None, Some(safe_search));

    let result = evaluator
        .check_host("example.org", RecordType::A, &safe_search_on())
        .await
        .unwrap();
    assert!(!result.is_filtered);
    assert_eq!(result.reason, FilterReason::NotFilteredNotFound);
}

#[tokio::test]
async fn disabled_safe_search_skips_the_rewrite() {
    let safe_search = SafeSearchService::new(Arc::new(StubResolver(vec![])), 16, 30);
    let evaluator = Evaluator::new("", &[], &[], None, None, Some(safe_search));

    let result = evaluator
        .check_host("yandex.com", RecordType::A, &RequestFilteringSettings::default())
        .await
        .unwrap();
    assert!(!result.is_filtered);
}
