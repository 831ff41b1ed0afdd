//! Integration test: deferred GET against a local HTTP server.
//!
//! Covers the success body, status rejections (with reason phrase), redirects
//! and transport failures.

mod common;

use reportal_core::config::FetchConfig;
use reportal_core::fetch::{self, FetchError};

#[test]
fn ok_resolves_with_body_text() {
    let base = common::report_server::start("region,total\nEMEA,1,300\n");
    let body = common::block_on(fetch::request(
        &format!("{base}/report"),
        &FetchConfig::default(),
    ))
    .expect("fetch");
    assert_eq!(body, "region,total\nEMEA,1,300\n");
}

#[test]
fn not_found_rejects_with_status_and_text() {
    let base = common::report_server::start("unused");
    let err = common::block_on(fetch::request(
        &format!("{base}/missing"),
        &FetchConfig::default(),
    ))
    .unwrap_err();
    match &err {
        FetchError::Status {
            status,
            status_text,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected Status, got {other:?}"),
    }
    assert_eq!(err.to_string(), "404: Not Found");
}

#[test]
fn server_error_rejects() {
    let base = common::report_server::start("unused");
    let err = common::block_on(fetch::request(
        &format!("{base}/explode"),
        &FetchConfig::default(),
    ))
    .unwrap_err();
    assert_eq!(err.to_string(), "500: Internal Server Error");
}

#[test]
fn redirect_is_followed_by_default() {
    let base = common::report_server::start("after redirect");
    let body = fetch::fetch_text(&format!("{base}/moved"), &FetchConfig::default()).unwrap();
    assert_eq!(body, "after redirect");
}

#[test]
fn redirect_without_following_is_a_status_error() {
    let base = common::report_server::start("after redirect");
    let cfg = FetchConfig {
        follow_redirects: false,
        ..FetchConfig::default()
    };
    let err = fetch::fetch_text(&format!("{base}/moved"), &cfg).unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 302, .. }));
}

#[test]
fn unreachable_host_is_network_error() {
    let cfg = FetchConfig {
        connect_timeout_secs: 2,
        timeout_secs: 5,
        follow_redirects: true,
    };
    let err = common::block_on(fetch::request(
        &common::report_server::closed_port_url(),
        &cfg,
    ))
    .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    assert!(err.to_string().starts_with("Network Error"));
}
