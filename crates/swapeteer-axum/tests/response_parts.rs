#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use swapeteer_axum::config::{HeaderSection, SwapeteerConfig};
use swapeteer_axum::{config, Swapeteer};
use swapeteer_core::{build_header_collection, danger, HeaderCollection, Swap, SwapStyle};

fn sample() -> HeaderCollection {
    build_header_collection([
        Swap::new("#todo-3", "").with_swap_style(SwapStyle::Delete).build(),
        danger("Deleted", "Todo removed", 3000).into(),
    ])
}

#[test]
fn writes_header() {
    let res = (Swapeteer::new(sample()), "ok").into_response();
    assert_eq!(res.status(), StatusCode::OK);

    let raw = res.headers().get("x-swapeteer").expect("header set").to_str().unwrap();
    let v: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(v[0]["data"]["spec"]["swapStyle"], json!("delete"));
    assert_eq!(v[1]["data"]["primaryColor"], json!("red"));
}

#[test]
fn empty_collection_writes_nothing() {
    let res = (Swapeteer::new(HeaderCollection::new()), "ok").into_response();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().get("x-swapeteer").is_none());
}

#[test]
fn configured_header_name() {
    let cfg = config::load_from_str("version: 1\nheader:\n  name: X-Directives\n").unwrap();
    let part = Swapeteer::with_config(sample(), &cfg);
    let (name, _) = part.encode().unwrap().expect("non-empty");
    assert_eq!(name.as_str(), "x-directives");

    let res = (part, "ok").into_response();
    assert!(res.headers().contains_key("x-directives"));
    assert!(!res.headers().contains_key("x-swapeteer"));
}

#[test]
fn oversized_header_is_rejected() {
    let big = "x".repeat(10_000);
    let part = Swapeteer::new(build_header_collection([Swap::new("#big", big).build()]));

    let err = part.encode().expect_err("too large");
    assert_eq!(err.code().as_str(), "HEADER_TOO_LARGE");

    let res = (part, "ok").into_response();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().get("x-swapeteer").is_none());
}

#[test]
fn non_ascii_content_survives_header() {
    let part = Swapeteer::new(build_header_collection([Swap::new("#t", "café ✓").build()]));
    let res = (part, "ok").into_response();

    let raw = res.headers().get("x-swapeteer").expect("header set");
    let text = raw.to_str().expect("ascii header value");
    let v: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(v[0]["data"]["content"], json!("café ✓"));
}

#[test]
fn unvalidated_header_name_is_rejected() {
    let cfg = SwapeteerConfig {
        version: 1,
        header: HeaderSection {
            name: "bad header".into(),
            max_bytes: 8192,
        },
    };
    let part = Swapeteer::with_config(sample(), &cfg);

    let err = part.encode().expect_err("invalid name");
    assert_eq!(err.code().as_str(), "INVALID_HEADER");

    let res = (part, "ok").into_response();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
