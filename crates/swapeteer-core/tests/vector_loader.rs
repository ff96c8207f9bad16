//! JSON golden vector loader shared by envelope tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TestVector {
    pub description: String,
    pub expect: serde_json::Value,
}

pub fn load(name: &str) -> TestVector {
    let path = format!("{}/tests/vectors/{name}", env!("CARGO_MANIFEST_DIR"));
    let s = fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {path}: {e}"));
    serde_json::from_str(&s).expect("invalid test vector json")
}

/// Serialize `value` and compare it with the vector's `expect` block.
pub fn assert_matches<T: serde::Serialize>(name: &str, value: &T) {
    let v = load(name);
    let got = serde_json::to_value(value).unwrap();
    assert_eq!(got, v.expect, "vector={}", v.description);
}
