#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use swapeteer_axum::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
header:
  nmae: "X-Other" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.header.name, "X-Swapeteer");
    assert_eq!(cfg.header.max_bytes, 8192);
}

#[test]
fn custom_header_section() {
    let ok = r#"
version: 1
header:
  name: "X-App-Directives"
  max_bytes: 4096
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.header.name, "X-App-Directives");
    assert_eq!(cfg.header.header_name().unwrap().as_str(), "x-app-directives");
}

#[test]
fn rejects_bad_values() {
    let cases = [
        "version: 2\n",
        "version: 1\nheader:\n  name: \"bad header\"\n",
        "version: 1\nheader:\n  max_bytes: 10\n",
        "version: 1\nheader:\n  max_bytes: 1000000\n",
    ];
    for case in cases {
        let err = config::load_from_str(case).expect_err(case);
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "case={case}");
    }
}

#[test]
fn missing_file() {
    let err = config::load_from_file("/nonexistent/swapeteer.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}
