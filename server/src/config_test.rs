use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM_URL);
    assert_eq!(cfg.site_root, None);
    assert_eq!(cfg.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://plans.example.test/api/"),
        ("SITE_ROOT", "target/site"),
        ("PROXY_TIMEOUT_SECS", " 15 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream, "https://plans.example.test/api");
    assert_eq!(cfg.site_root, Some(PathBuf::from("target/site")));
    assert_eq!(cfg.proxy_timeout_secs, 15);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidNumber { var: "PORT", .. })
    ));
}

#[test]
fn from_lookup_rejects_non_http_upstream() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "ftp://plans")])),
        Err(ConfigError::InvalidUpstream("ftp://plans".to_owned()))
    );
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "  "), ("SITE_ROOT", "")])).unwrap();
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM_URL);
    assert_eq!(cfg.site_root, None);
}
