// Host-side tests for page configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::ToggleConfig;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn empty_page_uses_defaults() {
    let config = ToggleConfig::from_lookup(|_| None);
    assert_eq!(config, ToggleConfig::default());
    assert_eq!(config.marker, "open");
    assert_eq!(config.trigger_attribute, "data-toggle");
    assert_eq!(config.global_name.as_deref(), Some("toggle"));
    assert_eq!(config.log_level, log::Level::Info);
}

#[test]
fn overrides_are_applied() {
    let config = ToggleConfig::from_lookup(lookup_from(&[
        ("data-toggle-marker", "expanded"),
        ("data-toggle-trigger", "data-disclose"),
        ("data-toggle-global", "toggleSection"),
        ("data-toggle-log", "debug"),
    ]));
    assert_eq!(config.marker, "expanded");
    assert_eq!(config.trigger_attribute, "data-disclose");
    assert_eq!(config.global_name.as_deref(), Some("toggleSection"));
    assert_eq!(config.log_level, log::Level::Debug);
}

#[test]
fn empty_global_disables_window_install() {
    let config = ToggleConfig::from_lookup(lookup_from(&[("data-toggle-global", "")]));
    assert_eq!(config.global_name, None);
}

#[test]
fn blank_marker_and_trigger_keep_defaults() {
    let config = ToggleConfig::from_lookup(lookup_from(&[
        ("data-toggle-marker", "  "),
        ("data-toggle-trigger", ""),
    ]));
    assert_eq!(config.marker, "open");
    assert_eq!(config.trigger_attribute, "data-toggle");
}

#[test]
fn log_level_is_case_insensitive_and_falls_back() {
    let warn = ToggleConfig::from_lookup(lookup_from(&[("data-toggle-log", "WARN")]));
    assert_eq!(warn.log_level, log::Level::Warn);

    let bogus = ToggleConfig::from_lookup(lookup_from(&[("data-toggle-log", "loud")]));
    assert_eq!(bogus.log_level, log::Level::Info);
}
