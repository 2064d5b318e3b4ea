// Host-side tests for configuration defaults.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn config_attributes_are_distinct_from_trigger() {
    let attrs = [
        CONFIG_MARKER_ATTRIBUTE,
        CONFIG_TRIGGER_ATTRIBUTE,
        CONFIG_GLOBAL_ATTRIBUTE,
        CONFIG_LOG_ATTRIBUTE,
        BOUND_ATTRIBUTE,
    ];
    for a in attrs {
        assert_ne!(a, DEFAULT_TRIGGER_ATTRIBUTE);
        assert!(a.starts_with("data-"), "{a}");
    }
}

#[test]
fn default_log_level_parses() {
    assert!(DEFAULT_LOG_LEVEL.parse::<log::Level>().is_ok());
}

#[test]
fn default_marker_matches_core() {
    assert_eq!(DEFAULT_MARKER, toggle_core::OPEN_MARKER);
}
