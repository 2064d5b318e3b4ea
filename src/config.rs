use crate::constants::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    /// Class mirrored onto the control while its panel is open.
    pub marker: String,
    /// Attribute naming the panel a trigger button controls.
    pub trigger_attribute: String,
    /// Name under which `toggle` is installed on `window`; `None` skips it.
    pub global_name: Option<String>,
    pub log_level: log::Level,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            trigger_attribute: DEFAULT_TRIGGER_ATTRIBUTE.to_string(),
            global_name: Some(DEFAULT_GLOBAL_NAME.to_string()),
            log_level: default_log_level(),
        }
    }
}

impl ToggleConfig {
    /// Build a config from `lookup`, which maps an attribute name to its value.
    ///
    /// Missing or unusable values keep their defaults. An empty global name
    /// disables the `window` install.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(marker) = non_empty(lookup(CONFIG_MARKER_ATTRIBUTE)) {
            config.marker = marker;
        }
        if let Some(trigger) = non_empty(lookup(CONFIG_TRIGGER_ATTRIBUTE)) {
            config.trigger_attribute = trigger;
        }
        if let Some(global) = lookup(CONFIG_GLOBAL_ATTRIBUTE) {
            config.global_name = non_empty(Some(global));
        }
        if let Some(level) = lookup(CONFIG_LOG_ATTRIBUTE) {
            match level.trim().parse::<log::Level>() {
                Ok(l) => config.log_level = l,
                Err(_) => log::warn!("[config] unknown log level {:?}", level),
            }
        }
        config
    }
}

fn default_log_level() -> log::Level {
    DEFAULT_LOG_LEVEL.parse().unwrap_or(log::Level::Info)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
