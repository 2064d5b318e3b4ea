/// Defaults for the page-level configuration.
///
/// Every value can be overridden with an attribute on the `<html>` element;
/// the attribute names are listed below the defaults.
pub const DEFAULT_MARKER: &str = "open";
pub const DEFAULT_TRIGGER_ATTRIBUTE: &str = "data-toggle";
pub const DEFAULT_GLOBAL_NAME: &str = "toggle";
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Configuration attributes read from <html>
pub const CONFIG_MARKER_ATTRIBUTE: &str = "data-toggle-marker";
pub const CONFIG_TRIGGER_ATTRIBUTE: &str = "data-toggle-trigger";
pub const CONFIG_GLOBAL_ATTRIBUTE: &str = "data-toggle-global";
pub const CONFIG_LOG_ATTRIBUTE: &str = "data-toggle-log";

// Set on a trigger once its click listener is attached
pub const BOUND_ATTRIBUTE: &str = "data-toggle-bound";
