pub mod element;
pub mod memory;
pub mod toggle;
pub mod visibility;

pub use element::*;
pub use toggle::*;
pub use visibility::*;

/// Class added to a control while its panel is open.
pub const OPEN_MARKER: &str = "open";
