//! Two-state visibility of a panel.
//!
//! The presentation layer speaks in `display` strings; everything else in the
//! crate works with [`Visibility`]. Only the exact value `"block"` counts as
//! visible, so an element that is laid out by its stylesheet default still
//! reads as hidden until the first toggle writes an inline value.

/// Inline `display` value of an open panel.
pub const DISPLAY_VISIBLE: &str = "block";
/// Inline `display` value of a closed panel.
pub const DISPLAY_HIDDEN: &str = "none";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

impl Visibility {
    /// Parse an inline `display` value. Unset values arrive as `""`.
    #[inline]
    pub fn from_display(value: &str) -> Self {
        if value == DISPLAY_VISIBLE {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    #[inline]
    pub fn as_display(self) -> &'static str {
        match self {
            Visibility::Visible => DISPLAY_VISIBLE,
            Visibility::Hidden => DISPLAY_HIDDEN,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Visibility::Visible => Visibility::Hidden,
            Visibility::Hidden => Visibility::Visible,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Visible => f.write_str("visible"),
            Visibility::Hidden => f.write_str("hidden"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_block_is_visible() {
        assert_eq!(Visibility::from_display("block"), Visibility::Visible);
        for v in ["", "none", "inline", "flex", "Block", " block"] {
            assert_eq!(Visibility::from_display(v), Visibility::Hidden, "{v:?}");
        }
    }

    #[test]
    fn flip_is_an_involution() {
        for v in [Visibility::Visible, Visibility::Hidden] {
            assert_ne!(v.flipped(), v);
            assert_eq!(v.flipped().flipped(), v);
        }
    }

    #[test]
    fn display_strings_parse_back() {
        assert_eq!(Visibility::from_display(Visibility::Visible.as_display()), Visibility::Visible);
        assert_eq!(Visibility::from_display(Visibility::Hidden.as_display()), Visibility::Hidden);
    }

    #[test]
    fn default_is_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
        assert!(!Visibility::default().is_visible());
    }
}
