//! Element abstractions the toggle operates on.
//!
//! Nodes are owned by the host document and shared with it, so every method
//! takes `&self`; implementations mutate through the host handle (or interior
//! mutability in the in-memory document).

use std::rc::Rc;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ToggleError {
    #[error("no element with id `{id}`")]
    MissingElement { id: String },
    #[error("element `{id}` has no inline style to toggle")]
    Unstylable { id: String },
    #[error("control is not an element")]
    InvalidControl,
    #[error("host rejected the update: {0}")]
    Host(String),
}

/// The element whose visibility is toggled.
pub trait Panel {
    /// Current inline `display` value; `""` when unset.
    fn display(&self) -> String;
    fn set_display(&self, value: &str) -> Result<(), ToggleError>;
}

/// The actuator that mirrors the panel state through a marker class.
pub trait Control {
    /// Whether `marker` is currently set. Read-only; the toggle itself never
    /// consults it.
    fn has_marker(&self, marker: &str) -> bool;
    fn set_marker(&self, marker: &str, present: bool) -> Result<(), ToggleError>;
}

/// Resolves panels by id.
pub trait PanelSource {
    type Panel: Panel;

    fn find_panel(&self, id: &str) -> Result<Self::Panel, ToggleError>;
}

impl<P: Panel + ?Sized> Panel for &P {
    fn display(&self) -> String {
        (**self).display()
    }
    fn set_display(&self, value: &str) -> Result<(), ToggleError> {
        (**self).set_display(value)
    }
}

impl<P: Panel + ?Sized> Panel for Rc<P> {
    fn display(&self) -> String {
        (**self).display()
    }
    fn set_display(&self, value: &str) -> Result<(), ToggleError> {
        (**self).set_display(value)
    }
}

impl<C: Control + ?Sized> Control for &C {
    fn has_marker(&self, marker: &str) -> bool {
        (**self).has_marker(marker)
    }
    fn set_marker(&self, marker: &str, present: bool) -> Result<(), ToggleError> {
        (**self).set_marker(marker, present)
    }
}

impl<C: Control + ?Sized> Control for Rc<C> {
    fn has_marker(&self, marker: &str) -> bool {
        (**self).has_marker(marker)
    }
    fn set_marker(&self, marker: &str, present: bool) -> Result<(), ToggleError> {
        (**self).set_marker(marker, present)
    }
}
