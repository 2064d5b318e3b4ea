use toggle_core::ToggleError;

/// Panel id named by a trigger attribute value.
///
/// Accepts a bare id or a `#id` fragment; blank values name nothing.
#[inline]
pub fn target_id(raw: &str) -> Option<&str> {
    let id = raw.trim();
    let id = id.strip_prefix('#').unwrap_or(id);
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// CSS selector matching every element that carries `attribute`.
#[inline]
pub fn selector_for(attribute: &str) -> String {
    format!("[{}]", attribute)
}

/// What to do with a trigger found on the page.
#[derive(Debug, PartialEq, Eq)]
pub enum TriggerPlan<'a> {
    /// A listener is already attached.
    AlreadyBound,
    /// The attribute names no panel.
    Empty,
    Bind(&'a str),
}

#[inline]
pub fn plan(raw: &str, already_bound: bool) -> TriggerPlan<'_> {
    if already_bound {
        return TriggerPlan::AlreadyBound;
    }
    match target_id(raw) {
        Some(id) => TriggerPlan::Bind(id),
        None => TriggerPlan::Empty,
    }
}

/// Classify the optional control argument passed from JS.
///
/// `Ok(false)` means no control (falsy value), `Ok(true)` an element.
#[inline]
pub fn control_kind(is_falsy: bool, is_element: bool) -> Result<bool, ToggleError> {
    if is_falsy {
        Ok(false)
    } else if is_element {
        Ok(true)
    } else {
        Err(ToggleError::InvalidControl)
    }
}
