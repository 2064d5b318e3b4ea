use crate::element::{Control, Panel, PanelSource, ToggleError};
use crate::visibility::Visibility;
use crate::OPEN_MARKER;

/// Flip `panel` between visible and hidden and mirror the result onto
/// `control` with the [`OPEN_MARKER`] class.
///
/// Returns the visibility the panel has after the call.
pub fn toggle(
    panel: &impl Panel,
    control: Option<&dyn Control>,
) -> Result<Visibility, ToggleError> {
    toggle_with_marker(panel, control, OPEN_MARKER)
}

/// [`toggle`] with a caller-chosen marker class.
pub fn toggle_with_marker(
    panel: &impl Panel,
    control: Option<&dyn Control>,
    marker: &str,
) -> Result<Visibility, ToggleError> {
    let next = Visibility::from_display(&panel.display()).flipped();
    panel.set_display(next.as_display())?;
    if let Some(control) = control {
        reflect(control, next, marker)?;
    }
    Ok(next)
}

/// Look `id` up in `source` and toggle it.
///
/// A missing id fails before anything is written.
pub fn toggle_by_id<S: PanelSource + ?Sized>(
    source: &S,
    id: &str,
    control: Option<&dyn Control>,
    marker: &str,
) -> Result<Visibility, ToggleError> {
    let panel = source.find_panel(id)?;
    let next = toggle_with_marker(&panel, control, marker)?;
    log::debug!("[toggle] #{} -> {}", id, next);
    Ok(next)
}

/// [`toggle_by_id`] where obtaining the control can itself fail.
///
/// The panel is looked up first, so a missing id wins over a bad control.
/// Both failures happen before anything is written.
pub fn toggle_by_id_resolving<S, C, F>(
    source: &S,
    id: &str,
    control: F,
    marker: &str,
) -> Result<Visibility, ToggleError>
where
    S: PanelSource + ?Sized,
    C: Control,
    F: FnOnce() -> Result<Option<C>, ToggleError>,
{
    let panel = source.find_panel(id)?;
    let control = control()?;
    let next = toggle_with_marker(
        &panel,
        control.as_ref().map(|c| c as &dyn Control),
        marker,
    )?;
    log::debug!("[toggle] #{} -> {}", id, next);
    Ok(next)
}

/// Set or clear `marker` on `control` so it matches `visibility`.
#[inline]
pub fn reflect(
    control: &dyn Control,
    visibility: Visibility,
    marker: &str,
) -> Result<(), ToggleError> {
    control.set_marker(marker, visibility.is_visible())
}
