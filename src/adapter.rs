//! `web-sys` implementations of the toggle element traits.

use crate::trigger::control_kind;
use toggle_core::{Control, Panel, PanelSource, ToggleError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const DISPLAY_PROPERTY: &str = "display";

#[inline]
fn host_error(e: JsValue) -> ToggleError {
    ToggleError::Host(format!("{:?}", e))
}

/// Panel backed by an element's inline style.
pub struct StyledElement(pub web::HtmlElement);

impl Panel for StyledElement {
    fn display(&self) -> String {
        self.0
            .style()
            .get_property_value(DISPLAY_PROPERTY)
            .unwrap_or_default()
    }

    fn set_display(&self, value: &str) -> Result<(), ToggleError> {
        self.0
            .style()
            .set_property(DISPLAY_PROPERTY, value)
            .map_err(host_error)
    }
}

/// Control backed by an element's class list.
pub struct ControlElement(pub web::Element);

impl Control for ControlElement {
    fn has_marker(&self, marker: &str) -> bool {
        self.0.class_list().contains(marker)
    }

    fn set_marker(&self, marker: &str, present: bool) -> Result<(), ToggleError> {
        let cl = self.0.class_list();
        if present {
            cl.add_1(marker).map_err(host_error)
        } else {
            cl.remove_1(marker).map_err(host_error)
        }
    }
}

pub struct DomDocument(pub web::Document);

impl PanelSource for DomDocument {
    type Panel = StyledElement;

    fn find_panel(&self, id: &str) -> Result<StyledElement, ToggleError> {
        let el = self
            .0
            .get_element_by_id(id)
            .ok_or_else(|| ToggleError::MissingElement { id: id.to_string() })?;
        el.dyn_into::<web::HtmlElement>()
            .map(StyledElement)
            .map_err(|_| ToggleError::Unstylable { id: id.to_string() })
    }
}

/// Interpret the optional control argument passed from JS.
///
/// Falsy values mean "no control". Anything else must be an `Element`.
pub fn control_from_js(value: &JsValue) -> Result<Option<ControlElement>, ToggleError> {
    let element = value.dyn_ref::<web::Element>();
    if control_kind(value.is_falsy(), element.is_some())? {
        Ok(element.map(|el| ControlElement(el.clone())))
    } else {
        Ok(None)
    }
}
