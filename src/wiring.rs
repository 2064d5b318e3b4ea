use crate::adapter::{ControlElement, DomDocument};
use crate::config::ToggleConfig;
use crate::constants::BOUND_ATTRIBUTE;
use crate::trigger::TriggerPlan;
use crate::{dom, trigger};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Wire every unbound trigger in `document` to toggle the panel it names.
///
/// Returns the number of triggers wired by this call.
pub fn bind_all(document: &web::Document, config: &ToggleConfig) -> u32 {
    let selector = trigger::selector_for(&config.trigger_attribute);
    let mut bound = 0;
    for el in dom::query_elements(document, &selector) {
        let raw = el.get_attribute(&config.trigger_attribute).unwrap_or_default();
        let id = match trigger::plan(&raw, el.has_attribute(BOUND_ATTRIBUTE)) {
            TriggerPlan::AlreadyBound => continue,
            TriggerPlan::Empty => {
                log::warn!(
                    "[wiring] skipping trigger with empty {}",
                    config.trigger_attribute
                );
                continue;
            }
            TriggerPlan::Bind(id) => id.to_string(),
        };

        let doc = DomDocument(document.clone());
        let control = ControlElement(el.clone());
        let marker = config.marker.clone();
        let target = id.clone();
        let attached = dom::add_click_listener(&el, move || {
            if let Err(e) = toggle_core::toggle_by_id(&doc, &target, Some(&control), &marker) {
                log::error!("[toggle] #{}: {}", target, e);
            }
        });
        if !attached {
            log::error!("[wiring] could not attach listener for #{}", id);
            continue;
        }
        if let Err(e) = el.set_attribute(BOUND_ATTRIBUTE, "") {
            log::warn!("[wiring] could not mark #{} as bound: {:?}", id, e);
        }
        bound += 1;
    }
    bound
}

/// Expose `toggle(id, btn)` on `window` for inline `onclick` handlers.
pub fn install_global(name: &str) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let closure = Closure::wrap(Box::new(move |id: String, btn: JsValue| crate::toggle(&id, btn))
        as Box<dyn FnMut(String, JsValue) -> Result<(), JsValue>>);
    js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    log::info!("[wiring] installed window.{}", name);
    Ok(())
}
