#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use toggle_core::{Control, ToggleError};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod adapter;
mod config;
mod constants;
mod dom;
mod trigger;
mod wiring;

use adapter::{control_from_js, DomDocument, StyledElement};
use config::ToggleConfig;

thread_local! {
    static CONFIG: RefCell<ToggleConfig> = RefCell::new(ToggleConfig::default());
}

fn current_marker() -> String {
    CONFIG.with(|c| c.borrow().marker.clone())
}

fn to_js(err: ToggleError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn read_config(document: &web::Document) -> ToggleConfig {
    ToggleConfig::from_lookup(|name| dom::root_attribute(document, name))
}

/// Toggle the panel with id `id`, mirroring its state onto `btn` when given.
///
/// Throws when no element has that id or `btn` is not an element.
#[wasm_bindgen]
pub fn toggle(id: &str, btn: JsValue) -> Result<(), JsValue> {
    let document = dom::window_document()
        .ok_or_else(|| to_js(ToggleError::Host("no document".into())))?;
    toggle_core::toggle_by_id_resolving(
        &DomDocument(document),
        id,
        || control_from_js(&btn),
        &current_marker(),
    )
    .map(|_| ())
    .map_err(to_js)
}

/// Same as [`toggle`] for callers that already hold the panel element.
#[wasm_bindgen(js_name = toggleElement)]
pub fn toggle_element(panel: web::HtmlElement, btn: JsValue) -> Result<(), JsValue> {
    let control = control_from_js(&btn).map_err(to_js)?;
    let next = toggle_core::toggle_with_marker(
        &StyledElement(panel),
        control.as_ref().map(|c| c as &dyn Control),
        &current_marker(),
    )
    .map_err(to_js)?;
    log::debug!("[toggle] element -> {}", next);
    Ok(())
}

/// Wire triggers added to the page since start-up. Returns how many were wired.
#[wasm_bindgen(js_name = bindToggles)]
pub fn bind_toggles() -> Result<u32, JsValue> {
    let document = dom::window_document()
        .ok_or_else(|| to_js(ToggleError::Host("no document".into())))?;
    let config = CONFIG.with(|c| c.borrow().clone());
    Ok(wiring::bind_all(&document, &config))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let config = dom::window_document()
        .map(|d| read_config(&d))
        .unwrap_or_default();
    console_log::init_with_level(config.log_level).ok();
    log::info!("disclosure starting");

    CONFIG.with(|c| *c.borrow_mut() = config.clone());
    if let Err(e) = init(&config) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: &ToggleConfig) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if let Some(name) = &config.global_name {
        wiring::install_global(name)?;
    }
    let bound = wiring::bind_all(&document, config);
    log::info!(
        "[wiring] bound {} triggers on [{}], marker .{}",
        bound,
        config.trigger_attribute,
        config.marker
    );
    Ok(())
}
