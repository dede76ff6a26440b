#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use tilt_core::{Registry, TiltError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod glare;
mod instance;
mod options;
mod surface;

use instance::Tilt;
use options::ExplicitOptions;

thread_local! {
    // element -> instance; nothing is stored on the element itself
    static REGISTRY: RefCell<Registry<web::Element, Tilt>> = RefCell::new(Registry::new());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tilt-web starting");

    match auto_init() {
        Ok(n) => log::info!("[tilt] auto-initialized {} element(s)", n),
        Err(e) => log::error!("auto-init error: {:?}", e),
    }
    Ok(())
}

/// Attaches to every `[data-tilt]` element with attribute/default settings.
fn auto_init() -> anyhow::Result<usize> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let list = document
        .query_selector_all(constants::MARKER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let options = ExplicitOptions::default();
    let nodes = (0..list.length()).filter_map(|i| list.item(i));
    Ok(tilt_core::attach_each(nodes, |node| attach(&node, &options)))
}

/// Attaches one instance per element; elements already managed are skipped.
/// `elements` may be a Node, a NodeList or an Array; anything else is ignored.
#[wasm_bindgen]
pub fn init(elements: JsValue, settings: JsValue) -> Result<(), JsValue> {
    let nodes = collect_nodes(&elements);
    if nodes.is_empty() {
        return Ok(());
    }
    let options = ExplicitOptions::from_js(&settings);
    for node in &nodes {
        attach(node, &options).map_err(|e| {
            log::error!("init error: {}", e);
            JsValue::from_str(&e.to_string())
        })?;
    }
    Ok(())
}

/// Stops tilting `element` and resets it. Returns false if it was not managed.
#[wasm_bindgen]
pub fn destroy(element: &web::Element) -> bool {
    // taken out first so the registry is not borrowed while the effect resets
    let removed = REGISTRY.with(|r| r.borrow_mut().remove(element));
    match removed {
        Some(tilt) => {
            tilt.destroy();
            true
        }
        None => false,
    }
}

#[wasm_bindgen]
pub fn reset(element: &web::Element) -> bool {
    let effect = REGISTRY.with(|r| r.borrow().get(element).map(Tilt::effect));
    match effect {
        Some(effect) => {
            let done = effect.with(|e| e.reset()).is_some();
            if !done {
                log::warn!("[tilt] reset requested during an update; ignored");
            }
            done
        }
        None => false,
    }
}

/// Current `{tiltX, tiltY, percentageX, percentageY, angle}` for a managed
/// element, `undefined` otherwise.
#[wasm_bindgen]
pub fn values(element: &web::Element) -> JsValue {
    let values = REGISTRY.with(|r| r.borrow().get(element).and_then(Tilt::values));
    values
        .and_then(|v| dom::values_object(&v).ok())
        .unwrap_or(JsValue::UNDEFINED)
}

fn collect_nodes(elements: &JsValue) -> Vec<JsValue> {
    if elements.is_instance_of::<web::Node>() {
        return vec![elements.clone()];
    }
    if let Some(list) = elements.dyn_ref::<web::NodeList>() {
        return (0..list.length())
            .filter_map(|i| list.item(i))
            .map(JsValue::from)
            .collect();
    }
    if let Some(array) = elements.dyn_ref::<js_sys::Array>() {
        return array.iter().collect();
    }
    Vec::new()
}

fn attach(node: &JsValue, options: &ExplicitOptions) -> Result<(), TiltError> {
    let element = node
        .dyn_ref::<web::Element>()
        .cloned()
        .ok_or_else(|| TiltError::NotAnElement(dom::describe(node)))?;

    if REGISTRY.with(|r| r.borrow().contains(&element)) {
        return Ok(());
    }
    // built outside the registry borrow: construction already dispatches tiltChange
    let tilt = Tilt::attach(&element, options)?;
    REGISTRY.with(|r| {
        r.borrow_mut().get_or_insert_with(element, move |_| tilt);
    });
    Ok(())
}
