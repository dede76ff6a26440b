use crate::constants::{class_selector, GLARE_INNER_CLASS, GLARE_WRAPPER_CLASS};
use crate::dom;
use web_sys as web;

/// The two overlay nodes: a clipping wrapper and the rotating gradient.
#[derive(Clone)]
pub struct GlareNodes {
    pub wrapper: web::HtmlElement,
    pub inner: web::HtmlElement,
}

/// Creates the overlay inside `element` unless the page prerendered it, then
/// looks both nodes up. Styling is left to the tilt state machine.
pub fn prepare(
    document: &web::Document,
    element: &web::HtmlElement,
    prerender: bool,
) -> Option<GlareNodes> {
    if !prerender {
        if let Err(e) = create(document, element) {
            log::warn!("[glare] could not create overlay: {:?}", e);
            return None;
        }
    }

    let wrapper = dom::query_html(element, &class_selector(GLARE_WRAPPER_CLASS));
    let inner = dom::query_html(element, &class_selector(GLARE_INNER_CLASS));
    match (wrapper, inner) {
        (Some(wrapper), Some(inner)) => Some(GlareNodes { wrapper, inner }),
        _ => {
            log::warn!(
                "[glare] prerendered .{} / .{} not found; glare disabled",
                GLARE_WRAPPER_CLASS,
                GLARE_INNER_CLASS
            );
            None
        }
    }
}

fn create(document: &web::Document, element: &web::HtmlElement) -> Result<(), wasm_bindgen::JsValue> {
    let wrapper = document.create_element("div")?;
    wrapper.class_list().add_1(GLARE_WRAPPER_CLASS)?;

    let inner = document.create_element("div")?;
    inner.class_list().add_1(GLARE_INNER_CLASS)?;

    wrapper.append_child(&inner)?;
    element.append_child(&wrapper)?;
    Ok(())
}
