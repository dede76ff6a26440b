use tilt_core::{Geometry, TiltError, TiltValues, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn window() -> Result<web::Window, TiltError> {
    web::window().ok_or(TiltError::MissingWindow)
}

pub fn document() -> Result<web::Document, TiltError> {
    window_document().ok_or(TiltError::MissingDocument)
}

/// Layout size from `offsetWidth/Height`, position from the client rect.
pub fn measure(element: &web::HtmlElement) -> Geometry {
    let rect = element.get_bounding_client_rect();
    Geometry::new(
        rect.left(),
        rect.top(),
        element.offset_width() as f64,
        element.offset_height() as f64,
    )
}

/// `innerWidth/Height`, falling back to the root element, then the body.
pub fn viewport(window: &web::Window) -> Viewport {
    let inner = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).filter(|f| *f > 0.0);
    let doc = window.document();
    let root = doc.as_ref().and_then(|d| d.document_element());
    let body = doc.as_ref().and_then(|d| d.body());

    let width = inner(window.inner_width())
        .or_else(|| root.as_ref().map(|r| r.client_width() as f64).filter(|w| *w > 0.0))
        .or_else(|| body.as_ref().map(|b| b.client_width() as f64))
        .unwrap_or(0.0);
    let height = inner(window.inner_height())
        .or_else(|| root.as_ref().map(|r| r.client_height() as f64).filter(|h| *h > 0.0))
        .or_else(|| body.as_ref().map(|b| b.client_height() as f64))
        .unwrap_or(0.0);
    Viewport::new(width, height)
}

#[inline]
pub fn set_style(element: &web::HtmlElement, property: &str, value: &str) {
    _ = element.style().set_property(property, value);
}

/// Orientation capability probe: the page exposes `DeviceOrientationEvent`.
pub fn gyroscope_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("DeviceOrientationEvent"))
        .unwrap_or(false)
}

pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Plain `{tiltX, tiltY, percentageX, percentageY, angle}` object.
pub fn values_object(values: &TiltValues) -> Result<JsValue, JsValue> {
    let object = js_sys::Object::new();
    for (key, value) in values.fields() {
        js_sys::Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_f64(value))?;
    }
    Ok(object.into())
}

/// Short description of a value for error messages.
pub fn describe(value: &JsValue) -> String {
    if let Some(node) = value.dyn_ref::<web::Node>() {
        node.node_name()
    } else if let Some(s) = value.as_string() {
        s
    } else {
        format!("{:?}", value)
    }
}
