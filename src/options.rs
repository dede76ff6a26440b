use crate::constants::attribute_name;
use serde_json::{Map, Value};
use tilt_core::Settings;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Settings object handed to `init`, split into its JSON-representable part
/// and an optional node given for `mouseEventElement`.
#[derive(Clone, Default)]
pub struct ExplicitOptions {
    pub values: Map<String, Value>,
    pub mouse_event_node: Option<web::EventTarget>,
}

impl ExplicitOptions {
    pub fn from_js(settings: &JsValue) -> Self {
        if settings.is_undefined() || settings.is_null() {
            return Self::default();
        }
        let mouse_event_node = ["mouseEventElement", "mouse-event-element"]
            .iter()
            .filter_map(|key| js_sys::Reflect::get(settings, &JsValue::from_str(key)).ok())
            .find_map(|v| v.dyn_into::<web::Node>().ok())
            .map(web::EventTarget::from);

        Self {
            values: to_map(settings),
            mouse_event_node,
        }
    }

    /// Explicit values, then `data-tilt-*` attributes, then defaults.
    pub fn resolve(&self, element: &web::Element) -> Settings {
        Settings::resolve(&self.values, |key| element.get_attribute(&attribute_name(key)))
    }
}

fn to_map(settings: &JsValue) -> Map<String, Value> {
    let json = match js_sys::JSON::stringify(settings) {
        Ok(s) => String::from(s),
        Err(e) => {
            log::warn!("[tilt] settings are not serializable: {:?}", e);
            return Map::new();
        }
    };
    match serde_json::from_str::<Value>(&json) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            log::warn!("[tilt] settings must be an object; using defaults");
            Map::new()
        }
        Err(e) => {
            log::warn!("[tilt] settings could not be parsed: {}", e);
            Map::new()
        }
    }
}
