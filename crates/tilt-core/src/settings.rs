//! Settings resolution for a tilted element.
//!
//! Every option is looked up in three places, first match wins: the explicit
//! settings object passed to `init`, a `data-tilt-{key}` attribute on the
//! element, then the built-in default. Attribute values are parsed as JSON
//! where possible and kept as raw strings otherwise.

use crate::constants::*;
use serde_json::{Map, Value};

/// Rotation axis left active when the other one is locked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn from_value(value: &Value) -> Option<Self> {
        match value.as_str() {
            Some("x") => Some(Axis::X),
            Some("y") => Some(Axis::Y),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub reverse: bool,
    pub max: f64,
    pub start_x: f64,
    pub start_y: f64,
    pub perspective: f64,
    pub easing: String,
    pub scale: f64,
    pub speed: u32,
    pub transition: bool,
    pub axis: Option<Axis>,
    pub glare: bool,
    pub max_glare: f64,
    pub glare_prerender: bool,
    pub full_page_listening: bool,
    pub mouse_event_element: Option<String>,
    pub reset: bool,
    pub reset_to_start: bool,
    pub gyroscope: bool,
    pub gyroscope_min_angle_x: f64,
    pub gyroscope_max_angle_x: f64,
    pub gyroscope_min_angle_y: f64,
    pub gyroscope_max_angle_y: f64,
    pub gyroscope_samples: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reverse: false,
            max: DEFAULT_MAX_DEG,
            start_x: 0.0,
            start_y: 0.0,
            perspective: DEFAULT_PERSPECTIVE_PX,
            easing: DEFAULT_EASING.to_string(),
            scale: DEFAULT_SCALE,
            speed: DEFAULT_SPEED_MS,
            transition: true,
            axis: None,
            glare: false,
            max_glare: DEFAULT_MAX_GLARE,
            glare_prerender: false,
            full_page_listening: false,
            mouse_event_element: None,
            reset: true,
            reset_to_start: true,
            gyroscope: true,
            gyroscope_min_angle_x: DEFAULT_GYRO_MIN_ANGLE,
            gyroscope_max_angle_x: DEFAULT_GYRO_MAX_ANGLE,
            gyroscope_min_angle_y: DEFAULT_GYRO_MIN_ANGLE,
            gyroscope_max_angle_y: DEFAULT_GYRO_MAX_ANGLE,
            gyroscope_samples: DEFAULT_GYRO_SAMPLES,
        }
    }
}

/// Recognized option keys: attribute name plus the camel-case alias accepted
/// in explicit settings objects.
pub const SETTING_KEYS: &[(&str, &str)] = &[
    ("reverse", "reverse"),
    ("max", "max"),
    ("startX", "startX"),
    ("startY", "startY"),
    ("perspective", "perspective"),
    ("easing", "easing"),
    ("scale", "scale"),
    ("speed", "speed"),
    ("transition", "transition"),
    ("axis", "axis"),
    ("glare", "glare"),
    ("max-glare", "maxGlare"),
    ("glare-prerender", "glarePrerender"),
    ("full-page-listening", "fullPageListening"),
    ("mouse-event-element", "mouseEventElement"),
    ("reset", "reset"),
    ("reset-to-start", "resetToStart"),
    ("gyroscope", "gyroscope"),
    ("gyroscopeMinAngleX", "gyroscopeMinAngleX"),
    ("gyroscopeMaxAngleX", "gyroscopeMaxAngleX"),
    ("gyroscopeMinAngleY", "gyroscopeMinAngleY"),
    ("gyroscopeMaxAngleY", "gyroscopeMaxAngleY"),
    ("gyroscopeSamples", "gyroscopeSamples"),
];

/// Parse an attribute value: JSON first, raw string as the fallback.
pub fn parse_attribute(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Flag check used for opt-in booleans: an empty attribute, `true` or `1`.
pub fn is_setting_true(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

/// JavaScript truthiness.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|f| f.is_finite())
}

impl Settings {
    /// Merge explicit settings, element attributes and defaults.
    ///
    /// `attribute` is called with the attribute-style key (e.g. `max-glare`)
    /// and returns the raw attribute text when the element carries one.
    pub fn resolve<F>(explicit: &Map<String, Value>, attribute: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut resolved = Map::new();
        for (key, alias) in SETTING_KEYS {
            let value = explicit
                .get(*key)
                .or_else(|| explicit.get(*alias))
                .cloned()
                .or_else(|| attribute(*key).map(|raw| parse_attribute(&raw)));
            if let Some(v) = value {
                resolved.insert((*key).to_string(), v);
            }
        }
        Self::from_values(&resolved)
    }

    /// Build typed settings from already-resolved values; missing or unusable
    /// entries keep their defaults.
    pub fn from_values(values: &Map<String, Value>) -> Self {
        let d = Settings::default();
        let num = |key: &str, default: f64| values.get(key).and_then(number).unwrap_or(default);
        let flag = |key: &str, default: bool| values.get(key).map(is_setting_true).unwrap_or(default);
        let truth = |key: &str, default: bool| values.get(key).map(truthy).unwrap_or(default);
        let count = |key: &str, default: u32| {
            values
                .get(key)
                .and_then(number)
                .map(|f| f.max(0.0).round() as u32)
                .unwrap_or(default)
        };

        Self {
            reverse: truth("reverse", d.reverse),
            max: num("max", d.max),
            start_x: num("startX", d.start_x),
            start_y: num("startY", d.start_y),
            perspective: num("perspective", d.perspective),
            easing: values
                .get("easing")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(d.easing),
            scale: num("scale", d.scale),
            speed: count("speed", d.speed),
            transition: truth("transition", d.transition),
            axis: values.get("axis").and_then(Axis::from_value),
            glare: flag("glare", d.glare),
            max_glare: num("max-glare", d.max_glare),
            glare_prerender: flag("glare-prerender", d.glare_prerender),
            full_page_listening: flag("full-page-listening", d.full_page_listening),
            mouse_event_element: values
                .get("mouse-event-element")
                .and_then(Value::as_str)
                .map(str::to_string),
            reset: truth("reset", d.reset),
            reset_to_start: flag("reset-to-start", d.reset_to_start),
            gyroscope: flag("gyroscope", d.gyroscope),
            gyroscope_min_angle_x: num("gyroscopeMinAngleX", d.gyroscope_min_angle_x),
            gyroscope_max_angle_x: num("gyroscopeMaxAngleX", d.gyroscope_max_angle_x),
            gyroscope_min_angle_y: num("gyroscopeMinAngleY", d.gyroscope_min_angle_y),
            gyroscope_max_angle_y: num("gyroscopeMaxAngleY", d.gyroscope_max_angle_y),
            gyroscope_samples: count("gyroscopeSamples", d.gyroscope_samples),
        }
    }

    /// `-1` when tilting away from the pointer, `1` otherwise.
    #[inline]
    pub fn reverse_sign(&self) -> f64 {
        if self.reverse {
            -1.0
        } else {
            1.0
        }
    }
}
