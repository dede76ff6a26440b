/// DOM-facing names shared by the web front-end.
///
/// Pure data with no web-sys types so host tests can include this file.
// Declarative attachment
pub const MARKER_SELECTOR: &str = "[data-tilt]";
pub const ATTRIBUTE_PREFIX: &str = "data-tilt-"; // per-option overrides: data-tilt-{key}

// Glare overlay nodes
pub const GLARE_WRAPPER_CLASS: &str = "js-tilt-glare";
pub const GLARE_INNER_CLASS: &str = "js-tilt-glare-inner";

// Event dispatched on the element after every update
pub const CHANGE_EVENT: &str = "tiltChange";

// Listened events
pub const EV_ENTER: &str = "mouseenter";
pub const EV_LEAVE: &str = "mouseleave";
pub const EV_MOVE: &str = "mousemove";
pub const EV_RESIZE: &str = "resize";
pub const EV_ORIENTATION: &str = "deviceorientation";

// Listeners per instance: enter, leave, move, resize, orientation
pub const MAX_LISTENERS: usize = 5;

#[inline]
pub fn attribute_name(key: &str) -> String {
    format!("{}{}", ATTRIBUTE_PREFIX, key)
}

#[inline]
pub fn class_selector(class: &str) -> String {
    format!(".{}", class)
}
