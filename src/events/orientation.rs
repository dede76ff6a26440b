use super::Listener;
use crate::constants::EV_ORIENTATION;
use crate::surface::WeakEffect;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Forwards gamma/beta; the effect drops events that lack either angle.
pub fn wire_orientation(window: &web::Window, effect: WeakEffect) -> Listener {
    Listener::attach(window, EV_ORIENTATION, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::DeviceOrientationEvent>() else {
            return;
        };
        if let Some(effect) = effect.upgrade() {
            effect.with(|e| e.device_orientation(ev.gamma(), ev.beta()));
        }
    })
}
