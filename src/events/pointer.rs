use super::Listener;
use crate::constants::{EV_ENTER, EV_LEAVE, EV_MOVE};
use crate::surface::WeakEffect;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enter, leave and move listeners on the pointer source (the element, a
/// configured node, or the whole document).
pub fn wire_pointer(target: &web::EventTarget, effect: &WeakEffect) -> [Listener; 3] {
    [
        wire_enter(target, effect.clone()),
        wire_leave(target, effect.clone()),
        wire_move(target, effect.clone()),
    ]
}

fn wire_enter(target: &web::EventTarget, effect: WeakEffect) -> Listener {
    Listener::attach(target, EV_ENTER, move |_ev: web::Event| {
        if let Some(effect) = effect.upgrade() {
            effect.with(|e| e.pointer_enter());
        }
    })
}

fn wire_leave(target: &web::EventTarget, effect: WeakEffect) -> Listener {
    Listener::attach(target, EV_LEAVE, move |_ev: web::Event| {
        if let Some(effect) = effect.upgrade() {
            effect.with(|e| e.pointer_leave());
        }
    })
}

fn wire_move(target: &web::EventTarget, effect: WeakEffect) -> Listener {
    Listener::attach(target, EV_MOVE, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        if let Some(effect) = effect.upgrade() {
            let sample = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
            effect.with(|e| e.pointer_move(sample));
        }
    })
}
