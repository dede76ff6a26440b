use super::Listener;
use crate::constants::EV_RESIZE;
use crate::surface::WeakEffect;
use web_sys as web;

pub fn wire_resize(window: &web::Window, effect: WeakEffect) -> Listener {
    Listener::attach(window, EV_RESIZE, move |_ev: web::Event| {
        if let Some(effect) = effect.upgrade() {
            effect.with(|e| e.window_resize());
        }
    })
}
