use crate::constants::CHANGE_EVENT;
use crate::dom;
use crate::glare::GlareNodes;
use std::rc::{Rc, Weak};
use tilt_core::{EffectCell, Geometry, Surface, Target, TiltValues, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub type SharedEffect = Rc<EffectCell<DomSurface>>;
pub type WeakEffect = Weak<EffectCell<DomSurface>>;

/// `Surface` backed by the DOM: inline styles, `requestAnimationFrame`,
/// `setTimeout` and a `tiltChange` CustomEvent.
///
/// The frame and timer callbacks are built once per instance and reused for
/// every request; they hold only a weak reference to the effect. A callback
/// that lands while a `tiltChange` handler is still inside the effect is
/// dropped.
pub struct DomSurface {
    window: web::Window,
    element: web::HtmlElement,
    glare: Option<GlareNodes>,
    on_frame: Closure<dyn FnMut()>,
    on_timer: Closure<dyn FnMut()>,
}

impl DomSurface {
    pub fn new(
        window: web::Window,
        element: web::HtmlElement,
        glare: Option<GlareNodes>,
        effect: WeakEffect,
    ) -> Self {
        let frame_effect = effect.clone();
        let on_frame = Closure::wrap(Box::new(move || {
            if let Some(effect) = frame_effect.upgrade() {
                effect.with(|e| e.run_frame());
            }
        }) as Box<dyn FnMut()>);

        let on_timer = Closure::wrap(Box::new(move || {
            if let Some(effect) = effect.upgrade() {
                effect.with(|e| e.transition_elapsed());
            }
        }) as Box<dyn FnMut()>);

        Self {
            window,
            element,
            glare,
            on_frame,
            on_timer,
        }
    }

    fn node(&self, target: Target) -> Option<&web::HtmlElement> {
        match target {
            Target::Element => Some(&self.element),
            Target::GlareWrapper => self.glare.as_ref().map(|g| &g.wrapper),
            Target::Glare => self.glare.as_ref().map(|g| &g.inner),
        }
    }

    fn dispatch_change(&self, values: &TiltValues) -> Result<(), JsValue> {
        let detail = dom::values_object(values)?;
        let init = web::CustomEventInit::new();
        init.set_detail(&detail);
        let event = web::CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init)?;
        self.element.dispatch_event(&event)?;
        Ok(())
    }
}

impl Surface for DomSurface {
    type FrameHandle = i32;
    type TimerHandle = i32;

    fn measure(&self) -> Geometry {
        dom::measure(&self.element)
    }

    fn viewport(&self) -> Viewport {
        dom::viewport(&self.window)
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        if let Some(node) = self.node(target) {
            dom::set_style(node, property, value);
        }
    }

    fn request_frame(&mut self) -> Option<i32> {
        self.window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        _ = self.window.cancel_animation_frame(handle);
    }

    fn start_timer(&mut self, ms: u32) -> Option<i32> {
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                self.on_timer.as_ref().unchecked_ref(),
                ms.min(i32::MAX as u32) as i32,
            )
            .ok()
    }

    fn cancel_timer(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }

    fn emit(&mut self, values: &TiltValues) {
        if let Err(e) = self.dispatch_change(values) {
            log::warn!("[tilt] {} dispatch failed: {:?}", CHANGE_EVENT, e);
        }
    }
}
