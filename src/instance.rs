use crate::constants::MAX_LISTENERS;
use crate::dom;
use crate::events::{self, Listener};
use crate::glare;
use crate::options::ExplicitOptions;
use crate::surface::{DomSurface, SharedEffect};
use smallvec::SmallVec;
use std::rc::Rc;
use tilt_core::{EffectCell, TiltEffect, TiltError, TiltValues};
use wasm_bindgen::JsCast;
use web_sys as web;

/// One tilted element: the shared effect plus the listeners feeding it.
///
/// Dropping a `Tilt` destroys the effect (pending frame and timer cancelled,
/// element reset) and then unregisters every listener. When the drop comes
/// from a `tiltChange` handler, the destroy runs as soon as the update that
/// dispatched the event returns.
pub struct Tilt {
    effect: SharedEffect,
    listeners: SmallVec<[Listener; MAX_LISTENERS]>,
}

impl Tilt {
    pub fn attach(element: &web::Element, options: &ExplicitOptions) -> Result<Self, TiltError> {
        let html: web::HtmlElement = element
            .clone()
            .dyn_into()
            .map_err(|_| TiltError::NotAnElement(element.node_name()))?;
        let window = dom::window()?;
        let document = dom::document()?;

        let mut settings = options.resolve(element);
        let glare_nodes = if settings.glare {
            glare::prepare(&document, &html, settings.glare_prerender)
        } else {
            None
        };
        settings.glare = glare_nodes.is_some();

        let listen_target = listen_target(&document, &html, &settings, options);
        let wants_resize = settings.glare || settings.full_page_listening;
        let wants_orientation = settings.gyroscope && dom::gyroscope_supported(&window);

        let effect: SharedEffect = Rc::new_cyclic(|weak| {
            let surface = DomSurface::new(window.clone(), html.clone(), glare_nodes, weak.clone());
            EffectCell::new(TiltEffect::new(settings, surface))
        });

        let weak = Rc::downgrade(&effect);
        let mut listeners: SmallVec<[Listener; MAX_LISTENERS]> = SmallVec::new();
        listeners.extend(events::wire_pointer(&listen_target, &weak));
        if wants_resize {
            listeners.push(events::wire_resize(&window, weak.clone()));
        }
        if wants_orientation {
            listeners.push(events::wire_orientation(&window, weak));
        }

        log::debug!(
            "[tilt] attached to <{}> listeners={}",
            element.node_name().to_lowercase(),
            listeners.len()
        );
        Ok(Self { effect, listeners })
    }

    pub fn effect(&self) -> SharedEffect {
        self.effect.clone()
    }

    /// Current values, or `None` while the effect is mid-update.
    pub fn values(&self) -> Option<TiltValues> {
        self.effect.read(|e| e.values())
    }

    pub fn destroy(self) {
        drop(self);
    }
}

impl Drop for Tilt {
    fn drop(&mut self) {
        if !self.effect.destroy() {
            log::debug!("[tilt] destroy deferred until the running update returns");
        }
        self.listeners.clear();
        log::debug!("[tilt] detached");
    }
}

/// Full page listens on the document; otherwise a matching
/// `mouse-event-element` selector, then an explicit node, then the element.
fn listen_target(
    document: &web::Document,
    element: &web::HtmlElement,
    settings: &tilt_core::Settings,
    options: &ExplicitOptions,
) -> web::EventTarget {
    if settings.full_page_listening {
        return document.clone().into();
    }
    if let Some(selector) = &settings.mouse_event_element {
        if let Ok(Some(found)) = document.query_selector(selector) {
            return found.into();
        }
    }
    if let Some(node) = &options.mouse_event_node {
        return node.clone();
    }
    element.clone().into()
}
