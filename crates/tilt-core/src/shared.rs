//! Shared access to a `TiltEffect` from host callbacks.
//!
//! `tiltChange` is dispatched synchronously while an update runs, so a page
//! handler can fire another event at the same instance before the first call
//! has returned. Every callback goes through [`EffectCell`]: a nested call is
//! skipped, and a destroy requested mid-update runs as soon as the outermost
//! call returns.

use crate::effect::{Surface, TiltEffect};
use std::cell::{Cell, RefCell};

pub struct EffectCell<S: Surface> {
    effect: RefCell<TiltEffect<S>>,
    destroy_requested: Cell<bool>,
}

impl<S: Surface> EffectCell<S> {
    pub fn new(effect: TiltEffect<S>) -> Self {
        Self {
            effect: RefCell::new(effect),
            destroy_requested: Cell::new(false),
        }
    }

    /// Runs `f` on the effect. Returns `None` when another call is already
    /// inside it.
    pub fn with<R>(&self, f: impl FnOnce(&mut TiltEffect<S>) -> R) -> Option<R> {
        let result = {
            let Ok(mut effect) = self.effect.try_borrow_mut() else {
                log::debug!("[tilt] nested call skipped while the effect is busy");
                return None;
            };
            f(&mut effect)
        };
        self.finish_destroy();
        Some(result)
    }

    /// Read-only access; `None` while a call is inside the effect.
    pub fn read<R>(&self, f: impl FnOnce(&TiltEffect<S>) -> R) -> Option<R> {
        self.effect.try_borrow().ok().map(|effect| f(&effect))
    }

    /// Destroys the effect now, or right after the call currently inside it
    /// returns. Returns true when the destroy ran immediately.
    pub fn destroy(&self) -> bool {
        self.destroy_requested.set(true);
        self.finish_destroy()
    }

    pub fn is_destroy_pending(&self) -> bool {
        self.destroy_requested.get()
    }

    fn finish_destroy(&self) -> bool {
        if !self.destroy_requested.get() {
            return false;
        }
        let Ok(mut effect) = self.effect.try_borrow_mut() else {
            return false;
        };
        effect.destroy();
        // requests made from handlers fired by the destroy itself are spent
        self.destroy_requested.set(false);
        true
    }
}
