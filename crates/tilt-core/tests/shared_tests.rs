// Host-side tests for re-entrant access: the surface below plays the part of a
// page handler that reacts to every change event by calling back into the
// same instance.

use glam::DVec2;
use std::rc::{Rc, Weak};
use tilt_core::*;

#[derive(Clone, Copy, Debug, PartialEq)]
enum OnChange {
    Nothing,
    Enter,
    Move,
    Leave,
    Resize,
    Read,
    Destroy,
}

struct HandlerSurface {
    cell: Weak<EffectCell<HandlerSurface>>,
    on_change: OnChange,
    nested: Vec<bool>,
    styles: Vec<(Target, String, String)>,
    next_handle: u32,
    frames_requested: Vec<u32>,
    frames_cancelled: Vec<u32>,
    timers_started: Vec<u32>,
    timers_cancelled: Vec<u32>,
    emitted: usize,
}

impl HandlerSurface {
    fn new(cell: Weak<EffectCell<HandlerSurface>>) -> Self {
        Self {
            cell,
            on_change: OnChange::Nothing,
            nested: Vec::new(),
            styles: Vec::new(),
            next_handle: 0,
            frames_requested: Vec::new(),
            frames_cancelled: Vec::new(),
            timers_started: Vec::new(),
            timers_cancelled: Vec::new(),
            emitted: 0,
        }
    }

    fn last_style(&self, target: Target, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .rev()
            .find(|(t, p, _)| *t == target && p == property)
            .map(|(_, _, v)| v.as_str())
    }
}

impl Surface for HandlerSurface {
    type FrameHandle = u32;
    type TimerHandle = u32;

    fn measure(&self) -> Geometry {
        Geometry::new(100.0, 50.0, 200.0, 100.0)
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        self.styles
            .push((target, property.to_string(), value.to_string()));
    }

    fn request_frame(&mut self) -> Option<u32> {
        self.next_handle += 1;
        self.frames_requested.push(self.next_handle);
        Some(self.next_handle)
    }

    fn cancel_frame(&mut self, handle: u32) {
        self.frames_cancelled.push(handle);
    }

    fn start_timer(&mut self, _ms: u32) -> Option<u32> {
        self.next_handle += 1;
        self.timers_started.push(self.next_handle);
        Some(self.next_handle)
    }

    fn cancel_timer(&mut self, handle: u32) {
        self.timers_cancelled.push(handle);
    }

    fn emit(&mut self, _values: &TiltValues) {
        self.emitted += 1;
        // not reachable while the cell is still being built
        let Some(cell) = self.cell.upgrade() else {
            return;
        };
        let ran = match self.on_change {
            OnChange::Nothing => return,
            OnChange::Enter => cell.with(|e| e.pointer_enter()).is_some(),
            OnChange::Move => cell.with(|e| e.pointer_move(DVec2::new(10.0, 10.0))).is_some(),
            OnChange::Leave => cell.with(|e| e.pointer_leave()).is_some(),
            OnChange::Resize => cell.with(|e| e.window_resize()).is_some(),
            OnChange::Read => cell.read(|e| e.values()).is_some(),
            OnChange::Destroy => cell.destroy(),
        };
        self.nested.push(ran);
    }
}

fn shared(settings: Settings) -> Rc<EffectCell<HandlerSurface>> {
    Rc::new_cyclic(|weak| {
        EffectCell::new(TiltEffect::new(settings, HandlerSurface::new(weak.clone())))
    })
}

fn on_change(cell: &EffectCell<HandlerSurface>, handler: OnChange) {
    cell.with(|e| e.surface_mut().on_change = handler);
}

#[test]
fn construction_does_not_reach_the_handler() {
    let cell = shared(Settings::default());
    let (emitted, nested) = cell
        .read(|e| (e.surface().emitted, e.surface().nested.len()))
        .unwrap();
    assert_eq!(emitted, 1);
    assert_eq!(nested, 0);
}

#[test]
fn events_fired_from_a_change_handler_are_skipped() {
    for handler in [
        OnChange::Enter,
        OnChange::Move,
        OnChange::Leave,
        OnChange::Resize,
        OnChange::Read,
    ] {
        let cell = shared(Settings {
            glare: true,
            ..Settings::default()
        });
        on_change(&cell, handler);

        let outer = cell.with(|e| {
            e.pointer_move(DVec2::new(120.0, 60.0));
            e.run_frame();
        });
        assert!(outer.is_some(), "{:?}", handler);

        let (nested, pending) = cell
            .read(|e| (e.surface().nested.clone(), e.pending_frame()))
            .unwrap();
        assert_eq!(nested, vec![false], "{:?}", handler);
        assert_eq!(pending, None, "{:?}", handler);
    }
}

#[test]
fn calls_after_the_handler_returns_go_through() {
    let cell = shared(Settings::default());
    on_change(&cell, OnChange::Move);
    cell.with(|e| {
        e.pointer_move(DVec2::new(120.0, 60.0));
        e.run_frame();
    });

    assert_eq!(cell.with(|e| e.pointer_move(DVec2::new(300.0, 150.0))), Some(()));
    assert_eq!(
        cell.read(|e| e.pending_frame()).unwrap(),
        Some(FrameKind::Update)
    );
}

#[test]
fn destroy_outside_a_call_is_immediate() {
    let cell = shared(Settings::default());
    assert!(cell.destroy());
    assert!(!cell.is_destroy_pending());
    assert_eq!(cell.read(|e| e.is_destroyed()), Some(true));
}

#[test]
fn destroy_from_a_change_handler_runs_once_the_update_returns() {
    let cell = shared(Settings {
        glare: true,
        ..Settings::default()
    });
    on_change(&cell, OnChange::Destroy);

    cell.with(|e| {
        e.pointer_move(DVec2::new(120.0, 60.0));
        e.run_frame();
        // still live here: the request waits for this call to return
        assert!(!e.is_destroyed());
        e.pointer_leave();
    });

    assert!(!cell.is_destroy_pending());
    cell.read(|e| {
        assert!(e.is_destroyed());
        assert_eq!(e.pending_frame(), None);

        let s = e.surface();
        // the reset frame and the transition timer armed by the leave
        assert_eq!(s.frames_cancelled.last(), s.frames_requested.last());
        assert_eq!(s.timers_cancelled.last(), s.timers_started.last());
        assert!(s.nested.iter().all(|ran| !ran));
        assert_eq!(
            s.last_style(Target::Element, "transform"),
            Some("perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)")
        );
        assert_eq!(s.last_style(Target::Element, "will-change"), Some(""));
        assert_eq!(s.last_style(Target::Glare, "opacity"), Some("0"));
    })
    .unwrap();
}

#[test]
fn nothing_is_scheduled_after_a_deferred_destroy() {
    let cell = shared(Settings::default());
    on_change(&cell, OnChange::Destroy);
    cell.with(|e| e.reset());
    on_change(&cell, OnChange::Nothing);

    let before = cell
        .read(|e| (e.surface().frames_requested.len(), e.surface().timers_started.len(), e.surface().styles.len()))
        .unwrap();
    cell.with(|e| {
        e.pointer_enter();
        e.pointer_move(DVec2::new(150.0, 75.0));
        e.pointer_leave();
        e.run_frame();
        e.transition_elapsed();
    });
    let after = cell
        .read(|e| (e.surface().frames_requested.len(), e.surface().timers_started.len(), e.surface().styles.len()))
        .unwrap();
    assert_eq!(before, after);
}
