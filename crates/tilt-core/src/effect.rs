//! The tilt state machine.
//!
//! `TiltEffect` owns the per-element state (settings, geometry snapshot,
//! latest sample, gyroscope calibration, pending frame and transition timer)
//! and talks to the page only through a [`Surface`]. The web front-end
//! implements the surface on top of the DOM; tests use a recording one.

use crate::constants::{GLARE_INNER_STYLE, GLARE_RESET_TRANSFORM, GLARE_WRAPPER_STYLE};
use crate::frame::{FrameKind, FrameSlot};
use crate::geometry::{Geometry, Viewport};
use crate::gyro::GyroCalibration;
use crate::mapping::{self, TiltValues};
use crate::settings::Settings;
use glam::DVec2;

/// Node whose inline style is being written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Element,
    GlareWrapper,
    Glare,
}

/// Host operations the state machine needs.
pub trait Surface {
    type FrameHandle;
    type TimerHandle;

    /// Layout box of the tilted element.
    fn measure(&self) -> Geometry;
    fn viewport(&self) -> Viewport;
    fn set_style(&mut self, target: Target, property: &str, value: &str);
    /// Ask for `TiltEffect::run_frame` at the next animation frame.
    fn request_frame(&mut self) -> Option<Self::FrameHandle>;
    fn cancel_frame(&mut self, handle: Self::FrameHandle);
    /// Ask for `TiltEffect::transition_elapsed` after `ms` milliseconds.
    fn start_timer(&mut self, ms: u32) -> Option<Self::TimerHandle>;
    fn cancel_timer(&mut self, handle: Self::TimerHandle);
    fn emit(&mut self, values: &TiltValues);
}

pub struct TiltEffect<S: Surface> {
    settings: Settings,
    surface: S,
    start: DVec2,
    geometry: Geometry,
    viewport: Viewport,
    sample: DVec2,
    calibration: GyroCalibration,
    frame: FrameSlot<S::FrameHandle>,
    transition_timer: Option<S::TimerHandle>,
    destroyed: bool,
}

impl<S: Surface> TiltEffect<S> {
    /// Prepares glare styles, places the element at its start position and,
    /// when `reset_to_start` is off, makes later resets return to center.
    pub fn new(settings: Settings, surface: S) -> Self {
        let mut effect = Self {
            start: DVec2::new(settings.start_x, settings.start_y),
            calibration: GyroCalibration::new(settings.gyroscope_samples),
            settings,
            surface,
            geometry: Geometry::default(),
            viewport: Viewport::default(),
            sample: DVec2::ZERO,
            frame: FrameSlot::default(),
            transition_timer: None,
            destroyed: false,
        };

        if effect.settings.glare && !effect.settings.glare_prerender {
            for (property, value) in GLARE_WRAPPER_STYLE {
                effect.surface.set_style(Target::GlareWrapper, property, value);
            }
            for (property, value) in GLARE_INNER_STYLE {
                effect.surface.set_style(Target::Glare, property, value);
            }
            effect.update_glare_size();
        }

        if effect.settings.full_page_listening {
            effect.viewport = effect.surface.viewport();
        }

        effect.apply_reset();

        if !effect.settings.reset_to_start {
            effect.start = DVec2::ZERO;
        }
        effect
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn sample(&self) -> DVec2 {
        self.sample
    }

    pub fn calibration(&self) -> &GyroCalibration {
        &self.calibration
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn pending_frame(&self) -> Option<FrameKind> {
        self.frame.kind()
    }

    /// Values for the current sample and geometry.
    pub fn values(&self) -> TiltValues {
        mapping::compute_values(self.sample, &self.geometry, &self.viewport, &self.settings)
    }

    pub fn pointer_enter(&mut self) {
        if self.destroyed {
            return;
        }
        self.geometry = self.surface.measure();
        self.surface.set_style(Target::Element, "will-change", "transform");
        self.set_transition();
    }

    pub fn pointer_move(&mut self, sample: DVec2) {
        if self.destroyed {
            return;
        }
        self.sample = sample;
        self.schedule(FrameKind::Update);
    }

    pub fn pointer_leave(&mut self) {
        if self.destroyed {
            return;
        }
        self.set_transition();
        if self.settings.reset {
            self.schedule(FrameKind::Reset);
        }
    }

    pub fn window_resize(&mut self) {
        if self.destroyed {
            return;
        }
        self.update_glare_size();
        self.viewport = self.surface.viewport();
    }

    /// Orientation angles in degrees; events lacking either axis are dropped.
    pub fn device_orientation(&mut self, gamma: Option<f64>, beta: Option<f64>) {
        if self.destroyed {
            return;
        }
        let (Some(gamma), Some(beta)) = (gamma, beta) else {
            return;
        };
        let orientation = DVec2::new(gamma, beta);
        self.geometry = self.surface.measure();
        self.calibration.observe(orientation);
        self.sample = self
            .calibration
            .sample(orientation, &self.geometry, &self.settings);
        self.schedule(FrameKind::Update);
    }

    /// Runs the pending frame, if any survived cancellation.
    pub fn run_frame(&mut self) {
        if self.destroyed {
            return;
        }
        let Some((_, kind)) = self.frame.take() else {
            return;
        };
        match kind {
            FrameKind::Update => self.update(self.settings.scale),
            FrameKind::Reset => self.apply_reset(),
        }
    }

    pub fn transition_elapsed(&mut self) {
        self.transition_timer = None;
        if self.destroyed {
            return;
        }
        self.clear_transition();
    }

    /// Immediate reset; supersedes any pending frame.
    pub fn reset(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_frame();
        self.apply_reset();
    }

    /// Cancels pending work, puts the element back at rest and stops reacting.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.cancel_frame();
        self.cancel_timer();
        self.clear_transition();

        self.geometry = self.surface.measure();
        self.sample = self.reset_sample();
        self.update(1.0);
        self.reset_glare();
        self.surface.set_style(Target::Element, "will-change", "");

        self.destroyed = true;
    }

    fn schedule(&mut self, kind: FrameKind) {
        self.cancel_frame();
        if let Some(handle) = self.surface.request_frame() {
            self.frame.replace(handle, kind);
        }
    }

    fn cancel_frame(&mut self) {
        if let Some((handle, _)) = self.frame.take() {
            self.surface.cancel_frame(handle);
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(handle) = self.transition_timer.take() {
            self.surface.cancel_timer(handle);
        }
    }

    fn apply_reset(&mut self) {
        self.pointer_enter();
        self.sample = self.reset_sample();
        // scale is forced to 1 for this frame only
        self.update(1.0);
        self.reset_glare();
    }

    fn reset_sample(&self) -> DVec2 {
        mapping::reset_sample(self.start, &self.geometry, &self.viewport, &self.settings)
    }

    fn update(&mut self, scale: f64) {
        let values = self.values();
        let transform = mapping::element_transform(&values, &self.settings, scale);
        self.surface.set_style(Target::Element, "transform", &transform);

        if self.settings.glare {
            self.surface
                .set_style(Target::Glare, "transform", &mapping::glare_transform(values.angle));
            let opacity = mapping::glare_opacity(values.percentage_y, self.settings.max_glare);
            self.surface
                .set_style(Target::Glare, "opacity", &opacity.to_string());
        }

        self.surface.emit(&values);
    }

    fn reset_glare(&mut self) {
        if self.settings.glare {
            self.surface
                .set_style(Target::Glare, "transform", GLARE_RESET_TRANSFORM);
            self.surface.set_style(Target::Glare, "opacity", "0");
        }
    }

    fn update_glare_size(&mut self) {
        if self.settings.glare {
            let size = format!("{}px", self.surface.measure().glare_size());
            self.surface.set_style(Target::Glare, "width", &size);
            self.surface.set_style(Target::Glare, "height", &size);
        }
    }

    fn set_transition(&mut self) {
        if !self.settings.transition {
            return;
        }
        self.cancel_timer();
        let speed = self.settings.speed;
        let element = format!("{}ms {}", speed, self.settings.easing);
        self.surface.set_style(Target::Element, "transition", &element);
        if self.settings.glare {
            let glare = format!("opacity {}ms {}", speed, self.settings.easing);
            self.surface.set_style(Target::Glare, "transition", &glare);
        }
        self.transition_timer = self.surface.start_timer(speed);
    }

    fn clear_transition(&mut self) {
        self.surface.set_style(Target::Element, "transition", "");
        if self.settings.glare {
            self.surface.set_style(Target::Glare, "transition", "");
        }
    }
}
