//! Closed-form mapping from a client-space sample to tilt and glare values.
//!
//! The horizontal position drives `rotateY` (left/right tilt) through
//! `tilt_x`, the vertical position drives `rotateX` through `tilt_y`, so the
//! element always faces the pointer.

use crate::constants::TILT_DECIMALS;
use crate::geometry::{normalize, Geometry, Viewport};
use crate::settings::{Axis, Settings};
use glam::DVec2;
use serde::Serialize;

/// Values derived for one frame; also the `detail` of the change event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TiltValues {
    pub tilt_x: f64,
    pub tilt_y: f64,
    pub percentage_x: f64,
    pub percentage_y: f64,
    pub angle: f64,
}

impl TiltValues {
    /// Entries under their JavaScript property names.
    pub fn fields(&self) -> [(&'static str, f64); 5] {
        [
            ("tiltX", self.tilt_x),
            ("tiltY", self.tilt_y),
            ("percentageX", self.percentage_x),
            ("percentageY", self.percentage_y),
            ("angle", self.angle),
        ]
    }
}

#[inline]
fn round_to(value: f64, decimals: i32) -> f64 {
    let f = 10f64.powi(decimals);
    // + 0.0 folds -0.0 into 0.0
    (value * f).round() / f + 0.0
}

/// Horizontal tilt for a normalized x in [0, 1].
#[inline]
pub fn tilt_x(x: f64, max: f64, reverse_sign: f64) -> f64 {
    reverse_sign * (max - x * max * 2.0)
}

/// Vertical tilt for a normalized y in [0, 1].
#[inline]
pub fn tilt_y(y: f64, max: f64, reverse_sign: f64) -> f64 {
    reverse_sign * (y * max * 2.0 - max)
}

/// Glare rotation in degrees: the angle of the sample around the element
/// center, measured clockwise from "up".
#[inline]
pub fn glare_angle(sample: DVec2, geometry: &Geometry) -> f64 {
    let d = sample - geometry.center();
    d.x.atan2(-d.y).to_degrees()
}

#[inline]
pub fn glare_opacity(percentage_y: f64, max_glare: f64) -> f64 {
    percentage_y * max_glare / 100.0
}

/// Full-page listening measures against the viewport, otherwise the sample is
/// taken relative to the element box.
pub fn compute_values(
    sample: DVec2,
    geometry: &Geometry,
    viewport: &Viewport,
    settings: &Settings,
) -> TiltValues {
    let norm = if settings.full_page_listening {
        normalize(sample, viewport.size())
    } else {
        normalize(sample - geometry.origin(), geometry.size())
    };
    let sign = settings.reverse_sign();
    TiltValues {
        tilt_x: round_to(tilt_x(norm.x, settings.max, sign), TILT_DECIMALS),
        tilt_y: round_to(tilt_y(norm.y, settings.max, sign), TILT_DECIMALS),
        percentage_x: norm.x * 100.0,
        percentage_y: norm.y * 100.0,
        angle: glare_angle(sample, geometry),
    }
}

/// CSS transform for the element. The locked axis contributes no rotation.
pub fn element_transform(values: &TiltValues, settings: &Settings, scale: f64) -> String {
    let (rotate_x, rotate_y) = match settings.axis {
        Some(Axis::X) => (values.tilt_y, 0.0),
        Some(Axis::Y) => (0.0, values.tilt_x),
        None => (values.tilt_y, values.tilt_x),
    };
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
        settings.perspective,
        rotate_x,
        rotate_y,
        s = scale
    )
}

pub fn glare_transform(angle: f64) -> String {
    format!("rotate({}deg) translate(-50%, -50%)", angle)
}

/// Synthetic sample for a reset: the start offset (in [-max, max]) mapped into
/// the element box, or into the viewport when listening on the full page.
pub fn reset_sample(
    start: DVec2,
    geometry: &Geometry,
    viewport: &Viewport,
    settings: &Settings,
) -> DVec2 {
    let fraction = if settings.max != 0.0 {
        (start + settings.max) / (2.0 * settings.max)
    } else {
        DVec2::splat(0.5)
    };
    if settings.full_page_listening {
        fraction * viewport.size()
    } else {
        geometry.origin() + fraction * geometry.size()
    }
}
