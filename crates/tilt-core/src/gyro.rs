use crate::geometry::Geometry;
use crate::settings::Settings;
use glam::DVec2;

/// Zero reference for device orientation, x = gamma and y = beta.
///
/// The first sample sets the reference directly; each further sample (while
/// any remain) halves the distance to it: `zero = (sample + previous) / 2`.
#[derive(Clone, Debug)]
pub struct GyroCalibration {
    zero: Option<DVec2>,
    remaining: u32,
}

impl GyroCalibration {
    pub fn new(samples: u32) -> Self {
        Self {
            zero: None,
            remaining: samples,
        }
    }

    pub fn zero(&self) -> DVec2 {
        self.zero.unwrap_or(DVec2::ZERO)
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn observe(&mut self, orientation: DVec2) {
        if self.remaining == 0 {
            return;
        }
        self.zero = Some(match self.zero {
            None => orientation,
            Some(previous) => (orientation + previous) / 2.0,
        });
        self.remaining -= 1;
        if self.remaining == 0 {
            log::debug!("[gyro] calibrated zero=({:.2},{:.2})", self.zero().x, self.zero().y);
        }
    }

    /// Client-space sample equivalent to `orientation` for an element at
    /// `geometry`: the configured angle range spans the element box.
    pub fn sample(&self, orientation: DVec2, geometry: &Geometry, settings: &Settings) -> DVec2 {
        let min = DVec2::new(settings.gyroscope_min_angle_x, settings.gyroscope_min_angle_y);
        let max = DVec2::new(settings.gyroscope_max_angle_x, settings.gyroscope_max_angle_y);
        let angle = orientation - (min + self.zero());
        let offset = DVec2::new(
            angle_to_px(angle.x, max.x - min.x, geometry.width),
            angle_to_px(angle.y, max.y - min.y, geometry.height),
        );
        geometry.origin() + offset
    }
}

#[inline]
fn angle_to_px(angle: f64, total_angle: f64, extent: f64) -> f64 {
    if total_angle == 0.0 {
        return 0.0;
    }
    let degrees_per_px = total_angle / extent;
    let px = angle / degrees_per_px;
    if px.is_finite() {
        px
    } else {
        0.0
    }
}
