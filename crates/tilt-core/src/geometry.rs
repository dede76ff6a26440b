use glam::DVec2;

/// Element box in client coordinates, measured on enter/reset rather than on
/// every pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.origin() + self.size() * 0.5
    }

    /// Edge of the square glare node: twice the element's longest side.
    #[inline]
    pub fn glare_size(&self) -> f64 {
        self.width.max(self.height) * crate::constants::GLARE_SIZE_FACTOR
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Position of `offset` along `extent`, clamped to [0, 1]. A degenerate
/// extent maps to the middle.
#[inline]
pub fn normalize_axis(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 && offset.is_finite() {
        (offset / extent).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

#[inline]
pub fn normalize(offset: DVec2, extent: DVec2) -> DVec2 {
    DVec2::new(
        normalize_axis(offset.x, extent.x),
        normalize_axis(offset.y, extent.y),
    )
}
