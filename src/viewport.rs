// Screen-space scaling of sampled trajectories for plot and animation surfaces
use crate::constants::MIN_EXTENT_M;
use crate::sampler::TrajectorySample;
use nalgebra::Point2;

/// Fill factor leaving headroom inside the margins
const VIEWPORT_FILL: f64 = 0.8;

/// Target drawing area in pixels with a uniform margin on all sides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 450.0,
            margin: 75.0,
        }
    }
}

impl Viewport {
    /// Screen position of the launch point (bottom-left inside the margin)
    pub fn origin(&self) -> Point2<f64> {
        Point2::new(self.margin, self.height - self.margin)
    }
}

/// Map physical samples into screen coordinates with Y flipped
///
/// Uniform scale fitting the whole flight inside the margins:
/// `min((w - 2m)/maxX, (h - 2m)/maxY) * 0.8`, anchored at the viewport
/// origin. Purely a rendering concern; the sampler knows nothing of it.
/// Degenerate input (no samples, or zero extent) yields an empty Vec.
pub fn scale_to_viewport(samples: &[TrajectorySample], viewport: &Viewport) -> Vec<Point2<f64>> {
    let mut max_x = 0.0_f64;
    let mut max_y = 0.0_f64;
    for s in samples {
        max_x = max_x.max(s.x_m);
        max_y = max_y.max(s.y_m);
    }
    if max_x < MIN_EXTENT_M || max_y < MIN_EXTENT_M {
        return Vec::new();
    }

    let scale_x = (viewport.width - 2.0 * viewport.margin) / max_x;
    let scale_y = (viewport.height - 2.0 * viewport.margin) / max_y;
    let scale = scale_x.min(scale_y) * VIEWPORT_FILL;
    let origin = viewport.origin();

    samples
        .iter()
        .map(|s| Point2::new(s.x_m * scale + origin.x, origin.y - s.y_m * scale))
        .collect()
}
