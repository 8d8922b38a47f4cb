//! Transient freehand stroke collected while the pointer is held down.

use super::color::Color;
use super::surface::Surface;

/// Ordered sequence of pointer positions making up one freehand stroke.
///
/// A stroke lives only while the pointer is down. Each new point is committed
/// to the pixel buffer immediately as a segment from the previous point, so no
/// vector data survives once the stroke ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<(f64, f64)>,
    color: Color,
    line_width: f64,
}

impl Stroke {
    /// Starts a stroke at the pointer-down position.
    pub fn begin(x: f64, y: f64, color: Color, line_width: f64) -> Self {
        Self {
            points: vec![(x, y)],
            color,
            line_width,
        }
    }

    /// Last recorded point. A stroke always holds at least its start point.
    pub fn last_point(&self) -> (f64, f64) {
        self.points[self.points.len() - 1]
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Appends `(x, y)` and paints the segment from the previous point.
    ///
    /// The point is recorded even if painting fails, so the next segment still
    /// starts where the pointer actually is.
    pub fn extend_to(&mut self, surface: &Surface, x: f64, y: f64) -> Result<(), cairo::Error> {
        let from = self.last_point();
        self.points.push((x, y));
        surface.draw_segment(from, (x, y), self.color, self.line_width)
    }
}
