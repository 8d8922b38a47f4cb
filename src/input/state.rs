//! Pointer state machine (idle ⇄ drawing).

use crate::draw::{Color, Stroke};

/// Current drawing mode state machine.
///
/// Transitions to `Drawing` on pointer-down and back to `Idle` on pointer-up.
/// Owned by a single widget; nothing else mutates it.
#[derive(Debug, Default)]
pub enum PointerState {
    /// Not drawing; pointer moves are ignored
    #[default]
    Idle,
    /// Pointer held down; moves extend the stroke
    Drawing {
        /// Stroke being collected, holding the last known point
        stroke: Stroke,
    },
}

impl PointerState {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Whether pointer moves should be interpreted as drawing.
    pub fn is_drawing(&self) -> bool {
        matches!(self, PointerState::Drawing { .. })
    }

    /// Last point of the active stroke, if drawing.
    pub fn last_point(&self) -> Option<(f64, f64)> {
        match self {
            PointerState::Idle => None,
            PointerState::Drawing { stroke } => Some(stroke.last_point()),
        }
    }

    /// Enters `Drawing` with a fresh stroke at `(x, y)`.
    ///
    /// Returns the previous stroke when one was still in progress.
    pub fn begin(&mut self, x: f64, y: f64, color: Color, line_width: f64) -> Option<Stroke> {
        let previous = std::mem::replace(
            self,
            PointerState::Drawing {
                stroke: Stroke::begin(x, y, color, line_width),
            },
        );
        match previous {
            PointerState::Drawing { stroke } => Some(stroke),
            PointerState::Idle => None,
        }
    }

    /// Active stroke, if drawing.
    pub fn stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            PointerState::Idle => None,
            PointerState::Drawing { stroke } => Some(stroke),
        }
    }

    /// Returns to `Idle`, handing back the finished stroke if there was one.
    pub fn end(&mut self) -> Option<Stroke> {
        match std::mem::take(self) {
            PointerState::Drawing { stroke } => Some(stroke),
            PointerState::Idle => None,
        }
    }
}
