//! The drawing-surface widget.
//!
//! [`Chalkboard`] owns one canvas element in its host, the [`Surface`] behind
//! it, and the pointer state machine that decides whether moves paint.

use crate::config::BoardOptions;
use crate::draw::{Color, Surface, SurfaceError};
use crate::host::{Element, MountPoint};
use crate::input::{MouseButton, PointerEvent, PointerState};
use log::{debug, warn};

/// Id prefix for canvas elements inserted into a host.
const CANVAS_ID_PREFIX: &str = "chalkboard";

/// A mounted drawing surface.
///
/// Created by [`Chalkboard::mount`] and torn down by [`Chalkboard::dispose`].
/// Dropping the widget without disposing releases the surface but leaves the
/// canvas element in the host.
#[derive(Debug)]
pub struct Chalkboard {
    surface: Surface,
    options: BoardOptions,
    line_color: Color,
    state: PointerState,
    canvas_id: String,
}

impl Chalkboard {
    /// Acquires a surface sized from `options` and inserts its canvas element
    /// into `host`.
    ///
    /// # Errors
    /// Fails when the 2D rendering context cannot be acquired; the host is left
    /// untouched in that case.
    pub fn mount(host: &mut MountPoint, mut options: BoardOptions) -> Result<Self, SurfaceError> {
        if !(options.line_width.is_finite() && options.line_width > 0.0) {
            let fallback = BoardOptions::default().line_width;
            warn!(
                "Invalid line width {}, using {:.1}",
                options.line_width, fallback
            );
            options.line_width = fallback;
        }

        let surface = Surface::new(options.width, options.height)?;
        let line_color = options.stroke_color();

        let canvas = Element::new("canvas")
            .with_attribute("width", options.width)
            .with_attribute("height", options.height);
        let canvas_id = host.insert(CANVAS_ID_PREFIX, canvas);

        debug!(
            "Mounted {} ({}x{}, line width {:.1})",
            canvas_id, options.width, options.height, options.line_width
        );

        Ok(Self {
            surface,
            options,
            line_color,
            state: PointerState::new(),
            canvas_id,
        })
    }

    /// Removes the canvas element from `host` and releases the surface.
    pub fn dispose(self, host: &mut MountPoint) {
        if host.remove(&self.canvas_id).is_none() {
            warn!("Canvas {} was already detached from its host", self.canvas_id);
        }
        debug!("Disposed {}", self.canvas_id);
    }

    /// Begins a stroke at `(x, y)`. Non-finite coordinates are ignored.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            debug!("Ignoring pointer-down at non-finite ({x}, {y})");
            return;
        }
        if let Some(abandoned) = self
            .state
            .begin(x, y, self.line_color, self.options.line_width)
        {
            debug!(
                "Restarting stroke; previous had {} points",
                abandoned.points().len()
            );
        }
    }

    /// Paints a segment from the last point to `(x, y)` while drawing.
    ///
    /// Ignored when no stroke is in progress or the point is not finite.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if !(x.is_finite() && y.is_finite()) {
            debug!("Ignoring pointer-move to non-finite ({x}, {y})");
            return;
        }
        let Some(stroke) = self.state.stroke_mut() else {
            return;
        };
        if let Err(err) = stroke.extend_to(&self.surface, x, y) {
            warn!("Failed to paint stroke segment: {err}");
        }
    }

    /// Ends the current stroke. Does nothing when already idle.
    pub fn pointer_up(&mut self) {
        if let Some(stroke) = self.state.end() {
            debug!("Committed stroke with {} points", stroke.points().len());
        }
    }

    /// Erases every pixel. An in-progress stroke continues from its last point.
    pub fn clear(&mut self) {
        if let Err(err) = self.surface.clear() {
            warn!("Failed to clear surface: {err}");
        }
    }

    /// Dispatches a host pointer event. Only the primary button draws.
    pub fn handle_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                button: MouseButton::Left,
                x,
                y,
            } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up {
                button: MouseButton::Left,
            } => self.pointer_up(),
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => {}
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    pub fn last_point(&self) -> Option<(f64, f64)> {
        self.state.last_point()
    }

    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }
}
