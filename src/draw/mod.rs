//! Rendering primitives (Cairo-based).
//!
//! - [`Color`]: RGBA color representation with named constants
//! - [`Surface`]: the canvas pixel buffer and its single 2D context
//! - [`Stroke`]: transient freehand point sequence painted segment by segment

pub mod color;
pub mod stroke;
pub mod surface;

pub use color::Color;
pub use stroke::Stroke;
pub use surface::{MAX_SURFACE_EDGE, Pixel, Surface, SurfaceError};
