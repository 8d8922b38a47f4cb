//! Input handling and pointer state machine.
//!
//! Hosts deliver pointer events in surface coordinates; the widget feeds them
//! through [`PointerState`] to decide whether a move paints or is ignored.

pub mod events;
pub mod state;

pub use events::{MouseButton, PointerEvent};
pub use state::PointerState;
