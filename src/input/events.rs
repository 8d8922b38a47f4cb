//! Generic pointer event types delivered by the embedding host.

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button (mouse left, pen tip, touch contact)
    Left,
    /// Secondary button
    Right,
    /// Middle button
    Middle,
}

/// A pointer event in surface coordinates.
///
/// Hosts map their native input (mouse, touch, pen) onto these before calling
/// [`Chalkboard::handle_event`](crate::Chalkboard::handle_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { button: MouseButton, x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { button: MouseButton },
}
