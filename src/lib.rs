//! Embeddable canvas drawing surface.
//!
//! Mount a [`Chalkboard`] into a [`MountPoint`], feed it pointer events, and
//! read the pixels back or export them as PNG.
//!
//! ```
//! use chalkboard::{BoardOptions, Chalkboard, MountPoint};
//!
//! let mut host = MountPoint::default();
//! let mut board = Chalkboard::mount(&mut host, BoardOptions::default()).unwrap();
//! board.pointer_down(10.0, 10.0);
//! board.pointer_move(60.0, 40.0);
//! board.pointer_up();
//! assert!(!board.surface().is_blank());
//! board.dispose(&mut host);
//! ```

pub mod config;
pub mod draw;
pub mod export;
pub mod host;
pub mod input;
pub mod script;
pub mod util;
pub mod widget;

pub use config::{BoardOptions, Config, ExportConfig};
pub use draw::SurfaceError;
pub use host::MountPoint;
pub use widget::Chalkboard;
