//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod geometry;
pub mod injector;
pub mod monitor;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError, ClipboardPayload};
pub use geometry::WindowGeometry;
pub use injector::{InjectError, Injector};
pub use monitor::ProcessMonitor;
