//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OS clipboard and input synthesis.

pub mod clipboard;
pub mod geometry;
pub mod input;
pub mod monitor;

// Re-export adapters
pub use clipboard::{ArboardClipboard, MemoryClipboard};
pub use geometry::FixedGeometry;
pub use input::{create_injector, EnigoInjector, InjectorBackend, NoOpInjector};
pub use monitor::SharedProcessMonitor;
