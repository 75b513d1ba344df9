//! Clipboard adapters

pub mod arboard;
pub mod memory;

pub use arboard::ArboardClipboard;
pub use memory::MemoryClipboard;
