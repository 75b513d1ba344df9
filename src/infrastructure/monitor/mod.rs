//! Foreign-process monitor adapters

pub mod shared;

pub use shared::SharedProcessMonitor;
