//! Input injection adapters

pub mod enigo;
pub mod factory;
pub mod noop;

pub use enigo::EnigoInjector;
pub use factory::{create_injector, InjectorBackend, ParseBackendError};
pub use noop::NoOpInjector;
