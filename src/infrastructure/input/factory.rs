//! Injector backend selection

use std::fmt;
use std::str::FromStr;

use crate::application::ports::Injector;

use super::enigo::EnigoInjector;
use super::noop::NoOpInjector;

/// Available injection backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InjectorBackend {
    /// Cross-platform enigo library (default)
    #[default]
    Enigo,
    /// Log-only backend with no OS side effects
    NoOp,
}

impl fmt::Display for InjectorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InjectorBackend::Enigo => write!(f, "enigo"),
            InjectorBackend::NoOp => write!(f, "noop"),
        }
    }
}

/// Error type for parsing an injector backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBackendError {
    pub value: String,
}

impl fmt::Display for ParseBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid injector backend '{}'. Valid options: enigo, noop",
            self.value
        )
    }
}

impl std::error::Error for ParseBackendError {}

impl FromStr for InjectorBackend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "enigo" => Ok(InjectorBackend::Enigo),
            "noop" | "no-op" => Ok(InjectorBackend::NoOp),
            _ => Err(ParseBackendError {
                value: s.to_string(),
            }),
        }
    }
}

/// Create an injector adapter for the chosen backend.
pub fn create_injector(backend: InjectorBackend) -> Box<dyn Injector> {
    match backend {
        InjectorBackend::Enigo => Box::new(EnigoInjector::new()),
        InjectorBackend::NoOp => Box::new(NoOpInjector::new()),
    }
}
