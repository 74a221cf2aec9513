//! Error types.
//!
//! - [`RegistryError`] - setup-time misconfiguration, raised by `register`
//! - [`DispatchError`] - raised by `dispatch` when a handler cannot be extracted
//! - [`ConfigError`] - loading a [`RegistryConfig`](crate::config::RegistryConfig)
//! - [`Error`] - top-level error wrapping the above

use crate::gesture::GestureVariant;
use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while binding extractors to variants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The variant already has an extractor. Bindings cannot be overridden.
    #[error("an extractor is already registered for {0}")]
    DuplicateRegistration(GestureVariant),

    /// Dispatch has started; the variant set is frozen.
    #[error("registry is sealed, cannot register {0}")]
    Sealed(GestureVariant),

    /// The extractor reads a different gesture kind than the variant it was
    /// registered under.
    #[error("extractor for {found} cannot be registered as {expected}")]
    TypeMismatch {
        expected: GestureVariant,
        found: GestureVariant,
    },
}

/// Errors raised while extracting a handler's event data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No extractor is registered for the handler's variant.
    #[error("no extractor registered for {0}")]
    UnregisteredVariant(GestureVariant),

    /// The extractor stored for a variant could not read the handler.
    /// Registration checks make this unreachable.
    #[error("extractor for {expected} received a {found} handler")]
    TypeMismatch {
        expected: GestureVariant,
        found: GestureVariant,
    },
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
