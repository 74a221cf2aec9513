//! Registry configuration.
//!
//! [`RegistryConfig`] is plain serde data, normally loaded from TOML:
//!
//! ```toml
//! unregistered = "fallback"     # or "fail" (default)
//! state_encoding = "code"       # or "name" (default)
//! seal_on_first_dispatch = true
//! builtin = ["tap", "pan", "pinch", "long-press"]
//! ```
//!
//! Every field is optional; a missing field takes its default.

use crate::error::ConfigError;
use crate::gesture::GestureVariant;
use crate::payload::StateEncoding;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What `dispatch` does with a variant that has no extractor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnregisteredPolicy {
    /// Return [`DispatchError::UnregisteredVariant`](crate::DispatchError::UnregisteredVariant).
    #[default]
    Fail,
    /// Return a payload holding only the `unregisteredVariant` marker.
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub unregistered: UnregisteredPolicy,
    pub state_encoding: StateEncoding,
    /// Seal the registry on the first `dispatch` call.
    pub seal_on_first_dispatch: bool,
    /// Built-in extractors installed by [`DispatchRegistry::builtin`](crate::DispatchRegistry::builtin).
    pub builtin: Vec<GestureVariant>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            unregistered: UnregisteredPolicy::Fail,
            state_encoding: StateEncoding::Name,
            seal_on_first_dispatch: true,
            builtin: GestureVariant::ALL.to_vec(),
        }
    }
}

impl RegistryConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let cfg = RegistryConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, RegistryConfig::default());
        assert_eq!(cfg.builtin.len(), GestureVariant::ALL.len());
    }

    #[test]
    fn parses_every_field() {
        let cfg = RegistryConfig::from_toml_str(
            r#"
            unregistered = "fallback"
            state_encoding = "code"
            seal_on_first_dispatch = false
            builtin = ["pan", "long-press", "native-view"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.unregistered, UnregisteredPolicy::Fallback);
        assert_eq!(cfg.state_encoding, StateEncoding::Code);
        assert!(!cfg.seal_on_first_dispatch);
        assert_eq!(
            cfg.builtin,
            [
                GestureVariant::Pan,
                GestureVariant::LongPress,
                GestureVariant::NativeView
            ]
        );
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = RegistryConfig::from_toml_str(r#"unregistered = "ignore""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = RegistryConfig::load("/nonexistent/pinchpoint.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
