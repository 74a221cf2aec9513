//! Variant-to-extractor bindings.
//!
//! A [`DispatchRegistry`] is built in two phases:
//!
//! 1. **Open** – single-threaded setup. [`register`](DispatchRegistry::register)
//!    binds at most one extractor per [`GestureVariant`].
//! 2. **Sealed** – entered by [`seal`](DispatchRegistry::seal) or, unless
//!    configured otherwise, by the first [`dispatch`](DispatchRegistry::dispatch).
//!    Registration is rejected; dispatch is allowed from any number of threads.
//!
//! Dispatch never shares mutable state between calls: each call builds its own
//! [`PayloadBuilder`] and hands back the finished [`Payload`], so a caller sees
//! either a complete payload or an error.
//!
//! # Example
//! ```
//! use pinchpoint::{
//!     DispatchRegistry, GestureHandler, GestureState, HandlerCommon, PanData,
//!     PanExtractor, GestureVariant, RegistryConfig,
//! };
//!
//! let mut registry = DispatchRegistry::new(RegistryConfig::default());
//! registry.register(GestureVariant::Pan, PanExtractor).unwrap();
//!
//! let handler = GestureHandler::new(
//!     HandlerCommon { state: GestureState::Active, number_of_pointers: Some(1), ..Default::default() },
//!     PanData { translation_x: 12.5, ..Default::default() }.into(),
//! );
//! let payload = registry.dispatch(&handler).unwrap();
//! assert_eq!(payload.len(), 6);
//! ```

use crate::config::{RegistryConfig, UnregisteredPolicy};
use crate::error::{DispatchError, RegistryError};
use crate::extractor::{ErasedExtractor, EventDataExtractor};
use crate::extractors::{self, keys};
use crate::gesture::{GestureData, GestureHandler, GestureVariant};
use crate::payload::{Payload, PayloadBuilder};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Registration phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryState {
    Open,
    Sealed,
}

pub struct DispatchRegistry {
    extractors: HashMap<GestureVariant, Box<dyn ErasedExtractor>>,
    sealed: AtomicBool,
    config: RegistryConfig,
}

impl DispatchRegistry {
    /// Empty, open registry.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            extractors: HashMap::new(),
            sealed: AtomicBool::new(false),
            config,
        }
    }

    /// Open registry holding the built-in extractors listed in `config.builtin`.
    ///
    /// Listing a variant twice is a [`RegistryError::DuplicateRegistration`].
    pub fn builtin(config: RegistryConfig) -> Result<Self, RegistryError> {
        let variants = config.builtin.clone();
        let mut registry = Self::new(config);
        for variant in variants {
            extractors::register_builtin(&mut registry, variant)?;
        }
        Ok(registry)
    }

    /// Bind `extractor` to `variant`.
    ///
    /// Fails when the registry is sealed, when `variant` is already bound, or
    /// when `extractor` reads a different gesture kind than `variant`.
    pub fn register<E: EventDataExtractor>(
        &mut self,
        variant: GestureVariant,
        extractor: E,
    ) -> Result<(), RegistryError> {
        if self.is_sealed() {
            return Err(RegistryError::Sealed(variant));
        }
        let found = <E::Gesture as GestureData>::VARIANT;
        if found != variant {
            return Err(RegistryError::TypeMismatch {
                expected: variant,
                found,
            });
        }
        if self.extractors.contains_key(&variant) {
            return Err(RegistryError::DuplicateRegistration(variant));
        }

        tracing::debug!(%variant, keys = E::KEYS.len(), "registered extractor");
        self.extractors.insert(variant, Box::new(extractor));
        Ok(())
    }

    /// Freeze the variant set. Idempotent.
    pub fn seal(&self) {
        if !self.sealed.swap(true, Ordering::AcqRel) {
            tracing::debug!(variants = self.extractors.len(), "registry sealed");
        }
    }

    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed.load(Ordering::Acquire)
    }

    pub fn state(&self) -> RegistryState {
        if self.is_sealed() {
            RegistryState::Sealed
        } else {
            RegistryState::Open
        }
    }

    pub fn is_registered(&self, variant: GestureVariant) -> bool {
        self.extractors.contains_key(&variant)
    }

    /// The fixed key set written for `variant`, if it is bound.
    pub fn keys_for(&self, variant: GestureVariant) -> Option<&'static [&'static str]> {
        self.extractors.get(&variant).map(|e| e.keys())
    }

    /// Bound variants, in declaration order.
    pub fn variants(&self) -> Vec<GestureVariant> {
        let mut out: Vec<_> = self.extractors.keys().copied().collect();
        out.sort();
        out
    }

    #[inline]
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Extract `handler` into a fresh payload.
    pub fn dispatch(&self, handler: &GestureHandler) -> Result<Payload, DispatchError> {
        if self.config.seal_on_first_dispatch {
            self.seal();
        }

        let variant = handler.variant();
        let Some(extractor) = self.extractors.get(&variant) else {
            return self.unregistered(variant);
        };

        let mut out = PayloadBuilder::new(self.config.state_encoding);
        if let Err(err) = extractor.extract_handler(handler, &mut out) {
            debug_assert!(false, "registered extractor rejected its own variant: {err}");
            tracing::error!(%variant, %err, "extractor type mismatch");
            return Err(err);
        }
        let payload = out.finish();
        debug_assert!(
            payload.keys().eq(extractor.keys().iter().copied()),
            "extractor for {variant} wrote keys other than its declared set"
        );

        #[cfg(feature = "debug-log")]
        tracing::trace!(
            %variant,
            handler = handler.tag().0,
            payload = %payload.to_json(),
            "dispatched"
        );

        Ok(payload)
    }

    fn unregistered(&self, variant: GestureVariant) -> Result<Payload, DispatchError> {
        match self.config.unregistered {
            UnregisteredPolicy::Fail => {
                tracing::error!(%variant, "no extractor registered");
                Err(DispatchError::UnregisteredVariant(variant))
            }
            UnregisteredPolicy::Fallback => {
                tracing::warn!(%variant, "no extractor registered, emitting fallback payload");
                let mut out = PayloadBuilder::new(self.config.state_encoding);
                out.put(keys::UNREGISTERED_VARIANT, variant.name());
                Ok(out.finish())
            }
        }
    }
}

impl std::fmt::Debug for DispatchRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchRegistry")
            .field("variants", &self.variants())
            .field("state", &self.state())
            .field("config", &self.config)
            .finish()
    }
}
