//! The event-data extraction contract.
//!
//! An [`EventDataExtractor`] reads one gesture kind and writes a fixed set of
//! keys ([`EventDataExtractor::KEYS`]) into a [`PayloadBuilder`]. It only
//! reads the handler and touches nothing but `out`, so the same handler
//! always produces the same payload.
//!
//! The registry stores extractors behind [`ErasedExtractor`], which checks the
//! handler's kind before calling the typed `extract`.

use crate::error::DispatchError;
use crate::gesture::{GestureData, GestureHandler, GestureVariant, HandlerCommon};
use crate::payload::PayloadBuilder;

/// Projects one gesture kind into a payload.
pub trait EventDataExtractor: Send + Sync + 'static {
    /// The data struct this extractor reads.
    type Gesture: GestureData;

    /// Keys written by every call, in write order.
    const KEYS: &'static [&'static str];

    fn extract(&self, common: &HandlerCommon, gesture: &Self::Gesture, out: &mut PayloadBuilder);
}

/// Object-safe form of [`EventDataExtractor`].
pub trait ErasedExtractor: Send + Sync {
    /// The variant the underlying extractor reads.
    fn variant(&self) -> GestureVariant;

    fn keys(&self) -> &'static [&'static str];

    fn extract_handler(
        &self,
        handler: &GestureHandler,
        out: &mut PayloadBuilder,
    ) -> Result<(), DispatchError>;
}

impl<E: EventDataExtractor> ErasedExtractor for E {
    fn variant(&self) -> GestureVariant {
        <E::Gesture as GestureData>::VARIANT
    }

    fn keys(&self) -> &'static [&'static str] {
        E::KEYS
    }

    fn extract_handler(
        &self,
        handler: &GestureHandler,
        out: &mut PayloadBuilder,
    ) -> Result<(), DispatchError> {
        let found = handler.variant();
        let gesture = <E::Gesture as GestureData>::project(&handler.kind).ok_or(
            DispatchError::TypeMismatch {
                expected: self.variant(),
                found,
            },
        )?;
        self.extract(&handler.common, gesture, out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::PanExtractor;
    use crate::gesture::TapData;
    use crate::payload::StateEncoding;

    #[test]
    fn wrong_kind_is_rejected_without_writing() {
        let tap = GestureHandler::new(HandlerCommon::default(), TapData.into());
        let mut out = PayloadBuilder::new(StateEncoding::Name);

        assert_eq!(
            PanExtractor.extract_handler(&tap, &mut out),
            Err(DispatchError::TypeMismatch {
                expected: GestureVariant::Pan,
                found: GestureVariant::Tap,
            })
        );
        assert!(out.finish().is_empty());
    }
}
