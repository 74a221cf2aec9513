//! Built-in extractors, one per [`GestureVariant`].
//!
//! Every extractor writes its kind-specific keys first, then
//! `numberOfPointers` and `state`. The full key set per kind is the
//! extractor's `KEYS` constant.
//!
//! # Sentinels
//! - `numberOfPointers` is `0` when the recognizer reports no pointer count.
//! - ForceTouch `force` is `0.0` on hardware without a pressure reading.
//!
//! Handler and view identity are not part of the payload; they travel in the
//! [`GestureEvent`](crate::GestureEvent) envelope.

mod fling;
mod force_touch;
mod long_press;
mod native_view;
mod pan;
mod pinch;
mod rotation;
mod tap;

pub use fling::FlingExtractor;
pub use force_touch::ForceTouchExtractor;
pub use long_press::LongPressExtractor;
pub use native_view::NativeViewExtractor;
pub use pan::PanExtractor;
pub use pinch::PinchExtractor;
pub use rotation::RotationExtractor;
pub use tap::TapExtractor;

use crate::gesture::{GestureVariant, HandlerCommon, PointerPosition};
use crate::payload::PayloadBuilder;
use crate::registry::DispatchRegistry;
use crate::RegistryError;

/// Well-known payload keys.
pub mod keys {
    pub const X: &str = "x";
    pub const Y: &str = "y";
    pub const ABSOLUTE_X: &str = "absoluteX";
    pub const ABSOLUTE_Y: &str = "absoluteY";
    pub const NUMBER_OF_POINTERS: &str = "numberOfPointers";
    pub const STATE: &str = crate::payload::STATE_KEY;

    pub const TRANSLATION_X: &str = "translationX";
    pub const TRANSLATION_Y: &str = "translationY";
    pub const VELOCITY_X: &str = "velocityX";
    pub const VELOCITY_Y: &str = "velocityY";

    pub const SCALE: &str = "scale";
    pub const FOCAL_X: &str = "focalX";
    pub const FOCAL_Y: &str = "focalY";
    pub const VELOCITY: &str = "velocity";

    pub const ROTATION: &str = "rotation";
    pub const ANCHOR_X: &str = "anchorX";
    pub const ANCHOR_Y: &str = "anchorY";

    pub const DURATION: &str = "duration";
    pub const FORCE: &str = "force";
    pub const POINTER_INSIDE: &str = "pointerInside";

    /// Diagnostic marker written by the unregistered-variant fallback.
    pub const UNREGISTERED_VARIANT: &str = "unregisteredVariant";
}

/// `x`, `y`, `absoluteX`, `absoluteY`.
fn put_position(position: &PointerPosition, out: &mut PayloadBuilder) {
    out.put(keys::X, position.x)
        .put(keys::Y, position.y)
        .put(keys::ABSOLUTE_X, position.absolute_x)
        .put(keys::ABSOLUTE_Y, position.absolute_y);
}

/// `numberOfPointers`, `state`.
fn put_common(common: &HandlerCommon, out: &mut PayloadBuilder) {
    out.put(
        keys::NUMBER_OF_POINTERS,
        common.number_of_pointers.unwrap_or(0),
    )
    .put_state(common.state);
}

/// Install the built-in extractor for `variant`.
pub fn register_builtin(
    registry: &mut DispatchRegistry,
    variant: GestureVariant,
) -> Result<(), RegistryError> {
    match variant {
        GestureVariant::Tap => registry.register(variant, TapExtractor),
        GestureVariant::Pan => registry.register(variant, PanExtractor),
        GestureVariant::Pinch => registry.register(variant, PinchExtractor),
        GestureVariant::Rotation => registry.register(variant, RotationExtractor),
        GestureVariant::Fling => registry.register(variant, FlingExtractor),
        GestureVariant::LongPress => registry.register(variant, LongPressExtractor),
        GestureVariant::ForceTouch => registry.register(variant, ForceTouchExtractor),
        GestureVariant::NativeView => registry.register(variant, NativeViewExtractor),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::gesture::{GestureState, HandlerCommon, HandlerTag, PointerPosition, ViewTag};
    use crate::payload::{Payload, PayloadBuilder, StateEncoding};
    use crate::EventDataExtractor;

    pub fn common(state: GestureState, pointers: Option<u32>) -> HandlerCommon {
        HandlerCommon {
            tag: HandlerTag(7),
            view: ViewTag(42),
            state,
            number_of_pointers: pointers,
            position: PointerPosition {
                x: 10.0,
                y: 20.0,
                absolute_x: 110.0,
                absolute_y: 220.0,
            },
        }
    }

    pub fn run<E: EventDataExtractor>(
        extractor: &E,
        common: &HandlerCommon,
        gesture: &E::Gesture,
    ) -> Payload {
        let mut out = PayloadBuilder::new(StateEncoding::Name);
        extractor.extract(common, gesture, &mut out);
        out.finish()
    }

    pub fn assert_keys<E: EventDataExtractor>(payload: &Payload) {
        assert_eq!(payload.keys().collect::<Vec<_>>(), E::KEYS);
    }
}
