//! Gesture handler state as handed over by the recognition subsystem.
//!
//! A [`GestureHandler`] is a read-only snapshot of one recognized gesture: the
//! fields every handler has ([`HandlerCommon`]) plus the per-kind data carried
//! by [`GestureKind`]. Recognizers produce these; pinchpoint only reads them.
//!
//! ## Coordinate conventions
//! - `x`/`y` are relative to the handler's target view.
//! - `absolute_x`/`absolute_y` are relative to the root view.
//! - Translations and focal/anchor points use the view-relative space.
//!
//! ## Well-formedness
//! Handlers are assumed internally consistent by the time they reach an
//! extractor: the [`GestureKind`] matches the recognizer that produced it and
//! every required field is populated. The few fields that may legitimately be
//! missing are `Option`s and each extractor documents its sentinel for them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Closed set of gesture kinds.
///
/// Adding a kind means adding a tag here, a data struct, and an extractor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GestureVariant {
    Tap,
    Pan,
    Pinch,
    Rotation,
    Fling,
    LongPress,
    ForceTouch,
    NativeView,
}

impl GestureVariant {
    /// Every variant, in declaration order.
    pub const ALL: [GestureVariant; 8] = [
        GestureVariant::Tap,
        GestureVariant::Pan,
        GestureVariant::Pinch,
        GestureVariant::Rotation,
        GestureVariant::Fling,
        GestureVariant::LongPress,
        GestureVariant::ForceTouch,
        GestureVariant::NativeView,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GestureVariant::Tap => "Tap",
            GestureVariant::Pan => "Pan",
            GestureVariant::Pinch => "Pinch",
            GestureVariant::Rotation => "Rotation",
            GestureVariant::Fling => "Fling",
            GestureVariant::LongPress => "LongPress",
            GestureVariant::ForceTouch => "ForceTouch",
            GestureVariant::NativeView => "NativeView",
        }
    }

    /// Continuous gestures report a stream of `Active` updates (pan, pinch, rotation).
    pub fn is_continuous(self) -> bool {
        matches!(
            self,
            GestureVariant::Pan | GestureVariant::Pinch | GestureVariant::Rotation
        )
    }
}

impl fmt::Display for GestureVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lifecycle phase of a handler.
///
/// Numeric codes follow the order below (`Undetermined = 0` .. `End = 5`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Undetermined,
    Failed,
    Began,
    Cancelled,
    Active,
    End,
}

impl GestureState {
    pub fn name(self) -> &'static str {
        match self {
            GestureState::Undetermined => "Undetermined",
            GestureState::Failed => "Failed",
            GestureState::Began => "Began",
            GestureState::Cancelled => "Cancelled",
            GestureState::Active => "Active",
            GestureState::End => "End",
        }
    }

    pub fn code(self) -> i64 {
        match self {
            GestureState::Undetermined => 0,
            GestureState::Failed => 1,
            GestureState::Began => 2,
            GestureState::Cancelled => 3,
            GestureState::Active => 4,
            GestureState::End => 5,
        }
    }

    /// `true` once the handler can no longer change state.
    pub fn is_finished(self) -> bool {
        matches!(
            self,
            GestureState::Failed | GestureState::Cancelled | GestureState::End
        )
    }
}

impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identity of a handler instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandlerTag(pub u32);

/// Identity of the view a handler is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewTag(pub u32);

/// Last known pointer position, in both coordinate spaces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
    pub absolute_x: f64,
    pub absolute_y: f64,
}

/// Fields shared by every handler kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandlerCommon {
    pub tag: HandlerTag,
    pub view: ViewTag,
    pub state: GestureState,
    /// `None` when the recognizer does not track pointers (e.g. before the
    /// first touch lands).
    pub number_of_pointers: Option<u32>,
    pub position: PointerPosition,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TapData;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanData {
    pub translation_x: f64,
    pub translation_y: f64,
    /// Points per second.
    pub velocity_x: f64,
    /// Points per second.
    pub velocity_y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchData {
    /// Ratio of the current pointer span to the initial one.
    pub scale: f64,
    pub focal_x: f64,
    pub focal_y: f64,
    /// Scale change per second.
    pub velocity: f64,
}

impl Default for PinchData {
    fn default() -> Self {
        Self {
            scale: 1.0,
            focal_x: 0.0,
            focal_y: 0.0,
            velocity: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationData {
    /// Radians, clockwise positive.
    pub rotation: f64,
    pub anchor_x: f64,
    pub anchor_y: f64,
    /// Radians per second.
    pub velocity: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlingData;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LongPressData {
    /// Time the pointer has been held down.
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceTouchData {
    /// Normalized pressure in `[0.0, 1.0]`; `None` on hardware without a
    /// pressure sensor.
    pub force: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NativeViewData {
    pub pointer_inside: bool,
}

/// Per-kind handler data.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureKind {
    Tap(TapData),
    Pan(PanData),
    Pinch(PinchData),
    Rotation(RotationData),
    Fling(FlingData),
    LongPress(LongPressData),
    ForceTouch(ForceTouchData),
    NativeView(NativeViewData),
}

impl GestureKind {
    pub fn variant(&self) -> GestureVariant {
        match self {
            GestureKind::Tap(_) => GestureVariant::Tap,
            GestureKind::Pan(_) => GestureVariant::Pan,
            GestureKind::Pinch(_) => GestureVariant::Pinch,
            GestureKind::Rotation(_) => GestureVariant::Rotation,
            GestureKind::Fling(_) => GestureVariant::Fling,
            GestureKind::LongPress(_) => GestureVariant::LongPress,
            GestureKind::ForceTouch(_) => GestureVariant::ForceTouch,
            GestureKind::NativeView(_) => GestureVariant::NativeView,
        }
    }
}

/// Snapshot of one recognized gesture, as reported on a state change.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureHandler {
    pub common: HandlerCommon,
    pub kind: GestureKind,
}

impl GestureHandler {
    pub fn new(common: HandlerCommon, kind: GestureKind) -> Self {
        Self { common, kind }
    }

    #[inline]
    pub fn variant(&self) -> GestureVariant {
        self.kind.variant()
    }

    #[inline]
    pub fn tag(&self) -> HandlerTag {
        self.common.tag
    }

    #[inline]
    pub fn view(&self) -> ViewTag {
        self.common.view
    }

    #[inline]
    pub fn state(&self) -> GestureState {
        self.common.state
    }
}

/// Implemented by each per-kind data struct.
///
/// Ties a data type to its [`GestureVariant`] tag so typed extractors can be
/// checked against the variant they are registered for.
pub trait GestureData: Send + Sync + 'static {
    const VARIANT: GestureVariant;

    /// Borrow `Self` out of `kind`, or `None` when `kind` is another variant.
    fn project(kind: &GestureKind) -> Option<&Self>;
}

macro_rules! gesture_data {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl GestureData for $ty {
                const VARIANT: GestureVariant = GestureVariant::$variant;

                fn project(kind: &GestureKind) -> Option<&Self> {
                    match kind {
                        GestureKind::$variant(data) => Some(data),
                        _ => None,
                    }
                }
            }

            impl From<$ty> for GestureKind {
                fn from(data: $ty) -> Self {
                    GestureKind::$variant(data)
                }
            }
        )*
    };
}

gesture_data! {
    TapData => Tap,
    PanData => Pan,
    PinchData => Pinch,
    RotationData => Rotation,
    FlingData => Fling,
    LongPressData => LongPress,
    ForceTouchData => ForceTouch,
    NativeViewData => NativeView,
}
