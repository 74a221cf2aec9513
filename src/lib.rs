//! pinchpoint — gesture event-data extraction.
//!
//! Turns recognized gesture handlers into generic, ordered key-value payloads
//! for a cross-boundary event channel, without the dispatch layer knowing
//! anything about individual gesture kinds.
//!
//! - [`gesture`] — handler snapshots and the closed [`GestureVariant`] set
//! - [`extractor`] / [`extractors`] — the extraction contract and one
//!   implementation per variant
//! - [`registry`] — variant-to-extractor bindings and `dispatch`
//! - [`manager`] / [`eventbus`] — polling sources and fanning events out

pub mod config;
pub mod error;
pub mod event;
pub mod eventbus;
pub mod extractor;
pub mod extractors;
pub mod gesture;
pub mod manager;
pub mod payload;
pub mod registry;
pub mod sinks;
pub mod source;

pub use config::*;
pub use error::*;
pub use event::*;
pub use eventbus::*;
pub use extractor::*;
pub use extractors::{
    FlingExtractor, ForceTouchExtractor, LongPressExtractor, NativeViewExtractor, PanExtractor,
    PinchExtractor, RotationExtractor, TapExtractor,
};
pub use gesture::*;
pub use manager::*;
pub use payload::*;
pub use registry::*;
pub use sinks::*;
pub use source::*;
