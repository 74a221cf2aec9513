//! Outbound gesture events.
//!
//! A [`GestureEvent`] is what leaves pinchpoint: the extracted [`Payload`]
//! wrapped with the identity of the handler and view it belongs to. The
//! transport that carries it across the runtime boundary only needs the
//! serialized form:
//!
//! ```json
//! {"handlerTag":7,"viewTag":42,"variant":"pan","payload":{"translationX":12.5, ...}}
//! ```
//!
//! The capture instant is kept for ordering and delta timing within a run and
//! is not serialized.

use crate::gesture::{GestureHandler, GestureVariant, HandlerTag, ViewTag};
use crate::payload::Payload;
use serde::Serialize;
use std::time::Instant;

/// Timestamped, fully extracted event for one handler state change.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureEvent {
    /// Capture time (monotonic).
    #[serde(skip)]
    pub at: Instant,
    pub handler_tag: u32,
    pub view_tag: u32,
    pub variant: GestureVariant,
    pub payload: Payload,
}

impl GestureEvent {
    /// Wrap `payload` with `handler`'s identity, stamped now.
    pub fn new(handler: &GestureHandler, payload: Payload) -> Self {
        Self {
            at: Instant::now(),
            handler_tag: handler.tag().0,
            view_tag: handler.view().0,
            variant: handler.variant(),
            payload,
        }
    }

    #[inline]
    pub fn handler(&self) -> HandlerTag {
        HandlerTag(self.handler_tag)
    }

    #[inline]
    pub fn view(&self) -> ViewTag {
        ViewTag(self.view_tag)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "handlerTag": self.handler_tag,
            "viewTag": self.view_tag,
            "variant": self.variant,
            "payload": self.payload.to_json(),
        })
    }
}
