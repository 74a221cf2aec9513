//! Ready-made [`EventSink`]s.

use crate::event::GestureEvent;
use crate::eventbus::EventSink;

/// Logs every event through `tracing` at debug level.
#[derive(Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        LogSink
    }
}

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GestureEvent) {
        tracing::debug!(
            handler = event.handler_tag,
            view = event.view_tag,
            variant = %event.variant,
            payload = %event.payload.to_json(),
            "gesture event"
        );
    }
}

/// Wraps a sink and forwards only events matching a predicate.
///
/// Unlike [`EventFilter::Custom`](crate::EventFilter::Custom), which takes a
/// plain `fn` pointer, the predicate may capture state.
pub struct FilteredSink {
    predicate: Box<dyn Fn(&GestureEvent) -> bool + Send + Sync>,
    inner: Box<dyn EventSink>,
}

impl FilteredSink {
    pub fn new(
        predicate: impl Fn(&GestureEvent) -> bool + Send + Sync + 'static,
        inner: Box<dyn EventSink>,
    ) -> Self {
        Self {
            predicate: Box::new(predicate),
            inner,
        }
    }
}

impl EventSink for FilteredSink {
    fn on_event(&mut self, event: &GestureEvent) {
        if (self.predicate)(event) {
            self.inner.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureHandler, GestureState, HandlerCommon, TapData};
    use crate::payload::Payload;
    use std::sync::{Arc, Mutex};

    struct Count(Arc<Mutex<usize>>);

    impl EventSink for Count {
        fn on_event(&mut self, _event: &GestureEvent) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[test]
    fn predicate_gates_inner_sink() {
        let hits = Arc::new(Mutex::new(0));
        let wanted = 1;
        let mut sink = FilteredSink::new(
            move |e| e.handler_tag == wanted,
            Box::new(Count(hits.clone())),
        );

        for tag in [1, 2, 1] {
            let common = HandlerCommon {
                tag: crate::gesture::HandlerTag(tag),
                state: GestureState::End,
                ..Default::default()
            };
            let handler = GestureHandler::new(common, TapData.into());
            sink.on_event(&GestureEvent::new(&handler, Payload::default()));
        }

        assert_eq!(*hits.lock().unwrap(), 2);
    }
}
