use crate::event::GestureEvent;
use crate::gesture::{GestureVariant, ViewTag};
use std::collections::HashMap;

/// Downstream consumer of extracted gesture events (a bridge, a recorder, a logger).
pub trait EventSink: Send {
    fn on_event(&mut self, event: &GestureEvent);
}

/// Determines which events a sink wants to receive.
#[derive(Debug, Clone, Copy)]
pub enum EventFilter {
    All,
    /// Pan, pinch and rotation.
    Continuous,
    /// Everything that is not continuous.
    Discrete,
    Variant(GestureVariant),
    Custom(fn(&GestureEvent) -> bool),
}

impl EventFilter {
    pub fn accepts(&self, event: &GestureEvent) -> bool {
        match *self {
            EventFilter::All => true,
            EventFilter::Continuous => event.variant.is_continuous(),
            EventFilter::Discrete => !event.variant.is_continuous(),
            EventFilter::Variant(v) => event.variant == v,
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Sink with its filter and control flags.
struct SinkEntry {
    sink: Box<dyn EventSink>,
    enabled: bool,
    filter: EventFilter,
    view: Option<ViewTag>,
}

/// Fans extracted events out to registered sinks.
#[derive(Default)]
pub struct GestureEventBus {
    next_id: u64,
    sinks: HashMap<u64, SinkEntry>,
}

impl GestureEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a sink; `view` restricts it to events targeting that view.
    pub fn add_sink(
        &mut self,
        sink: impl EventSink + 'static,
        filter: EventFilter,
        view: Option<ViewTag>,
    ) -> u64 {
        let id = self.next_id;
        self.sinks.insert(
            id,
            SinkEntry {
                sink: Box::new(sink),
                enabled: true,
                filter,
                view,
            },
        );
        self.next_id += 1;
        id
    }

    /// Enables a previously registered sink.
    pub fn enable(&mut self, id: u64) {
        if let Some(entry) = self.sinks.get_mut(&id) {
            entry.enabled = true;
        }
    }

    /// Disables (mutes) a sink without removing it.
    pub fn disable(&mut self, id: u64) {
        if let Some(entry) = self.sinks.get_mut(&id) {
            entry.enabled = false;
        }
    }

    /// Unregisters a sink entirely. Returns `false` if `id` was unknown.
    pub fn remove_sink(&mut self, id: u64) -> bool {
        self.sinks.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Delivers one event to all active and matching sinks.
    pub fn emit(&mut self, event: &GestureEvent) {
        for entry in self.sinks.values_mut() {
            if !entry.enabled {
                continue;
            }

            if let Some(view) = entry.view {
                if event.view() != view {
                    continue;
                }
            }

            if entry.filter.accepts(event) {
                entry.sink.on_event(event);
            }
        }
    }

    /// Delivers a batch of events, in order.
    pub fn emit_all(&mut self, events: &[GestureEvent]) {
        for event in events {
            self.emit(event);
        }
    }
}
