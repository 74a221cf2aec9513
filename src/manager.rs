use crate::error::DispatchError;
use crate::event::GestureEvent;
use crate::eventbus::GestureEventBus;
use crate::gesture::GestureHandler;
use crate::registry::DispatchRegistry;
use crate::source::GestureSource;
use std::sync::Arc;

/// Drives sources through the registry and out to the bus.
///
/// For every handler a source reports: dispatch, wrap in a [`GestureEvent`],
/// emit to the bus, and return the event to the caller.
pub struct GestureManager {
    registry: Arc<DispatchRegistry>,
    sources: Vec<Box<dyn GestureSource>>,
    bus: GestureEventBus,
}

impl GestureManager {
    /// Seals `registry`; nothing may be registered once traffic starts.
    pub fn new(registry: Arc<DispatchRegistry>) -> Self {
        registry.seal();
        Self {
            registry,
            sources: Vec::new(),
            bus: GestureEventBus::new(),
        }
    }

    pub fn add_source<S: GestureSource + 'static>(&mut self, source: S) {
        tracing::debug!(id = source.id(), name = source.name(), "added gesture source");
        self.sources.push(Box::new(source));
    }

    pub fn registry(&self) -> &Arc<DispatchRegistry> {
        &self.registry
    }

    pub fn bus(&self) -> &GestureEventBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut GestureEventBus {
        &mut self.bus
    }

    /// Extract one handler and emit it.
    pub fn emit(&mut self, handler: &GestureHandler) -> Result<GestureEvent, DispatchError> {
        let payload = self.registry.dispatch(handler)?;
        let event = GestureEvent::new(handler, payload);
        self.bus.emit(&event);
        Ok(event)
    }

    /// Poll every source and emit each reported handler.
    ///
    /// A dispatch error does not stop the poll: the failing handler is kept
    /// in [`PollReport::failed`] and the remaining handlers are still emitted.
    pub fn poll_all(&mut self) -> PollReport {
        let mut handlers = Vec::new();
        for source in self.sources.iter_mut() {
            handlers.extend(source.poll());
        }

        let mut report = PollReport {
            events: Vec::with_capacity(handlers.len()),
            failed: Vec::new(),
        };
        for handler in handlers {
            match self.emit(&handler) {
                Ok(event) => report.events.push(event),
                Err(err) => report.failed.push((handler, err)),
            }
        }
        report
    }
}

/// Outcome of [`GestureManager::poll_all`].
#[derive(Debug, Default)]
pub struct PollReport {
    /// Events emitted to the bus, in report order.
    pub events: Vec<GestureEvent>,
    /// Handlers that could not be dispatched, with the reason.
    pub failed: Vec<(GestureHandler, DispatchError)>,
}

impl PollReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
