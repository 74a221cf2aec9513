//! Sources through the manager to bus sinks.

use pinchpoint::{
    DispatchRegistry, EventFilter, EventSink, FilteredSink, GestureEvent, GestureManager,
    GestureState, GestureVariant, LogSink, RegistryConfig, ScriptedSource,
};
use std::sync::{Arc, Mutex};

mod common;

struct Collect(Arc<Mutex<Vec<GestureEvent>>>);

impl EventSink for Collect {
    fn on_event(&mut self, event: &GestureEvent) {
        self.0.lock().unwrap().push(event.clone());
    }
}

#[test]
fn events_reach_matching_sinks_with_identity() {
    let registry = Arc::new(DispatchRegistry::builtin(RegistryConfig::default()).unwrap());
    let mut manager = GestureManager::new(registry);

    let discrete = Arc::new(Mutex::new(Vec::new()));
    let ended_pans = Arc::new(Mutex::new(Vec::new()));
    manager.bus_mut().add_sink(LogSink::new(), EventFilter::All, None);
    manager
        .bus_mut()
        .add_sink(Collect(discrete.clone()), EventFilter::Discrete, None);
    manager.bus_mut().add_sink(
        FilteredSink::new(
            |e| e.payload.get("state") == Some(&pinchpoint::Value::Str("End".into())),
            Box::new(Collect(ended_pans.clone())),
        ),
        EventFilter::Variant(GestureVariant::Pan),
        None,
    );

    let mut src = ScriptedSource::new("scripted:touch", "Touch");
    src.feed_all(common::one_of_each(GestureState::Active));
    src.feed_all(common::one_of_each(GestureState::End));
    manager.add_source(src);

    let report = manager.poll_all();
    assert!(report.is_clean());
    assert_eq!(report.events.len(), 16);

    let discrete = discrete.lock().unwrap();
    assert_eq!(discrete.len(), 10);
    assert!(discrete.iter().all(|e| !e.variant.is_continuous()));

    let ended_pans = ended_pans.lock().unwrap();
    assert_eq!(ended_pans.len(), 1);
    assert_eq!(ended_pans[0].handler_tag, 1);
    assert_eq!(ended_pans[0].view_tag, 101);
}
