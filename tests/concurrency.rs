//! Sealed registries are dispatched from many threads at once.

use pinchpoint::{DispatchRegistry, GestureState, RegistryConfig};
use std::sync::Arc;

mod common;

#[test]
fn concurrent_dispatch_matches_sequential() {
    let registry = Arc::new(DispatchRegistry::builtin(RegistryConfig::default()).unwrap());
    registry.seal();

    let handlers = common::one_of_each(GestureState::Active);
    let expected: Vec<_> = handlers
        .iter()
        .map(|h| registry.dispatch(h).unwrap())
        .collect();

    std::thread::scope(|s| {
        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            let handlers = &handlers;
            let expected = &expected;
            s.spawn(move || {
                for _ in 0..200 {
                    for (h, want) in handlers.iter().zip(expected) {
                        assert_eq!(&registry.dispatch(h).unwrap(), want);
                    }
                }
            });
        }
    });
}
