//! Bridges the task store into Dioxus.
//!
//! The root component owns the [`Store`] and hands it down through context.
//! A single subscription mirrors every committed snapshot into a signal, so
//! components re-render whenever the store changes.

use dioxus::prelude::*;
use std::rc::Rc;
use tasklist_core::{Snapshot, Store};

/// Provides the store to the component tree and returns it together with a
/// signal that tracks its snapshots.
pub fn use_store_provider(init: impl FnOnce() -> Store) -> (Store, Signal<Snapshot>) {
    let store = use_context_provider(init);
    let snapshot = use_snapshot(&store);
    (store, snapshot)
}

fn use_snapshot(store: &Store) -> Signal<Snapshot> {
    let snapshot = use_signal(|| store.state());
    let subscription = use_hook(|| {
        store.subscribe(move |state| {
            let mut snapshot = snapshot;
            snapshot.set(Rc::clone(state));
        })
    });
    use_drop(move || subscription.unsubscribe());
    snapshot
}
