//! Holds the current snapshot, runs actions through the reducer and tells
//! observers about every committed transition.

use crate::action::Action;
use crate::reducer::reduce;
use crate::state::{AppState, Snapshot};
use crate::task::TaskId;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

type Observer = Rc<dyn Fn(&Snapshot)>;

struct StoreInner {
    state: RefCell<Snapshot>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_subscription: Cell<u64>,
}

/// Single-threaded state container.
///
/// Cloning a `Store` yields another handle to the same state. Separate
/// `Store::new()` calls are fully independent.
#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

/// Handle returned by [`Store::subscribe`].
#[derive(Clone)]
pub struct Subscription {
    store: Weak<StoreInner>,
    id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Store {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("observers", &self.inner.observers.borrow().len())
            .finish()
    }
}

impl Store {
    /// Creates a store holding an empty task list and the `ALL` filter.
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    /// Creates a store that starts from `state` instead of the empty list.
    ///
    /// [`Store::add_task`] keeps assigning ids as task count plus one, so the
    /// seeded tasks must be numbered `1..=n` in order. Any other numbering can
    /// make a later `add_task` reuse an id that is already taken.
    pub fn with_state(state: AppState) -> Self {
        Store {
            inner: Rc::new(StoreInner {
                state: RefCell::new(Rc::new(state)),
                observers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
            }),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> Snapshot {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Applies `action`, commits the result and notifies every observer in
    /// subscription order before returning.
    pub fn dispatch(&self, action: Action) {
        if let Action::Unrecognized { kind, payload } = &action {
            warn!(%kind, %payload, "ignoring unrecognized action");
        } else {
            debug!(?action, "dispatching action");
        }

        let next = reduce(&self.state(), &action);
        *self.inner.state.borrow_mut() = next;

        // Observers may subscribe, unsubscribe or dispatch while being notified.
        // A nested dispatch commits a newer state, so each observer reads the
        // state at the moment it runs rather than the one computed above.
        let observers: Vec<Observer> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();
        for observer in observers {
            trace!(kind = action.kind(), "notifying observer");
            let current = self.state();
            (*observer)(&current);
        }
    }

    /// Adds a not-yet-done task and returns its id.
    ///
    /// The id is the task count plus one (see [`AppState::next_task_id`]),
    /// which is unique as long as tasks are never removed and any seeded state
    /// was numbered from 1 (see [`Store::with_state`]).
    pub fn add_task(&self, description: impl Into<String>) -> TaskId {
        let id = self.state().next_task_id();
        self.dispatch(Action::add_task(id, description, false));
        id
    }

    /// Registers `observer` to run after every dispatch.
    pub fn subscribe(&self, observer: impl Fn(&Snapshot) + 'static) -> Subscription {
        let id = self.inner.next_subscription.get();
        self.inner.next_subscription.set(id + 1);
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));
        debug!(subscription = id, "observer subscribed");

        Subscription {
            store: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of observers currently subscribed.
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

impl Subscription {
    /// Stops notifications. Calling it again, or after the store is gone, does nothing.
    pub fn unsubscribe(&self) {
        let Some(store) = self.store.upgrade() else {
            return;
        };
        let mut observers = store.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(id, _)| *id != self.id);
        if observers.len() != before {
            debug!(subscription = self.id, "observer unsubscribed");
        }
    }
}
