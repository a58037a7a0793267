use std::sync::{Arc, Weak};

use parking_lot::Mutex;

/// A store observer: a zero-argument callback invoked after every completed
/// dispatch.
///
/// Identity is the underlying allocation. Clones of a `Listener` share one
/// identity; subscribing the same identity twice registers it once, and
/// `Listener::new` always produces a fresh identity.
#[derive(Clone)]
pub struct Listener {
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl Listener {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            callback: Arc::new(callback),
        }
    }

    pub(crate) fn call(&self) {
        (self.callback)()
    }

    pub(crate) fn is(&self, other: &Listener) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }
}

/// Handle returned by `Store::subscribe`.
///
/// Dropping the handle leaves the registration in place; removal only ever
/// happens through [`Subscription::unsubscribe`].
pub struct Subscription {
    listeners: Weak<Mutex<Vec<Listener>>>,
    listener: Listener,
}

impl Subscription {
    pub(crate) fn new(listeners: Weak<Mutex<Vec<Listener>>>, listener: Listener) -> Self {
        Self {
            listeners,
            listener,
        }
    }

    /// Removes exactly the listener this subscription was created for.
    /// Calling it again, or after the store is gone, is a no-op.
    pub fn unsubscribe(&self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .lock()
                .retain(|registered| !registered.is(&self.listener));
        }
    }
}
