use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::dispatcher::{AnyDispatcher, Dispatcher};
use crate::listener::{Listener, Subscription};
use crate::reducer::{BoxReducer, Reducer};

/// Owns the mutable heart of a store: the current state, the current
/// reducer, the listener list, and the enhanced dispatch chain if one has
/// been installed. `Store` is a cheap handle around this.
pub struct StoreEngine<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    state: Mutex<State>,
    reducer: Mutex<BoxReducer<State, Action>>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    enhanced_dispatch: Mutex<Option<Arc<AnyDispatcher<Action>>>>,
}

impl<State, Action> StoreEngine<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    pub fn new(state: State, reducer: impl Reducer<State, Action> + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(state),
            reducer: Mutex::new(Box::new(reducer)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            enhanced_dispatch: Mutex::new(None),
        }
    }

    pub fn state(&self) -> State {
        self.state.lock().clone()
    }

    /// Entry point for actions: routes through the installed chain when one
    /// is present, otherwise straight to [`StoreEngine::raw_dispatch`].
    pub fn dispatch(&self, action: Action) {
        let chain = self.enhanced_dispatch.lock().clone();
        match chain {
            Some(chain) => chain.dispatch(action),
            None => self.raw_dispatch(action),
        }
    }

    /// Reduce, replace, notify. No lock is held while listeners run, so a
    /// listener may freely dispatch, subscribe, or unsubscribe.
    pub fn raw_dispatch(&self, action: Action) {
        log::debug!("dispatching {:?}", action);
        {
            let reducer = self.reducer.lock();
            let mut state = self.state.lock();
            let next = reducer.reduce(&state, &action);
            *state = next;
        }
        // Snapshot before notifying: listeners added or removed by a
        // callback only affect future dispatches, never this pass.
        let snapshot = self.listeners.lock().clone();
        for listener in &snapshot {
            listener.call();
        }
    }

    pub fn subscribe(&self, listener: Listener) -> Subscription {
        {
            let mut listeners = self.listeners.lock();
            if !listeners.iter().any(|registered| registered.is(&listener)) {
                listeners.push(listener.clone());
            }
        }
        Subscription::new(Arc::downgrade(&self.listeners), listener)
    }

    pub fn replace_reducer(
        &self,
        next_reducer: impl Reducer<State, Action> + Send + Sync + 'static,
    ) {
        *self.reducer.lock() = Box::new(next_reducer);
    }

    /// Swaps the dispatch entry point: `wrap` receives the current effective
    /// dispatch and whatever it returns handles every action from now on.
    pub fn wrap_dispatch<F>(self: Arc<Self>, wrap: F)
    where
        F: FnOnce(AnyDispatcher<Action>) -> AnyDispatcher<Action>,
    {
        let current = match self.enhanced_dispatch.lock().take() {
            Some(chain) => AnyDispatcher::new(Box::new(chain)),
            None => AnyDispatcher::new(Box::new(RawDispatcher {
                engine: Arc::downgrade(&self),
            })),
        };
        let wrapped = wrap(current);
        *self.enhanced_dispatch.lock() = Some(Arc::new(wrapped));
    }
}

/// Innermost link of every dispatch chain: the engine's own
/// reduce-and-notify step. Holds the engine weakly since the chain lives
/// inside it.
struct RawDispatcher<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    engine: Weak<StoreEngine<State, Action>>,
}

impl<State, Action> Dispatcher for RawDispatcher<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    type Action = Action;

    fn dispatch(&self, action: Action) {
        // Only reachable from a dispatch already running on the engine.
        let engine = self
            .engine
            .upgrade()
            .expect("dispatch chain outlived its store engine");
        engine.raw_dispatch(action);
    }
}
