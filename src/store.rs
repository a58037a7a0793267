use std::sync::Arc;

use crate::dispatcher::{AnyDispatcher, Dispatcher};
use crate::engine::StoreEngine;
use crate::enhancer::Enhancer;
use crate::listener::{Listener, Subscription};
use crate::reducer::Reducer;

/// The state container: one current state, one current reducer, and an
/// ordered list of listeners notified after every dispatch.
///
/// A `Store` is a cheap cloneable handle; clones address the same container.
pub struct Store<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    engine: Arc<StoreEngine<State, Action>>,
}

impl<State, Action> Store<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    /// Store starting from `State::default()`, the empty record.
    pub fn new(reducer: impl Reducer<State, Action> + Send + Sync + 'static) -> Self
    where
        State: Default,
    {
        Self::with_state(reducer, State::default())
    }

    /// Store starting from a preloaded state.
    pub fn with_state(
        reducer: impl Reducer<State, Action> + Send + Sync + 'static,
        state: State,
    ) -> Self {
        Self {
            engine: Arc::new(StoreEngine::new(state, reducer)),
        }
    }

    /// A copy of the current state.
    pub fn get_state(&self) -> State {
        self.engine.state()
    }

    /// Runs the current reducer against `action`, replaces the state with
    /// the result, then notifies every listener registered at the start of
    /// the notification pass. With middleware installed, the action goes
    /// through the chain first.
    ///
    /// A panicking reducer propagates out of here; the state keeps its
    /// pre-dispatch value and no listener runs.
    pub fn dispatch(&self, action: Action) {
        self.engine.dispatch(action)
    }

    /// Registers `listener` unless that identity is already registered.
    /// Listeners run in registration order.
    ///
    /// Listeners are not isolated from one another: one that panics aborts
    /// the notification pass, and listeners after it are not called.
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        self.engine.subscribe(listener)
    }

    /// Swaps the reducer used by future dispatches. Does not dispatch and
    /// does not notify; the state is untouched until the next dispatch.
    pub fn replace_reducer(
        &self,
        next_reducer: impl Reducer<State, Action> + Send + Sync + 'static,
    ) {
        self.engine.replace_reducer(next_reducer)
    }

    /// The enhancer seam: replaces the dispatch entry point. `wrap` receives
    /// the current effective dispatch and returns the one to install;
    /// stacked calls nest, the later wrapper sitting outermost.
    pub fn wrap_dispatch<F>(&self, wrap: F)
    where
        F: FnOnce(AnyDispatcher<Action>) -> AnyDispatcher<Action>,
    {
        Arc::clone(&self.engine).wrap_dispatch(wrap)
    }

    pub(crate) fn engine(&self) -> &Arc<StoreEngine<State, Action>> {
        &self.engine
    }
}

/// Builds a store, preloading state when given, and hands the result to the
/// enhancer when one is supplied. With no preloaded state the store starts
/// from `State::default()`.
pub fn create_store<State, Action, R>(
    reducer: R,
    preloaded_state: Option<State>,
    enhancer: Option<Enhancer<State, Action>>,
) -> Store<State, Action>
where
    R: Reducer<State, Action> + Send + Sync + 'static,
    Action: std::fmt::Debug + Send + 'static,
    State: Default + Clone + Send + 'static,
{
    let store = match preloaded_state {
        Some(state) => Store::with_state(reducer, state),
        None => Store::new(reducer),
    };
    match enhancer {
        Some(enhancer) => enhancer(store),
        None => store,
    }
}

impl<State, Action> Clone for Store<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<State, Action> Dispatcher for Store<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    type Action = Action;

    fn dispatch(&self, action: Action) {
        self.engine.dispatch(action)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Default, Clone, PartialEq, Debug)]
    struct State {
        counter: i32,
    }

    #[derive(Debug)]
    enum Action {
        Increment,
        Unknown,
    }

    fn counting(state: &State, action: &Action) -> State {
        match action {
            Action::Increment => State {
                counter: state.counter + 1,
            },
            Action::Unknown => state.clone(),
        }
    }

    #[test]
    fn preloaded_state_is_the_initial_state() {
        let store = create_store(counting, Some(State { counter: 7 }), None);
        assert_eq!(store.get_state(), State { counter: 7 });
    }

    #[test]
    fn missing_preloaded_state_defaults_to_the_empty_record() {
        let store = create_store(counting, None, None);
        assert_eq!(store.get_state(), State::default());
    }

    #[test]
    fn dispatch_advances_the_counter() {
        let store = create_store(counting, Some(State { counter: 0 }), None);

        store.dispatch(Action::Increment);
        assert_eq!(store.get_state(), State { counter: 1 });

        store.dispatch(Action::Increment);
        assert_eq!(store.get_state(), State { counter: 2 });
    }

    #[test]
    fn unrecognized_action_leaves_state_unchanged() {
        let store = create_store(counting, Some(State { counter: 3 }), None);
        store.dispatch(Action::Unknown);
        assert_eq!(store.get_state(), State { counter: 3 });
    }

    #[test]
    fn replace_reducer_switches_transitions() {
        let store = create_store(counting, Some(State { counter: 0 }), None);
        store.dispatch(Action::Increment);

        store.replace_reducer(|state: &State, _action: &Action| State {
            counter: state.counter * 10,
        });

        store.dispatch(Action::Increment);
        store.dispatch(Action::Unknown);
        assert_eq!(store.get_state(), State { counter: 100 });
    }

    #[test]
    fn clones_share_the_container() {
        let store = create_store(counting, None, None);
        let clone = store.clone();
        clone.dispatch(Action::Increment);
        assert_eq!(store.get_state(), State { counter: 1 });
    }
}
