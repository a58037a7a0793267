use std::sync::{Arc, Weak};

use crate::dispatcher::{AnyDispatcher, Dispatcher};
use crate::engine::StoreEngine;
use crate::enhancer::Enhancer;
use crate::store::Store;

/// Store accessors handed to a middleware: read the current state, or feed
/// a brand-new action back through the whole chain.
///
/// Holds the engine weakly; the chain lives inside the store, so a strong
/// reference here would keep the store alive forever.
pub struct MiddlewareApi<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    engine: Weak<StoreEngine<State, Action>>,
}

impl<State, Action> MiddlewareApi<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    pub(crate) fn new(engine: Weak<StoreEngine<State, Action>>) -> Self {
        Self { engine }
    }

    /// A copy of the current state.
    pub fn get_state(&self) -> State {
        self.engine().state()
    }

    /// Dispatches `action` from the outside: it travels the entire chain
    /// again, this middleware included.
    pub fn dispatch(&self, action: Action) {
        self.engine().dispatch(action)
    }

    fn engine(&self) -> Arc<StoreEngine<State, Action>> {
        // Only reachable while its store is processing an action.
        self.engine
            .upgrade()
            .expect("middleware accessors used after their store was dropped")
    }
}

/// Intercepts every action between `dispatch` and the reducer.
///
/// An implementation chooses whether to pass the action on via
/// `next.dispatch(action)`, possibly after consulting `api`; not forwarding
/// halts the action. Closures of the matching shape implement this trait
/// directly.
pub trait Middleware<State, Action>: Send + Sync
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    fn handle(
        &self,
        api: &MiddlewareApi<State, Action>,
        next: &AnyDispatcher<Action>,
        action: Action,
    );
}

impl<State, Action, F> Middleware<State, Action> for F
where
    F: Fn(&MiddlewareApi<State, Action>, &AnyDispatcher<Action>, Action) + Send + Sync,
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    fn handle(
        &self,
        api: &MiddlewareApi<State, Action>,
        next: &AnyDispatcher<Action>,
        action: Action,
    ) {
        self(api, next, action)
    }
}

pub type BoxMiddleware<State, Action> = Box<dyn Middleware<State, Action>>;

/// One link of an installed chain: a middleware plus the dispatcher it
/// forwards to.
struct MiddlewareLink<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    middleware: BoxMiddleware<State, Action>,
    api: MiddlewareApi<State, Action>,
    next: AnyDispatcher<Action>,
}

impl<State, Action> Dispatcher for MiddlewareLink<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    type Action = Action;

    fn dispatch(&self, action: Action) {
        self.middleware.handle(&self.api, &self.next, action)
    }
}

/// Enhancer that installs `middlewares` around dispatch, in declaration
/// order: the first middleware sees every action first, and the reducer runs
/// only once every middleware has forwarded.
pub fn apply_middleware<State, Action>(
    middlewares: Vec<BoxMiddleware<State, Action>>,
) -> Enhancer<State, Action>
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    Box::new(move |store: Store<State, Action>| {
        log::debug!("installing {} middleware around dispatch", middlewares.len());
        let engine = Arc::downgrade(store.engine());
        store.wrap_dispatch(move |dispatch| {
            let mut next = dispatch;
            for middleware in middlewares.into_iter().rev() {
                next = AnyDispatcher::new(Box::new(MiddlewareLink {
                    middleware,
                    api: MiddlewareApi::new(engine.clone()),
                    next,
                }));
            }
            next
        });
        store
    })
}

/// Middleware that logs every action passing through and forwards it
/// unchanged.
pub struct LoggingMiddleware;

impl<State, Action> Middleware<State, Action> for LoggingMiddleware
where
    Action: std::fmt::Debug + Send + 'static,
    State: Clone + Send + 'static,
{
    fn handle(
        &self,
        _api: &MiddlewareApi<State, Action>,
        next: &AnyDispatcher<Action>,
        action: Action,
    ) {
        log::debug!("passing along {:?}", action);
        next.dispatch(action)
    }
}
