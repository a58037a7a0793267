use std::ops::Deref;
use std::sync::Arc;

pub trait Dispatcher: Send {
    type Action;

    fn dispatch(&self, action: Self::Action);
}

/// Type-erased dispatcher. Middleware chains are built out of these: each
/// link receives the link below it as an `AnyDispatcher` and decides whether
/// to forward the action.
pub struct AnyDispatcher<Action: Send + 'static> {
    value: Box<dyn Dispatcher<Action = Action> + Sync>,
}

impl<Action: Send> AnyDispatcher<Action> {
    pub fn new(value: Box<dyn Dispatcher<Action = Action> + Sync>) -> Self {
        Self { value }
    }
}

impl<Action: Send> Dispatcher for AnyDispatcher<Action> {
    type Action = Action;

    fn dispatch(&self, action: Action) {
        self.value.dispatch(action)
    }
}

impl<T> Dispatcher for Arc<T>
where
    T: Dispatcher + Sync,
{
    type Action = T::Action;

    fn dispatch(&self, action: Self::Action) {
        self.deref().dispatch(action);
    }
}
