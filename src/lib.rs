//! A predictable, synchronous state container: one store, pure reducers,
//! middleware, and composable enhancers.
//!
//! State changes only by dispatching actions through the current reducer;
//! subscribers are told after every change.
//!
//! ```
//! use unistate::{create_store, Listener};
//!
//! #[derive(Default, Clone, PartialEq, Debug)]
//! struct State {
//!     counter: i32,
//! }
//!
//! #[derive(Debug)]
//! enum Action {
//!     Increment,
//! }
//!
//! fn counting(state: &State, action: &Action) -> State {
//!     match action {
//!         Action::Increment => State { counter: state.counter + 1 },
//!     }
//! }
//!
//! let store = create_store(counting, None, None);
//! let subscription = store.subscribe(Listener::new(|| println!("changed")));
//! store.dispatch(Action::Increment);
//! assert_eq!(store.get_state(), State { counter: 1 });
//! subscription.unsubscribe();
//! ```

mod bind;
mod combine;
mod dispatcher;
mod engine;
mod enhancer;
mod listener;
mod middleware;
mod reducer;
mod store;

pub use bind::bind_action_creator;
pub use combine::{combine_reducers, CombinedReducer, CompositeState};
pub use dispatcher::{AnyDispatcher, Dispatcher};
pub use enhancer::{compose, Enhancer};
pub use listener::{Listener, Subscription};
pub use middleware::{
    apply_middleware, BoxMiddleware, LoggingMiddleware, Middleware, MiddlewareApi,
};
pub use reducer::{BoxReducer, Reducer};
pub use store::{create_store, Store};
