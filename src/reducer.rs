/// A pure state transition: `(previous state, action) -> next state`.
///
/// Reducers never mutate their input; they return a fresh value and the store
/// replaces its state with whatever comes back. Any
/// `Fn(&State, &Action) -> State` closure is a reducer.
pub trait Reducer<State, Action> {
    fn reduce(&self, state: &State, action: &Action) -> State;
}

impl<State, Action, F> Reducer<State, Action> for F
where
    F: Fn(&State, &Action) -> State,
{
    fn reduce(&self, state: &State, action: &Action) -> State {
        self(state, action)
    }
}

pub type BoxReducer<State, Action> = Box<dyn Reducer<State, Action> + Send + Sync>;
