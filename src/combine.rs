use std::collections::BTreeMap;

use crate::reducer::{BoxReducer, Reducer};

/// Composite state produced by [`combine_reducers`]: namespace key to slice
/// state.
pub type CompositeState<S> = BTreeMap<String, S>;

/// A reducer assembled from per-namespace slice reducers.
///
/// Every `reduce` call builds a fresh composite state, running each slice
/// reducer in registration order against the slice stored under its key.
pub struct CombinedReducer<S, Action> {
    reducers: Vec<(String, BoxReducer<S, Action>)>,
}

/// Builds one reducer over a keyed composite state from `(key, slice reducer)`
/// entries.
///
/// A slice reducer only ever sees the state under its own key, and receives
/// `S::default()` when that key is absent. Keys of the incoming state with no
/// registered reducer do not survive into the result: the composite shape is
/// exactly the registered keys. A key registered twice keeps its first
/// position and its last reducer.
pub fn combine_reducers<S, Action, K>(
    entries: Vec<(K, BoxReducer<S, Action>)>,
) -> CombinedReducer<S, Action>
where
    K: Into<String>,
{
    let mut reducers: Vec<(String, BoxReducer<S, Action>)> = Vec::with_capacity(entries.len());
    for (key, reducer) in entries {
        let key = key.into();
        match reducers.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = reducer,
            None => reducers.push((key, reducer)),
        }
    }
    CombinedReducer { reducers }
}

impl<S, Action> Reducer<CompositeState<S>, Action> for CombinedReducer<S, Action>
where
    S: Default,
{
    fn reduce(&self, state: &CompositeState<S>, action: &Action) -> CompositeState<S> {
        let mut next = CompositeState::new();
        for (key, reducer) in &self.reducers {
            let slice = match state.get(key) {
                Some(slice) => reducer.reduce(slice, action),
                None => reducer.reduce(&S::default(), action),
            };
            next.insert(key.clone(), slice);
        }
        next
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[derive(Debug)]
    enum Action {
        AppleIncrement,
        BananaIncrement,
    }

    fn apples(state: &i32, action: &Action) -> i32 {
        match action {
            Action::AppleIncrement => state + 1,
            _ => *state,
        }
    }

    fn bananas(state: &i32, action: &Action) -> i32 {
        match action {
            Action::BananaIncrement => state + 1,
            _ => *state,
        }
    }

    fn fruit_reducer() -> CombinedReducer<i32, Action> {
        combine_reducers(vec![
            ("apple", Box::new(apples) as BoxReducer<i32, Action>),
            ("banana", Box::new(bananas)),
        ])
    }

    #[test]
    fn updates_only_the_slice_an_action_touches() {
        let reducer = fruit_reducer();

        let after_banana = reducer.reduce(&CompositeState::new(), &Action::BananaIncrement);
        assert_eq!(after_banana.get("apple"), Some(&0));
        assert_eq!(after_banana.get("banana"), Some(&1));

        let after_apple = reducer.reduce(&after_banana, &Action::AppleIncrement);
        assert_eq!(after_apple.get("apple"), Some(&1));
        assert_eq!(after_apple.get("banana"), Some(&1));
    }

    #[test]
    fn unmanaged_keys_do_not_survive() {
        let reducer = fruit_reducer();
        let mut state = CompositeState::new();
        state.insert("apple".to_owned(), 2);
        state.insert("cherry".to_owned(), 9);

        let next = reducer.reduce(&state, &Action::AppleIncrement);
        assert_eq!(next.get("apple"), Some(&3));
        assert_eq!(next.get("banana"), Some(&0));
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn duplicate_key_keeps_the_last_reducer() {
        let reducer = combine_reducers(vec![
            ("fruit", Box::new(apples) as BoxReducer<i32, Action>),
            ("fruit", Box::new(bananas)),
        ]);

        let next = reducer.reduce(&CompositeState::new(), &Action::BananaIncrement);
        assert_eq!(next.get("fruit"), Some(&1));
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn slice_reducers_run_in_entry_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));

        let banana_calls = Arc::clone(&calls);
        let apple_calls = Arc::clone(&calls);
        let reducer = combine_reducers(vec![
            (
                "banana",
                Box::new(move |state: &i32, _action: &Action| {
                    banana_calls.lock().push("banana");
                    *state
                }) as BoxReducer<i32, Action>,
            ),
            (
                "apple",
                Box::new(move |state: &i32, _action: &Action| {
                    apple_calls.lock().push("apple");
                    *state
                }),
            ),
        ]);

        reducer.reduce(&CompositeState::new(), &Action::AppleIncrement);
        assert_eq!(*calls.lock(), vec!["banana", "apple"]);
    }
}
