use crate::store::Store;

/// A store-to-store transformation applied once at creation time, typically
/// to replace the dispatch entry point through [`Store::wrap_dispatch`].
pub type Enhancer<State, Action> =
    Box<dyn FnOnce(Store<State, Action>) -> Store<State, Action>>;

/// Composes single-argument transformations right to left:
/// `compose(vec![f, g, h])` produces `|x| f(g(h(x)))`.
///
/// An empty vector composes to the identity, a single element to itself.
/// Instantiated at `T = Store<_, _>` this chains enhancers.
pub fn compose<T>(fns: Vec<Box<dyn FnOnce(T) -> T>>) -> Box<dyn FnOnce(T) -> T>
where
    T: 'static,
{
    Box::new(move |input| fns.into_iter().rev().fold(input, |value, f| f(value)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn applies_right_to_left() {
        let composed = compose(vec![
            Box::new(|value: i32| value * 2) as Box<dyn FnOnce(i32) -> i32>,
            Box::new(|value: i32| value + 10),
        ]);

        // Rightmost runs first: (1 + 10) * 2.
        assert_eq!(composed(1), 22);
    }

    #[test]
    fn empty_composition_is_identity() {
        let composed = compose::<i32>(Vec::new());
        assert_eq!(composed(7), 7);
    }

    #[test]
    fn single_function_composes_to_itself() {
        let composed =
            compose(vec![Box::new(|value: i32| value - 1) as Box<dyn FnOnce(i32) -> i32>]);
        assert_eq!(composed(5), 4);
    }
}
