use crate::dispatcher::Dispatcher;

/// Binds an action creator to a dispatcher: the returned closure builds the
/// action from its argument and dispatches it immediately.
///
/// Creators taking several values take them as one tuple argument; creators
/// taking none take `()`. Enum variant constructors work as creators as-is.
pub fn bind_action_creator<Args, C, D>(creator: C, dispatch: D) -> impl Fn(Args)
where
    C: Fn(Args) -> D::Action,
    D: Dispatcher,
{
    move |args| dispatch.dispatch(creator(args))
}
