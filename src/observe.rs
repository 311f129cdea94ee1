/// Receives solver events and decides how the search should proceed.
///
/// Observers are how progress reporting is injected: the solver stays free
/// of logging state, and callers can monitor windows and step widths, log
/// them, or stop the search early without changing the solver API.
///
/// `observe` returns `Option<A>`: `Some(action)` requests a solver-specific
/// control action, `None` lets the search continue unchanged.
///
/// Closures implement `Observer` automatically, and `()` is the no-op
/// observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
