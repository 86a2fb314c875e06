//! Settlement of a pending computation, with the failure kept un-normalized.

/// A failure whose normalized form has not been computed yet.
///
/// Holds the raw failure together with the function that turns it into `E`.
/// Mapping composes onto the thunk, so nothing runs until [`Deferred::force`].
pub(crate) struct Deferred<E> {
    thunk: Box<dyn FnOnce() -> E + Send>,
}

impl<E: 'static> Deferred<E> {
    /// Capture a raw failure and its normalization function.
    pub(crate) fn new<X, N>(raw: X, normalize: N) -> Self
    where
        X: Send + 'static,
        N: FnOnce(X) -> E + Send + 'static,
    {
        Deferred {
            thunk: Box::new(move || normalize(raw)),
        }
    }

    /// An error that is already in its final form.
    pub(crate) fn ready(error: E) -> Self
    where
        E: Send,
    {
        Deferred {
            thunk: Box::new(move || error),
        }
    }

    pub(crate) fn map<R, F>(self, f: F) -> Deferred<R>
    where
        R: 'static,
        F: FnOnce(E) -> R + Send + 'static,
    {
        let thunk = self.thunk;
        Deferred {
            thunk: Box::new(move || f(thunk())),
        }
    }

    /// Run the normalization chain and surface the error.
    pub(crate) fn force(self) -> E {
        (self.thunk)()
    }
}

impl<E> std::fmt::Debug for Deferred<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("thunk", &"<function>")
            .finish()
    }
}

/// How a wrapped computation ended.
#[derive(Debug)]
pub(crate) enum Settled<V, E> {
    Value(V),
    Failure(Deferred<E>),
}

impl<V, E: 'static> Settled<V, E> {
    pub(crate) fn into_might(self) -> crate::Might<V, E> {
        match self {
            Settled::Value(v) => crate::Might::Ok(v),
            Settled::Failure(deferred) => crate::Might::Err(deferred.force()),
        }
    }
}

impl<V, E: Send + 'static> From<crate::Might<V, E>> for Settled<V, E> {
    fn from(might: crate::Might<V, E>) -> Self {
        match might {
            crate::Might::Ok(v) => Settled::Value(v),
            crate::Might::Err(e) => Settled::Failure(Deferred::ready(e)),
        }
    }
}
