//! Tracing support for pending results.
//!
//! Feature-gated behind `#[cfg(feature = "tracing")]`.

use ::tracing::Instrument as _;

use super::MightAsync;

impl<V, E> MightAsync<V, E>
where
    V: Send + 'static,
    E: Send + 'static,
{
    /// Wrap the pending computation in a tracing span.
    ///
    /// The span is entered each time the computation is polled and exited
    /// when it yields, following `tracing::Instrument`.
    ///
    /// ```rust,ignore
    /// use might::MightAsync;
    /// use tracing::info_span;
    ///
    /// let user = MightAsync::new(fetch_user(id), AppError::from)
    ///     .instrument(info_span!("fetch_user", user_id = id));
    /// ```
    pub fn instrument(self, span: ::tracing::Span) -> Self {
        MightAsync::from_settlement(self.pending.instrument(span))
    }
}
