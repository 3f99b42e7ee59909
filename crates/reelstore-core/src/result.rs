//! Result type aliases for Reelstore.

use crate::ReelError;

/// A specialized `Result` type for Reelstore operations.
pub type ReelResult<T> = Result<T, ReelError>;

/// Boolean success/failure view over a [`ReelResult`].
pub trait ReelResultExt {
    /// Collapses the result into `Ok(true)` on success and `Ok(false)` on a
    /// backend failure. Duplicate-entity and invalid-argument errors are
    /// still returned as errors.
    ///
    /// Nothing is logged here; the repository logs each failure once.
    fn into_flag(self) -> ReelResult<bool>;
}

impl<T> ReelResultExt for ReelResult<T> {
    fn into_flag(self) -> ReelResult<bool> {
        match self {
            Ok(_) => Ok(true),
            Err(e) if e.is_caller_error() => Err(e),
            Err(_) => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_true() {
        let result: ReelResult<u64> = Ok(0);
        assert!(result.into_flag().unwrap());
    }

    #[test]
    fn test_backend_failure_is_false() {
        let result: ReelResult<()> = Err(ReelError::database("connection reset"));
        assert!(!result.into_flag().unwrap());

        let result: ReelResult<()> = Err(ReelError::internal("bson"));
        assert!(!result.into_flag().unwrap());
    }

    #[test]
    fn test_caller_errors_propagate() {
        let result: ReelResult<()> = Err(ReelError::conflict("The user is already in the database."));
        assert!(matches!(result.into_flag(), Err(ReelError::Conflict(_))));

        let result: ReelResult<()> = Err(ReelError::validation("user preferences cannot be null"));
        assert!(matches!(result.into_flag(), Err(ReelError::Validation(_))));
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn test_into_flag_emits_no_events() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        struct CountEvents(Arc<AtomicUsize>);

        impl<S: tracing::Subscriber> Layer<S> for CountEvents {
            fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let events = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(CountEvents(Arc::clone(&events)));

        let flag = tracing::subscriber::with_default(subscriber, || {
            let result: ReelResult<()> = Err(ReelError::database("connection reset"));
            result.into_flag()
        });

        assert!(!flag.unwrap());
        assert_eq!(events.load(Ordering::SeqCst), 0);
    }
}
