// src/application/context.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use std::{future::Future, time::Duration};
use tokio::time::{Instant, timeout_at};

/// Per-request execution context handed to every service call.
///
/// Storage calls made on behalf of the request run under the deadline; once
/// it passes they fail with `ApplicationError::DeadlineExceeded`. Dropping the
/// service future cancels whatever is still in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// No deadline.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_expired(&self) -> bool {
        self.deadline
            .is_some_and(|deadline| deadline <= Instant::now())
    }

    pub async fn run<T, E, F>(&self, fut: F) -> ApplicationResult<T>
    where
        F: Future<Output = Result<T, E>>,
        ApplicationError: From<E>,
    {
        match self.deadline {
            Some(deadline) => timeout_at(deadline, fut)
                .await
                .map_err(|_| ApplicationError::DeadlineExceeded)?
                .map_err(ApplicationError::from),
            None => fut.await.map_err(ApplicationError::from),
        }
    }

    /// Like [`run`](Self::run) but hands the call's own error back untouched,
    /// so callers can react to specific storage failures.
    pub async fn attempt<T, E, F>(&self, fut: F) -> ApplicationResult<Result<T, E>>
    where
        F: Future<Output = Result<T, E>>,
    {
        match self.deadline {
            Some(deadline) => timeout_at(deadline, fut)
                .await
                .map_err(|_| ApplicationError::DeadlineExceeded),
            None => Ok(fut.await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DomainError, DomainResult};

    #[tokio::test]
    async fn background_context_passes_results_through() {
        let ctx = RequestContext::background();
        let value = ctx.run(async { DomainResult::Ok(5) }).await.unwrap();
        assert_eq!(value, 5);

        let err = ctx
            .run(async { DomainResult::<()>::Err(DomainError::NotFound("gone".into())) })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn expired_deadline_cancels_slow_calls() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(10));
        let err = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                DomainResult::Ok(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::DeadlineExceeded));
        assert!(ctx.is_expired());
    }
}
