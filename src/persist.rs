//! The persistence seam: a host-supplied callback invoked once per valid
//! submission. The widget never defines how or where feedback is stored.

use std::future::Future;

use async_trait::async_trait;

use crate::error::BoxError;
use crate::submission::FeedbackSubmission;

/// Host-supplied persistence callback.
///
/// Invoked exactly once per valid submission, taking ownership of the
/// record. Any returned error is treated as a persistence failure; the
/// widget logs it and renders a generic failure fragment, and never
/// retries.
///
/// Plain async closures implement this automatically:
///
/// ```
/// use anyfeedback::{BoxError, FeedbackSubmission, SaveFeedback};
///
/// fn accepts(_: impl SaveFeedback) {}
///
/// accepts(|submission: FeedbackSubmission| async move {
///     // a real host writes to its own database here
///     let _ = submission.text;
///     Ok::<(), BoxError>(())
/// });
/// ```
#[async_trait]
pub trait SaveFeedback: Send + Sync {
    async fn save(&self, submission: FeedbackSubmission) -> Result<(), BoxError>;
}

#[async_trait]
impl<F, Fut> SaveFeedback for F
where
    F: Fn(FeedbackSubmission) -> Fut + Send + Sync,
    Fut: Future<Output = Result<(), BoxError>> + Send + 'static,
{
    async fn save(&self, submission: FeedbackSubmission) -> Result<(), BoxError> {
        (self)(submission).await
    }
}
