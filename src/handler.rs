//! Submission orchestration: validate, extract context, invoke the
//! persistence callback, produce the response fragment.

use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::error::PersistenceError;
use crate::persist::SaveFeedback;
use crate::render::{self, Fragment};
use crate::submission::{self, SubmissionForm, UserIdentity};

/// Handles one feedback submission end to end.
///
/// Holds no mutable state — every invocation is independent, so
/// concurrent submissions need no locking here. Per invocation the flow
/// is strictly ordered: extraction completes before the callback is
/// invoked, and the callback completes (success or failure) before a
/// fragment is produced.
pub struct SubmissionHandler {
    config: Arc<WidgetConfig>,
    on_save: Arc<dyn SaveFeedback>,
}

impl SubmissionHandler {
    pub(crate) fn new(config: Arc<WidgetConfig>, on_save: Arc<dyn SaveFeedback>) -> Self {
        Self { config, on_save }
    }

    /// Processes one submission and returns the fragment to swap into
    /// the modal.
    ///
    /// Always yields a rendered fragment, never an error: rejection and
    /// persistence failure are rendered states. A failing callback is
    /// wrapped as a [`PersistenceError`] and logged for the host's
    /// error-reporting path; the browser sees only a generic failure
    /// fragment.
    pub async fn handle(
        &self,
        form: SubmissionForm,
        user: Option<&dyn UserIdentity>,
    ) -> Fragment {
        let submission = match submission::extract(form, user) {
            Ok(submission) => submission,
            Err(error) => {
                tracing::debug!(%error, "rejected feedback submission");
                return render::rejected(&self.config, &error);
            }
        };

        tracing::debug!(
            user_id = submission.user_id.as_ref().map(|id| id.as_str()),
            route = submission.route.as_deref(),
            "persisting feedback submission"
        );

        match self.on_save.save(submission).await {
            Ok(()) => render::acknowledged(),
            Err(source) => {
                let error = PersistenceError { source };
                tracing::error!(%error, "feedback persistence callback failed");
                render::failed(&self.config)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::BoxError;
    use crate::submission::FeedbackSubmission;

    fn handler_with_counter() -> (SubmissionHandler, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let on_save = move |_submission: FeedbackSubmission| {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<(), BoxError>(())
            }
        };
        let handler =
            SubmissionHandler::new(Arc::new(WidgetConfig::default()), Arc::new(on_save));
        (handler, calls)
    }

    #[tokio::test]
    async fn empty_text_never_reaches_the_callback() {
        let (handler, calls) = handler_with_counter();
        let fragment = handler.handle(SubmissionForm::default(), None).await;

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(fragment.as_str().contains("must not be empty"));
    }

    #[tokio::test]
    async fn valid_text_invokes_the_callback_once() {
        let (handler, calls) = handler_with_counter();
        let form = SubmissionForm {
            text: "the modal is great".to_string(),
            route: None,
        };
        let fragment = handler.handle(form, None).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(fragment.as_str().contains("Thanks"));
    }
}
