//! Shared test helpers: a capturing persistence callback with a
//! scriptable one-shot failure.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyfeedback::{BoxError, FeedbackSubmission, SaveFeedback, SubmissionForm};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Records every submission the widget hands to it; can be told to fail
/// the next save attempt.
#[derive(Clone, Default)]
pub struct CapturingStore {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    saved: Mutex<Vec<FeedbackSubmission>>,
    fail_next: AtomicBool,
}

impl CapturingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next save attempt fail; subsequent attempts succeed.
    pub fn fail_next(&self) {
        self.inner.fail_next.store(true, Ordering::SeqCst);
    }

    pub fn saved(&self) -> Vec<FeedbackSubmission> {
        self.inner.saved.lock().clone()
    }

    pub fn save_count(&self) -> usize {
        self.inner.saved.lock().len()
    }
}

#[async_trait]
impl SaveFeedback for CapturingStore {
    async fn save(&self, submission: FeedbackSubmission) -> Result<(), BoxError> {
        if self.inner.fail_next.swap(false, Ordering::SeqCst) {
            return Err("capturing store told to fail".into());
        }
        self.inner.saved.lock().push(submission);
        Ok(())
    }
}

/// Builds the form body a browser would post.
pub fn form(text: &str, route: Option<&str>) -> SubmissionForm {
    SubmissionForm {
        text: text.to_string(),
        route: route.map(str::to_string),
    }
}
