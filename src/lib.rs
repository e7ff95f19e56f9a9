//! anyfeedback — a pluggable in-app feedback widget.
//!
//! Hosts mount the widget in three steps: render [`FeedbackWidget::button`]
//! and [`FeedbackWidget::modal`] somewhere on the page, wire one POST
//! route to [`FeedbackWidget::handle`], and supply a persistence callback
//! that records each submission wherever the application keeps its data.
//! The widget owns no storage and no identity logic — both stay with the
//! host.
//!
//! Responses are HTML fragments sized for partial-page replacement: the
//! modal form posts via htmx and swaps the returned fragment in place, so
//! submitting feedback never navigates away from the page. Rejection and
//! persistence failure are rendered states (status 200), never raw errors
//! surfaced to the browser.

pub mod config;
pub mod error;
pub mod handler;
pub mod persist;
pub mod render;
pub mod submission;
pub mod widget;

pub use config::WidgetConfig;
pub use error::{BoxError, ConfigError, PersistenceError, ValidationError};
pub use persist::SaveFeedback;
pub use render::Fragment;
pub use submission::{FeedbackSubmission, SubmissionForm, UserId, UserIdentity};
pub use widget::FeedbackWidget;
