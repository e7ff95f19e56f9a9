//! Request-context extraction: the seam between one inbound HTTP request
//! and the record handed to the persistence callback.
//!
//! Extraction is a pure function of the parsed form body and the
//! host-resolved user. The widget neither authenticates nor inspects the
//! user beyond its identity accessor.

use std::fmt;

use serde::Deserialize;

use crate::error::ValidationError;

/// Form field carrying the feedback text. Fixed contract between the
/// rendered modal and [`extract`].
pub const TEXT_FIELD: &str = "text";

/// Hidden form field carrying the originating route. Populated
/// client-side when the modal opens.
pub const ROUTE_FIELD: &str = "route";

/// Raw form body of one feedback POST, as the host's HTTP framework
/// deserializes it (e.g. `axum::Form<SubmissionForm>`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub route: Option<String>,
}

/// Opaque user identifier, passed through to the persistence callback
/// exactly as the host's identity layer supplied it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Minimal capability the widget requires from a host user type: an
/// identity accessor. Any per-request user object the host resolves can
/// implement this; the widget never defines a concrete user type.
pub trait UserIdentity: Send + Sync {
    fn user_id(&self) -> UserId;
}

/// One user-initiated feedback event, ready for persistence.
///
/// Immutable once constructed; ownership moves into the persistence
/// callback and the widget holds no reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSubmission {
    /// Identity from the host's auth/session layer; `None` for the
    /// anonymous flow.
    pub user_id: Option<UserId>,
    /// Feedback text, non-empty after trimming.
    pub text: String,
    /// Route the user was on when the modal opened, if captured.
    pub route: Option<String>,
}

/// Builds a [`FeedbackSubmission`] from one request's form body and the
/// host-resolved user, if any.
///
/// Empty or whitespace-only `route` values are treated as absent: the
/// hidden field posts `""` when the client-side script did not run.
pub fn extract(
    form: SubmissionForm,
    user: Option<&dyn UserIdentity>,
) -> Result<FeedbackSubmission, ValidationError> {
    let text = form.text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let route = form.route.as_deref().map(str::trim).and_then(|route| {
        if route.is_empty() {
            None
        } else {
            Some(route.to_string())
        }
    });

    Ok(FeedbackSubmission {
        user_id: user.map(UserIdentity::user_id),
        text: text.to_string(),
        route,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestUser(i64);

    impl UserIdentity for TestUser {
        fn user_id(&self) -> UserId {
            UserId::from(self.0)
        }
    }

    fn form(text: &str, route: Option<&str>) -> SubmissionForm {
        SubmissionForm {
            text: text.to_string(),
            route: route.map(str::to_string),
        }
    }

    #[test]
    fn text_is_trimmed() {
        let submission = extract(form("  needs work  ", None), None).unwrap();
        assert_eq!(submission.text, "needs work");
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(
            extract(form("", None), None),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn whitespace_text_is_rejected() {
        assert_eq!(
            extract(form("   \n\t", None), None),
            Err(ValidationError::EmptyText)
        );
    }

    #[test]
    fn empty_route_field_means_absent() {
        let submission = extract(form("ok", Some("")), None).unwrap();
        assert_eq!(submission.route, None);
    }

    #[test]
    fn route_and_user_pass_through_unchanged() {
        let user = TestUser(42);
        let submission = extract(form("ok", Some("/pricing")), Some(&user)).unwrap();
        assert_eq!(submission.route.as_deref(), Some("/pricing"));
        assert_eq!(submission.user_id, Some(UserId::from(42)));
    }

    #[test]
    fn missing_user_is_anonymous() {
        let submission = extract(form("ok", None), None).unwrap();
        assert_eq!(submission.user_id, None);
    }
}
