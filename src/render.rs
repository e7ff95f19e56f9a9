//! Widget renderer: stateless markup production for the trigger button,
//! the modal form, and the post-submission fragments.
//!
//! Every function here is a pure function of [`WidgetConfig`] — rendering
//! twice with the same config yields byte-identical fragments, so both
//! renderers are safe to call on every page render. The modal never bakes
//! a route in: the server-rendered markup is shared across routes, and
//! the trigger's client-side script copies `window.location.pathname`
//! into the hidden route field at open time.

use std::fmt;

use axum::response::{Html, IntoResponse, Response};

use crate::config::WidgetConfig;
use crate::error::ValidationError;
use crate::submission::{ROUTE_FIELD, TEXT_FIELD};

/// Stable id of the modal overlay element.
pub const MODAL_ID: &str = "anyfeedback-modal";

/// Stable id of the hidden route input the trigger populates.
pub const ROUTE_INPUT_ID: &str = "anyfeedback-route";

/// Stable id of the element the response fragment is swapped into.
pub const BODY_ID: &str = "anyfeedback-body";

/// Minimal default styling. Theming beyond this is the host's business.
const STYLE: &str = "<style>\
.anyfeedback-overlay{display:none;position:fixed;inset:0;background:rgba(0,0,0,.4);align-items:center;justify-content:center;z-index:1000}\
.anyfeedback-dialog{background:#fff;border-radius:6px;padding:1rem 1.25rem;min-width:320px;max-width:90vw;font:inherit}\
.anyfeedback-dialog textarea{display:block;width:100%;box-sizing:border-box;margin-bottom:.5rem}\
.anyfeedback-close{float:right;border:none;background:none;font-size:1.25rem;cursor:pointer}\
.anyfeedback-error{color:#b00020}\
</style>";

/// A self-contained piece of markup intended to replace part of an
/// already-loaded page without full navigation.
///
/// Responds as `200 text/html` — rejection and failure are rendered
/// states, not HTTP errors, so the client-side swap never breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl IntoResponse for Fragment {
    fn into_response(self) -> Response {
        Html(self.0).into_response()
    }
}

/// Escape a string for inclusion in HTML text or double-quoted attribute
/// values. Also useful to hosts echoing stored feedback back into a page.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the trigger control that reveals the modal.
///
/// Opening also captures the current route into the hidden field, so the
/// submission carries the page the user was actually on.
pub fn button(config: &WidgetConfig) -> Fragment {
    Fragment(format!(
        "<button type=\"button\" class=\"anyfeedback-trigger\" \
         onclick=\"document.getElementById('{route_id}').value=window.location.pathname;\
document.getElementById('{modal_id}').style.display='flex';\">{label}</button>",
        route_id = ROUTE_INPUT_ID,
        modal_id = MODAL_ID,
        label = escape(&config.trigger_label),
    ))
}

/// Renders the modal: overlay, dialog, and the form that posts to
/// `config.endpoint`. The form body container is the swap target the
/// handler's response fragment replaces.
pub fn modal(config: &WidgetConfig) -> Fragment {
    Fragment(format!(
        "{style}\
<div id=\"{modal_id}\" class=\"anyfeedback-overlay\">\
<div class=\"anyfeedback-dialog\">\
<button type=\"button\" class=\"anyfeedback-close\" aria-label=\"Close\" \
onclick=\"document.getElementById('{modal_id}').style.display='none';\">&#215;</button>\
<h2 class=\"anyfeedback-title\">{title}</h2>\
<form hx-post=\"{endpoint}\" hx-target=\"#{body_id}\" hx-swap=\"innerHTML\">\
<input type=\"hidden\" id=\"{route_id}\" name=\"{route_field}\" value=\"\">\
<div id=\"{body_id}\">{body}</div>\
</form>\
</div>\
</div>",
        style = STYLE,
        modal_id = MODAL_ID,
        title = escape(&config.modal_title),
        endpoint = escape(&config.endpoint),
        body_id = BODY_ID,
        route_id = ROUTE_INPUT_ID,
        route_field = ROUTE_FIELD,
        body = form_body(config),
    ))
}

/// The editable part of the modal: textarea plus submit control. Shared
/// between the initial modal and the correction/failure fragments so the
/// user can always try again in place.
fn form_body(config: &WidgetConfig) -> String {
    format!(
        "<textarea name=\"{text_field}\" rows=\"4\" placeholder=\"{placeholder}\"></textarea>\
<button type=\"submit\" class=\"anyfeedback-submit\">Send</button>",
        text_field = TEXT_FIELD,
        placeholder = escape(&config.placeholder),
    )
}

/// Confirmation fragment returned after a successful save.
pub(crate) fn acknowledged() -> Fragment {
    Fragment("<p class=\"anyfeedback-ack\">Thanks for your feedback!</p>".to_string())
}

/// Correction prompt for an invalid submission. Re-renders the form
/// controls beneath the error note; no callback ran.
pub(crate) fn rejected(config: &WidgetConfig, error: &ValidationError) -> Fragment {
    Fragment(format!(
        "<p class=\"anyfeedback-error\">{error}</p>{body}",
        error = escape(&error.to_string()),
        body = form_body(config),
    ))
}

/// Generic failure fragment for a persistence error. Internal details
/// stay server-side.
pub(crate) fn failed(config: &WidgetConfig) -> Fragment {
    Fragment(format!(
        "<p class=\"anyfeedback-error\">Something went wrong saving your feedback. Please try again.</p>{body}",
        body = form_body(config),
    ))
}
