//! Demo host application for the feedback widget.
//!
//! Serves a single page with the trigger and modal, persists submissions
//! to an in-memory list owned by this binary, and lists them on the page.
//! A real host replaces the list with its own database inside the
//! callback and resolves the user from its own session layer.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use clap::Parser;
use parking_lot::Mutex;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use anyfeedback::render::escape;
use anyfeedback::{
    BoxError, FeedbackSubmission, FeedbackWidget, Fragment, SubmissionForm, UserId, UserIdentity,
    WidgetConfig,
};

#[derive(Debug, Parser)]
#[command(name = "anyfeedback-demo", about = "Feedback widget demo server")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

/// Stand-in for the host's authenticated user.
struct DemoUser {
    id: i64,
}

impl UserIdentity for DemoUser {
    fn user_id(&self) -> UserId {
        UserId::from(self.id)
    }
}

#[derive(Clone)]
struct AppState {
    widget: Arc<FeedbackWidget>,
    store: Arc<Mutex<Vec<FeedbackSubmission>>>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    // Demo glue: the store lives here, outside the widget, and reaches
    // the callback only as closure state.
    let store: Arc<Mutex<Vec<FeedbackSubmission>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = store.clone();
    let widget = FeedbackWidget::new(
        WidgetConfig::default(),
        move |submission: FeedbackSubmission| {
            let sink = sink.clone();
            async move {
                tracing::info!(
                    user_id = submission.user_id.as_ref().map(|id| id.as_str()),
                    route = submission.route.as_deref(),
                    text = %submission.text,
                    "feedback saved"
                );
                sink.lock().push(submission);
                Ok::<(), BoxError>(())
            }
        },
    )?;

    let state = AppState {
        widget: Arc::new(widget),
        store,
    };
    let app = router(state);

    let listener = TcpListener::bind(args.bind).await?;
    tracing::info!("demo listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/feedback", post(submit))
        .with_state(state)
}

async fn submit(State(state): State<AppState>, Form(form): Form<SubmissionForm>) -> Fragment {
    // Demo user; a real host resolves this from its session layer.
    let user = DemoUser { id: 1 };
    state.widget.handle(form, Some(&user)).await
}

async fn index(State(state): State<AppState>) -> Html<String> {
    let entries = {
        let feedback = state.store.lock();
        if feedback.is_empty() {
            "<p>No feedback submitted yet.</p>".to_string()
        } else {
            let items: String = feedback
                .iter()
                .map(|fb| {
                    format!(
                        "<li>User {user} from route <code>{route}</code>: {text}</li>",
                        user = fb
                            .user_id
                            .as_ref()
                            .map(|id| escape(id.as_str()))
                            .unwrap_or_else(|| "anonymous".to_string()),
                        route = escape(fb.route.as_deref().unwrap_or("-")),
                        text = escape(&fb.text),
                    )
                })
                .collect();
            format!("<ul>{items}</ul>")
        }
    };

    Html(format!(
        "<!doctype html>\
<html><head><meta charset=\"utf-8\"><title>anyfeedback demo</title>\
<script src=\"https://unpkg.com/htmx.org@2.0.8\"></script></head>\
<body>\
<div>{button}</div>\
{modal}\
<h1>anyfeedback demo</h1>\
<p>Click the feedback button to test the feedback modal.</p>\
<h2>Submitted feedback:</h2>\
<p>Refresh the page to see current saved in-memory feedback.</p>\
{entries}\
</body></html>",
        button = state.widget.button(),
        modal = state.widget.modal(),
    ))
}
