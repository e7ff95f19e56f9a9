//! The facade a host application constructs once and reuses for both
//! rendering and handling.

use std::sync::Arc;

use crate::config::WidgetConfig;
use crate::error::ConfigError;
use crate::handler::SubmissionHandler;
use crate::persist::SaveFeedback;
use crate::render::{self, Fragment};
use crate::submission::{SubmissionForm, UserIdentity};

/// In-app feedback widget bound to one configuration and one persistence
/// callback.
///
/// Construct once at startup and share — typically inside an `Arc` in
/// the host router's state. All methods take `&self`; the widget holds
/// no mutable state across requests.
pub struct FeedbackWidget {
    config: Arc<WidgetConfig>,
    handler: SubmissionHandler,
}

impl FeedbackWidget {
    /// Builds a widget from config and the host's persistence callback.
    ///
    /// Validation happens here so a misconfigured widget fails at
    /// startup, before the host begins serving traffic.
    pub fn new(
        config: WidgetConfig,
        on_save: impl SaveFeedback + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let config = Arc::new(config);
        let handler = SubmissionHandler::new(config.clone(), Arc::new(on_save));
        Ok(Self { config, handler })
    }

    /// The configuration this widget was built with.
    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// Renders the trigger button. Safe to call on every page render.
    pub fn button(&self) -> Fragment {
        render::button(&self.config)
    }

    /// Renders the modal. Safe to call on every page render.
    pub fn modal(&self) -> Fragment {
        render::modal(&self.config)
    }

    /// Handles one feedback POST. The host wires this to the route named
    /// by `config.endpoint` and supplies the per-request user, if any.
    pub async fn handle(
        &self,
        form: SubmissionForm,
        user: Option<&dyn UserIdentity>,
    ) -> Fragment {
        self.handler.handle(form, user).await
    }
}
