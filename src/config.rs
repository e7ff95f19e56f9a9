use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Display and wiring configuration for the feedback widget.
///
/// Created once at facade construction and shared read-only by the
/// renderer and the submission handler. The persistence callback is not
/// part of the config — it is a separate constructor argument, so a
/// widget without one cannot be built at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Endpoint the modal form posts submissions to. Must be an absolute
    /// path; the host wires its own route for it.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Label on the trigger button.
    #[serde(default = "default_trigger_label")]
    pub trigger_label: String,
    /// Heading shown at the top of the modal.
    #[serde(default = "default_modal_title")]
    pub modal_title: String,
    /// Placeholder text for the feedback textarea.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_endpoint() -> String {
    "/feedback".to_string()
}

fn default_trigger_label() -> String {
    "Feedback".to_string()
}

fn default_modal_title() -> String {
    "Send feedback".to_string()
}

fn default_placeholder() -> String {
    "Tell us what's working and what isn't...".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            trigger_label: default_trigger_label(),
            modal_title: default_modal_title(),
            placeholder: default_placeholder(),
        }
    }
}

impl WidgetConfig {
    /// Validates the configuration.
    ///
    /// Checks:
    /// - `endpoint` is an absolute path (starts with `/`)
    /// - `trigger_label` and `modal_title` are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with('/') {
            return Err(ConfigError::Invalid {
                message: format!(
                    "endpoint '{}' must be an absolute path starting with '/'",
                    self.endpoint
                ),
            });
        }

        if self.trigger_label.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "trigger_label must not be empty".to_string(),
            });
        }

        if self.modal_title.trim().is_empty() {
            return Err(ConfigError::Invalid {
                message: "modal_title must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(WidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let config = WidgetConfig {
            endpoint: "feedback".to_string(),
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_trigger_label_is_rejected() {
        let config = WidgetConfig {
            trigger_label: "   ".to_string(),
            ..WidgetConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
