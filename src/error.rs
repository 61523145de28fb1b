use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("browser driver error: {0}")]
    Browser(String),

    #[error("timed out waiting for '{selector}'")]
    WaitTimeout { selector: String },

    #[error("interaction blocked: {reason}")]
    Blocked { reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("run cancelled")]
    Cancelled,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl HarvestError {
    /// True for the failure modes the pipeline absorbs where they occur:
    /// a control that never appeared, or a click that was intercepted or
    /// hit a disabled element.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            HarvestError::WaitTimeout { .. } | HarvestError::Blocked { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, HarvestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_timeout_display() {
        let err = HarvestError::WaitTimeout {
            selector: "[data-testid='property-card']".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("property-card"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn blocked_display() {
        let err = HarvestError::Blocked {
            reason: "click intercepted".into(),
        };
        assert!(err.to_string().contains("click intercepted"));
    }

    #[test]
    fn transient_classification() {
        assert!(
            HarvestError::WaitTimeout {
                selector: "x".into()
            }
            .is_transient()
        );
        assert!(
            HarvestError::Blocked {
                reason: "disabled".into()
            }
            .is_transient()
        );
        assert!(!HarvestError::Browser("connection lost".into()).is_transient());
        assert!(!HarvestError::Cancelled.is_transient());
    }

    #[test]
    fn error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{invalid").unwrap_err();
        let err: HarvestError = json_err.into();
        assert!(matches!(err, HarvestError::Json(_)));
        assert!(err.to_string().contains("JSON error"));
    }
}
