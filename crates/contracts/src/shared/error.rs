use thiserror::Error;

use super::alert::AlertInfo;

/// The one failure kind of the data layer: a fetch that did not produce data.
///
/// The variants only carry diagnostics for the console; every caller surfaces
/// them the same way, as a dismissible alert with a page-specific text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with HTTP {0}")]
    Status(u16),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

impl FetchError {
    /// Builds the user-facing alert for a failed fetch.
    pub fn to_alert(&self, title: &str, message: &str) -> AlertInfo {
        AlertInfo::error(title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::alert::AlertKind;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "server responded with HTTP 503"
        );
        assert_eq!(
            FetchError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }

    #[test]
    fn test_every_variant_maps_to_the_same_alert_shape() {
        let errors = [
            FetchError::Network("x".into()),
            FetchError::Status(500),
            FetchError::Decode("y".into()),
            FetchError::Rejected("z".into()),
        ];
        for err in errors {
            let alert = err.to_alert("Error Loading Data", "Please try again later.");
            assert_eq!(alert.kind, AlertKind::Error);
            assert_eq!(alert.title, "Error Loading Data");
        }
    }
}
