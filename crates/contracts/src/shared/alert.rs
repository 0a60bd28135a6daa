use serde::{Deserialize, Serialize};

/// Visual kind of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Error => "error",
            AlertKind::Warning => "warning",
            AlertKind::Info => "info",
        }
    }
}

/// Dismissible notification shown at the top of a page.
///
/// Created by any failing or succeeding operation, dropped on dismissal or
/// when the user navigates to another page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertInfo {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

impl AlertInfo {
    pub fn new(kind: AlertKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_kind_wire_format() {
        let alert = AlertInfo::warning("Heads up", "Check stock");
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"kind\":\"warning\""));
        assert_eq!(alert.kind.as_str(), "warning");
    }
}
