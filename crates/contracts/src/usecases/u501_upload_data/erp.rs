use serde::{Deserialize, Serialize};

use crate::shared::alert::AlertInfo;

/// ERP/POS systems offered on the connection form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErpProvider {
    MargErp,
    LogicErp,
    Gofrugal,
    Vyapar,
    Zoho,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CredentialField {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub secret: bool,
}

const LICENSE_NO: CredentialField = CredentialField {
    id: "license-no",
    label: "License No.",
    placeholder: "Your ERP License Number",
    secret: false,
};

const API_KEY: CredentialField = CredentialField {
    id: "api-key",
    label: "API Key",
    placeholder: "••••••••••••••••",
    secret: true,
};

const CLIENT_ID: CredentialField = CredentialField {
    id: "client-id",
    label: "Client ID / Org ID",
    placeholder: "Your Client or Organization ID",
    secret: false,
};

const CLIENT_SECRET: CredentialField = CredentialField {
    id: "client-secret",
    label: "Client Secret",
    placeholder: "••••••••••••••••",
    secret: true,
};

const API_TOKEN: CredentialField = CredentialField {
    id: "api-token",
    label: "API Token",
    placeholder: "Your Vyapar API Token",
    secret: true,
};

const API_URL: CredentialField = CredentialField {
    id: "api-url",
    label: "API URL",
    placeholder: "https://api.your-erp.com/data",
    secret: false,
};

impl ErpProvider {
    pub const ALL: [ErpProvider; 6] = [
        ErpProvider::MargErp,
        ErpProvider::LogicErp,
        ErpProvider::Gofrugal,
        ErpProvider::Vyapar,
        ErpProvider::Zoho,
        ErpProvider::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            ErpProvider::MargErp => "marg_erp",
            ErpProvider::LogicErp => "logic_erp",
            ErpProvider::Gofrugal => "gofrugal",
            ErpProvider::Vyapar => "vyapar",
            ErpProvider::Zoho => "zoho",
            ErpProvider::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ErpProvider::MargErp => "Marg ERP 9+",
            ErpProvider::LogicErp => "Logic ERP",
            ErpProvider::Gofrugal => "GoFrugal",
            ErpProvider::Vyapar => "Vyapar",
            ErpProvider::Zoho => "Zoho Inventory",
            ErpProvider::Other => "Other",
        }
    }

    /// `None` for the "Select a Provider" placeholder or unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }

    pub fn credential_fields(&self) -> &'static [CredentialField] {
        match self {
            ErpProvider::MargErp | ErpProvider::LogicErp => &[LICENSE_NO, API_KEY],
            ErpProvider::Gofrugal | ErpProvider::Zoho => &[CLIENT_ID, CLIENT_SECRET],
            ErpProvider::Vyapar => &[API_TOKEN],
            ErpProvider::Other => &[API_URL, API_KEY],
        }
    }

    /// The connect button does not integrate with anything yet.
    pub fn connect_alert(&self) -> AlertInfo {
        AlertInfo::info(
            "Connection Pending",
            format!(
                "Direct integration with {} is not available yet. Please upload a CSV export instead.",
                self.label()
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_keys() {
        for p in ErpProvider::ALL {
            assert_eq!(ErpProvider::from_key(p.key()), Some(p));
        }
        assert_eq!(ErpProvider::from_key("none"), None);
    }

    #[test]
    fn test_credential_fields() {
        let ids = |p: ErpProvider| p.credential_fields().iter().map(|f| f.id).collect::<Vec<_>>();
        assert_eq!(ids(ErpProvider::MargErp), vec!["license-no", "api-key"]);
        assert_eq!(ids(ErpProvider::Zoho), vec!["client-id", "client-secret"]);
        assert_eq!(ids(ErpProvider::Vyapar), vec!["api-token"]);
        assert_eq!(ids(ErpProvider::Other), vec!["api-url", "api-key"]);
    }
}
