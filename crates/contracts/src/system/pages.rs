use serde::{Deserialize, Serialize};

/// Navigable page of the dashboard.
///
/// Keys are stable kebab-case strings used in the URL query and in
/// actionable-item links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Dashboard,
    ActionCenter,
    UploadData,
    LowStock,
    TopSelling,
    Visualizations,
    AiInsights,
    AiChat,
    RoiTracker,
    Reports,
    Settings,
    Documentation,
}

impl Page {
    /// Sidebar order.
    pub const ALL: [Page; 12] = [
        Page::Dashboard,
        Page::ActionCenter,
        Page::RoiTracker,
        Page::Reports,
        Page::UploadData,
        Page::LowStock,
        Page::TopSelling,
        Page::Visualizations,
        Page::AiInsights,
        Page::AiChat,
        Page::Settings,
        Page::Documentation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::ActionCenter => "action-center",
            Page::UploadData => "upload-data",
            Page::LowStock => "low-stock",
            Page::TopSelling => "top-selling",
            Page::Visualizations => "visualizations",
            Page::AiInsights => "ai-insights",
            Page::AiChat => "ai-chat",
            Page::RoiTracker => "roi-tracker",
            Page::Reports => "reports",
            Page::Settings => "settings",
            Page::Documentation => "documentation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::ActionCenter => "Action Center",
            Page::UploadData => "Data Integration",
            Page::LowStock => "Low Stock",
            Page::TopSelling => "Top Selling",
            Page::Visualizations => "Visualizations",
            Page::AiInsights => "AI Insights",
            Page::AiChat => "AI Chat",
            Page::RoiTracker => "ROI Tracker",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
            Page::Documentation => "Documentation",
        }
    }

    /// Unknown keys fall back to the dashboard.
    pub fn from_key(key: &str) -> Page {
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.key() == key)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }

    #[test]
    fn test_unknown_key_falls_back_to_dashboard() {
        assert_eq!(Page::from_key("billing"), Page::Dashboard);
        assert_eq!(Page::from_key(""), Page::Dashboard);
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Page::RoiTracker).unwrap();
        assert_eq!(json, "\"roi-tracker\"");
        let page: Page = serde_json::from_str("\"ai-chat\"").unwrap();
        assert_eq!(page, Page::AiChat);
    }

    #[test]
    fn test_all_pages_listed_once() {
        let mut keys: Vec<_> = Page::ALL.iter().map(|p| p.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 12);
    }
}
