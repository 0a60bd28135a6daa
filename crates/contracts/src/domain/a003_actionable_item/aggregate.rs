use serde::{Deserialize, Serialize};

use crate::system::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionCategory {
    Inventory,
    Sales,
    Strategy,
    #[serde(rename = "Data Quality")]
    DataQuality,
}

impl ActionCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ActionCategory::Inventory => "Inventory",
            ActionCategory::Sales => "Sales",
            ActionCategory::Strategy => "Strategy",
            ActionCategory::DataQuality => "Data Quality",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Todo,
    Done,
}

impl ItemStatus {
    pub fn toggled(self) -> Self {
        match self {
            ItemStatus::Todo => ItemStatus::Done,
            ItemStatus::Done => ItemStatus::Todo,
        }
    }
}

/// A suggested task on the action center, optionally linking to the page
/// where it can be resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionableItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ActionCategory,
    pub priority: Priority,
    pub status: ItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_page: Option<Page>,
}

impl ActionableItem {
    /// List key that changes when the item is checked off, so its row redraws.
    pub fn row_key(&self) -> (String, ItemStatus) {
        (self.id.clone(), self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wire_format() {
        let item = ActionableItem {
            id: "2".into(),
            title: "Resolve Data Anomaly".into(),
            description: String::new(),
            category: ActionCategory::DataQuality,
            priority: Priority::High,
            status: ItemStatus::Todo,
            action_page: Some(Page::UploadData),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["category"], "Data Quality");
        assert_eq!(json["status"], "todo");
        assert_eq!(json["actionPage"], "upload-data");
    }

    #[test]
    fn test_row_key_changes_with_status() {
        let mut item = ActionableItem {
            id: "4".into(),
            title: "Promote Slow-Moving Stock".into(),
            description: String::new(),
            category: ActionCategory::Sales,
            priority: Priority::Low,
            status: ItemStatus::Todo,
            action_page: None,
        };
        let before = item.row_key();
        item.status = item.status.toggled();
        let after = item.row_key();

        let keys: HashSet<_> = [before.clone(), after.clone()].into_iter().collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(before.0, after.0);
        assert_eq!(after.1, ItemStatus::Done);
    }
}
