use serde::{Deserialize, Serialize};

use super::aggregate::{ActionableItem, ItemStatus, Priority};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    #[default]
    Todo,
    Done,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Todo, StatusFilter::Done];

    pub fn key(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Todo => "todo",
            StatusFilter::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Todo => "To Do",
            StatusFilter::Done => "Done",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .unwrap_or_default()
    }

    fn accepts(&self, status: ItemStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Todo => status == ItemStatus::Todo,
            StatusFilter::Done => status == ItemStatus::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub const ALL: [PriorityFilter; 4] = [
        PriorityFilter::All,
        PriorityFilter::Only(Priority::High),
        PriorityFilter::Only(Priority::Medium),
        PriorityFilter::Only(Priority::Low),
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PriorityFilter::All => "all",
            PriorityFilter::Only(Priority::High) => "high",
            PriorityFilter::Only(Priority::Medium) => "medium",
            PriorityFilter::Only(Priority::Low) => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriorityFilter::All => "All Priorities",
            PriorityFilter::Only(p) => p.label(),
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key() == key)
            .unwrap_or_default()
    }

    fn accepts(&self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => *p == priority,
        }
    }
}

/// Items passing both filters, in input order.
pub fn filter_items<'a>(
    items: &'a [ActionableItem],
    status: StatusFilter,
    priority: PriorityFilter,
) -> Vec<&'a ActionableItem> {
    items
        .iter()
        .filter(|i| status.accepts(i.status) && priority.accepts(i.priority))
        .collect()
}

/// Flips todo/done on the item with `id`. Returns false when no item matches.
pub fn toggle_status(items: &mut [ActionableItem], id: &str) -> bool {
    match items.iter_mut().find(|i| i.id == id) {
        Some(item) => {
            item.status = item.status.toggled();
            true
        }
        None => false,
    }
}

pub fn pending_count(items: &[ActionableItem]) -> usize {
    items.iter().filter(|i| i.status == ItemStatus::Todo).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_actionable_item::aggregate::ActionCategory;

    fn item(id: &str, priority: Priority, status: ItemStatus) -> ActionableItem {
        ActionableItem {
            id: id.into(),
            title: format!("Item {id}"),
            description: String::new(),
            category: ActionCategory::Inventory,
            priority,
            status,
            action_page: None,
        }
    }

    fn sample() -> Vec<ActionableItem> {
        vec![
            item("1", Priority::High, ItemStatus::Todo),
            item("2", Priority::High, ItemStatus::Todo),
            item("3", Priority::Medium, ItemStatus::Todo),
            item("4", Priority::Low, ItemStatus::Todo),
            item("5", Priority::Medium, ItemStatus::Done),
        ]
    }

    #[test]
    fn test_default_filters_show_todo_items() {
        let items = sample();
        let visible = filter_items(&items, StatusFilter::default(), PriorityFilter::default());
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|i| i.status == ItemStatus::Todo));
    }

    #[test]
    fn test_filters_combine() {
        let items = sample();
        let visible = filter_items(
            &items,
            StatusFilter::All,
            PriorityFilter::Only(Priority::Medium),
        );
        let ids: Vec<_> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "5"]);

        let done_high = filter_items(&items, StatusFilter::Done, PriorityFilter::Only(Priority::High));
        assert!(done_high.is_empty());
    }

    #[test]
    fn test_toggle_status_moves_item_between_filters() {
        let mut items = sample();
        assert_eq!(pending_count(&items), 4);

        assert!(toggle_status(&mut items, "1"));
        assert_eq!(pending_count(&items), 3);
        let todo = filter_items(&items, StatusFilter::Todo, PriorityFilter::All);
        assert!(todo.iter().all(|i| i.id != "1"));

        assert!(toggle_status(&mut items, "1"));
        assert_eq!(pending_count(&items), 4);
        assert!(!toggle_status(&mut items, "missing"));
    }

    #[test]
    fn test_filter_keys() {
        for f in StatusFilter::ALL {
            assert_eq!(StatusFilter::from_key(f.key()), f);
        }
        for f in PriorityFilter::ALL {
            assert_eq!(PriorityFilter::from_key(f.key()), f);
        }
        assert_eq!(StatusFilter::from_key("x"), StatusFilter::Todo);
    }
}
