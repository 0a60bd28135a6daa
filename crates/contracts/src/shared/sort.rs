use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Table sort selection: which column, which way.
///
/// `F` is a closed enum of sortable columns, so there is no lookup by
/// field name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the active column flips ascending to descending,
    /// anything else starts ascending.
    pub fn request(self, field: F) -> Self {
        let direction = if self.field == field {
            self.direction.toggled()
        } else {
            SortDirection::Ascending
        };
        Self { field, direction }
    }

    pub fn is_active(&self, field: F) -> bool {
        self.field == field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Column {
        A,
        B,
    }

    #[test]
    fn test_request_same_field_flips_direction() {
        let state = SortState::new(Column::A, SortDirection::Ascending);
        let state = state.request(Column::A);
        assert_eq!(state.direction, SortDirection::Descending);
        let state = state.request(Column::A);
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn test_request_other_field_starts_ascending() {
        let state = SortState::new(Column::A, SortDirection::Descending);
        let state = state.request(Column::B);
        assert_eq!(state.field, Column::B);
        assert_eq!(state.direction, SortDirection::Ascending);
        assert!(state.is_active(Column::B));
        assert!(!state.is_active(Column::A));
    }

    #[test]
    fn test_apply() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Ascending.toggled(), SortDirection::Descending);
    }
}
