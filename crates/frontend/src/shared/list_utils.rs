//! Sort helpers for table headers.
use contracts::shared::sort::{SortDirection, SortState};

/// Arrow shown next to a column header.
pub fn get_sort_indicator<F: Copy + PartialEq>(sort: &SortState<F>, field: F) -> &'static str {
    if !sort.is_active(field) {
        return " ⇅";
    }
    match sort.direction {
        SortDirection::Ascending => " ▲",
        SortDirection::Descending => " ▼",
    }
}

/// CSS class of the indicator: the active column is highlighted.
pub fn get_sort_class<F: Copy + PartialEq>(sort: &SortState<F>, field: F) -> &'static str {
    if sort.is_active(field) {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug)]
    enum Col {
        Name,
        Stock,
    }

    #[test]
    fn test_sort_indicator() {
        let sort = SortState::new(Col::Stock, SortDirection::Ascending);
        assert_eq!(get_sort_indicator(&sort, Col::Stock), " ▲");
        assert_eq!(get_sort_indicator(&sort, Col::Name), " ⇅");
        let sort = sort.request(Col::Stock);
        assert_eq!(get_sort_indicator(&sort, Col::Stock), " ▼");
        assert_eq!(get_sort_class(&sort, Col::Stock), "sort-icon active");
        assert_eq!(get_sort_class(&sort, Col::Name), "sort-icon");
    }
}
