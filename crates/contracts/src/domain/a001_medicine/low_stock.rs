//! Sorting and filtering for the low-stock table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::aggregate::Medicine;
use crate::shared::sort::{SortDirection, SortState};

/// Default "low" threshold on the status column.
pub const DEFAULT_STATUS_THRESHOLD: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LowStockSortField {
    Name,
    Stock,
    MinRequired,
    Expiry,
}

impl LowStockSortField {
    pub fn compare(&self, a: &Medicine, b: &Medicine) -> Ordering {
        match self {
            LowStockSortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            LowStockSortField::Stock => a.stock.cmp(&b.stock),
            LowStockSortField::MinRequired => a.min_required.cmp(&b.min_required),
            LowStockSortField::Expiry => a.expiry.cmp(&b.expiry),
        }
    }
}

pub type LowStockSort = SortState<LowStockSortField>;

pub fn default_sort() -> LowStockSort {
    SortState::new(LowStockSortField::Stock, SortDirection::Ascending)
}

/// Stable sort; equal keys keep their input order in both directions.
pub fn sort_medicines(medicines: &mut [Medicine], sort: LowStockSort) {
    medicines.sort_by(|a, b| sort.direction.apply(sort.field.compare(a, b)));
}

/// Case-insensitive substring match on the name. An empty filter keeps all.
pub fn filter_by_name<'a>(medicines: &'a [Medicine], filter: &str) -> Vec<&'a Medicine> {
    let needle = filter.trim().to_lowercase();
    medicines
        .iter()
        .filter(|m| needle.is_empty() || m.name.to_lowercase().contains(&needle))
        .collect()
}

/// Filtered then sorted copy, as shown by the table.
pub fn visible_rows(medicines: &[Medicine], filter: &str, sort: LowStockSort) -> Vec<Medicine> {
    let mut rows: Vec<Medicine> = filter_by_name(medicines, filter)
        .into_iter()
        .cloned()
        .collect();
    sort_medicines(&mut rows, sort);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn med(id: &str, name: &str, stock: u32, min_required: u32, expiry: (i32, u32, u32)) -> Medicine {
        Medicine {
            id: id.into(),
            name: name.into(),
            batch: format!("B-{id}"),
            stock,
            price: Some(10.0),
            expiry: NaiveDate::from_ymd_opt(expiry.0, expiry.1, expiry.2).unwrap(),
            min_required,
        }
    }

    fn sample() -> Vec<Medicine> {
        vec![
            med("1", "Paracetamol 500mg", 8, 20, (2025, 12, 31)),
            med("2", "amoxicillin 250mg", 5, 15, (2024, 8, 30)),
            med("3", "Cetirizine 10mg", 12, 25, (2026, 5, 20)),
            med("4", "Omeprazole 20mg", 0, 10, (2025, 10, 15)),
            med("5", "Metformin 500mg", 5, 30, (2024, 9, 25)),
        ]
    }

    fn ids(rows: &[Medicine]) -> Vec<&str> {
        rows.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_stock_ascending() {
        let rows = visible_rows(&sample(), "", default_sort());
        assert_eq!(ids(&rows), vec!["4", "2", "5", "1", "3"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let sort = SortState::new(LowStockSortField::Name, SortDirection::Ascending);
        let rows = visible_rows(&sample(), "", sort);
        assert_eq!(rows[0].name, "amoxicillin 250mg");
    }

    #[test]
    fn test_descending_keeps_ties_in_input_order() {
        let sort = SortState::new(LowStockSortField::Stock, SortDirection::Descending);
        let rows = visible_rows(&sample(), "", sort);
        assert_eq!(ids(&rows), vec!["3", "1", "2", "5", "4"]);
    }

    #[test]
    fn test_double_toggle_restores_ascending_order() {
        // Ties on every column, including a name differing only in case.
        let mut data = sample();
        data.push(med("6", "Amoxicillin 250mg", 8, 15, (2025, 12, 31)));
        data.push(med("7", "Cetirizine 10mg", 0, 30, (2024, 8, 30)));

        for field in [
            LowStockSortField::Name,
            LowStockSortField::Stock,
            LowStockSortField::MinRequired,
            LowStockSortField::Expiry,
        ] {
            let ascending = SortState::new(field, SortDirection::Ascending);
            let original = visible_rows(&data, "", ascending);

            let descending = ascending.request(field);
            assert_eq!(descending.direction, SortDirection::Descending, "{field:?}");

            let again = visible_rows(&data, "", descending.request(field));
            assert_eq!(ids(&original), ids(&again), "{field:?}");
        }
    }

    #[test]
    fn test_name_ties_keep_input_order() {
        let data = vec![
            med("a", "amoxicillin 250mg", 5, 15, (2024, 8, 30)),
            med("b", "Amoxicillin 250mg", 8, 15, (2025, 12, 31)),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let rows = visible_rows(&data, "", SortState::new(LowStockSortField::Name, direction));
            assert_eq!(ids(&rows), vec!["a", "b"]);
        }
    }

    #[test]
    fn test_expiry_sort() {
        let sort = SortState::new(LowStockSortField::Expiry, SortDirection::Ascending);
        let rows = visible_rows(&sample(), "", sort);
        assert_eq!(rows[0].id, "2");
        assert_eq!(rows[4].id, "3");
    }

    #[test]
    fn test_filter_by_name() {
        let data = sample();
        assert_eq!(filter_by_name(&data, "").len(), 5);
        assert_eq!(filter_by_name(&data, "  ").len(), 5);
        let hits = filter_by_name(&data, "MG");
        assert_eq!(hits.len(), 5);
        let hits = filter_by_name(&data, "amox");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
        assert!(filter_by_name(&data, "insulin").is_empty());
    }
}
