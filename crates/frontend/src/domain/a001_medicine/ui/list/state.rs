use contracts::domain::a001_medicine::aggregate::Medicine;
use contracts::domain::a001_medicine::low_stock::{
    default_sort, visible_rows, LowStockSort, DEFAULT_STATUS_THRESHOLD,
};
use leptos::prelude::*;

/// Table controls of the low-stock page.
#[derive(Clone, Debug)]
pub struct LowStockState {
    pub threshold: u32,
    pub filter: String,
    pub sort: LowStockSort,
}

impl Default for LowStockState {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_STATUS_THRESHOLD,
            filter: String::new(),
            sort: default_sort(),
        }
    }
}

impl LowStockState {
    pub fn rows(&self, medicines: &[Medicine]) -> Vec<Medicine> {
        visible_rows(medicines, &self.filter, self.sort)
    }

    /// Ignores input that is not a non-negative integer.
    pub fn set_threshold(&mut self, raw: &str) {
        if let Ok(value) = raw.trim().parse::<u32>() {
            self.threshold = value;
        }
    }
}

pub fn create_state() -> RwSignal<LowStockState> {
    RwSignal::new(LowStockState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_input() {
        let mut state = LowStockState::default();
        assert_eq!(state.threshold, 10);
        state.set_threshold("25");
        assert_eq!(state.threshold, 25);
        state.set_threshold("-3");
        assert_eq!(state.threshold, 25);
        state.set_threshold("");
        assert_eq!(state.threshold, 25);
    }
}
