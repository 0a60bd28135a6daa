//! Keyword-matched answers for the data chat.

use serde::{Deserialize, Serialize};

use crate::domain::a001_medicine::aggregate::Medicine;
use crate::domain::a002_sales_record::aggregate::{top_by_revenue, SalesRecord};
use crate::shared::format::format_inr;

pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "Which medicines are low on stock?",
    "What is my top selling medicine?",
    "What is the total value of my inventory?",
    "Which items are completely out of stock?",
];

pub const GREETING: &str =
    "Hello! I'm your AI Data Assistant. Ask me anything about your pharmacy data.";

pub const ERROR_REPLY: &str =
    "Sorry, I encountered an error and couldn't process your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn failure() -> Self {
        Self {
            role: ChatRole::Assistant,
            text: ERROR_REPLY.to_string(),
            is_error: true,
        }
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING)
    }
}

/// Answers `question` from the inventory and sales data. The first keyword
/// rule that matches wins; anything unrecognised gets a short data summary.
pub fn answer_question(question: &str, medicines: &[Medicine], sales: &[SalesRecord]) -> String {
    let q = question.to_lowercase();

    if q.contains("low on stock") || q.contains("low stock") {
        let names: Vec<&str> = medicines
            .iter()
            .filter(|m| m.stock < m.min_required)
            .map(|m| m.name.as_str())
            .collect();
        return format!(
            "The following medicines are currently low on stock: {}.",
            names.join(", ")
        );
    }

    if q.contains("top selling") {
        return match top_by_revenue(sales) {
            Some(top) => format!(
                "Your top-selling medicine by revenue is {}, which generated {}.",
                top.name,
                format_inr(top.total_revenue)
            ),
            None => "There are no sales records yet.".to_string(),
        };
    }

    if q.contains("inventory value") {
        let total: f64 = medicines.iter().map(Medicine::inventory_value).sum();
        return format!(
            "The total value of your current inventory is {}.",
            format_inr(total)
        );
    }

    if q.contains("out of stock") {
        let names: Vec<&str> = medicines
            .iter()
            .filter(|m| m.is_out_of_stock())
            .map(|m| m.name.as_str())
            .collect();
        return if names.is_empty() {
            "Good news! Nothing is completely out of stock right now.".to_string()
        } else {
            format!("You are completely out of stock for: {}.", names.join(", "))
        };
    }

    let revenue: f64 = sales.iter().map(|s| s.total_revenue).sum();
    format!(
        "I'm sorry, I don't have the specific information to answer that. Here's what I can tell you about your data: You have {} unique medicines in your inventory, and your total sales revenue in the last period was {}.",
        medicines.len(),
        format_inr(revenue)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn med(name: &str, stock: u32, min_required: u32, price: f64) -> Medicine {
        Medicine {
            id: name.into(),
            name: name.into(),
            batch: "B".into(),
            stock,
            price: Some(price),
            expiry: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            min_required,
        }
    }

    fn sale(name: &str, revenue: f64) -> SalesRecord {
        SalesRecord {
            id: name.into(),
            medicine_id: name.into(),
            name: name.into(),
            units_sold: 10,
            total_revenue: revenue,
        }
    }

    fn data() -> (Vec<Medicine>, Vec<SalesRecord>) {
        (
            vec![
                med("Paracetamol", 8, 20, 25.0),
                med("Aspirin", 50, 40, 15.0),
                med("Omeprazole", 0, 10, 60.0),
                med("Ibuprofen", 25, 25, 35.0),
            ],
            vec![sale("Paracetamol", 13000.0), sale("Aspirin", 17500.0)],
        )
    }

    #[test]
    fn test_low_stock_uses_strict_comparison() {
        let (meds, sales) = data();
        let answer = answer_question("Which medicines are LOW ON STOCK?", &meds, &sales);
        assert_eq!(
            answer,
            "The following medicines are currently low on stock: Paracetamol, Omeprazole."
        );
    }

    #[test]
    fn test_top_selling() {
        let (meds, sales) = data();
        let answer = answer_question("What is my top selling medicine?", &meds, &sales);
        assert_eq!(
            answer,
            "Your top-selling medicine by revenue is Aspirin, which generated ₹17,500."
        );
    }

    #[test]
    fn test_top_selling_tie_goes_to_first_record() {
        let (meds, _) = data();
        let sales = vec![sale("Aspirin", 17500.0), sale("Ibuprofen", 17500.0)];
        let answer = answer_question("top selling?", &meds, &sales);
        assert!(answer.contains("is Aspirin,"), "{answer}");
    }

    #[test]
    fn test_inventory_value() {
        let (meds, sales) = data();
        let answer = answer_question("inventory value please", &meds, &sales);
        // 200 + 750 + 0 + 875
        assert_eq!(answer, "The total value of your current inventory is ₹1,825.");
    }

    #[test]
    fn test_out_of_stock_both_branches() {
        let (meds, sales) = data();
        let answer = answer_question("Which items are completely out of stock?", &meds, &sales);
        assert_eq!(answer, "You are completely out of stock for: Omeprazole.");

        let stocked: Vec<_> = meds.into_iter().filter(|m| m.stock > 0).collect();
        let answer = answer_question("out of stock?", &stocked, &sales);
        assert!(answer.starts_with("Good news!"));
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let (meds, sales) = data();
        let answer = answer_question("low stock or out of stock?", &meds, &sales);
        assert!(answer.starts_with("The following medicines"));
    }

    #[test]
    fn test_fallback_summarises_data() {
        let (meds, sales) = data();
        let answer = answer_question("hello", &meds, &sales);
        assert!(answer.contains("You have 4 unique medicines"));
        assert!(answer.contains("₹30,500"));
    }

    #[test]
    fn test_failure_message_is_flagged() {
        let msg = ChatMessage::failure();
        assert_eq!(msg.role, ChatRole::Assistant);
        assert!(msg.is_error);
        assert!(!ChatMessage::greeting().is_error);
    }
}
