use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceCategory {
    Inventory,
    Sales,
    Strategy,
}

impl AdviceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            AdviceCategory::Inventory => "Inventory",
            AdviceCategory::Sales => "Sales",
            AdviceCategory::Strategy => "Strategy",
        }
    }
}

/// Short recommendation shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessAdvice {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: AdviceCategory,
}

/// Longer observation produced by the insights generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub title: String,
    pub message: String,
    /// Free-form tag such as "Inventory" or "Financial".
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}
