pub mod chat;
pub mod insights;

pub use chat::AiChatPage;
pub use insights::AiInsightsPage;
