pub mod aggregate;
pub mod chat;
