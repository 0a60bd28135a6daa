pub mod aggregate;
pub mod low_stock;
