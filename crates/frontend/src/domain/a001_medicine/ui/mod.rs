pub mod list;

pub use list::LowStockPage;
