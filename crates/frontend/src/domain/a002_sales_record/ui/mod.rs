pub mod list;

pub use list::TopSellingPage;
