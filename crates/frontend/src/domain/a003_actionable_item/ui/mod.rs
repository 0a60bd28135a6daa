pub mod list;

pub use list::ActionCenterPage;
