pub mod alert;
pub mod page_header;
pub mod table;
pub mod stat_card;

pub use alert::AlertBanner;
pub use page_header::PageHeader;
pub use stat_card::{StatCard, StatTone};
