pub mod erp;
pub mod preview;
pub mod request;
