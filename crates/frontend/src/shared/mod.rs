pub mod api_utils;
pub mod charts;
pub mod components;
pub mod data;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod load_state;
pub mod mount_guard;
pub mod page_frame;
pub mod page_standard;
