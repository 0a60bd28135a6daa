pub mod dashboard;

pub use dashboard::RoiTrackerPage;
