pub mod dashboard;

pub use dashboard::VisualizationsPage;
