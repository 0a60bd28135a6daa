pub mod d400_roi;
pub mod d401_visualizations;
pub mod d402_weekly_report;
pub mod d403_quick_stats;
