pub mod aggregate;
pub mod csv_export;
