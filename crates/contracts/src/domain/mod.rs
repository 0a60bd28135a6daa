pub mod a001_medicine;
pub mod a002_sales_record;
pub mod a003_actionable_item;
pub mod a004_ai_advisor;
