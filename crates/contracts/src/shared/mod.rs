pub mod display;
pub mod table_options;
