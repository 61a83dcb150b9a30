pub mod components;
pub mod list_utils;
pub mod table_utils;
pub mod theme;
