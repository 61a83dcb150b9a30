pub mod data_table;
pub mod row_selection;
pub mod sortable_header_cell;

pub use data_table::{ColumnDef, DataTable};
pub use row_selection::{RowSelection, SelectModifier};
pub use sortable_header_cell::SortableHeaderCell;
