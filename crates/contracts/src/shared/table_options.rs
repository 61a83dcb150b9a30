//! Declarative options of the table widget.
//!
//! Field names follow the well-known data table option names
//! (`autoWidth`, `fixedColumns.heightMatch`, `order: [[2, "asc"]]`), so a
//! configuration can be written in JSON exactly as it appears in page markup.

use serde::{Deserialize, Serialize};

/// Направление сортировки колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Один элемент цепочки сортировки: (индекс колонки, направление)
pub type ColumnOrder = (usize, SortDirection);

/// Гранулярность выбора
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectItems {
    Row,
    Column,
    Cell,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOptions {
    pub items: SelectItems,
}

/// Синхронизация высоты строк зафиксированных колонок
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightMatch {
    None,
    #[default]
    Semiauto,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FixedColumns {
    /// Количество колонок, закреплённых слева
    pub left: usize,
    pub height_match: HeightMatch,
}

impl Default for FixedColumns {
    fn default() -> Self {
        Self {
            left: 1,
            height_match: HeightMatch::default(),
        }
    }
}

/// Options of one table widget instance. Not mutated after creation.
///
/// `Default` gives the widget's stock behaviour; [`TableOptions::issue_board`]
/// is the configuration used by the issue page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    pub paging: bool,
    pub ordering: bool,
    pub select: Option<SelectOptions>,
    pub auto_width: bool,
    pub responsive: bool,
    pub fixed_columns: Option<FixedColumns>,
    pub order: Vec<ColumnOrder>,
    pub searching: bool,
    /// Show the "Showing 1 to N of N entries" label
    pub info: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            paging: true,
            ordering: true,
            select: None,
            auto_width: true,
            responsive: false,
            fixed_columns: None,
            order: vec![(0, SortDirection::Asc)],
            searching: true,
            info: true,
        }
    }
}

impl TableOptions {
    /// Options of the issue table: all rows, no search, free issues first.
    ///
    /// Column layout is Title (0), Difficulty (1), Status (2), Type (3); the
    /// default order is status, then difficulty, then type, then title.
    pub fn issue_board() -> Self {
        Self {
            paging: false,
            ordering: true,
            select: Some(SelectOptions {
                items: SelectItems::Row,
            }),
            auto_width: false,
            responsive: true,
            fixed_columns: Some(FixedColumns {
                left: 1,
                height_match: HeightMatch::None,
            }),
            order: vec![
                (2, SortDirection::Asc),
                (1, SortDirection::Asc),
                (3, SortDirection::Asc),
                (0, SortDirection::Asc),
            ],
            searching: false,
            info: true,
        }
    }

    pub fn selects_rows(&self) -> bool {
        matches!(
            self.select,
            Some(SelectOptions {
                items: SelectItems::Row
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_board_options() {
        let options = TableOptions::issue_board();
        assert!(!options.paging);
        assert!(options.ordering);
        assert!(!options.searching);
        assert!(!options.auto_width);
        assert!(options.responsive);
        assert!(options.selects_rows());
        assert_eq!(
            options.fixed_columns.as_ref().map(|f| f.height_match),
            Some(HeightMatch::None)
        );
        let columns: Vec<usize> = options.order.iter().map(|(c, _)| *c).collect();
        assert_eq!(columns, vec![2, 1, 3, 0]);
        assert!(options
            .order
            .iter()
            .all(|(_, dir)| *dir == SortDirection::Asc));
    }

    #[test]
    fn test_parse_markup_style_json() {
        let json = r#"{
            "paging": false,
            "ordering": true,
            "select": { "items": "row" },
            "autoWidth": false,
            "responsive": true,
            "fixedColumns": { "heightMatch": "none" },
            "order": [[2, "asc"], [1, "asc"], [3, "asc"], [0, "asc"]],
            "searching": false
        }"#;
        let parsed: TableOptions = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, TableOptions::issue_board());
    }

    #[test]
    fn test_missing_fields_fall_back_to_widget_defaults() {
        let parsed: TableOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, TableOptions::default());
        assert!(parsed.paging);
        assert!(!parsed.selects_rows());
    }

    #[test]
    fn test_direction_helpers() {
        use std::cmp::Ordering;
        assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
    }
}
