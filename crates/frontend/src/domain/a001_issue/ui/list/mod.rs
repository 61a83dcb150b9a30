use crate::shared::components::table::{ColumnDef, DataTable};
use crate::shared::list_utils::Sortable;
use contracts::domain::a001_issue::IssueRow;
use contracts::shared::display::{Colored, Human, Order, Sanitize, Shortened};
use contracts::shared::table_options::TableOptions;
use leptos::prelude::*;
use std::cmp::Ordering;

/// ID таблицы задач; подпись таблицы получает ID `myTable_info`
pub const ISSUE_TABLE_ID: &str = "myTable";

impl Sortable for IssueRow {
    fn compare_by_column(&self, other: &Self, column: usize) -> Ordering {
        match column {
            IssueRow::COLUMN_TITLE => self
                .title
                .to_lowercase()
                .cmp(&other.title.to_lowercase()),
            IssueRow::COLUMN_DIFFICULTY => self.difficulty.order().cmp(&other.difficulty.order()),
            IssueRow::COLUMN_STATUS => self.status.order().cmp(&other.status.order()),
            IssueRow::COLUMN_TYPE => self.kind.order().cmp(&other.kind.order()),
            _ => Ordering::Equal,
        }
    }
}

fn issue_columns() -> Vec<ColumnDef> {
    let [title, difficulty, status, kind] = IssueRow::column_labels();
    vec![
        ColumnDef::new(title, 260.0),
        ColumnDef::new(difficulty, 110.0),
        ColumnDef::new(status, 90.0),
        ColumnDef::new(kind, 120.0),
    ]
}

fn issue_key(row: &IssueRow) -> u64 {
    row.id
}

/// Текст ячейки (для раскрываемой строки)
fn issue_cell_text(row: &IssueRow, column: usize) -> String {
    match column {
        IssueRow::COLUMN_TITLE => row.title.sanitize().shortened(),
        IssueRow::COLUMN_DIFFICULTY => row.difficulty.human(),
        IssueRow::COLUMN_STATUS => row.status.human(),
        IssueRow::COLUMN_TYPE => row.kind.human(),
        _ => String::new(),
    }
}

fn colored(text: String, color: &str) -> AnyView {
    if color.is_empty() {
        view! { <span>{text}</span> }.into_any()
    } else {
        view! { <span style=format!("color: {};", color)>{text}</span> }.into_any()
    }
}

fn render_issue_cell(row: &IssueRow, column: usize) -> AnyView {
    match column {
        IssueRow::COLUMN_TITLE => {
            let title = row.title.sanitize();
            view! {
                <a href=row.link.clone() target="_blank" rel="noopener" title=title.clone()>
                    {title.shortened()}
                </a>
                <span class="issue-creator">" by " {row.creator.clone()}</span>
            }
            .into_any()
        }
        IssueRow::COLUMN_DIFFICULTY => {
            colored(row.difficulty.human(), row.difficulty.color())
        }
        IssueRow::COLUMN_STATUS => colored(row.status.human(), row.status.color()),
        IssueRow::COLUMN_TYPE => colored(row.kind.human(), row.kind.color()),
        _ => view! { <span></span> }.into_any(),
    }
}

/// Таблица открытых задач
#[component]
pub fn IssueList(rows: Vec<IssueRow>) -> impl IntoView {
    view! {
        <DataTable
            table_id=ISSUE_TABLE_ID
            options=TableOptions::issue_board()
            columns=issue_columns()
            rows=rows
            row_key=issue_key
            render_cell=render_issue_cell
            cell_text=issue_cell_text
        />
    }
}
