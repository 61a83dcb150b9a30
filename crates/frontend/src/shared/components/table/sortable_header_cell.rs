//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Status"
//!     column=2
//!     order=Signal::derive(move || order.get())
//!     on_sort=Callback::new(move |(column, extend)| {
//!         order.update(|o| *o = toggle_order(o, column, extend))
//!     })
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table_options::ColumnOrder;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Компонент сортируемой ячейки заголовка таблицы
///
/// Автоматически:
/// - Добавляет индикатор сортировки (▲▼⇅)
/// - Клик сортирует по колонке, Shift+клик добавляет её в цепочку
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Индекс колонки
    column: usize,

    /// Текущая цепочка сортировки
    #[prop(into)]
    order: Signal<Vec<ColumnOrder>>,

    /// Callback при клике: (колонка, добавить в цепочку)
    on_sort: Callback<(usize, bool)>,

    /// Сортировка разрешена
    #[prop(optional, default = true)]
    orderable: bool,

    /// Колонка закреплена слева
    #[prop(optional)]
    fixed: bool,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,
) -> impl IntoView {
    let handle_click = move |ev: MouseEvent| {
        if orderable {
            on_sort.run((column, ev.shift_key()));
        }
    };

    let class = if fixed {
        "table__header-cell dtfc-fixed-left"
    } else {
        "table__header-cell"
    };
    let cursor = if orderable { "pointer" } else { "default" };

    view! {
        <th
            class=class
            style=format!("min-width: {}px; cursor: {}; user-select: none;", min_width, cursor)
            on:click=handle_click
        >
            {label}
            <Show when=move || orderable>
                <span class=move || order.with(|o| get_sort_class(o, column))>
                    {move || order.with(|o| get_sort_indicator(o, column))}
                </span>
            </Show>
        </th>
    }
}
