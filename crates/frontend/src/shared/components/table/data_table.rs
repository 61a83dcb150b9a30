//! Таблица с сортировкой по цепочке колонок, выбором строк,
//! адаптивным скрытием колонок и закреплёнными слева колонками.
//!
//! Параметры берутся из [`TableOptions`] и после создания не меняются.
//! Пагинации и поиска нет: строки показываются все сразу.

use super::row_selection::{RowSelection, SelectModifier};
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::list_utils::{sort_by_order, toggle_order, Sortable};
use crate::shared::table_utils::{
    info_label_id, info_text, measure_width, visible_columns, wrapper_id,
};
use contracts::shared::table_options::TableOptions;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Описание колонки таблицы
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub label: &'static str,
    /// Ширина, ниже которой колонка уходит в раскрываемую строку
    pub min_width: f64,
    pub orderable: bool,
}

impl ColumnDef {
    pub fn new(label: &'static str, min_width: f64) -> Self {
        Self {
            label,
            min_width,
            orderable: true,
        }
    }
}

#[component]
pub fn DataTable<T>(
    /// ID элемента `<table>`; подпись получает ID `{table_id}_info`
    #[prop(into)]
    table_id: String,
    options: TableOptions,
    columns: Vec<ColumnDef>,
    rows: Vec<T>,
    /// Уникальный ключ строки (для выбора и раскрытия)
    row_key: fn(&T) -> u64,
    /// Содержимое ячейки
    render_cell: fn(&T, usize) -> AnyView,
    /// Текст ячейки для раскрываемой строки со скрытыми колонками
    cell_text: fn(&T, usize) -> String,
) -> impl IntoView
where
    T: Sortable + Clone + Send + Sync + 'static,
{
    log::debug!(
        "{}: init {}",
        table_id,
        serde_json::to_string(&options).unwrap_or_default()
    );
    if options.paging {
        log::warn!("{}: paging is not supported, all rows are shown", table_id);
    }
    if options.searching {
        log::warn!("{}: searching is not supported", table_id);
    }

    let total = rows.len();
    let column_count = columns.len();
    let min_widths: Vec<f64> = columns.iter().map(|c| c.min_width).collect();
    let columns = StoredValue::new(columns);
    let rows = StoredValue::new(rows);
    // Ключи строк в порядке отображения, для выбора диапазона
    let keys = StoredValue::new(Vec::<u64>::new());

    let ordering = options.ordering;
    let selects_rows = options.selects_rows();
    let responsive = options.responsive;
    let show_info = options.info;
    let fixed_left = options.fixed_columns.as_ref().map_or(0, |f| f.left);

    let order = RwSignal::new(options.order.clone());
    let selection = RwSignal::new(RowSelection::default());
    let expanded = RwSignal::new(HashSet::<u64>::new());
    let available_width = RwSignal::new(None::<f64>);

    let visible = Memo::new(move |_| match available_width.get() {
        Some(width) if responsive => visible_columns(&min_widths, width),
        _ => vec![true; column_count],
    });

    let wrapper = wrapper_id(&table_id);
    if responsive {
        let wrapper_for_effect = wrapper.clone();
        Effect::new(move |_| {
            available_width.set(measure_width(&wrapper_for_effect));

            let wrapper_for_resize = wrapper_for_effect.clone();
            let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
                available_width.set(measure_width(&wrapper_for_resize));
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            }
            closure.forget(); // лежит в window до выгрузки страницы
        });
    }

    let on_sort = Callback::new(move |(column, extend): (usize, bool)| {
        order.update(|o| {
            let next = toggle_order(o, column, extend);
            *o = next;
        });
    });

    let header = move || {
        let vis = visible.get();
        columns.with_value(|cols| {
            cols.iter()
                .enumerate()
                .filter(|(column, _)| vis[*column])
                .map(|(column, col)| {
                    view! {
                        <SortableHeaderCell
                            label=col.label
                            column=column
                            order=order
                            on_sort=on_sort
                            orderable=ordering && col.orderable
                            fixed=column < fixed_left
                            min_width=col.min_width
                        />
                    }
                })
                .collect_view()
        })
    };

    let body = move || {
        let mut data = rows.get_value();
        if ordering {
            order.with(|o| sort_by_order(&mut data, o));
        }
        keys.set_value(data.iter().map(row_key).collect());

        let vis = visible.get();
        let hidden: Vec<usize> = (0..column_count).filter(|c| !vis[*c]).collect();
        let visible_count = column_count - hidden.len();

        data.into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let key = row_key(&row);

                let row_class = move || {
                    let parity = if idx % 2 == 0 { "even" } else { "odd" };
                    if selection.with(|s| s.is_selected(key)) {
                        format!("{} selected", parity)
                    } else {
                        parity.to_string()
                    }
                };

                let handle_row_click = move |ev: MouseEvent| {
                    if !selects_rows {
                        return;
                    }
                    let modifier =
                        SelectModifier::from_keys(ev.ctrl_key() || ev.meta_key(), ev.shift_key());
                    keys.with_value(|visible_keys| {
                        selection.update(|s| s.click(key, modifier, visible_keys))
                    });
                };

                let cells = (0..column_count)
                    .filter(|column| vis[*column])
                    .map(|column| {
                        let class = if column < fixed_left {
                            "table__cell dtfc-fixed-left"
                        } else {
                            "table__cell"
                        };
                        let control = (column == 0 && !hidden.is_empty()).then(|| {
                            view! {
                                <span
                                    class="dtr-control"
                                    on:click=move |ev: MouseEvent| {
                                        ev.stop_propagation();
                                        expanded.update(|e| {
                                            if !e.remove(&key) {
                                                e.insert(key);
                                            }
                                        });
                                    }
                                >
                                    {move || if expanded.with(|e| e.contains(&key)) { "−" } else { "+" }}
                                </span>
                            }
                        });
                        view! {
                            <td class=class>
                                {control}
                                {render_cell(&row, column)}
                            </td>
                        }
                    })
                    .collect_view();

                let details: Vec<(&'static str, String)> = hidden
                    .iter()
                    .map(|c| (columns.with_value(|cols| cols[*c].label), cell_text(&row, *c)))
                    .collect();

                let child_row = move || {
                    let open = expanded.with(|e| e.contains(&key)) && !details.is_empty();
                    open.then(|| {
                        let items = details
                            .iter()
                            .cloned()
                            .map(|(label, value)| {
                                view! {
                                    <li>
                                        <span class="dtr-title">{label}</span>
                                        " "
                                        <span class="dtr-data">{value}</span>
                                    </li>
                                }
                            })
                            .collect_view();
                        view! {
                            <tr class="child">
                                <td colspan=visible_count.to_string()>
                                    <ul class="dtr-details">{items}</ul>
                                </td>
                            </tr>
                        }
                    })
                };

                view! {
                    <tr class=row_class on:click=handle_row_click>
                        {cells}
                    </tr>
                    {child_row}
                }
            })
            .collect_view()
    };

    let table_style = if options.auto_width { "" } else { "width: 100%;" };
    let info_id = info_label_id(&table_id);

    view! {
        <div id=wrapper class="dataTables_wrapper" style="overflow-x: auto;">
            <table id=table_id class="display dataTable" style=table_style>
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
            {show_info.then(|| view! {
                <div id=info_id class="dataTables_info" role="status">
                    {info_text(total)}
                </div>
            })}
        </div>
    }
}
