//! Утилиты для таблиц: адаптивное скрытие колонок и подпись с количеством строк.
//!
//! # Использование
//!
//! ```ignore
//! use crate::shared::table_utils::{hide_info_label, visible_columns};
//!
//! // Какие колонки помещаются в контейнер шириной 480px
//! let visible = visible_columns(&[240.0, 120.0, 100.0, 120.0], 480.0);
//!
//! // После монтирования таблицы с id="my-table-id"
//! hide_info_label("my-table-id");
//! ```

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// ID подписи "Showing 1 to N of N entries" для таблицы
pub fn info_label_id(table_id: &str) -> String {
    format!("{}_info", table_id)
}

/// ID обёртки таблицы, по ширине которой решается, какие колонки видны
pub fn wrapper_id(table_id: &str) -> String {
    format!("{}_wrapper", table_id)
}

/// Текст подписи с количеством строк. Пагинации нет, поэтому показаны все.
pub fn info_text(total: usize) -> String {
    if total == 0 {
        "Showing 0 to 0 of 0 entries".to_string()
    } else {
        format!("Showing 1 to {} of {} entries", total, total)
    }
}

/// Видимость колонок при заданной ширине контейнера.
///
/// Колонки скрываются справа налево, пока оставшиеся не поместятся.
/// Первая колонка не скрывается никогда.
pub fn visible_columns(min_widths: &[f64], available: f64) -> Vec<bool> {
    let mut visible = vec![true; min_widths.len()];
    let mut total: f64 = min_widths.iter().sum();

    for column in (1..min_widths.len()).rev() {
        if total <= available {
            break;
        }
        visible[column] = false;
        total -= min_widths[column];
    }

    visible
}

/// Прячет подпись с количеством строк таблицы. Нет элемента — ничего не делает.
pub fn hide_info_label(table_id: &str) {
    let id = info_label_id(table_id);
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(label) = document.get_element_by_id(&id) else {
        log::debug!("{} not found, nothing to hide", id);
        return;
    };
    if let Ok(label) = label.dyn_into::<HtmlElement>() {
        let _ = label.style().set_property("display", "none");
    }
}

/// Текущая ширина обёртки таблицы в пикселях
pub fn measure_width(element_id: &str) -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
        .map(|el| f64::from(el.client_width()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTHS: [f64; 4] = [240.0, 120.0, 100.0, 120.0];

    #[test]
    fn test_everything_fits() {
        assert_eq!(visible_columns(&WIDTHS, 580.0), vec![true; 4]);
        assert_eq!(visible_columns(&WIDTHS, 1200.0), vec![true; 4]);
    }

    #[test]
    fn test_collapses_from_the_right() {
        assert_eq!(visible_columns(&WIDTHS, 579.0), vec![true, true, true, false]);
        assert_eq!(visible_columns(&WIDTHS, 360.0), vec![true, true, false, false]);
    }

    #[test]
    fn test_first_column_stays() {
        assert_eq!(visible_columns(&WIDTHS, 10.0), vec![true, false, false, false]);
        assert!(visible_columns(&[], 10.0).is_empty());
    }

    #[test]
    fn test_info_text() {
        assert_eq!(info_text(0), "Showing 0 to 0 of 0 entries");
        assert_eq!(info_text(250), "Showing 1 to 250 of 250 entries");
    }

    #[test]
    fn test_ids() {
        assert_eq!(info_label_id("myTable"), "myTable_info");
        assert_eq!(wrapper_id("myTable"), "myTable_wrapper");
    }
}
