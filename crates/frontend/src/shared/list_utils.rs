/// Сортировка строк таблицы по цепочке колонок и обработка кликов по заголовкам
use contracts::shared::table_options::{ColumnOrder, SortDirection};
use std::cmp::Ordering;

/// Trait для строк, которые умеют сравниваться по индексу колонки
pub trait Sortable {
    /// Сравнивает два объекта по указанной колонке (по возрастанию)
    fn compare_by_column(&self, other: &Self, column: usize) -> Ordering;
}

/// Сортирует строки по цепочке `(колонка, направление)`.
///
/// Первая колонка цепочки главная, следующие разрешают равенства.
/// Сортировка стабильная: полностью равные строки сохраняют исходный порядок.
pub fn sort_by_order<T: Sortable>(items: &mut [T], order: &[ColumnOrder]) {
    items.sort_by(|a, b| {
        order
            .iter()
            .map(|(column, direction)| direction.apply(a.compare_by_column(b, *column)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

/// Новая цепочка сортировки после клика по заголовку колонки.
///
/// Обычный клик делает колонку единственной (по возрастанию) или меняет её
/// направление, если она уже главная. Клик с Shift добавляет колонку в конец
/// цепочки или меняет направление, если она там уже есть.
pub fn toggle_order(order: &[ColumnOrder], column: usize, extend: bool) -> Vec<ColumnOrder> {
    if extend {
        let mut next = order.to_vec();
        match next.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = entry.1.flipped(),
            None => next.push((column, SortDirection::Asc)),
        }
        return next;
    }

    match order.first() {
        Some((first, direction)) if *first == column => vec![(column, direction.flipped())],
        _ => vec![(column, SortDirection::Asc)],
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(order: &[ColumnOrder], column: usize) -> &'static str {
    match order.iter().find(|(c, _)| *c == column) {
        Some((_, SortDirection::Asc)) => " ▲",
        Some((_, SortDirection::Desc)) => " ▼",
        None => " ⇅",
    }
}

/// CSS класс индикатора: активна только главная колонка цепочки
pub fn get_sort_class(order: &[ColumnOrder], column: usize) -> &'static str {
    match order.iter().position(|(c, _)| *c == column) {
        Some(0) => "sort-indicator sort-indicator--active",
        Some(_) => "sort-indicator sort-indicator--secondary",
        None => "sort-indicator",
    }
}
