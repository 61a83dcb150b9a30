//! Выбор строк таблицы в стиле файлового менеджера ОС
//!
//! - клик выбирает только эту строку (повторный клик по единственной снимает выбор)
//! - Ctrl/Cmd+клик добавляет или убирает строку
//! - Shift+клик выбирает диапазон от последней кликнутой строки

use std::collections::BTreeSet;

/// Модификатор клика по строке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectModifier {
    None,
    Toggle,
    Range,
}

impl SelectModifier {
    pub fn from_keys(ctrl_or_meta: bool, shift: bool) -> Self {
        if shift {
            SelectModifier::Range
        } else if ctrl_or_meta {
            SelectModifier::Toggle
        } else {
            SelectModifier::None
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSelection {
    selected: BTreeSet<u64>,
    anchor: Option<u64>,
}

impl RowSelection {
    pub fn is_selected(&self, key: u64) -> bool {
        self.selected.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Обработка клика по строке `key`; `visible` — ключи строк в текущем порядке
    pub fn click(&mut self, key: u64, modifier: SelectModifier, visible: &[u64]) {
        match modifier {
            SelectModifier::None => {
                let only_this = self.selected.len() == 1 && self.selected.contains(&key);
                self.selected.clear();
                if !only_this {
                    self.selected.insert(key);
                }
                self.anchor = Some(key);
            }
            SelectModifier::Toggle => {
                if !self.selected.remove(&key) {
                    self.selected.insert(key);
                }
                self.anchor = Some(key);
            }
            SelectModifier::Range => {
                let from = self
                    .anchor
                    .and_then(|anchor| visible.iter().position(|k| *k == anchor));
                let to = visible.iter().position(|k| *k == key);
                match (from, to) {
                    (Some(from), Some(to)) => {
                        let (start, end) = if from <= to { (from, to) } else { (to, from) };
                        self.selected = visible[start..=end].iter().copied().collect();
                    }
                    _ => self.click(key, SelectModifier::None, visible),
                }
            }
        }
    }
}
