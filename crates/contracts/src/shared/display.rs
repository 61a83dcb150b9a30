//! Представление значений таблицы: ключи сортировки, подписи и цвета.

use std::time::Duration;

/// Значение, которое пустые ячейки получают как ключ сортировки
pub const MISSING_ORDER: u64 = 9999;

/// Ключ сортировки колонки
pub trait Order {
    fn order(&self) -> u64;
}

impl<T: Order> Order for Option<T> {
    fn order(&self) -> u64 {
        self.as_ref().map_or(MISSING_ORDER, |d| d.order())
    }
}

/// Человекочитаемая подпись
pub trait Human {
    fn human(&self) -> String;
}

impl<T: Human> Human for Option<T> {
    fn human(&self) -> String {
        self.as_ref().map_or("-".into(), |d| d.human())
    }
}

/// CSS-цвет подписи; пустая строка означает цвет по умолчанию
pub trait Colored {
    fn color(&self) -> &str;
}

impl<T: Colored> Colored for Option<T> {
    fn color(&self) -> &str {
        self.as_ref().map_or("", |d| d.color())
    }
}

/// Длина заголовка, после которой он обрезается
pub const SHORTENED_LEN: usize = 50;

pub trait Shortened {
    fn shortened(&self) -> String;
}

impl Shortened for str {
    fn shortened(&self) -> String {
        match self.char_indices().nth(SHORTENED_LEN) {
            Some((cut, _)) => format!("{}...", &self[..cut]),
            None => self.to_string(),
        }
    }
}

/// Удаляет кавычки, ломающие атрибуты разметки
pub trait Sanitize {
    fn sanitize(&self) -> String;
}

impl Sanitize for str {
    fn sanitize(&self) -> String {
        self.replace(['\'', '`', '"'], "")
    }
}

/// Возраст в самой крупной подходящей единице: `42s`, `5m`, `3h`, `2d`
pub fn human_duration(age: Option<Duration>) -> String {
    let Some(age) = age else {
        return "?".into();
    };
    let s = age.as_secs();

    if s < 60 {
        format!("{}s", s)
    } else if s < 3600 {
        format!("{}m", s / 60)
    } else if s < 86400 {
        format!("{}h", s / 3600)
    } else {
        format!("{}d", s / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Difficulty, Status};

    #[test]
    fn test_missing_values() {
        let none: Option<Difficulty> = None;
        assert_eq!(none.order(), MISSING_ORDER);
        assert_eq!(none.human(), "-");
        assert_eq!(none.color(), "");
        assert_eq!(Some(Status::Free).human(), "Free");
        assert_eq!(Some(Status::Wip).color(), "orange");
    }

    #[test]
    fn test_shortened() {
        let short = "Fix typo in docs";
        assert_eq!(short.shortened(), short);

        let long = "x".repeat(75);
        let cut = long.shortened();
        assert_eq!(cut.len(), SHORTENED_LEN + 3);
        assert!(cut.ends_with("..."));

        let exact = "y".repeat(SHORTENED_LEN);
        assert_eq!(exact.shortened(), exact);
    }

    #[test]
    fn test_shortened_cuts_after_fifty_chars() {
        let fifty = "a".repeat(50);
        assert_eq!(fifty.shortened(), fifty);

        let fifty_one = "b".repeat(51);
        assert_eq!(fifty_one.shortened(), format!("{}...", "b".repeat(50)));
    }

    #[test]
    fn test_shortened_respects_char_boundaries() {
        let cyrillic = "ж".repeat(70);
        let cut = cyrillic.shortened();
        assert_eq!(cut.chars().count(), SHORTENED_LEN + 3);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!("Don't `break` \"quotes\"".sanitize(), "Dont break quotes");
    }

    #[test]
    fn test_human_duration() {
        assert_eq!(human_duration(None), "?");
        assert_eq!(human_duration(Some(Duration::from_secs(59))), "59s");
        assert_eq!(human_duration(Some(Duration::from_secs(60))), "1m");
        assert_eq!(human_duration(Some(Duration::from_secs(3599))), "59m");
        assert_eq!(human_duration(Some(Duration::from_secs(3600))), "1h");
        assert_eq!(human_duration(Some(Duration::from_secs(86400))), "1d");
        assert_eq!(human_duration(Some(Duration::from_secs(3 * 86400 + 5))), "3d");
    }
}
