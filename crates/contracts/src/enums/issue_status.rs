use serde::{Deserialize, Serialize};

use crate::shared::display::{Colored, Human, Order};

/// Занятость задачи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Free,
    Taken,
    Wip,
}

impl Status {
    /// Открытый pull request важнее назначенного исполнителя
    pub fn derive(assigned: bool, has_pull_request: bool) -> Self {
        if has_pull_request {
            Self::Wip
        } else if assigned {
            Self::Taken
        } else {
            Self::Free
        }
    }
}

impl Order for Status {
    fn order(&self) -> u64 {
        match self {
            Self::Free => 0,
            Self::Taken => 1,
            Self::Wip => 2,
        }
    }
}

impl Human for Status {
    fn human(&self) -> String {
        match self {
            Self::Free => "Free",
            Self::Taken => "Taken",
            Self::Wip => "WIP",
        }
        .to_string()
    }
}

impl Colored for Status {
    fn color(&self) -> &str {
        match self {
            Self::Free => "green",
            Self::Taken | Self::Wip => "orange",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_precedence() {
        assert_eq!(Status::derive(false, false), Status::Free);
        assert_eq!(Status::derive(true, false), Status::Taken);
        assert_eq!(Status::derive(false, true), Status::Wip);
        assert_eq!(Status::derive(true, true), Status::Wip);
    }

    #[test]
    fn test_free_sorts_first() {
        assert!(Status::Free.order() < Status::Taken.order());
        assert!(Status::Taken.order() < Status::Wip.order());
    }
}
