//! Data types shared by the issue board page.

pub mod domain;
pub mod enums;
pub mod shared;
