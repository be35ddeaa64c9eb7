//! Общие типы и утилиты для RustLex

pub mod config;
pub mod constants;
pub mod error;
pub mod i18n;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
pub use i18n::*;
