//! Модель выходных статей словаря zkanji.
//!
//! Этот модуль определяет структуру [`Entry`] — единицу экспорта —
//! и пару [`WordKanji`], в которую раскрывается заголовок исходной статьи.

mod types;
mod validation;

pub use types::{Entry, MAX_DEFINITIONS, WordKanji};
pub use validation::{ValidationError, validate_definition};
