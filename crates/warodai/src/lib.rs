//! Библиотека конвертации японско-русского словаря Warodai в формат импорта zkanji.
//!
//! Исходный файл `ewarodai.txt` — плоский текст в UTF-16, где статьи
//! разделены пустыми строками. Конвейер обработки:
//!
//! - [`reader`] — декодирование входа и разбиение на записи
//! - [`parse`] — разбор заголовка статьи, раскрытие слов/кандзи, нормализация определений
//! - [`entry`] — модель выходной статьи и её проверки
//! - [`translit`] — транслитерация кириллицы для отображения в zkanji
//! - [`writer`] — сериализация в формат `*.zkanji.export`
//!
//! # Быстрый старт
//!
//! ```
//! use warodai::prelude::*;
//!
//! let text = "Warodai\n\nびんどめ【鬢留め】(биндомэ)〔1-055-2-31〕\nзаколка <i>(для волос)</i>.\n";
//!
//! let mut records = RecordReader::new(text.lines());
//! records.skip_preamble();
//! let dictionary = convert(records).unwrap();
//!
//! assert_eq!(dictionary.entries.len(), 1);
//! assert_eq!(dictionary.entries[0].word, "びんどめ");
//! assert_eq!(dictionary.entries[0].kanji.as_deref(), Some("鬢留め"));
//! assert_eq!(dictionary.entries[0].definitions, ["заколка (для волос)."]);
//! ```

pub mod entry;
pub mod error;
pub mod parse;
pub mod reader;
pub mod translit;
pub mod writer;

/// Часто используемые типы и функции одним импортом.
pub mod prelude {
    pub use crate::{
        entry::{Entry, MAX_DEFINITIONS, ValidationError, WordKanji},
        error::{ConvertError, Result},
        parse::{Dictionary, convert, process_record},
        reader::{RecordReader, decode},
        translit::{Identity, RussianLatin, Transliterator},
        writer::{ExportStats, ZkanjiWriter, export},
    };
}
