//! Модуль ошибок конвертации.

use thiserror::Error;

use crate::entry::ValidationError;

/// Фатальная ошибка конвертации.
///
/// Любая из этих ошибок прерывает весь прогон: выходной файл при этом
/// не создаётся. Восстановимые ситуации (отброшенные строки, пары,
/// статьи из чёрного списка) ошибками не являются и только логируются.
#[derive(Debug, Error)]
pub enum ConvertError {
    // === I/O ошибки ===
    /// Ошибка ввода/вывода.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Вход содержит последовательности, некорректные для кодировки.
    #[error("Input is not valid {encoding}")]
    Decode {
        /// Имя кодировки.
        encoding: &'static str,
    },

    /// Неизвестная метка кодировки.
    #[error("Unknown encoding label '{0}'")]
    UnknownEncoding(String),

    // === Ошибки структуры записи ===
    /// Заголовок статьи не соответствует грамматике.
    #[error("Malformed record header: {line}")]
    MalformedHeader {
        /// Исходная строка заголовка.
        line: String,
    },

    /// В записи нет строк с определениями.
    #[error("Record has no definition lines: '{header}'")]
    RecordTooShort {
        /// Первая строка записи (пустая, если запись пуста).
        header: String,
    },

    /// Нормализатору определений передан пустой список строк.
    #[error("Empty definition list")]
    EmptyDefinitions,

    /// Число слов и кандзи в перечислении через запятую не совпадает.
    #[error("Word/kanji count mismatch: {words} word(s) in '{word}', {kanji_count} kanji in '{kanji}'")]
    TokenCountMismatch {
        /// Поле слова целиком.
        word: String,
        /// Поле кандзи целиком.
        kanji: String,
        /// Число слов.
        words: usize,
        /// Число кандзи.
        kanji_count: usize,
    },

    // === Ошибки валидации ===
    /// Нарушен инвариант выходной статьи.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Удобный alias для Result с ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
