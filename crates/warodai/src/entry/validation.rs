//! Проверки инвариантов статей.

use thiserror::Error;

use super::WordKanji;

/// Ошибки, возникающие при проверке пары или определения.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Пустое слово")]
    EmptyWord,
    #[error("Пробельный символ в слове: '{0}'")]
    WhitespaceInWord(String),
    #[error("Пробельный символ в кандзи: '{0}'")]
    WhitespaceInKanji(String),
    #[error("Табуляция или перевод строки в определении: {0:?}")]
    ForbiddenCharInDefinition(String),
}

impl ValidationError {
    /// Можно ли отбросить пару и продолжить прогон.
    ///
    /// Пустое слово или пробел в слове означают дефект данных источника,
    /// такая пара просто пропускается. Остальные нарушения фатальны.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyWord | Self::WhitespaceInWord(_))
    }
}

impl WordKanji {
    /// Проверяет пару на соответствие формату zkanji.
    ///
    /// # Правила
    ///
    /// - слово не пустое
    /// - слово не содержит пробельных символов
    /// - кандзи (если есть) не содержит пробельных символов
    ///
    /// # Пример
    ///
    /// ```
    /// use warodai::entry::{ValidationError, WordKanji};
    ///
    /// assert!(WordKanji::new("あばれまわる", Some("暴れ回る")).validate().is_ok());
    ///
    /// let err = WordKanji::new("あ い", None::<String>).validate().unwrap_err();
    /// assert!(err.is_recoverable());
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.word.is_empty() {
            return Err(ValidationError::EmptyWord);
        }
        if self.word.chars().any(char::is_whitespace) {
            return Err(ValidationError::WhitespaceInWord(self.word.clone()));
        }
        if let Some(kanji) = &self.kanji
            && kanji.chars().any(char::is_whitespace)
        {
            return Err(ValidationError::WhitespaceInKanji(kanji.clone()));
        }
        Ok(())
    }
}

/// Проверяет, что определение не содержит `\t`, `\r` и `\n`.
///
/// Табуляция служит разделителем многострочного поля в zkanji,
/// поэтому её появление означает ошибку в нормализации.
pub fn validate_definition(definition: &str) -> Result<(), ValidationError> {
    if definition.contains(['\t', '\r', '\n']) {
        return Err(ValidationError::ForbiddenCharInDefinition(definition.to_string()));
    }
    Ok(())
}
