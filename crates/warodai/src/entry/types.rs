//! Основные типы статей.

/// Максимальное число определений в одной статье zkanji.
///
/// Запись с большим числом определений делится на несколько статей.
pub const MAX_DEFINITIONS: usize = 5;

/// Пара «чтение + написание», полученная из заголовка статьи.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordKanji {
    /// Слово каной (чтение).
    pub word: String,
    /// Написание кандзи, если есть.
    pub kanji: Option<String>,
}

impl WordKanji {
    /// Создаёт пару из слова и необязательного написания.
    ///
    /// # Пример
    /// ```
    /// use warodai::entry::WordKanji;
    ///
    /// let pair = WordKanji::new("びんどめ", Some("鬢留め"));
    /// assert_eq!(pair.kanji.as_deref(), Some("鬢留め"));
    /// ```
    pub fn new(word: impl Into<String>, kanji: Option<impl Into<String>>) -> Self {
        Self {
            word: word.into(),
            kanji: kanji.map(Into::into),
        }
    }
}

/// Статья словаря zkanji.
///
/// # Пример
///
/// ```
/// use warodai::entry::Entry;
///
/// let entry = Entry {
///     word: "ビニロン".to_string(),
///     kanji: None,
///     definitions: vec!["винилон (синтетическое волокно).".to_string()],
/// };
///
/// // Без кандзи в качестве написания используется само слово
/// assert_eq!(entry.display_kanji(), "ビニロン");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Слово каной. Не пустое и без пробельных символов.
    pub word: String,
    /// Написание кандзи. Без пробельных символов.
    pub kanji: Option<String>,
    /// Определения в порядке нумерации источника, от 1 до [`MAX_DEFINITIONS`].
    pub definitions: Vec<String>,
}

impl Entry {
    /// Возвращает написание для первой колонки экспорта: кандзи либо само слово.
    #[must_use]
    pub fn display_kanji(&self) -> &str {
        self.kanji.as_deref().unwrap_or(&self.word)
    }

    /// Строит статьи для пары, разбивая определения на группы по [`MAX_DEFINITIONS`].
    ///
    /// Порядок определений сохраняется между группами. Пустой список
    /// определений даёт пустой результат.
    ///
    /// # Пример
    /// ```
    /// use warodai::entry::{Entry, WordKanji};
    ///
    /// let defs: Vec<String> = (1..=7).map(|i| i.to_string()).collect();
    /// let entries = Entry::chunked(&WordKanji::new("かける", Some("掛ける")), &defs);
    ///
    /// assert_eq!(entries.len(), 2);
    /// assert_eq!(entries[0].definitions, ["1", "2", "3", "4", "5"]);
    /// assert_eq!(entries[1].definitions, ["6", "7"]);
    /// ```
    #[must_use]
    pub fn chunked(pair: &WordKanji, definitions: &[String]) -> Vec<Self> {
        definitions
            .chunks(MAX_DEFINITIONS)
            .map(|chunk| Self {
                word: pair.word.clone(),
                kanji: pair.kanji.clone(),
                definitions: chunk.to_vec(),
            })
            .collect()
    }
}
