//! Раскрытие заголовка в пары «слово + кандзи».
//!
//! Заголовок Warodai может описывать несколько слов сразу:
//!
//! - `あばずれ, あばずれおんな【阿婆擦れ, 阿婆擦れ女】` — один к одному
//! - `あばれまわる【暴れ回る･暴れ廻る】` — одно слово, несколько написаний

use tracing::{info, warn};

use crate::{
    entry::WordKanji,
    error::{ConvertError, Result},
};

/// Разделитель слов и написаний в перечислении один к одному.
const WORD_SEPARATOR: char = ',';

/// Разделитель альтернативных написаний (полуширинная средняя точка).
const KANJI_SEPARATOR: char = '･';

/// Символы, недопустимые в словах zkanji: катаканная средняя точка и многоточие.
pub const DISALLOWED_CHARS: [char; 2] = ['・', '…'];

/// Раскрывает слово и кандзи заголовка в список пар.
///
/// Пары с пустым словом или пробельными символами в слове отбрасываются
/// с предупреждением, пробел в кандзи — фатальная ошибка.
///
/// # Пример
/// ```
/// use warodai::parse::expand;
///
/// let pairs = expand("あばれまわる", Some("暴れ回る･暴れ廻る")).unwrap();
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[1].kanji.as_deref(), Some("暴れ廻る"));
/// ```
pub fn expand(word: &str, kanji: Option<&str>) -> Result<Vec<WordKanji>> {
    let mut pairs = Vec::new();
    for pair in split_pairs(word, kanji)? {
        let pair = remove_disallowed(pair);
        match pair.validate() {
            Ok(()) => pairs.push(pair),
            Err(e) if e.is_recoverable() => warn!(word = %pair.word, "{e}, pair dropped"),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(pairs)
}

fn split_pairs(word: &str, kanji: Option<&str>) -> Result<Vec<WordKanji>> {
    let word = strip_roman_suffix(word);

    let Some(kanji) = kanji else {
        return Ok(vec![WordKanji::new(word, None::<String>)]);
    };
    let kanji = strip_roman_suffix(kanji);

    if word.contains(WORD_SEPARATOR) {
        if kanji.contains(WORD_SEPARATOR) {
            let words = split_trimmed(word, WORD_SEPARATOR);
            let kanjis = split_trimmed(kanji, WORD_SEPARATOR);
            if words.len() != kanjis.len() {
                return Err(ConvertError::TokenCountMismatch {
                    word: word.to_string(),
                    kanji: kanji.to_string(),
                    words: words.len(),
                    kanji_count: kanjis.len(),
                });
            }
            info!(%word, %kanji, "several words with kanji");
            return Ok(words
                .into_iter()
                .zip(kanjis)
                .map(|(w, k)| WordKanji::new(w, Some(k)))
                .collect());
        }
        // Такие заголовки в источнике нерегулярны и оставляются как есть
        warn!(%word, %kanji, "word list without matching kanji list");
    }

    if kanji.contains(KANJI_SEPARATOR) {
        info!(%word, %kanji, "one word with several kanji");
        return Ok(split_trimmed(kanji, KANJI_SEPARATOR)
            .into_iter()
            .map(|k| WordKanji::new(word, Some(k)))
            .collect());
    }

    Ok(vec![WordKanji::new(word, Some(kanji))])
}

/// Отрезает римский номер омонима (`ああI`, `かいII`) в конце строки.
///
/// Строка целиком из римских цифр не изменяется.
fn strip_roman_suffix(text: &str) -> &str {
    let stripped = text.trim_end_matches(['I', 'V', 'X']);
    if stripped.len() == text.len() || stripped.is_empty() {
        return text;
    }
    info!(original = %text, %stripped, "homograph number stripped");
    stripped
}

fn split_trimmed(text: &str, separator: char) -> Vec<&str> {
    text.split(separator).map(str::trim).collect()
}

/// Чистит слово и кандзи; кандзи, от которых ничего не осталось, считаются отсутствующими.
fn remove_disallowed(pair: WordKanji) -> WordKanji {
    WordKanji {
        word: remove_chars(pair.word),
        kanji: pair.kanji.map(remove_chars).filter(|k| !k.is_empty()),
    }
}

fn remove_chars(text: String) -> String {
    if !text.contains(DISALLOWED_CHARS) {
        return text;
    }
    let cleaned: String = text.chars().filter(|c| !DISALLOWED_CHARS.contains(c)).collect();
    info!(original = %text, %cleaned, "removed disallowed characters");
    cleaned
}
