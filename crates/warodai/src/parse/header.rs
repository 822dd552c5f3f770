//! Разбор заголовка статьи.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ConvertError, Result};

/// Грамматика заголовка: слово, необязательные кандзи в `【】`,
/// транскрипция в `()`, необязательная область знаний в `[]`,
/// ссылка на статью в `〔〕` и хвост.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?sx)
        ^(?P<word>.+?)\s?          # あばずれ, あばずれおんな
        (?:【(?P<kanji>.+?)】)?     # 阿婆擦れ, 阿婆擦れ女
        \(.+?\)                    # транскрипция
        (?:\s\[.+?\])?             # область знаний
        〔.+?〕                     # ссылка на статью
        .*$",
    )
    .expect("valid regex")
});

/// Извлекает слово и необязательное написание кандзи из заголовка.
///
/// # Пример
/// ```
/// use warodai::parse::parse_header;
///
/// let (word, kanji) = parse_header("びんどめ【鬢留め】(биндомэ)〔1-055-2-31〕").unwrap();
/// assert_eq!(word, "びんどめ");
/// assert_eq!(kanji.as_deref(), Some("鬢留め"));
/// ```
pub fn parse_header(line: &str) -> Result<(String, Option<String>)> {
    let caps = HEADER_RE
        .captures(line)
        .ok_or_else(|| ConvertError::MalformedHeader {
            line: line.to_string(),
        })?;

    let word = caps["word"].to_string();
    let kanji = caps.name("kanji").map(|m| m.as_str().to_string());
    Ok((word, kanji))
}
