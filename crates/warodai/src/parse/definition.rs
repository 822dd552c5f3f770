//! Нормализация определений статьи.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::{ConvertError, Result};

/// Предел длины одного определения в символах.
///
/// Более длинные определения ломают импорт в zkanji, поэтому строки
/// продолжения сверх предела отбрасываются.
pub const MAX_DEFINITION_LEN: usize = 500;

/// Нумерованный пункт: `1) счёт;`.
static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\)\s*(.+)").expect("valid regex"));

/// HTML-разметка внутри определений: `<i>`, `</i>`, `<a href=...>`.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.+?>").expect("valid regex"));

/// Собирает строки тела записи в список определений.
///
/// Текст до первого нумерованного пункта (например, этимология)
/// присоединяется к первому пункту. Разметка удаляется.
///
/// # Пример
/// ```
/// use warodai::parse::normalize_definitions;
///
/// let defs = normalize_definitions(&["(<i>англ.</i> bill)", "1) счёт;", "2) вексель."]).unwrap();
/// assert_eq!(defs, ["(англ. bill) счёт;", "вексель."]);
/// ```
pub fn normalize_definitions<S: AsRef<str>>(lines: &[S]) -> Result<Vec<String>> {
    if lines.is_empty() {
        return Err(ConvertError::EmptyDefinitions);
    }

    let mut preamble = String::new();
    let mut items: Vec<String> = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if let Some(caps) = NUMBERED_RE.captures(line) {
            items.push(caps[2].to_string());
            continue;
        }

        // Строка продолжения: до первого пункта она относится к преамбуле
        let current = items.last_mut().unwrap_or(&mut preamble);
        if current.chars().count() < MAX_DEFINITION_LEN {
            current.push_str(line);
        } else {
            warn!(line, "definition too long, line dropped");
        }
    }

    let Some(first) = items.first_mut() else {
        return Ok(vec![strip_markup(&preamble)]);
    };
    if !preamble.is_empty() {
        *first = format!("{preamble} {first}");
    }

    Ok(items.iter().map(String::as_str).map(strip_markup).collect())
}

/// Удаляет теги разметки вида `<...>`.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    TAG_RE.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_markup_stripped() {
        let defs = normalize_definitions(&["заколка <i>(для волос)</i>."]).unwrap();
        assert_eq!(defs, ["заколка (для волос)."]);
    }

    #[test]
    fn numbered_items_without_preamble() {
        let defs = normalize_definitions(&[
            "1) сообразительность, находчивость;",
            "2) сообразительный (находчивый) человек.",
        ])
        .unwrap();
        assert_eq!(
            defs,
            ["сообразительность, находчивость;", "сообразительный (находчивый) человек."]
        );
    }

    #[test]
    fn preamble_merged_into_first_item() {
        let defs =
            normalize_definitions(&["(англ. bill)", "1) счёт (документ);", "2) вексель."]).unwrap();
        assert_eq!(defs, ["(англ. bill) счёт (документ);", "вексель."]);
    }

    #[test]
    fn preamble_with_markup_merged_into_first_item() {
        let defs = normalize_definitions(&[
            "(<i>англ.</i> bill)",
            "1) счёт <i>(документ)</i>;",
            "2) вексель.",
        ])
        .unwrap();
        assert_eq!(defs, ["(англ. bill) счёт (документ);", "вексель."]);
    }

    #[test]
    fn continuation_appended_to_current_item() {
        let defs = normalize_definitions(&["1) вешать;", "~ на стену", "2) надевать."]).unwrap();
        assert_eq!(defs, ["вешать;~ на стену", "надевать."]);
    }

    #[test]
    fn numbered_item_without_space() {
        let defs = normalize_definitions(&["1)ах!", "2)  ох!"]).unwrap();
        assert_eq!(defs, ["ах!", "ох!"]);
    }

    #[test]
    fn long_continuation_dropped() {
        let long = "ж".repeat(MAX_DEFINITION_LEN);
        let defs = normalize_definitions(&[long.as_str(), "хвост"]).unwrap();
        assert_eq!(defs, [long.clone()]);

        let defs = normalize_definitions(&["1) а", long.as_str(), "хвост", "2) б"]).unwrap();
        assert_eq!(defs, [format!("а{long}"), "б".to_string()]);
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        // 499 кириллических символов занимают почти 1000 байт, но ещё под пределом
        let almost = "ж".repeat(MAX_DEFINITION_LEN - 1);
        let defs = normalize_definitions(&[almost.as_str(), "!"]).unwrap();
        assert_eq!(defs[0].chars().count(), MAX_DEFINITION_LEN);
    }

    #[test]
    fn unnumbered_lines_form_single_definition() {
        let defs = normalize_definitions(&["винилон", " (синтетическое волокно)."]).unwrap();
        assert_eq!(defs, ["винилон (синтетическое волокно)."]);
    }

    #[test]
    fn long_preamble_stops_growing_before_first_item() {
        let long = "ж".repeat(MAX_DEFINITION_LEN);
        let defs = normalize_definitions(&[long.as_str(), "хвост", "1) а"]).unwrap();
        assert_eq!(defs, [format!("{long} а")]);
    }

    #[test]
    fn empty_lines_are_fatal() {
        let lines: [&str; 0] = [];
        assert!(matches!(normalize_definitions(&lines), Err(ConvertError::EmptyDefinitions)));
    }

    #[test]
    fn strip_markup_nested_tags() {
        assert_eq!(strip_markup("<a href=\"#x\"><i>см.</i></a> там"), "см. там");
        assert_eq!(strip_markup("a < b"), "a < b");
    }
}
