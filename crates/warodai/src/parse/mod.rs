//! Разбор записей Warodai в статьи zkanji.
//!
//! Запись проходит три стадии:
//!
//! - [`parse_header`] — извлечение слова и кандзи из первой строки
//! - [`expand`] — раскрытие перечислений в пары «слово + кандзи»
//! - [`normalize_definitions`] — сборка нумерованных определений
//!
//! Затем каждая пара получает все определения записи, разбитые на группы
//! по [`MAX_DEFINITIONS`](crate::entry::MAX_DEFINITIONS).

mod definition;
mod expand;
mod header;

pub use definition::{MAX_DEFINITION_LEN, normalize_definitions, strip_markup};
pub use expand::{DISALLOWED_CHARS, expand};
pub use header::parse_header;
use tracing::info;

use crate::{
    entry::{Entry, validate_definition},
    error::{ConvertError, Result},
    reader::Record,
};

/// Результат разбора всего словаря.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    /// Статьи в порядке следования записей источника.
    pub entries: Vec<Entry>,
    /// Число обработанных записей.
    pub records: usize,
}

/// Разбирает одну запись и добавляет полученные статьи в `entries`.
///
/// Возвращает число добавленных статей. Может быть нулём, если все пары
/// отброшены из-за пробелов в слове.
///
/// # Пример
/// ```
/// use warodai::{parse::process_record, reader::Record};
///
/// let record = Record::new(vec![
///     "あばれまわる【暴れ回る･暴れ廻る】(абарэмавару)〔1-002-1-02〕".to_string(),
///     "буйствовать.".to_string(),
/// ]);
/// let mut entries = Vec::new();
///
/// assert_eq!(process_record(&record, &mut entries).unwrap(), 2);
/// assert_eq!(entries[1].kanji.as_deref(), Some("暴れ廻る"));
/// ```
pub fn process_record(record: &Record, entries: &mut Vec<Entry>) -> Result<usize> {
    let header = match record.header() {
        Some(header) if record.len() >= 2 => header,
        header => {
            return Err(ConvertError::RecordTooShort {
                header: header.unwrap_or_default().to_string(),
            });
        }
    };

    let (word, kanji) = parse_header(header)?;
    let pairs = expand(&word, kanji.as_deref())?;
    let definitions = normalize_definitions(record.body())?;
    for definition in &definitions {
        validate_definition(definition)?;
    }

    let before = entries.len();
    for pair in &pairs {
        let chunks = Entry::chunked(pair, &definitions);
        if chunks.len() > 1 {
            info!(
                word = %pair.word,
                parts = chunks.len(),
                "definitions split into several entries"
            );
        }
        entries.extend(chunks);
    }
    Ok(entries.len() - before)
}

/// Разбирает все записи после преамбулы.
///
/// Останавливается на первой фатальной ошибке: частичный результат
/// не возвращается.
pub fn convert<I>(records: I) -> Result<Dictionary>
where
    I: IntoIterator<Item = Record>,
{
    let mut dictionary = Dictionary::default();
    for record in records {
        process_record(&record, &mut dictionary.entries)?;
        dictionary.records += 1;
    }
    info!(records = dictionary.records, entries = dictionary.entries.len(), "dictionary parsed");
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{entry::MAX_DEFINITIONS, reader::RecordReader};

    fn record(lines: &[&str]) -> Record {
        Record::new(lines.iter().map(|l| l.to_string()).collect())
    }

    fn process(lines: &[&str]) -> Result<Vec<Entry>> {
        let mut entries = Vec::new();
        process_record(&record(lines), &mut entries)?;
        Ok(entries)
    }

    #[test]
    fn simple_record() {
        let entries =
            process(&["びんどめ【鬢留め】(биндомэ)〔1-055-2-31〕", "заколка <i>(для волос)</i>."])
                .unwrap();
        assert_eq!(
            entries,
            [Entry {
                word: "びんどめ".to_string(),
                kanji: Some("鬢留め".to_string()),
                definitions: vec!["заколка (для волос).".to_string()],
            }]
        );
    }

    #[test]
    fn header_only_record_is_fatal() {
        let err = process(&["ビニロン(бинирон)〔1-055-2-33〕"]).unwrap_err();
        assert!(
            matches!(err, ConvertError::RecordTooShort { header } if header.starts_with("ビニロン"))
        );
    }

    #[test]
    fn empty_record_is_fatal() {
        let err = process(&[]).unwrap_err();
        assert!(matches!(err, ConvertError::RecordTooShort { header } if header.is_empty()));
    }

    #[test]
    fn malformed_header_is_fatal() {
        let err = process(&["не заголовок", "текст"]).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedHeader { .. }));
    }

    #[test]
    fn long_record_split_preserving_order() {
        let mut lines = vec!["かける【掛ける】(какэру)〔1-001-1-01〕".to_string()];
        lines.extend((1..=12).map(|i| format!("{i}) значение {i};")));
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

        let entries = process(&lines).unwrap();
        assert_eq!(entries.len(), 3);
        assert!(entries.iter().all(|e| (1..=MAX_DEFINITIONS).contains(&e.definitions.len())));

        let flat: Vec<_> = entries.iter().flat_map(|e| e.definitions.clone()).collect();
        let expected: Vec<_> = (1..=12).map(|i| format!("значение {i};")).collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn every_pair_gets_all_definitions() {
        let entries = process(&[
            "あばずれ, あばずれおんな【阿婆擦れ, 阿婆擦れ女】(абадзурэ, абадзурэонна)〔1-001-2-52〕",
            "<i>прост.</i> бесстыжая женщина.",
        ])
        .unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].word, "あばずれ");
        assert_eq!(entries[1].word, "あばずれおんな");
        assert!(entries.iter().all(|e| e.definitions == ["прост. бесстыжая женщина."]));
    }

    #[test]
    fn all_pairs_dropped_yields_no_entries() {
        let entries =
            process(&["あばずれ, あばずれおんな【阿婆擦れ】(абадзурэ)〔1-001-2-52〕", "текст"])
                .unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn headword_emptied_by_cleanup_yields_no_entries() {
        let entries = process(&["…【…】(многоточие)〔1-000-0-00〕", "текст"]).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn convert_stops_on_first_error() {
        let text = "preamble\n\nあ(а)〔1-001-1-01〕\nах!\n\nбитый заголовок\nтекст\n\nい(и)〔1-001-1-02〕\nи\n";
        let mut reader = RecordReader::new(text.lines());
        reader.skip_preamble();

        let err = convert(&mut reader).unwrap_err();
        assert!(matches!(err, ConvertError::MalformedHeader { line } if line == "битый заголовок"));
        // Записи после ошибки не читаются
        assert_eq!(reader.records_read(), 3);
    }

    #[test]
    fn convert_counts_records() {
        let text = "preamble\n\nあ(а)〔1-001-1-01〕\nах!\n\nい(и)〔1-001-1-02〕\nи\n";
        let mut reader = RecordReader::new(text.lines());
        reader.skip_preamble();

        let dictionary = convert(reader).unwrap();
        assert_eq!(dictionary.records, 2);
        assert_eq!(dictionary.entries.len(), 2);
    }
}
