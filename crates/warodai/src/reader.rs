//! Потоковое чтение записей словаря.
//!
//! Предоставляет [`RecordReader`] — итератор, который группирует строки
//! исходного файла в записи, разделённые пустыми строками, и [`decode`]
//! для перевода байтов входного файла в текст.

use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Запись исходного словаря: обрезанные непустые строки одного блока.
///
/// Первая строка — заголовок статьи, остальные — определения.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    lines: Vec<String>,
}

impl Record {
    /// Создаёт запись из готовых строк.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Строка заголовка, если запись не пуста.
    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    /// Строки после заголовка.
    #[must_use]
    pub fn body(&self) -> &[String] {
        self.lines.get(1..).unwrap_or_default()
    }

    /// Все строки записи.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Потоковый reader записей.
///
/// Реализует [`Iterator`] поверх любого источника строк. Однопроходный:
/// после исчерпания повторно не запускается.
///
/// Пустая запись возвращается только если файл начинается с пустой строки;
/// подряд идущие пустые строки в середине файла схлопываются.
///
/// # Пример
///
/// ```
/// use warodai::reader::RecordReader;
///
/// let text = "preamble\n\nあ(а)〔1-001-1-01〕\nах!\n\n\nい(и)〔1-001-1-02〕\nи\n";
/// let mut reader = RecordReader::new(text.lines());
/// reader.skip_preamble();
///
/// let headers: Vec<_> = reader.map(|r| r.header().unwrap().to_string()).collect();
/// assert_eq!(headers, ["あ(а)〔1-001-1-01〕", "い(и)〔1-001-1-02〕"]);
/// ```
pub struct RecordReader<I> {
    lines: I,
    buffer: Vec<String>,
    /// Счётчик выданных записей.
    records_read: usize,
    /// Флаг исчерпания источника.
    finished: bool,
}

impl<I, S> RecordReader<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    /// Создаёт reader поверх источника строк.
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            buffer: Vec::new(),
            records_read: 0,
            finished: false,
        }
    }

    /// Пропускает первую запись — преамбулу документа.
    ///
    /// Возвращает пропущенную запись, если она была.
    pub fn skip_preamble(&mut self) -> Option<Record> {
        let preamble = self.next();
        if let Some(record) = &preamble {
            debug!(lines = record.len(), "skipped preamble");
        }
        preamble
    }

    /// Возвращает количество выданных записей (включая преамбулу).
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    fn emit(&mut self) -> Record {
        self.records_read += 1;
        Record::new(std::mem::take(&mut self.buffer))
    }
}

impl<I, S> Iterator for RecordReader<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while let Some(line) = self.lines.next() {
            let line = line.as_ref().trim();
            if !line.is_empty() {
                self.buffer.push(line.to_string());
            } else if !self.buffer.is_empty() || self.records_read == 0 {
                return Some(self.emit());
            }
        }

        self.finished = true;
        if self.buffer.is_empty() { None } else { Some(self.emit()) }
    }
}

/// Декодирует байты входного файла в текст.
///
/// BOM имеет приоритет над переданной кодировкой. Некорректные
/// последовательности — фатальная ошибка, а не замена на U+FFFD.
///
/// # Пример
///
/// ```
/// use warodai::reader::decode;
///
/// let bytes: Vec<u8> = "\u{feff}ああ".encode_utf16().flat_map(u16::to_le_bytes).collect();
/// assert_eq!(decode(&bytes, encoding_rs::UTF_16LE).unwrap(), "ああ");
/// ```
pub fn decode(bytes: &[u8], encoding: &'static Encoding) -> Result<String> {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(ConvertError::Decode {
            encoding: actual.name(),
        });
    }
    if actual != encoding {
        debug!(declared = encoding.name(), actual = actual.name(), "encoding taken from BOM");
    }
    Ok(text.into_owned())
}

/// Находит кодировку по метке WHATWG (`utf-16`, `utf-16be`, `utf-8`, ...).
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ConvertError::UnknownEncoding(label.to_string()))
}
