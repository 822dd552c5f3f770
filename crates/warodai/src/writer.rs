//! Потоковый writer для файла импорта zkanji.
//!
//! Предоставляет [`ZkanjiWriter`] для записи статей в любой тип,
//! реализующий [`Write`], и [`export`] для записи словаря целиком.
//!
//! # Формат
//!
//! ```text
//! ;zkanji export file for version 0.73 and later.
//! ...
//! [Words]
//! 鬢留め びんどめ F0 M{	zakolka (dlja volos).	}M
//! ```

use std::io::{BufWriter, Write};

use tracing::{info, warn};

use crate::{entry::Entry, error::Result, translit::Transliterator};

/// Заголовок файла импорта.
pub const HEADER: &str = "\
;zkanji export file for version 0.73 and later.
;Warodai dictionary converted file.

[About]
*This dictionary is based on Warodai, and is a compilation of
*http://e-lib.ua/dic/download/ewarodai.zip

[Words]
";

/// Написания, которые zkanji не принимает при импорте.
pub const BLACKLIST: [&str; 9] = ["𩺊", "𩸨", "𪻄", "𫒒", "猪口", "𩋡", "￮", "𩕄門", "𩸽"];

/// Частота слова: ноль означает «неизвестна».
const UNKNOWN_FREQUENCY: u32 = 0;

/// Проверяет, входит ли написание в чёрный список.
#[must_use]
pub fn is_blacklisted(kanji: &str) -> bool {
    BLACKLIST.contains(&kanji)
}

/// Итог экспорта.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Записано статей.
    pub written: usize,
    /// Пропущено по чёрному списку.
    pub skipped: usize,
}

/// Потоковый writer статей zkanji.
///
/// Использует буферизацию для эффективного I/O.
///
/// # Type Parameters
///
/// - `W`: целевой поток (реализует [`Write`])
/// - `T`: схема транслитерации определений (реализует [`Transliterator`])
///
/// # Пример
///
/// ```
/// use warodai::{entry::Entry, translit::RussianLatin, writer::ZkanjiWriter};
///
/// let entry = Entry {
///     word: "びんどめ".to_string(),
///     kanji: Some("鬢留め".to_string()),
///     definitions: vec!["заколка.".to_string()],
/// };
///
/// let mut output = Vec::new();
/// let mut writer = ZkanjiWriter::new(&mut output, RussianLatin);
/// writer.write_header().unwrap();
/// writer.write(&entry).unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// let text = String::from_utf8(output).unwrap();
/// assert!(text.ends_with("鬢留め びんどめ F0 M{\tzakolka.\t}M\n"));
/// ```
pub struct ZkanjiWriter<W: Write, T> {
    inner: BufWriter<W>,
    translit: T,
    /// Счётчик записанных статей.
    records_written: usize,
    /// Счётчик статей, пропущенных по чёрному списку.
    records_skipped: usize,
    /// Флаг: записан ли заголовок.
    header_written: bool,
}

impl<W: Write, T: Transliterator> ZkanjiWriter<W, T> {
    /// Создаёт новый writer.
    pub fn new(writer: W, translit: T) -> Self {
        Self {
            inner: BufWriter::new(writer),
            translit,
            records_written: 0,
            records_skipped: 0,
            header_written: false,
        }
    }

    /// Записывает заголовок файла.
    ///
    /// Может вызываться несколько раз, но заголовок записывается только один раз.
    pub fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.inner.write_all(HEADER.as_bytes())?;
            self.header_written = true;
        }
        Ok(())
    }

    /// Записывает одну статью.
    ///
    /// Возвращает `false`, если статья пропущена по чёрному списку.
    pub fn write(&mut self, entry: &Entry) -> Result<bool> {
        let kanji = entry.display_kanji();
        if is_blacklisted(kanji) {
            warn!(kanji, "blacklisted, entry skipped");
            self.records_skipped += 1;
            return Ok(false);
        }

        let definitions = entry
            .definitions
            .iter()
            .map(|d| format!("M{{\t{}\t}}M", self.translit.transliterate(d)))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.inner, "{kanji} {} F{UNKNOWN_FREQUENCY} {definitions}", entry.word)?;
        self.records_written += 1;
        Ok(true)
    }

    /// Записывает несколько статей.
    pub fn write_all(&mut self, entries: &[Entry]) -> Result<()> {
        for entry in entries {
            self.write(entry)?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Возвращает количество записанных статей.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Возвращает количество пропущенных статей.
    #[must_use]
    pub fn records_skipped(&self) -> usize {
        self.records_skipped
    }

    /// Возвращает итог записи.
    #[must_use]
    pub fn stats(&self) -> ExportStats {
        ExportStats {
            written: self.records_written,
            skipped: self.records_skipped,
        }
    }
}

/// Записывает заголовок и все статьи, затем сбрасывает буфер.
///
/// Вывод детерминирован: одинаковый список статей даёт одинаковые байты.
pub fn export<W: Write, T: Transliterator>(
    entries: &[Entry],
    output: W,
    translit: T,
) -> Result<ExportStats> {
    let mut writer = ZkanjiWriter::new(output, translit);
    writer.write_header()?;
    writer.write_all(entries)?;
    writer.flush()?;

    let stats = writer.stats();
    info!(written = stats.written, skipped = stats.skipped, "dictionary exported");
    Ok(stats)
}
