//! Общие помощники для тестов CLI конвертера.
//!
//! Тестовые файлы расположены в `tests/fixtures/`:
//! - `ewarodai_sample.txt` — фрагмент словаря Warodai в UTF-16 с BOM

use std::path::PathBuf;

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

/// Кодирует текст в UTF-16LE с BOM, как в исходном файле словаря.
pub fn utf16(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}
