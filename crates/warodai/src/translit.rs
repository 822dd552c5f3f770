//! Транслитерация определений.
//!
//! zkanji не отображает кириллицу, поэтому определения при экспорте
//! переводятся в латиницу. Схема подключается через [`Transliterator`]
//! и может быть заменена без изменения конвейера.

/// Преобразование текста из одной письменности в другую.
pub trait Transliterator {
    /// Возвращает транслитерированный текст.
    fn transliterate(&self, text: &str) -> String;
}

/// Схема «кириллица → латиница» (обратная схема `ru` пакета `transliterate`).
///
/// Символы вне русского алфавита не изменяются.
///
/// # Пример
///
/// ```
/// use warodai::translit::{RussianLatin, Transliterator};
///
/// assert_eq!(RussianLatin.transliterate("заколка (для волос)."), "zakolka (dlja volos).");
/// assert_eq!(RussianLatin.transliterate("Щука и ёж"), "Schuka i ezh");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RussianLatin;

/// Тождественная схема: текст остаётся кириллическим.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transliterator for RussianLatin {
    fn transliterate(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match latin(c) {
                Some(latin) => out.push_str(latin),
                None => out.push(c),
            }
        }
        out
    }
}

impl Transliterator for Identity {
    fn transliterate(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<T: Transliterator + ?Sized> Transliterator for &T {
    fn transliterate(&self, text: &str) -> String {
        (**self).transliterate(text)
    }
}

impl<T: Transliterator + ?Sized> Transliterator for Box<T> {
    fn transliterate(&self, text: &str) -> String {
        (**self).transliterate(text)
    }
}

const fn latin(c: char) -> Option<&'static str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' | 'ё' | 'э' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "j",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' | 'ь' | 'Ъ' | 'Ь' => "'",
        'ы' => "y",
        'ю' => "ju",
        'я' => "ja",
        'А' => "A",
        'Б' => "B",
        'В' => "V",
        'Г' => "G",
        'Д' => "D",
        'Е' | 'Ё' | 'Э' => "E",
        'Ж' => "Zh",
        'З' => "Z",
        'И' => "I",
        'Й' => "J",
        'К' => "K",
        'Л' => "L",
        'М' => "M",
        'Н' => "N",
        'О' => "O",
        'П' => "P",
        'Р' => "R",
        'С' => "S",
        'Т' => "T",
        'У' => "U",
        'Ф' => "F",
        'Х' => "H",
        'Ц' => "Ts",
        'Ч' => "Ch",
        'Ш' => "Sh",
        'Щ' => "Sch",
        'Ы' => "Y",
        'Ю' => "Ju",
        'Я' => "Ja",
        _ => return None,
    };
    Some(latin)
}
