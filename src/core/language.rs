//! Supported play languages
//!
//! Each language carries the alphabet that filler letters are drawn from.

use std::fmt;

/// Latin alphabet used for English filler letters
pub const ENGLISH_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Arabic letter set used for Arabic filler letters
pub const ARABIC_ALPHABET: &[char] = &[
    'ا', 'ب', 'ت', 'ث', 'ج', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'س', 'ش', 'ص', 'ض', 'ط', 'ظ', 'ع',
    'غ', 'ف', 'ق', 'ك', 'ل', 'م', 'ن', 'ه', 'و', 'ي',
];

/// A play language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    /// All supported languages, in menu order
    pub const ALL: [Self; 2] = [Self::English, Self::Arabic];

    /// Parse a language code ("en" or "ar")
    ///
    /// # Examples
    /// ```
    /// use powerletter::core::Language;
    ///
    /// assert_eq!(Language::from_code("ar"), Some(Language::Arabic));
    /// assert_eq!(Language::from_code("fr"), None);
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "ar" | "arabic" => Some(Self::Arabic),
            _ => None,
        }
    }

    /// Short language code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Arabic => "ar",
        }
    }

    /// Letters that filler characters are drawn from
    #[must_use]
    pub const fn alphabet(self) -> &'static [char] {
        match self {
            Self::English => ENGLISH_ALPHABET,
            Self::Arabic => ARABIC_ALPHABET,
        }
    }

    /// Whether text in this language is written right-to-left
    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Arabic)
    }

    /// Check that a letter belongs to this language's alphabet (case-insensitive)
    #[must_use]
    pub fn contains_letter(self, letter: char) -> bool {
        letter
            .to_uppercase()
            .all(|upper| self.alphabet().contains(&upper))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Arabic => write!(f, "العربية"),
        }
    }
}
