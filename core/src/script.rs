//! Character classes and word tokenization.
//!
//! Different pipelines disagree on what counts as "part of a word": the
//! romanizer treats hyphens as word-internal so hyphenated loanwords can be
//! looked up whole, the detransliterator works on Latin text and uses the
//! regex notion of a word character, and the Hasidic converter counts Latin
//! letters and the apostrophe (used in abbreviations) as word material. These
//! are kept as separate named [`WordClass`] constants.

/// Precomposed letters of the YIVO alphabet (Alphabetic Presentation Forms).
pub const COMPOSED_LETTERS: [char; 12] = [
    '\u{FB1D}', // יִ
    '\u{FB1F}', // ײַ
    '\u{FB2B}', // שׂ
    '\u{FB2E}', // אַ
    '\u{FB2F}', // אָ
    '\u{FB31}', // ב
    '\u{FB35}', // וּ
    '\u{FB3B}', // כּ
    '\u{FB44}', // פּ
    '\u{FB4A}', // תּ
    '\u{FB4C}', // בֿ
    '\u{FB4E}', // פֿ
];

/// Hebrew maqaf, the orthographic hyphen.
pub const MAQAF: char = '\u{05BE}';

/// True for a base Hebrew letter, a Yiddish ligature or a precomposed letter.
pub fn is_script_letter(c: char) -> bool {
    matches!(c, '\u{05D0}'..='\u{05EA}' | '\u{05F0}'..='\u{05F2}') || COMPOSED_LETTERS.contains(&c)
}

fn translit_word_char(c: char) -> bool {
    is_script_letter(c) || c == '-' || c == MAQAF
}

fn detranslit_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == MAQAF
}

fn hasidic_word_char(c: char) -> bool {
    is_script_letter(c) || c.is_ascii_alphabetic() || c == '\''
}

/// A predicate deciding which characters belong to a word run.
#[derive(Clone, Copy)]
pub struct WordClass {
    name: &'static str,
    pred: fn(char) -> bool,
}

impl WordClass {
    pub fn contains(&self, c: char) -> bool {
        (self.pred)(c)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl std::fmt::Debug for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("WordClass").field(&self.name).finish()
    }
}

/// Script letters plus `-` and maqaf; used for loanword lookups during transliteration.
pub const TRANSLIT_WORD: WordClass = WordClass {
    name: "transliteration",
    pred: translit_word_char,
};

/// Any alphanumeric character, `_`, `-` and maqaf; used after detransliteration.
pub const DETRANSLIT_WORD: WordClass = WordClass {
    name: "detransliteration",
    pred: detranslit_word_char,
};

/// Script letters, ASCII letters and the apostrophe; the Hasidic converter's word boundary.
pub const HASIDIC_WORD: WordClass = WordClass {
    name: "hasidic",
    pred: hasidic_word_char,
};

/// A run of text that is either entirely word characters or entirely not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub is_word: bool,
}

/// Split `text` into maximal alternating word / non-word runs.
///
/// Concatenating the returned tokens reproduces `text` exactly.
///
/// ```
/// use yiddish_core::script::{tokenize, TRANSLIT_WORD};
///
/// let tokens = tokenize("שבת, שלום", TRANSLIT_WORD);
/// let words: Vec<&str> = tokens.iter().filter(|t| t.is_word).map(|t| t.text).collect();
/// assert_eq!(words, vec!["שבת", "שלום"]);
/// ```
pub fn tokenize(text: &str, class: WordClass) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in text.char_indices() {
        let is_word = class.contains(c);
        match current {
            Some(kind) if kind == is_word => {}
            Some(kind) => {
                tokens.push(Token {
                    text: &text[start..idx],
                    is_word: kind,
                });
                start = idx;
                current = Some(is_word);
            }
            None => current = Some(is_word),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token {
            text: &text[start..],
            is_word: kind,
        });
    }
    tokens
}
