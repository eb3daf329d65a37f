//! YIVO to Hasidic orthography.
//!
//! The text is split into tokens: runs of word characters and single
//! non-word characters. Table rules that care about word edges only ever
//! see one token, so "whole word", "prefix" and "suffix" are plain string
//! tests. After the per-token rules the tokens are joined again and the
//! whole-text rules run: word groups, reformatting, last-minute fixes and
//! finally diacritic stripping.

use ahash::AHashMap;
use tracing::debug;
use yiddish_core::rules::RuleSet;
use yiddish_core::script::{tokenize, HASIDIC_WORD};
use yiddish_core::{strip_diacritics, to_composed, HasidicTables, Result};

use crate::marked::MarkedWord;
use crate::reformat::reformat;
use crate::suffix::respell_suffixes;

/// Letters after which a loshn-koydesh word gets no leading apostrophe.
const NO_LEADING_APOSTROPHE: [char; 4] = ['ב', 'ה', 'ל', '\''];

/// Continuations after which a loshn-koydesh word gets no trailing apostrophe.
const NO_TRAILING_APOSTROPHE: [&[char]; 4] = [&['י', 'ם'], &['י', 'מ'], &['ו', 'ת'], &['\'']];

/// Compiled Hasidic rule set.
#[derive(Debug, Clone)]
pub struct Converter {
    /// Key → (table position, replacement). A replacement may itself be a
    /// key further down the table.
    whole_word: AHashMap<String, (usize, String)>,
    lkizmen: Vec<Vec<char>>,
    prefix: Vec<(String, String)>,
    suffix: Vec<(String, String)>,
    anywhere: Vec<(String, String)>,
    /// `-ik` exceptions followed by `-lekh` exceptions.
    exceptions: Vec<Vec<char>>,
    word_groups: RuleSet,
    last_minute: RuleSet,
}

impl Converter {
    pub fn new(tables: &HasidicTables) -> Result<Self> {
        let mut whole_word: AHashMap<String, (usize, String)> = AHashMap::new();
        for (pos, (find, replace)) in tables.whole_word.iter().enumerate() {
            whole_word
                .entry(find.clone())
                .and_modify(|entry| entry.1 = replace.clone())
                .or_insert((pos, replace.clone()));
        }

        let chars = |words: &[String]| -> Vec<Vec<char>> {
            words
                .iter()
                .filter(|w| !w.is_empty())
                .map(|w| w.chars().collect())
                .collect()
        };
        let mut exceptions = chars(&tables.ik_exceptions);
        exceptions.extend(chars(&tables.lekh_exceptions));

        let converter = Self {
            whole_word,
            lkizmen: chars(&tables.lkizmen),
            prefix: tables.prefix.clone(),
            suffix: tables.suffix.clone(),
            anywhere: tables.anywhere.clone(),
            exceptions,
            word_groups: tables.word_group_rules()?,
            last_minute: tables.last_minute_rules()?,
        };
        debug!(
            whole_word = converter.whole_word.len(),
            lkizmen = converter.lkizmen.len(),
            exceptions = converter.exceptions.len(),
            "hasidic converter ready"
        );
        Ok(converter)
    }

    /// Convert YIVO-orthography text to Hasidic orthography.
    pub fn hasidify(&self, text: &str) -> String {
        let composed = to_composed(text);
        let joined: String = split_tokens(&composed)
            .into_iter()
            .map(|token| self.convert_token(token))
            .collect();

        let grouped = self.word_groups.apply(&joined);
        let reformatted = reformat(&grouped);
        let fixed = self.last_minute.apply(&reformatted);
        strip_diacritics(&fixed)
    }

    fn convert_token(&self, token: &str) -> String {
        let mut word = self.whole_word_variant(token);

        for lkizm in &self.lkizmen {
            word = mark_loshn_koydesh(&word, lkizm);
        }
        for (find, replace) in &self.prefix {
            if let Some(rest) = word.strip_prefix(find.as_str()) {
                word = format!("{replace}{rest}");
            }
        }
        for (find, replace) in &self.suffix {
            if let Some(rest) = word.strip_suffix(find.as_str()) {
                word = format!("{rest}{replace}");
            }
        }
        for (find, replace) in &self.anywhere {
            if word.contains(find.as_str()) {
                word = word.replace(find.as_str(), replace);
            }
        }

        // Only words that could take a suffix rule need marking.
        if word.contains("יק") || word.contains("לע") {
            let mut marked = MarkedWord::new(&word);
            for exception in &self.exceptions {
                marked.mark_after(exception);
            }
            respell_suffixes(&mut marked);
            word = marked.to_string();
        }
        word
    }

    /// Follow the whole-word table down from the top, each rule at most once.
    fn whole_word_variant(&self, token: &str) -> String {
        let mut word = token.to_string();
        let mut last: Option<usize> = None;
        while let Some((pos, replace)) = self.whole_word.get(&word) {
            if last.is_some_and(|last| *pos <= last) {
                break;
            }
            last = Some(*pos);
            word = replace.clone();
        }
        word
    }
}

/// Word runs stay whole; every other character is a token of its own.
fn split_tokens(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    for token in tokenize(text, HASIDIC_WORD) {
        if token.is_word {
            out.push(token.text);
        } else {
            out.extend(
                token
                    .text
                    .char_indices()
                    .map(|(i, c)| &token.text[i..i + c.len_utf8()]),
            );
        }
    }
    out
}

#[derive(Clone, Copy)]
enum Side {
    Leading,
    Trailing,
}

/// Set a loshn-koydesh word off with apostrophes inside a compound.
///
/// A leading apostrophe goes before every occurrence not at the word start
/// and not after `ב ה ל '`. Then a trailing one goes after every occurrence
/// not at the word end and not followed by a plural ending or `'`.
fn mark_loshn_koydesh(word: &str, lkizm: &[char]) -> String {
    let leading = insert_apostrophes(word, lkizm, Side::Leading);
    insert_apostrophes(&leading, lkizm, Side::Trailing)
}

fn insert_apostrophes(word: &str, lkizm: &[char], side: Side) -> String {
    let chars: Vec<char> = word.chars().collect();
    let n = lkizm.len();
    if n == 0 || chars.len() < n {
        return word.to_string();
    }

    let mut out = String::with_capacity(word.len() + 2);
    let mut i = 0;
    while i < chars.len() {
        if !chars[i..].starts_with(lkizm) {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let after = &chars[i + n..];
        let fits = match side {
            Side::Leading => i > 0 && !NO_LEADING_APOSTROPHE.contains(&chars[i - 1]),
            Side::Trailing => {
                !after.is_empty()
                    && !NO_TRAILING_APOSTROPHE.iter().any(|ending| after.starts_with(ending))
            }
        };
        if !fits {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        if let Side::Leading = side {
            out.push('\'');
        }
        out.extend(lkizm);
        if let Side::Trailing = side {
            out.push('\'');
        }
        i += n;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(rows: &[(&str, &str)]) -> Vec<(String, String)> {
        rows.iter().map(|(a, b)| (to_composed(a), to_composed(b))).collect()
    }

    fn words(rows: &[&str]) -> Vec<String> {
        rows.iter().map(|w| to_composed(w)).collect()
    }

    fn converter() -> Converter {
        let tables = HasidicTables {
            whole_word: pairs(&[("ניט", "נישט"), ("טאָן", "טוהן"), ("נישט", "נישט")]),
            prefix: pairs(&[("צו", "צי")]),
            suffix: pairs(&[("ען", "ן")]),
            anywhere: pairs(&[("עה", "ע")]),
            lkizmen: words(&["שבת", "תּורה"]),
            word_groups: vec![(r"\bאין דעם\b".to_string(), "אינעם".to_string())],
            ik_exceptions: words(&["מוזיק"]),
            lekh_exceptions: words(&["בלעך"]),
            last_minute_fixes: vec![("''".to_string(), "'".to_string())],
        };
        Converter::new(&tables).unwrap()
    }

    #[test]
    fn whole_word_rules() {
        let c = converter();
        assert_eq!(c.hasidify("ער װיל ניט טאָן"), "ער וויל נישט טוהן");
        assert_eq!(c.hasidify("טאָן,ניט"), "טוהן,נישט");
        assert_eq!(c.hasidify("ABC ניט"), "ABC נישט");
    }

    #[test]
    fn prefix_and_suffix_are_anchored() {
        let c = converter();
        assert_eq!(c.hasidify("צוגעבן אַרױסצוגעבן"), "ציגעבן ארויסצוגעבן");
        assert_eq!(c.hasidify("לעבען אין דעם ענגלאַנד"), "לעבן אינעם ענגלאנד");
        // The maqaf is a token of its own, so the prefix applies after it.
        assert_eq!(c.hasidify("שבת־צו"), "שבת־צי");
        assert_eq!(c.hasidify("מעהר"), "מער");
    }

    #[test]
    fn suffix_rule_ignores_inner_occurrences() {
        let tables = HasidicTables {
            suffix: pairs(&[("ער", "ר")]),
            ..HasidicTables::default()
        };
        let c = Converter::new(&tables).unwrap();
        assert_eq!(c.hasidify("לערער"), "לערר");
        assert_eq!(c.hasidify("ערטער"), "ערטר");
        assert_eq!(c.hasidify("ערטער־לערער"), "ערטר־לערר");
        assert_eq!(c.hasidify("ערטל"), "ערטל");
    }

    #[test]
    fn loshn_koydesh_apostrophes() {
        let c = converter();
        assert_eq!(c.hasidify("ערבֿשבת"), "ערב'שבת");
        assert_eq!(c.hasidify("ערבֿשבתדיקע"), "ערב'שבת'דיגע");
        assert_eq!(c.hasidify("שבתדיקער"), "שבת'דיגער");
        assert_eq!(c.hasidify("דער תּורהס"), "דער תורה'ס");
        assert_eq!(c.hasidify("בשבת"), "בשבת");
        assert_eq!(c.hasidify("שבתים"), "שבתים");
        assert_eq!(c.hasidify("הײַנט איז שבת"), "היינט איז שבת");
    }

    #[test]
    fn suffix_respelling_and_exceptions() {
        let c = converter();
        assert_eq!(c.hasidify("לוסטיקער מוזיקער"), "לוסטיגער מוזיקער");
        assert_eq!(c.hasidify("קינדערלעך בלעך"), "קינדערליך בלעך");
        assert_eq!(c.hasidify("מוזיקאַליש"), "מוזיקאליש");
        // The suffix table runs first, leaving an ending the -ik rule does not know.
        assert_eq!(c.hasidify("באַשטעטיקונגען"), "באשטעטיקונגן");
    }

    #[test]
    fn reformatting_and_last_minute_fixes() {
        let c = converter();
        assert_eq!(c.hasidify("„גוט“ װאָס"), "\"גוט\" וואס");
        assert_eq!(c.hasidify("ייִדישע פֿרײלעכקײטן"), "יידישע פרייליכקייטן");
        assert_eq!(c.hasidify("זײַן פֿרײַנד"), "זיין פריינד");
        assert_eq!(c.hasidify("װוּנדערלעך"), "וואונדערליך");
        assert_eq!(c.hasidify("זאָג'' מיר"), "זאג' מיר");
    }

    #[test]
    fn whole_word_chain_follows_table_order() {
        let tables = HasidicTables {
            whole_word: pairs(&[("א", "ב"), ("ב", "ג"), ("ג", "א")]),
            ..HasidicTables::default()
        };
        let c = Converter::new(&tables).unwrap();
        // א→ב→ג→א, each rule once.
        assert_eq!(c.hasidify("א"), "א");
        assert_eq!(c.hasidify("ב"), "א");
        assert_eq!(c.hasidify("ג"), "א");
    }

    #[test]
    fn empty_tables_only_reformat() {
        let c = Converter::new(&HasidicTables::default()).unwrap();
        assert_eq!(c.hasidify("װאָס"), "וואס");
    }
}
