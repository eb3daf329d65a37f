//! `-ik` / `-lekh` suffix respelling.
//!
//! Hasidic spelling writes the adjective suffix `-ik` as `יג` and the
//! diminutive/adverbial `-lekh` as `ליך`. A rule never fires at the start of
//! a word, nor next to a skip mark left by the exception lists.

use crate::marked::MarkedWord;

const IK: [char; 2] = ['י', 'ק'];
const IG: [char; 2] = ['י', 'ג'];
const LEKH_FINAL: [char; 3] = ['ל', 'ע', 'ך'];
const LEKH: [char; 3] = ['ל', 'ע', 'כ'];
const LIKH_FINAL: [char; 3] = ['ל', 'י', 'ך'];
const LIKH: [char; 3] = ['ל', 'י', 'כ'];

/// Inflections after `-ik` that end the word.
const IK_ENDINGS: &[&str] = &[
    "", "ער", "ע", "ן", "סט", "ס", "ט", "ערע", "ערן", "ערס", "סטע", "סטער", "סטן", "סטנס", "ונג",
];

/// Continuations after `-ik` that need not end the word.
const IK_OPEN_ENDINGS: &[&str] = &["ונגען"];

/// Inflections after non-final `-lekh` that end the word.
const LEKH_ENDINGS: &[&str] = &[
    "", "ע", "ער", "ן", "ס", "ט", "סט", "ערע", "ערן", "ערס", "סטע", "סטער", "סטן", "סטנס", "קײט",
];

const LEKH_OPEN_ENDINGS: &[&str] = &["קײטן"];

/// Apply the `-ik` rule, then both `-lekh` rules.
pub fn respell_suffixes(word: &mut MarkedWord) {
    replace_where(word, &IK, &IG, |w, end| {
        followed_by_any(w, end, IK_ENDINGS, IK_OPEN_ENDINGS)
    });
    replace_where(word, &LEKH_FINAL, &LIKH_FINAL, |_, _| true);
    replace_where(word, &LEKH, &LIKH, |w, end| {
        followed_by_any(w, end, LEKH_ENDINGS, LEKH_OPEN_ENDINGS)
    });
}

/// Replace every unmarked, non-initial occurrence of `find` accepted by `context`.
///
/// Conditions are checked against the text as it was before this pass, the
/// same way a single left-to-right scan would see it.
fn replace_where<F>(word: &mut MarkedWord, find: &[char], replace: &[char], context: F)
where
    F: Fn(&MarkedWord, usize) -> bool,
{
    let original = word.clone();
    let mut i = 1;
    while i + find.len() <= original.len() {
        let end = i + find.len();
        if !original.is_marked(i)
            && original.matches_at(i, find)
            && !original.is_marked(end)
            && context(&original, end)
        {
            word.overwrite(i, replace);
            i = end;
        } else {
            i += 1;
        }
    }
}

/// True when the text from `at` is one of `closed` up to the word end, or
/// starts with one of `open`, with no mark in between.
fn followed_by_any(word: &MarkedWord, at: usize, closed: &[&str], open: &[&str]) -> bool {
    let closes = closed.iter().any(|ending| {
        let ending: Vec<char> = ending.chars().collect();
        let end = at + ending.len();
        end == word.len() && word.matches_at(at, &ending) && !word.is_marked(end)
    });
    closes
        || open.iter().any(|ending| {
            let ending: Vec<char> = ending.chars().collect();
            word.matches_at(at, &ending)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn respell(word: &str, exceptions: &[&str]) -> String {
        let mut marked = MarkedWord::new(word);
        for exception in exceptions {
            marked.mark_after(&exception.chars().collect::<Vec<_>>());
        }
        respell_suffixes(&mut marked);
        marked.to_string()
    }

    #[test]
    fn ik_only_before_listed_endings() {
        assert_eq!(respell("לוסטיק", &[]), "לוסטיג");
        assert_eq!(respell("לוסטיקער", &[]), "לוסטיגער");
        assert_eq!(respell("לוסטיקסטער", &[]), "לוסטיגסטער");
        assert_eq!(respell("באַשטעטיקונגען", &[]), "באַשטעטיגונגען");
        assert_eq!(respell("טיקעט", &[]), "טיקעט");
        assert_eq!(respell("פּיקניק", &[]), "פּיקניג");
        assert_eq!(respell("שטיקל", &[]), "שטיקל");
    }

    #[test]
    fn never_at_word_start() {
        assert_eq!(respell("יק", &[]), "יק");
        assert_eq!(respell("לעך", &[]), "לעך");
    }

    #[test]
    fn lekh_rules() {
        assert_eq!(respell("קינדערלעך", &[]), "קינדערליך");
        assert_eq!(respell("פֿרײלעכער", &[]), "פֿרײליכער");
        assert_eq!(respell("פֿרײלעכקײטן", &[]), "פֿרײליכקײטן");
        assert_eq!(respell("פֿרײלעכל", &[]), "פֿרײלעכל");
    }

    #[test]
    fn exceptions_block_the_rules() {
        assert_eq!(respell("מוזיק", &["מוזיק"]), "מוזיק");
        assert_eq!(respell("מוזיקער", &["מוזיק"]), "מוזיקער");
        assert_eq!(respell("בלעך", &["בלעך"]), "בלעך");
        // A mark after the inflection blocks the word-end check too.
        assert_eq!(respell("לוסטיקער", &["קער"]), "לוסטיקער");
    }
}
