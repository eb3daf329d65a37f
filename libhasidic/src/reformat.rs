//! Final reformatting into Hasidic letter conventions.
//!
//! Hasidic print spells the Yiddish ligatures out as letter pairs (`װ` as
//! `וו`, `ײ` as `יי`) and marks a vowel-initial syllable after a vowel letter
//! with a silent alef (`ואוו`, `ייאי`). Longer sequences are listed before the
//! sequences they contain. Curly and Hebrew quotation marks become ASCII.

use once_cell::sync::Lazy;
use yiddish_core::rules::{Rule, RuleSet};

/// `(pattern, replacement)` in application order; patterns are regexes.
pub const REFORMATTING: &[(&str, &str)] = &[
    ("וּװוּ", "ואוואו"),
    ("ײיִ", "ייאי"),
    ("ײַיִ", "ייאי"),
    ("וּװ", "ואוו"),
    ("װוּ", "וואו"),
    ("װױ", "וואוי"),
    ("יִו", "יאו"),
    ("ויִ", "ואי"),
    ("וּיִ", "ואי"),
    ("יִוּ", "יאו"),
    ("יִיִ", "יאי"),
    ("וּוּ", "ואו"),
    ("ױ(ו|וּ)", "ויאו"),
    ("װ", "וו"),
    ("ױ", "וי"),
    ("ײ", "יי"),
    ("ײַ", "יי"),
    ("[“״″‟„]", "\""),
    ("׳", "'"),
];

static REFORMAT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    REFORMATTING
        .iter()
        .map(|(pattern, replacement)| {
            Rule::new(pattern, replacement).expect("built-in pattern compiles")
        })
        .collect()
});

/// Rewrite ligatures, silent-alef sequences and quotation marks.
pub fn reformat(text: &str) -> String {
    REFORMAT_RULES.apply(text)
}
