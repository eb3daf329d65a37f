// libyivo/src/alignment.rs
//
// Heuristic romanization for forced alignment.
//
// The aligner has no Yiddish model, so text is spelled out the way a German
// model would pronounce it: `ש` is `sch`, `װ` is `w`, `ױ` is `eu`, voiced `ז`
// is `s` and unvoiced `ס` doubles to `ss`. A few post-rules repair the cases
// where letter-by-letter output would mislead a German reader.
//
// Needs no lexical resources.

use once_cell::sync::Lazy;
use phf::phf_map;
use yiddish_core::rules::RuleSet;
use yiddish_core::to_composed;

/// Per-character German spelling. Characters not listed pass through.
static GERMAN_SPELLING: phf::Map<char, &'static str> = phf_map! {
    'א' => "",
    'אַ' => "a",
    'אָ' => "o",
    'ב' => "b",
    'בּ' => "b",
    'בֿ' => "w",
    'ג' => "g",
    'ד' => "d",
    'ה' => "h",
    'ו' => "u",
    'וּ' => "u",
    'װ' => "w",
    'ױ' => "eu",
    'ז' => "s",
    'ח' => "ch",
    'ט' => "t",
    'י' => "i",
    'יִ' => "i",
    'ײ' => "ei",
    'ײַ' => "ei",
    'כּ' => "k",
    'כ' => "ch",
    'ך' => "ch",
    'ל' => "l",
    'מ' => "m",
    'ם' => "m",
    'נ' => "n",
    'ן' => "n",
    'ס' => "ss",
    'ע' => "e",
    'פּ' => "p",
    'פֿ' => "f",
    'פ' => "f",
    'ף' => "f",
    'צ' => "z",
    'ץ' => "z",
    'ק' => "k",
    'ר' => "r",
    'ש' => "sch",
    'שׂ' => "ss",
    'תּ' => "t",
    'ת' => "ss",
};

/// Fixups applied to the letter-by-letter output, in order.
const POST_RULES: &[(&str, &str)] = &[
    ("\u{05BE}", "-"),
    ("schp", "sp"),
    ("scht([aeiour])", "st${1}"),
    (r"\bpun\b", "fun"),
    ("eup", "euf"),
    // word-initial yud before a vowel is a glide
    (r"\bi([aeiou])", "j${1}"),
    // epenthetic e in final syllabic n, l
    (r"([^aeiou])([nl])\b", "${1}e${2}"),
];

static POST: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::from_patterns(POST_RULES).expect("built-in pattern compiles"));

/// Romanize Yiddish text for a German-language forced aligner.
///
/// ```
/// use libyivo::alignment::romanize_for_alignment;
///
/// assert_eq!(romanize_for_alignment("שפּילן"), "spilen");
/// ```
pub fn romanize_for_alignment(text: &str) -> String {
    let spelled: String = to_composed(text)
        .chars()
        .map(|c| match GERMAN_SPELLING.get(&c) {
            Some(latin) => (*latin).to_string(),
            None => c.to_string(),
        })
        .collect();
    POST.apply(&spelled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn german_spelling() {
        let cases = [
            ("שלום", "schlum"),
            ("װאָס", "woss"),
            ("פֿון", "fun"),
            ("אַזױ", "aseu"),
            ("הײַנט", "heint"),
            ("זינגען", "singen"),
            ("פּונקט", "punkt"),
        ];
        for (input, expected) in cases {
            assert_eq!(romanize_for_alignment(input), expected, "input {input}");
        }
    }

    #[test]
    fn consonant_cluster_fixups() {
        assert_eq!(romanize_for_alignment("שפּילן"), "spilen");
        assert_eq!(romanize_for_alignment("שטאָט"), "stot");
        assert_eq!(romanize_for_alignment("שטראַף"), "straf");
        assert_eq!(romanize_for_alignment("מענטשן"), "mentschen");
    }

    #[test]
    fn word_level_fixups() {
        assert_eq!(romanize_for_alignment("פּון"), "fun");
        assert_eq!(romanize_for_alignment("אױפּ"), "euf");
        assert_eq!(romanize_for_alignment("ייִדיש"), "jidisch");
        assert_eq!(romanize_for_alignment("איאָ"), "jo");
    }

    #[test]
    fn syllabic_consonants_get_a_vowel() {
        assert_eq!(romanize_for_alignment("ביכל"), "bichel");
        assert_eq!(romanize_for_alignment("כאַפּן"), "chapen");
        assert_eq!(romanize_for_alignment("קינדער־גאָרטן"), "kinder-gorten");
    }

    #[test]
    fn decomposed_input() {
        // bet + dagesh, alef + kamats
        assert_eq!(romanize_for_alignment("\u{05D1}\u{05BC}\u{05D0}\u{05B8}"), "bo");
    }
}
