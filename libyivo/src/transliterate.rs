// libyivo/src/transliterate.rs
//
// YIVO romanization: canonical Yiddish script to Latin letters.
//
// The letter table is applied as an ordered chain of substitutions over the
// whole text. The only multi-letter entries are the affricates `דזש`, `זש`
// and `טש`; they sit in front of the letters they are made of. Yud is first
// romanized as a placeholder `j` and resolved afterwards, since whether it is
// the glide `y` or the vowel `i` depends on the letter that follows it.
//
// Etymologically spelled loanwords (loshn-koydesh words) are not
// pronounced as written. When a lexicon is supplied, every script word
// found in it is swapped for its phonetic respelling before romanizing.

use once_cell::sync::Lazy;
use yiddish_core::lexicon::LoanwordLexicon;
use yiddish_core::rules::RuleSet;
use yiddish_core::script::{tokenize, MAQAF, TRANSLIT_WORD};
use yiddish_core::{normalize_punctuation, to_composed};

/// Letter-to-Latin table in application order (precomposed forms).
const TRANSLIT_TABLE: &[(&str, &str)] = &[
    ("א", ""),
    ("אַ", "a"),
    ("אָ", "o"),
    ("ב", "b"),
    ("בֿ", "v"),
    ("ג", "g"),
    ("דזש", "dzh"),
    ("ד", "d"),
    ("ה", "h"),
    ("ו", "u"),
    ("וּ", "u"),
    ("װ", "v"),
    ("ױ", "oy"),
    ("זש", "zh"),
    ("ז", "z"),
    ("ח", "kh"),
    ("טש", "tsh"),
    ("ט", "t"),
    ("י", "j"),
    ("יִ", "i"),
    ("ײ", "ey"),
    ("ײַ", "ay"),
    ("כ", "kh"),
    ("כּ", "k"),
    ("ך", "kh"),
    ("ל", "l"),
    ("מ", "m"),
    ("ם", "m"),
    ("נ", "n"),
    ("ן", "n"),
    ("ס", "s"),
    ("ע", "e"),
    ("פּ", "p"),
    ("פֿ", "f"),
    ("ף", "f"),
    ("צ", "ts"),
    ("ץ", "ts"),
    ("ק", "k"),
    ("ר", "r"),
    ("ש", "sh"),
    ("שׂ", "s"),
    ("תּ", "t"),
    ("ת", "s"),
    ("־", "-"),
];

static TRANSLIT_RULES: Lazy<RuleSet> = Lazy::new(|| RuleSet::from_literals(TRANSLIT_TABLE));

/// Romanize canonical Yiddish text.
///
/// With a lexicon, whole words that are lexicon keys are first replaced by
/// their preferred phonetic spelling, so `שבת` comes out as `shabes` instead
/// of `shbs`. Characters without a mapping pass through unchanged.
///
/// ```
/// use libyivo::transliterate::transliterate;
///
/// assert_eq!(transliterate("קינדער־גאָרטן", None), "kinder-gortn");
/// ```
pub fn transliterate(text: &str, lexicon: Option<&LoanwordLexicon>) -> String {
    let mut romanized = to_composed(text);
    if let Some(lexicon) = lexicon {
        romanized = respell_words(&romanized, lexicon);
    }
    let romanized = TRANSLIT_RULES.apply(&romanized);
    resolve_yud(&romanized)
}

/// Swap lexicon words for their preferred pronunciation, hyphens in ASCII.
fn respell_words(text: &str, lexicon: &LoanwordLexicon) -> String {
    tokenize(text, TRANSLIT_WORD)
        .into_iter()
        .map(|token| {
            if token.is_word {
                if let Some(phonetic) = lexicon.preferred(&normalize_punctuation(token.text)) {
                    return phonetic.replace(MAQAF, "-");
                }
            }
            token.text.to_string()
        })
        .collect()
}

/// `j` before a vowel letter is the glide `y`; anywhere else it is `i`.
fn resolve_yud(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == 'j' {
            let glide = matches!(chars.peek(), Some('a' | 'e' | 'i' | 'o' | 'u'));
            out.push(if glide { 'y' } else { 'i' });
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> LoanwordLexicon {
        LoanwordLexicon::from_tsv("שבת\tשאַבעס\nבעל-הבית\tבאַלעבאָס\nחכמה\tכאָכמע\nתּורה\tטױרע,תּױרע\n").unwrap()
    }

    #[test]
    fn romanizes_common_words() {
        let cases = [
            ("ייִדיש", "yidish"),
            ("יאָר", "yor"),
            ("מײַן", "mayn"),
            ("פֿרײַנד", "fraynd"),
            ("אױף", "oyf"),
            ("װעלט", "velt"),
            ("האַרץ", "harts"),
            ("ייִנגל", "yingl"),
            ("טאָג", "tog"),
            ("מײ", "mey"),
        ];
        for (input, expected) in cases {
            assert_eq!(transliterate(input, None), expected, "input {input}");
        }
    }

    #[test]
    fn affricates_before_their_letters() {
        assert_eq!(transliterate("דזשעק", None), "dzhek");
        assert_eq!(transliterate("זשורנאַל", None), "zhurnal");
        assert_eq!(transliterate("טשאַטשקע", None), "tshatshke");
        assert_eq!(transliterate("דײַטש", None), "daytsh");
    }

    #[test]
    fn yud_resolution() {
        assert_eq!(resolve_yud("jo"), "yo");
        assert_eq!(resolve_yud("mj"), "mi");
        assert_eq!(resolve_yud("jj a"), "ii a");
        assert_eq!(resolve_yud("jja"), "iya");
        assert_eq!(transliterate("יו", None), "yu");
    }

    #[test]
    fn decomposed_input_is_composed_first() {
        // alef + patah, yud + yud + patah
        assert_eq!(transliterate("\u{05D0}\u{05B7}\u{05D9}\u{05D9}\u{05B7}", None), "aay");
    }

    #[test]
    fn lexicon_words_are_respelled() {
        let lx = lexicon();
        assert_eq!(transliterate("שבת שלום", None), "shbs shlum");
        assert_eq!(transliterate("שבת שלום", Some(&lx)), "shabes shlum");
        assert_eq!(transliterate("חכמה, תּורה!", Some(&lx)), "khokhme, toyre!");
    }

    #[test]
    fn hyphenated_lexicon_words() {
        let lx = lexicon();
        assert_eq!(transliterate("בעל־הבית", Some(&lx)), "balebos");
        // ASCII hyphen is normalized before the lookup
        assert_eq!(transliterate("בעל-הבית", Some(&lx)), "balebos");
    }

    #[test]
    fn unknown_characters_pass_through() {
        assert_eq!(transliterate("abc 123 ?!", None), "abc 123 ?!");
    }
}
