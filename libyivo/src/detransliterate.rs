// libyivo/src/detransliterate.rs
//
// Reverse romanization: YIVO Latin letters back to Yiddish script.
//
// Romanization loses information. `ay` is usually the diphthong `ײַ` but
// sometimes `אַי` (ראַיאָן), `ts` is usually `צ` but not across a morpheme
// boundary (האַלטסט), and a silent alef inside compounds (פֿאַראײניקט) is not
// predictable at all. A curated list of exceptions is therefore applied
// before the general table. Anything the list does not cover is a known
// accuracy limit.
//
// Output uses the precomposed encoding.

use once_cell::sync::Lazy;
use yiddish_core::lexicon::LoanwordLexicon;
use yiddish_core::rules::{Rule, RuleSet};
use yiddish_core::script::{tokenize, DETRANSLIT_WORD, MAQAF};
use yiddish_core::normalize_punctuation;

/// Word-specific rewrites applied before the general table, in order.
const EXCEPTIONS: &[(&str, &str)] = &[
    // silent alef the table cannot predict
    (r#"\bfarey"#, "פֿאַראײ"),
    (r#"\bantiintel"#, "אַנטיאינטעל"),
    (r#"\bbizitst"#, "ביזאיצט"),
    (r#"\boybnoy"#, "אױבנאױ"),
    (r#"\boysib"#, "אױסאיב"),
    ("geibt", "געאיבט"),
    ("geiblt", "געאיבלט"),
    (r#"tsuibn\b"#, "צואיבן"),
    (r#"\boyseydl"#, "אױסאײדל"),
    ("geeydl", "געאײדל"),
    ("tsueydl", "צואײדל"),
    (r#"\bayneyg"#, "אײַנאײג"),
    ("geey", "געאײ"),
    ("tsuey", "צואײ"),
    ("geindlt", "געאינדלט"),
    (r#"\bumoys"#, "אומאױס"),
    (r#"\bumayn"#, "אומאײַנ"),
    (r#"\bureynikl"#, "אוראײניקל"),
    (r#"\bbaayn"#, "באַאײַנ"),
    ("geayn", "געאײַנ"),
    ("tsuayn", "צואײַנ"),
    ("durkhayl", "דורכאײַל"),
    ("farbayayl", "פֿאַרבײַאײַל"),
    ("geay", "געאײַ"),
    ("tsuayl", "צואײַל"),
    ("geirtst", "געאירצט"),
    (r#"tsuirtsn\b"#, "צואירצן"),
    ("grobayz", "גראָבאײַז"),
    ("presayz", "פּרעסאײַז"),
    ("halbindzl", "האַלבאינדזל"),
    ("hinteroyg", "הינטעראױג"),
    ("zunoyfgang", "זונאױפֿגאַנג"),
    ("moyleyzl", "מױלאײזל"),
    (r#"\bfarum"#, "פֿאַראומ"),
    (r#"\bfarur"#, "פֿאַראור"),
    (r#"\bforur"#, "פֿאָראור"),
    (r#"\bfaribl"#, "פֿאַראיבל"),
    (r#"\bfarinteres"#, "פֿאַראינטערעס"),

    // `ay` that is not the diphthong
    (r#"\brayon\b"#, "ראַיאָן"),
    (r#"\brayonen\b"#, "ראַיאָנען"),
    ("bayornt", "באַיאָרנט"),
    ("bayort", "באַיאָרט"),
    ("mayontik", "מאַיאָנטיק"),
    ("mayontkes", "מאַיאָנטקעס"),
    ("mayonez", "מאַיאָנעז"),
    ("mayestet", "מאַיעסטעט"),
    (r#"payats\b"#, "פּאַיאַץ"),
    (r#"payatsn\b"#, "פּאַיאַצן"),
    ("payatseve", "פּאַיאַצעװע"),
    ("farayorik", "פֿאַראַיאָריק"),
    (r#"\bkayor"#, "קאַיאָר"),
    (r#"\bayed"#, "אַיעד"),
    (r#"\bayo\b"#, "אַיאָ"),

    // `ey` that is not the diphthong
    ("geyogt", "געיאָגט"),
    ("geyeg", "געיעג"),
    (r#"\bgeyog\b"#, "געיאָג"),
    ("geyavet", "געיאַװעט"),
    ("geyadet", "געיאַדעט"),
    ("geyopet", "געיאָפּעט"),
    ("geyabede", "געיאַבעדע"),
    ("geyakhmert", "געיאַכמערט"),
    ("tseyakhmert", "צעיאַכמערט"),
    ("tseyakhmet", "צעיאַכמעט"),
    ("geyodlt", "געיאָדלט"),
    ("geyomer", "געיאָמער"),
    ("tseyomer", "צעיאָמער"),
    ("geyutshet", "געיוטשעט"),
    ("geyoyr", "געיױר"),
    (r#"\bgeyet(\b|er|e|n|s|ns)"#, "געיעט${1}"),
    ("geyentst", "געיענצט"),
    ("geyenket", "געיענקעט"),
    ("geyekt", "געיעקט"),
    (r#"\bgeyert\b"#, "געיערט"),
    ("pleyade", "פּלעיאַדע"),

    // `oy` that is not the diphthong
    ("proyekt", "פּראָיעקט"),
    ("umloyal", "אומלאָיאַל"),
    ("loyal", "לאָיאַל"),
    ("paranoye", "פּאַראַנאָיע"),

    // `ts` that is not the affricate
    (r#"tstu\b"#, "טסטו"),
    (r#"\beltst"#, "עלטסט"),
    (r#"\bkeltst"#, "קעלטסט"),
    (r#"\bbalibtst"#, "באַליבטסט"),
    (r#"\bgeburts"#, "געבורטס"),
    (r#"\barbets"#, "אַרבעטס"),
    (r#"\barbayts"#, "אַרבײַטס"),
    (r#"\bgots"#, "גאָטס"),
    (r#"\bgeshefts"#, "געשעפֿטס"),
    (r#"(\b|ba|far|der)haltst"#, "${1}האַלטסט"),
    (r#"(\b|tse)shpaltst"#, "${1}שפּאַלטסט"),
    (r#"(\b|tse|far)shpreytst"#, "${1}שפּרײטסט"),
    ("shpetst", "שפּעטסט"),
    (r#"\brekhts\b"#, "רעכטס"),
    ("du shatst", "דו שאַטסט"),

    // `kh` that is not the fricative
    (r#"\bpikhol"#, "פּיקהאָל"),
    (r#"\btsurikhalt"#, "צוריקהאַלט"),
    (r#"\bkrikhalt"#, "קריקהאַלט"),

    // `sh` that is not the fricative
    (r#"\boysh"#, "אױסה"), // guarded, see LOOKAHEAD_GUARDS
    (r#"\baroysh"#, "אַרױסה"),
];

/// Negative look-ahead guards, keyed by the exception pattern they guard.
///
/// `oysh` is `אױסה` (oys+h) everywhere except in עושר and אױשװיץ.
const LOOKAHEAD_GUARDS: &[(&str, &str)] = &[(r"\boysh", r"ers?\b|vits(er)?\b")];

/// General Latin-to-script table, in order.
const REVERSE_TABLE: &[(&str, &str)] = &[
    // word-initial vowels take a silent alef
    (r#"\bay"#, "אײַ"),
    (r#"\bey"#, "אײ"),
    (r#"\boy"#, "אױ"),
    (r#"\bu"#, "או"),
    (r#"\bi"#, "אי"),
    // word-final letters
    (r#"kh\b"#, "ך"),
    (r#"m\b"#, "ם"),
    (r#"n\b"#, "ן"),
    (r#"f\b"#, "ף"),
    (r#"ts\b"#, "ץ"),
    // multi-letter sequences
    ("ayi", "ײַיִ"),
    ("eyi", "ײיִ"),
    ("oyi", "ױיִ"),
    ("ay", "ײַ"),
    ("ey", "ײ"),
    ("oy", "ױ"),
    ("zh", "זש"),
    ("kh", "כ"),
    ("sh", "ש"),
    ("ts", "צ"),
    ("ia", "יִאַ"),
    ("ai", "אַיִ"),
    ("ie", "יִע"),
    ("ei", "עיִ"),
    ("ii", "יִיִ"),
    ("io", "יִאָ"),
    ("oi", "אָיִ"),
    ("iu", "יִו"),
    ("ui", "ויִ"),
    ("iyi", "יִייִ"),
    ("yi", "ייִ"),
    ("iy", "יִי"),
    ("uvu", "וּװוּ"),
    ("uv", "וּװ"),
    ("vu", "װוּ"),
    ("uu", "וּו"),
    ("uy", "וּי"),
    // single letters
    ("a", "אַ"),
    ("b", "ב"),
    ("d", "ד"),
    ("e", "ע"),
    ("f", "פֿ"),
    ("g", "ג"),
    ("h", "ה"),
    ("i", "י"),
    ("k", "ק"),
    ("l", "ל"),
    ("m", "מ"),
    ("n", "נ"),
    ("o", "אָ"),
    ("p", "פּ"),
    ("r", "ר"),
    ("s", "ס"),
    ("t", "ט"),
    ("u", "ו"),
    ("v", "װ"),
    ("y", "י"),
    ("z", "ז"),
    // acronyms keep non-final forms before `'` and `"`
    (r#"ך('|")"#, "כ${1}"),
    (r#"ם('|")"#, "מ${1}"),
    (r#"ן('|")"#, "נ${1}"),
    (r#"ף('|")"#, "פֿ${1}"),
    (r#"ץ('|")"#, "צ${1}"),
];

fn compile(table: &[(&str, &str)]) -> RuleSet {
    table
        .iter()
        .map(|(pattern, replacement)| {
            let rule = Rule::new(pattern, replacement).expect("built-in pattern compiles");
            match LOOKAHEAD_GUARDS.iter().find(|(guarded, _)| guarded == pattern) {
                Some((_, guard)) => rule.unless_followed_by(guard).expect("built-in guard compiles"),
                None => rule,
            }
        })
        .collect()
}

static EXCEPTION_RULES: Lazy<RuleSet> = Lazy::new(|| compile(EXCEPTIONS));
static REVERSE_RULES: Lazy<RuleSet> = Lazy::new(|| compile(REVERSE_TABLE));

/// Convert YIVO romanization back to Yiddish script.
///
/// The input is lowercased first. With a lexicon, every word that is the
/// phonetic spelling of a loanword is replaced by the loanword's
/// etymological spelling, e.g. `shabes` → `שבת`.
///
/// ```
/// use libyivo::detransliterate::detransliterate;
///
/// assert_eq!(detransliterate("mayn fraynd", None), "מײַן פֿרײַנד");
/// ```
pub fn detransliterate(text: &str, lexicon: Option<&LoanwordLexicon>) -> String {
    let lowered = text.to_lowercase();
    let script = REVERSE_RULES.apply(&EXCEPTION_RULES.apply(&lowered));
    match lexicon {
        Some(lexicon) => restore_loanwords(&script, lexicon),
        None => script,
    }
}

/// Swap phonetic spellings for the orthographic form from the reverse index.
fn restore_loanwords(text: &str, lexicon: &LoanwordLexicon) -> String {
    tokenize(text, DETRANSLIT_WORD)
        .into_iter()
        .map(|token| {
            if token.is_word {
                if let Some(orthographic) = lexicon.orthographic(&normalize_punctuation(token.text)) {
                    return orthographic.replace(MAQAF, "-");
                }
            }
            token.text.to_string()
        })
        .collect()
}
