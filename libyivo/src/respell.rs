// libyivo/src/respell.rs
//
// Loshn-koydesh respelling: etymological spellings to phonetic ones.
//
// Words of Hebrew and Aramaic origin keep their source spelling in YIVO
// orthography (שבת, not שאַבעס). Speech synthesis needs the phonetic form, so
// every whole-word occurrence of a lexicon key is replaced with its preferred
// respelling. Keys are tried longest first, so `בית המדרש` wins over `בית`.
//
// A replacement is never rewritten again: once `סעודה` has become `סודע`,
// the key `סודע` must not turn it into `סױדע`. The text is therefore kept as
// a sequence of pieces, each either untouched or already respelled, and keys
// only match inside untouched pieces. The flags never reach the output.

use yiddish_core::lexicon::LoanwordLexicon;
use yiddish_core::script::is_script_letter;
use yiddish_core::to_composed;

/// Lexicon keys that are usually ordinary Germanic words (אין "in", צו "to").
pub const DEFAULT_HOMOGRAPHS: &[&str] = &[
    "אין", "צום", "בין", "ברי", "מיד", "קין",
    "שער", "מעגן", "צו", "מאַנס", "טוען", "מערער",
];

/// Preferred variants that lose to the second variant when one exists.
pub const DEFAULT_PREFER_SECOND: &[&str] = &[
    "אַדױשעם", "כאַנוקע", "גדױלע", "כאַװײרע", "מיכיע", "כאָװער",
    "אָרעװ", "מאָסער", "כיִעס", "זקאָנים", "נעװאָלע", "מאַשלעם",
    "כפֿאָצים", "כאַכאָמע", "טאַנאָיִם", "יאָסעף", "יאָסעפֿס", "יאָסעפֿן",
];

/// Abbreviation the lexicon misses.
const REB: (&str, &str) = ("ר'", "רעב");

/// Whole-word corrections applied to the final text.
const CORRECTIONS: &[(&str, &str)] = &[
    (r#"יוד"שין"#, "יאַש"),
    (r#"יוד״שין"#, "יאַש"),
];

/// What a match sees on the far side of a piece edge.
#[derive(Debug, Clone, Copy)]
enum Edge {
    /// Start or end of the text, or the edge of a respelled piece.
    Open,
    /// Right after an empty respelling.
    Blocked,
    Char(char),
}

#[derive(Debug, Clone)]
struct Piece {
    text: String,
    respelled: bool,
}

/// Loanword respeller with its key order and variant choices fixed up front.
#[derive(Debug, Clone)]
pub struct Respeller {
    /// `(key, replacement)`, longest key first.
    rules: Vec<(String, String)>,
}

impl Respeller {
    /// Build from a lexicon using the default homograph and variant lists.
    pub fn new(lexicon: &LoanwordLexicon) -> Self {
        Self::with_options(lexicon, DEFAULT_HOMOGRAPHS, DEFAULT_PREFER_SECOND)
    }

    pub fn with_options<S: AsRef<str>>(
        lexicon: &LoanwordLexicon,
        homographs: &[S],
        prefer_second: &[S],
    ) -> Self {
        let homographs: Vec<String> = homographs.iter().map(|h| to_composed(h.as_ref())).collect();
        let prefer_second: Vec<String> =
            prefer_second.iter().map(|p| to_composed(p.as_ref())).collect();

        let rules = lexicon
            .longest_first()
            .into_iter()
            .filter(|entry| !homographs.contains(&entry.orthographic))
            .filter_map(|entry| {
                let preferred = entry.variants.first()?;
                let choice = match entry.variants.get(1) {
                    Some(second) if prefer_second.contains(preferred) => second,
                    _ => preferred,
                };
                Some((entry.orthographic.clone(), choice.clone()))
            })
            .collect();
        Self { rules }
    }

    /// Number of keys that can fire.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Respell every loanword in `text`; everything else is left as is.
    pub fn respell(&self, text: &str) -> String {
        let mut pieces = vec![Piece {
            text: to_composed(text),
            respelled: false,
        }];
        for (key, replacement) in &self.rules {
            pieces = replace_in_pieces(pieces, key, replacement, true);
        }
        pieces = replace_in_pieces(pieces, REB.0, REB.1, false);

        let mut out: String = pieces.into_iter().map(|p| p.text).collect();
        for (wrong, right) in CORRECTIONS {
            out = replace_words(&out, wrong, right, Edge::Open, Edge::Open);
        }
        out
    }
}

fn may_precede(edge: Edge) -> bool {
    match edge {
        Edge::Open => true,
        Edge::Blocked => false,
        Edge::Char(c) => !is_script_letter(c),
    }
}

fn may_follow(edge: Edge) -> bool {
    match edge {
        Edge::Open | Edge::Blocked => true,
        Edge::Char(c) => !is_script_letter(c) && c != '\'',
    }
}

/// Byte offsets of whole-word occurrences of `key` in `text`.
///
/// `before` and `after` describe what lies beyond the ends of `text`. A
/// rejected candidate is retried one character further on.
fn find_words(text: &str, key: &str, before: Edge, after: Edge) -> Vec<usize> {
    let mut found = Vec::new();
    if key.is_empty() {
        return found;
    }
    let mut from = 0;
    while let Some(rel) = text[from..].find(key) {
        let start = from + rel;
        let end = start + key.len();
        let prev = text[..start].chars().next_back().map_or(before, Edge::Char);
        let next = text[end..].chars().next().map_or(after, Edge::Char);
        if may_precede(prev) && may_follow(next) {
            found.push(start);
            from = end;
        } else {
            from = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
        if from > text.len() {
            break;
        }
    }
    found
}

fn replace_words(text: &str, key: &str, replacement: &str, before: Edge, after: Edge) -> String {
    let hits = find_words(text, key, before, after);
    if hits.is_empty() {
        return text.to_string();
    }
    splice(text, &hits, key.len(), replacement)
}

/// Replace `key_len` bytes at every offset in `hits` (ascending, disjoint).
fn splice(text: &str, hits: &[usize], key_len: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    for &start in hits {
        out.push_str(&text[copied..start]);
        out.push_str(replacement);
        copied = start + key_len;
    }
    out.push_str(&text[copied..]);
    out
}

/// Replace whole-word `key` inside untouched pieces.
///
/// With `mark`, each replacement becomes a respelled piece of its own.
/// Pieces without a match are moved through as they are.
fn replace_in_pieces(pieces: Vec<Piece>, key: &str, replacement: &str, mark: bool) -> Vec<Piece> {
    let mut out: Vec<Piece> = Vec::with_capacity(pieces.len());
    let mut before = Edge::Open;

    for piece in pieces {
        let edge = piece.text.chars().next_back().map_or(Edge::Blocked, Edge::Char);
        if piece.respelled {
            out.push(piece);
            before = edge;
            continue;
        }
        // Untouched pieces are never adjacent: the next one, if any, is respelled.
        let hits = find_words(&piece.text, key, before, Edge::Open);
        before = edge;
        if hits.is_empty() {
            out.push(piece);
            continue;
        }

        if !mark {
            out.push(Piece {
                text: splice(&piece.text, &hits, key.len(), replacement),
                respelled: false,
            });
            continue;
        }

        let mut copied = 0;
        for start in hits {
            if start > copied {
                out.push(Piece {
                    text: piece.text[copied..start].to_string(),
                    respelled: false,
                });
            }
            out.push(Piece {
                text: replacement.to_string(),
                respelled: true,
            });
            copied = start + key.len();
        }
        if copied < piece.text.len() {
            out.push(Piece {
                text: piece.text[copied..].to_string(),
                respelled: false,
            });
        }
    }
    out
}
