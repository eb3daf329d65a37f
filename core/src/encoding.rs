// yiddish-core/src/encoding.rs
//
// Canonical encoding model for YIVO-orthography text.
//
// Yiddish letters with diacritics (komets-alef, pasekh-alef, melupm-vov, ...)
// exist both as a base letter followed by a combining point and as a single
// precomposed codepoint from the Alphabetic Presentation Forms block. Unicode
// NFC does not help here: the presentation forms are composition exclusions,
// so NFC would *decompose* them. All rule tables in this workspace are written
// against the precomposed forms, so every pipeline starts by composing.

/// Decomposed → precomposed pairs, in application order.
///
/// Order matters: melupm-vov must be composed before `וו` is turned into a
/// tsvey-vovn, otherwise `ווּ` would lose its dagesh to the ligature.
const PAIRS: &[(&str, &str)] = &[
    ("\u{05D5}\u{05BC}", "\u{FB35}"), // וּ
    ("\u{05D9}\u{05B4}", "\u{FB1D}"), // יִ
    ("\u{05F2}\u{05B7}", "\u{FB1F}"), // ײַ
    ("\u{05D5}\u{05D5}", "\u{05F0}"), // װ
    ("\u{05D5}\u{05D9}", "\u{05F1}"), // ױ
    ("\u{05D9}\u{05D9}", "\u{05F2}"), // ײ
    ("\u{05D0}\u{05B7}", "\u{FB2E}"), // אַ
    ("\u{05D0}\u{05B8}", "\u{FB2F}"), // אָ
    ("\u{05D1}\u{05BF}", "\u{FB4C}"), // בֿ
    ("\u{05DB}\u{05BC}", "\u{FB3B}"), // כּ
    ("\u{05E4}\u{05BC}", "\u{FB44}"), // פּ
    ("\u{05E4}\u{05BF}", "\u{FB4E}"), // פֿ
    ("\u{05E9}\u{05C2}", "\u{FB2B}"), // שׂ
    ("\u{05EA}\u{05BC}", "\u{FB4A}"), // תּ
];

/// Ligatures kept intact by `to_decomposed(_, true)`.
const DIGRAPH_LIGATURES: [&str; 3] = ["\u{05F0}", "\u{05F1}", "\u{05F2}"];

/// Points removed by [`strip_diacritics`]: hirik, patah, kamats, dagesh, rafe, sin dot.
const DIACRITICS: [char; 6] = ['\u{05B4}', '\u{05B7}', '\u{05B8}', '\u{05BC}', '\u{05BF}', '\u{05C2}'];

/// Bet with dagesh carries no distinction in YIVO spelling; collapse it to plain bet.
fn drop_bet_dagesh(text: &str) -> String {
    text.replace('\u{FB31}', "\u{05D1}")
        .replace("\u{05D1}\u{05BC}", "\u{05D1}")
}

fn compose_pass(text: &str) -> String {
    let mut out = text.to_string();
    for (decomposed, composed) in PAIRS {
        if out.contains(decomposed) {
            out = out.replace(decomposed, composed);
        }
    }
    drop_bet_dagesh(&out)
}

/// Convert to the canonical precomposed encoding.
///
/// The pairs list is re-applied until nothing changes: composing `יי` into
/// `ײ` can create a `ײ`+patah sequence that an earlier pair handles. Every
/// productive pass shortens the text, so the loop terminates.
///
/// ```
/// use yiddish_core::encoding::to_composed;
///
/// assert_eq!(to_composed("\u{05D0}\u{05B7}"), "\u{FB2E}");
/// assert_eq!(to_composed("\u{05D5}\u{05D5}"), "\u{05F0}");
/// ```
pub fn to_composed(text: &str) -> String {
    let mut current = compose_pass(text);
    loop {
        let next = compose_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Convert to base letters plus combining points.
///
/// With `preserve_digraphs` the three ligatures `װ ױ ײ` stay single
/// codepoints, which is what heuristic romanizers want. `ײ`+patah is always
/// written with the ligature since the double-yud letter only exists there.
pub fn to_decomposed(text: &str, preserve_digraphs: bool) -> String {
    let mut out = text.to_string();
    for (decomposed, composed) in PAIRS {
        if preserve_digraphs && DIGRAPH_LIGATURES.contains(composed) {
            continue;
        }
        if out.contains(composed) {
            out = out.replace(composed, decomposed);
        }
    }
    out = out.replace("\u{05D9}\u{05D9}\u{05B7}", "\u{05F2}\u{05B7}");
    drop_bet_dagesh(&out)
}

/// Decompose and remove all vowel and consonant points.
pub fn strip_diacritics(text: &str) -> String {
    to_decomposed(text, false)
        .chars()
        .filter(|c| !DIACRITICS.contains(c))
        .collect()
}

/// Canonicalize punctuation: maqaf for hyphens, ASCII quotes for geresh and gershayim.
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '-' => '\u{05BE}',
            '\u{2032}' | '\u{05F3}' => '\'',
            '\u{2033}' | '\u{05F4}' => '"',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn composes_every_pair() {
        for (decomposed, composed) in PAIRS {
            assert_eq!(&to_composed(decomposed), composed);
        }
    }

    #[test]
    fn melupm_vov_wins_over_tsvey_vovn() {
        // vov, vov+dagesh
        assert_eq!(to_composed("\u{05D5}\u{05D5}\u{05BC}"), "\u{05D5}\u{FB35}");
    }

    #[test]
    fn double_yud_with_patah_composes_fully() {
        assert_eq!(to_composed("\u{05D9}\u{05D9}\u{05B7}"), "\u{FB1F}");
    }

    #[test]
    fn bet_dagesh_is_dropped() {
        assert_eq!(to_composed("\u{FB31}"), "\u{05D1}");
        assert_eq!(to_composed("\u{05D1}\u{05BC}"), "\u{05D1}");
        assert_eq!(to_decomposed("\u{FB31}", false), "\u{05D1}");
    }

    #[test]
    fn decompose_keeps_ligatures_on_request() {
        let text = "\u{05F0}\u{05F1}\u{05F2}\u{FB2E}";
        assert_eq!(
            to_decomposed(text, true),
            "\u{05F0}\u{05F1}\u{05F2}\u{05D0}\u{05B7}"
        );
        assert_eq!(
            to_decomposed(text, false),
            "\u{05D5}\u{05D5}\u{05D5}\u{05D9}\u{05D9}\u{05D9}\u{05D0}\u{05B7}"
        );
    }

    #[test]
    fn pasekh_tsvey_yudn_keeps_ligature_when_decomposed() {
        assert_eq!(to_decomposed("\u{FB1F}", false), "\u{05F2}\u{05B7}");
    }

    #[test]
    fn strip_removes_points() {
        // אָװנט → אוונט
        let composed = "\u{FB2F}\u{05F0}\u{05E0}\u{05D8}";
        assert_eq!(strip_diacritics(composed), "\u{05D0}\u{05D5}\u{05D5}\u{05E0}\u{05D8}");
    }

    #[test]
    fn punctuation_is_canonicalized() {
        assert_eq!(normalize_punctuation("a-b \u{05F3}\u{05F4}\u{2032}\u{2033}"), "a\u{05BE}b '\"'\"");
    }

    #[test]
    fn unmapped_text_passes_through() {
        let text = "hello, world! 123 \u{05D2}\u{05D5}\u{05D8}";
        assert_eq!(to_composed(text), text);
        assert_eq!(to_decomposed(text, false), text);
    }

    fn mapped_piece() -> impl Strategy<Value = String> {
        let mut pieces: Vec<String> = PAIRS.iter().map(|(d, _)| d.to_string()).collect();
        pieces.extend(
            ["\u{05D0}", "\u{05D1}", "\u{05D5}", "\u{05D9}", "\u{05E9}", " "]
                .iter()
                .map(|s| s.to_string()),
        );
        proptest::sample::select(pieces)
    }

    proptest! {
        #[test]
        fn composition_is_idempotent(s in "\\PC{0,24}") {
            let once = to_composed(&s);
            prop_assert_eq!(to_composed(&once), once);
        }

        #[test]
        fn composition_is_idempotent_on_script_text(pieces in proptest::collection::vec(mapped_piece(), 0..12)) {
            let s: String = pieces.concat();
            let once = to_composed(&s);
            prop_assert_eq!(to_composed(&once), once);
        }

        #[test]
        fn decomposition_recovers_decomposed_form(pieces in proptest::collection::vec(mapped_piece(), 0..12)) {
            let s: String = pieces.concat();
            prop_assert_eq!(to_decomposed(&to_composed(&s), false), to_decomposed(&s, false));
        }
    }
}
