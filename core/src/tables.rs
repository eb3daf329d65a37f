//! Rule tables for the Hasidic-orthography converter.
//!
//! The tables are maintained outside this workspace as one file per table.
//! Two-column tables are `find<TAB>replace`, list tables hold one entry per
//! line; either may start with a header line (`Find<TAB>Replace`, `Words`).
//!
//! Literal tables are composed on load. `word_group_variants` and
//! `last_minute_fixes` hold regular expressions; they are compiled once
//! here so a bad pattern fails loading instead of a later transform.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::encoding::to_composed;
use crate::error::{ConfigLoadError, Result};
use crate::rules::{Rule, RuleSet};

/// The tables making up a Hasidic rule set, in file-name form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasidicTable {
    WholeWord,
    Prefix,
    Suffix,
    Anywhere,
    Lkizmen,
    WordGroup,
    IkExceptions,
    LekhExceptions,
    LastMinuteFixes,
}

impl HasidicTable {
    pub const ALL: [HasidicTable; 9] = [
        HasidicTable::WholeWord,
        HasidicTable::Prefix,
        HasidicTable::Suffix,
        HasidicTable::Anywhere,
        HasidicTable::Lkizmen,
        HasidicTable::WordGroup,
        HasidicTable::IkExceptions,
        HasidicTable::LekhExceptions,
        HasidicTable::LastMinuteFixes,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            HasidicTable::WholeWord => "whole_word_variants.tsv",
            HasidicTable::Prefix => "prefix_variants.tsv",
            HasidicTable::Suffix => "suffix_variants.tsv",
            HasidicTable::Anywhere => "anywhere_variants.tsv",
            HasidicTable::Lkizmen => "lkizmen.txt",
            HasidicTable::WordGroup => "word_group_variants.tsv",
            HasidicTable::IkExceptions => "ik_exceptions.txt",
            HasidicTable::LekhExceptions => "lekh_exceptions.txt",
            HasidicTable::LastMinuteFixes => "last_minute_fixes.tsv",
        }
    }

    /// List tables have a single column.
    pub fn is_list(self) -> bool {
        matches!(
            self,
            HasidicTable::Lkizmen | HasidicTable::IkExceptions | HasidicTable::LekhExceptions
        )
    }

    /// Entries are regular expressions rather than literal strings.
    pub fn is_pattern(self) -> bool {
        matches!(self, HasidicTable::WordGroup | HasidicTable::LastMinuteFixes)
    }

    /// The last-minute fixes operate on the final encoding and are taken verbatim.
    fn composes(self) -> bool {
        self != HasidicTable::LastMinuteFixes
    }
}

/// Parsed Hasidic rule tables, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HasidicTables {
    pub whole_word: Vec<(String, String)>,
    pub prefix: Vec<(String, String)>,
    pub suffix: Vec<(String, String)>,
    pub anywhere: Vec<(String, String)>,
    /// Loshn-koydesh words marked with apostrophes.
    pub lkizmen: Vec<String>,
    pub word_groups: Vec<(String, String)>,
    pub ik_exceptions: Vec<String>,
    pub lekh_exceptions: Vec<String>,
    pub last_minute_fixes: Vec<(String, String)>,
}

impl HasidicTables {
    /// Parse every table, fetching each file's text through `fetch`.
    pub fn parse_with<F>(mut fetch: F) -> Result<Self>
    where
        F: FnMut(HasidicTable) -> Result<String>,
    {
        let mut tables = Self::default();
        for table in HasidicTable::ALL {
            let text = fetch(table)?;
            tables.set_from_text(table, &text)?;
        }
        tables.validate()?;
        Ok(tables)
    }

    /// Replace one table with the parsed contents of `text`.
    pub fn set_from_text(&mut self, table: HasidicTable, text: &str) -> Result<()> {
        if table.is_list() {
            let entries = parse_list(table, text);
            match table {
                HasidicTable::Lkizmen => self.lkizmen = entries,
                HasidicTable::IkExceptions => self.ik_exceptions = entries,
                _ => self.lekh_exceptions = entries,
            }
        } else {
            let pairs = parse_pairs(table, text)?;
            match table {
                HasidicTable::WholeWord => self.whole_word = pairs,
                HasidicTable::Prefix => self.prefix = pairs,
                HasidicTable::Suffix => self.suffix = pairs,
                HasidicTable::Anywhere => self.anywhere = pairs,
                HasidicTable::WordGroup => self.word_groups = pairs,
                _ => self.last_minute_fixes = pairs,
            }
        }
        Ok(())
    }

    /// Check that every pattern table compiles.
    pub fn validate(&self) -> Result<()> {
        self.word_group_rules()?;
        self.last_minute_rules()?;
        Ok(())
    }

    pub fn word_group_rules(&self) -> Result<RuleSet> {
        compile_patterns(HasidicTable::WordGroup, &self.word_groups)
    }

    pub fn last_minute_rules(&self) -> Result<RuleSet> {
        compile_patterns(HasidicTable::LastMinuteFixes, &self.last_minute_fixes)
    }

    /// Entry count per table, for logging.
    pub fn counts(&self) -> [(HasidicTable, usize); 9] {
        [
            (HasidicTable::WholeWord, self.whole_word.len()),
            (HasidicTable::Prefix, self.prefix.len()),
            (HasidicTable::Suffix, self.suffix.len()),
            (HasidicTable::Anywhere, self.anywhere.len()),
            (HasidicTable::Lkizmen, self.lkizmen.len()),
            (HasidicTable::WordGroup, self.word_groups.len()),
            (HasidicTable::IkExceptions, self.ik_exceptions.len()),
            (HasidicTable::LekhExceptions, self.lekh_exceptions.len()),
            (HasidicTable::LastMinuteFixes, self.last_minute_fixes.len()),
        ]
    }

    /// A handful of entries per table, for demos and smoke tests.
    pub fn load_demo() -> Self {
        let pair = |a: &str, b: &str| (to_composed(a), to_composed(b));
        Self {
            whole_word: vec![pair("פֿון", "פון"), pair("איז", "איז")],
            prefix: vec![pair("צו", "צו")],
            suffix: vec![pair("ען", "ן")],
            anywhere: vec![pair("פֿ", "פ")],
            lkizmen: vec![to_composed("שבת")],
            word_groups: vec![(r"\bאין דער\b".to_string(), "אינעם".to_string())],
            ik_exceptions: vec![to_composed("מוזיק")],
            lekh_exceptions: vec![to_composed("בלעך")],
            last_minute_fixes: vec![("''".to_string(), "'".to_string())],
        }
    }
}

fn is_header(table: HasidicTable, line: &str) -> bool {
    let line = line.trim();
    if table.is_list() {
        line.eq_ignore_ascii_case("words")
    } else {
        line.split_once('\t')
            .map(|(a, b)| a.trim().eq_ignore_ascii_case("find") && b.trim().eq_ignore_ascii_case("replace"))
            .unwrap_or(false)
    }
}

/// Lines that carry content, numbered from 1, header removed.
fn content_lines(table: HasidicTable, text: &str) -> Vec<(usize, &str)> {
    let mut lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty())
        .collect();
    if lines.first().is_some_and(|(_, l)| is_header(table, l)) {
        lines.remove(0);
    }
    lines
}

fn parse_list(table: HasidicTable, text: &str) -> Vec<String> {
    content_lines(table, text)
        .into_iter()
        .map(|(_, line)| to_composed(line.trim()))
        .collect()
}

/// Parse `find<TAB>replace` lines. A repeated find keeps its first position
/// and takes the last replacement.
fn parse_pairs(table: HasidicTable, text: &str) -> Result<Vec<(String, String)>> {
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut seen: AHashMap<String, usize> = AHashMap::new();
    for (line_no, line) in content_lines(table, text) {
        let (find, replace) = line.split_once('\t').ok_or_else(|| ConfigLoadError::Parse {
            resource: table.file_name().to_string(),
            line: line_no,
            reason: "expected find<TAB>replace".to_string(),
        })?;
        if find.is_empty() {
            return Err(ConfigLoadError::Parse {
                resource: table.file_name().to_string(),
                line: line_no,
                reason: "empty find column".to_string(),
            });
        }
        let (find, replace) = if table.composes() {
            (to_composed(find), to_composed(replace))
        } else {
            (find.to_string(), replace.to_string())
        };
        match seen.get(&find) {
            Some(&i) => pairs[i].1 = replace,
            None => {
                seen.insert(find.clone(), pairs.len());
                pairs.push((find, replace));
            }
        }
    }
    Ok(pairs)
}

fn compile_patterns(table: HasidicTable, pairs: &[(String, String)]) -> Result<RuleSet> {
    pairs
        .iter()
        .map(|(find, replace)| {
            Rule::new(find, replace).map_err(|source| ConfigLoadError::Pattern {
                resource: table.file_name().to_string(),
                pattern: find.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_from(files: Vec<(HasidicTable, &'static str)>) -> impl FnMut(HasidicTable) -> Result<String> {
        move |table| {
            Ok(files
                .iter()
                .find(|(t, _)| *t == table)
                .map(|(_, text)| text.to_string())
                .unwrap_or_default())
        }
    }

    #[test]
    fn headers_are_skipped() {
        let tables = HasidicTables::parse_with(fetch_from(vec![
            (HasidicTable::WholeWord, "Find\tReplace\nפֿון\tפון\n"),
            (HasidicTable::Lkizmen, "Words\nשבת\nתורה\n"),
        ]))
        .unwrap();
        assert_eq!(
            tables.whole_word,
            vec![("\u{FB4E}ון".to_string(), "פון".to_string())]
        );
        assert_eq!(tables.lkizmen, vec!["שבת".to_string(), "תורה".to_string()]);
    }

    #[test]
    fn headerless_tables_keep_first_line() {
        let mut tables = HasidicTables::default();
        tables.set_from_text(HasidicTable::Suffix, "ען\tן\nעם\tם\n").unwrap();
        assert_eq!(tables.suffix.len(), 2);
    }

    #[test]
    fn repeated_find_takes_last_replacement() {
        let mut tables = HasidicTables::default();
        tables
            .set_from_text(HasidicTable::WholeWord, "ניט\tניט\nאױך\tאויך\nניט\tנישט\n")
            .unwrap();
        assert_eq!(
            tables.whole_word,
            vec![
                ("ניט".to_string(), "נישט".to_string()),
                (to_composed("אױך"), to_composed("אויך")),
            ]
        );
    }

    #[test]
    fn last_minute_fixes_are_not_composed() {
        let mut tables = HasidicTables::default();
        tables
            .set_from_text(HasidicTable::LastMinuteFixes, "א\u{05B7}\tא\n")
            .unwrap();
        assert_eq!(tables.last_minute_fixes[0].0, "א\u{05B7}");

        tables
            .set_from_text(HasidicTable::Anywhere, "א\u{05B7}\tא\n")
            .unwrap();
        assert_eq!(tables.anywhere[0].0, "\u{FB2E}");
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let mut tables = HasidicTables::default();
        let err = tables
            .set_from_text(HasidicTable::Prefix, "Find\tReplace\nצו\tצו\nbroken\n")
            .unwrap_err();
        match err {
            ConfigLoadError::Parse { resource, line, .. } => {
                assert_eq!(resource, "prefix_variants.tsv");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_pattern_fails_validation() {
        let result = HasidicTables::parse_with(fetch_from(vec![(
            HasidicTable::WordGroup,
            "(unclosed\tx\n",
        )]));
        assert!(matches!(result, Err(ConfigLoadError::Pattern { .. })));
    }

    #[test]
    fn demo_tables_validate() {
        let tables = HasidicTables::load_demo();
        tables.validate().unwrap();
        assert_eq!(tables.word_group_rules().unwrap().len(), 1);
    }
}
