//! Ordered substitution rules.
//!
//! Every rewrite table in this workspace is an ordered list: a digraph must be
//! tried before its constituent letters, an exception before the general rule.
//! `RuleSet` keeps that order explicit and applies the rules one after the
//! other, each over the whole text, exactly like a chain of `replace_all`
//! calls.
//!
//! The `regex` crate has no look-around, so the one kind the tables need (a
//! negative look-ahead) is expressed as a guard checked at the end of each
//! candidate match.

use regex::Regex;
use std::borrow::Cow;

/// A single `(pattern, replacement)` rewrite.
///
/// The replacement may reference capture groups (`$1`, `${1}`).
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
    /// Reject a match when this (anchored) pattern matches right after it.
    unless_followed_by: Option<Regex>,
}

impl Rule {
    /// Build a rule from a regular expression.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
            unless_followed_by: None,
        })
    }

    /// Build a rule matching `find` literally; `$` in `replace` is literal too.
    pub fn literal(find: &str, replace: &str) -> Self {
        let pattern = Regex::new(&regex::escape(find)).expect("escaped literal is a valid pattern");
        Self {
            pattern,
            replacement: replace.replace('$', "$$"),
            unless_followed_by: None,
        }
    }

    /// Add a negative look-ahead guard.
    pub fn unless_followed_by(mut self, pattern: &str) -> Result<Self, regex::Error> {
        self.unless_followed_by = Some(Regex::new(&format!("^(?:{pattern})"))?);
        Ok(self)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Apply the rule to every non-overlapping match, left to right.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.unless_followed_by {
            None => self.pattern.replace_all(text, self.replacement.as_str()),
            Some(guard) => self.apply_guarded(text, guard),
        }
    }

    fn apply_guarded<'t>(&self, text: &'t str, guard: &Regex) -> Cow<'t, str> {
        let mut out = String::new();
        let mut copied = 0;
        let mut pos = 0;
        let mut changed = false;

        while pos <= text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };
            let Some(m) = caps.get(0) else {
                break;
            };

            if guard.is_match(&text[m.end()..]) {
                // Retry one character further, as a look-ahead failure would.
                match next_boundary(text, m.start()) {
                    Some(next) => {
                        pos = next;
                        continue;
                    }
                    None => break,
                }
            }

            out.push_str(&text[copied..m.start()]);
            caps.expand(&self.replacement, &mut out);
            copied = m.end();
            changed = true;

            pos = if m.is_empty() {
                match next_boundary(text, m.end()) {
                    Some(next) => next,
                    None => break,
                }
            } else {
                m.end()
            };
        }

        if !changed {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[copied..]);
        Cow::Owned(out)
    }
}

/// Byte index of the character boundary after `idx`, if any.
fn next_boundary(text: &str, idx: usize) -> Option<usize> {
    text[idx..].chars().next().map(|c| idx + c.len_utf8())
}

/// An ordered sequence of rules applied one after the other.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compile `(pattern, replacement)` regex pairs, preserving order.
    pub fn from_patterns<S: AsRef<str>>(pairs: &[(S, S)]) -> Result<Self, regex::Error> {
        let rules = pairs
            .iter()
            .map(|(p, r)| Rule::new(p.as_ref(), r.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Build literal find/replace rules, preserving order.
    pub fn from_literals<S: AsRef<str>>(pairs: &[(S, S)]) -> Self {
        Self {
            rules: pairs
                .iter()
                .map(|(f, r)| Rule::literal(f.as_ref(), r.as_ref()))
                .collect(),
        }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Run every rule in order over the text.
    pub fn apply(&self, text: &str) -> String {
        let mut current = text.to_string();
        for rule in &self.rules {
            if let Cow::Owned(next) = rule.apply(&current) {
                current = next;
            }
        }
        current
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
