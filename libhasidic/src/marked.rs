//! A word with skip marks between its characters.
//!
//! Exception words for the suffix rules are flagged by marking the gap right
//! after each of their occurrences. A mark lives beside the text instead of
//! inside it, so no input character can be mistaken for one and no cleanup
//! pass is needed afterwards.
//!
//! Gap `i` is the position before character `i`; gap `len` is the end of the
//! word.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedWord {
    chars: Vec<char>,
    /// One flag per gap, `chars.len() + 1` entries.
    marks: Vec<bool>,
}

impl MarkedWord {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let marks = vec![false; chars.len() + 1];
        Self { chars, marks }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn is_marked(&self, gap: usize) -> bool {
        self.marks.get(gap).copied().unwrap_or(false)
    }

    /// True when `pattern` occurs at `at` without a mark inside it.
    ///
    /// The gaps at either end of the occurrence are not inspected.
    pub fn matches_at(&self, at: usize, pattern: &[char]) -> bool {
        let end = at + pattern.len();
        end <= self.chars.len()
            && self.chars[at..end] == *pattern
            && !(at + 1..end).any(|gap| self.marks[gap])
    }

    /// Mark the gap after every occurrence of `pattern`.
    ///
    /// Occurrences are found left to right without overlapping. An
    /// occurrence whose end gap is already marked is skipped, and one that
    /// straddles an earlier mark does not count.
    pub fn mark_after(&mut self, pattern: &[char]) {
        if pattern.is_empty() {
            return;
        }
        let mut i = 0;
        while i + pattern.len() <= self.chars.len() {
            let end = i + pattern.len();
            if self.matches_at(i, pattern) && !self.marks[end] {
                self.marks[end] = true;
                i = end;
            } else {
                i += 1;
            }
        }
    }

    /// Overwrite characters starting at `at`. The marks are kept.
    pub fn overwrite(&mut self, at: usize, replacement: &[char]) {
        self.chars[at..at + replacement.len()].copy_from_slice(replacement);
    }
}

impl fmt::Display for MarkedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}
