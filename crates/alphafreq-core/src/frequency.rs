//! Letter frequency counting.
//!
//! Each line is trimmed and lowercased, digits and underscores are removed,
//! and every remaining word character is counted. Lines fold into one
//! immutable [`FrequencyTable`].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::AlphaFreqError;

/// Number of plotted letters (`a`..=`z`).
pub const LETTER_COUNT: usize = 26;

/// Unicode digits and the underscore, removed before matching.
static DIGITS_AND_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d_]").expect("digit pattern is valid"));

/// Unicode word characters.
static WORD_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w").expect("word pattern is valid"));

/// Occurrence counts per character.
///
/// The 26 lowercase ASCII letters always have a slot (zero when absent).
/// Other word characters, e.g. accented or non-Latin letters, are kept in a
/// separate map: they are counted but never plotted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    letters: [u64; LETTER_COUNT],
    unplotted: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count for any character. Zero when never seen.
    pub fn count(&self, c: char) -> u64 {
        match letter_index(c) {
            Some(i) => self.letters[i],
            None => self.unplotted.get(&c).copied().unwrap_or(0),
        }
    }

    /// Largest count among `a`..=`z`.
    pub fn max_letter_count(&self) -> u64 {
        self.letters.iter().copied().max().unwrap_or(0)
    }

    /// Sum of the `a`..=`z` counts.
    pub fn letter_total(&self) -> u64 {
        self.letters.iter().sum()
    }

    /// Sum of counts for word characters outside `a`..=`z`.
    pub fn unplotted_total(&self) -> u64 {
        self.unplotted.values().sum()
    }

    /// Sum of every count in the table.
    pub fn total(&self) -> u64 {
        self.letter_total() + self.unplotted_total()
    }

    /// Word characters outside `a`..=`z` and their counts, in code point order.
    pub fn unplotted(&self) -> &BTreeMap<char, u64> {
        &self.unplotted
    }

    /// `(letter, count)` pairs for `a`..=`z` in alphabet order.
    pub fn iter_letters(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ('a'..='z').zip(self.letters.iter().copied())
    }

    /// Combine two tables by adding counts.
    pub fn merge(mut self, other: Self) -> Self {
        for (slot, n) in self.letters.iter_mut().zip(other.letters) {
            *slot += n;
        }
        for (c, n) in other.unplotted {
            *self.unplotted.entry(c).or_insert(0) += n;
        }
        self
    }

    fn record(mut self, c: char) -> Self {
        match letter_index(c) {
            Some(i) => self.letters[i] += 1,
            None => *self.unplotted.entry(c).or_insert(0) += 1,
        }
        self
    }
}

impl FromIterator<char> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::record)
    }
}

fn letter_index(c: char) -> Option<usize> {
    c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize)
}

/// Count the word characters of a single line.
pub fn count_line(line: &str) -> FrequencyTable {
    let lowered = line.trim().to_lowercase();
    let stripped = DIGITS_AND_UNDERSCORE.replace_all(&lowered, "");
    WORD_CHAR
        .find_iter(&stripped)
        .flat_map(|m| m.as_str().chars())
        .collect()
}

/// Count an in-memory text, line by line.
pub fn count_text(text: &str) -> FrequencyTable {
    text.lines()
        .map(count_line)
        .fold(FrequencyTable::default(), FrequencyTable::merge)
}

/// Count a buffered reader line by line. Input must be valid UTF-8.
pub fn count_reader<R: BufRead>(reader: R) -> io::Result<FrequencyTable> {
    reader
        .lines()
        .try_fold(FrequencyTable::default(), |table, line| {
            Ok(table.merge(count_line(&line?)))
        })
}

/// Count the contents of a text file.
pub fn count_file(path: &Path) -> Result<FrequencyTable, AlphaFreqError> {
    let read_error = |source| AlphaFreqError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let table = count_reader(BufReader::new(file)).map_err(read_error)?;

    tracing::debug!(
        "counted {} word characters in {} ({} outside a-z)",
        table.total(),
        path.display(),
        table.unplotted_total()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_and_underscore_excluded() {
        let table = count_text("Aa11_bb");
        assert_eq!(table.count('a'), 2);
        assert_eq!(table.count('b'), 2);
        assert_eq!(table.count('1'), 0);
        assert_eq!(table.count('_'), 0);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_absent_letters_are_zero() {
        let table = count_text("abc");
        assert_eq!(table.iter_letters().count(), LETTER_COUNT);
        assert_eq!(table.count('z'), 0);
        assert_eq!(table.max_letter_count(), 1);
    }

    #[test]
    fn test_punctuation_and_whitespace_ignored() {
        let table = count_text("  Hello, world!\n\t-- again? ");
        assert_eq!(table.count('l'), 3);
        assert_eq!(table.count('o'), 2);
        assert_eq!(table.count(','), 0);
        assert_eq!(table.count(' '), 0);
        assert_eq!(table.total(), "helloworldagain".len() as u64);
    }

    #[test]
    fn test_total_matches_remaining_word_chars() {
        let text = "Four score and 7 years_ago\nour fathers brought forth, 1863.";
        let expected = text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphanumeric() && !c.is_ascii_digit())
            .count() as u64;
        assert_eq!(count_text(text).total(), expected);
    }

    #[test]
    fn test_non_ascii_letters_kept_unplotted() {
        let table = count_text("Été ß");
        assert_eq!(table.count('t'), 1);
        assert_eq!(table.count('é'), 2);
        assert_eq!(table.count('ß'), 1);
        assert_eq!(table.letter_total(), 1);
        assert_eq!(table.unplotted_total(), 3);
        assert_eq!(table.unplotted().keys().copied().collect::<Vec<_>>(), vec!['ß', 'é']);
    }

    #[test]
    fn test_unicode_digits_removed() {
        // Arabic-Indic digits are Unicode digits too.
        let table = count_text("a\u{0663}\u{0664}b");
        assert_eq!(table.total(), 2);
    }

    #[test]
    fn test_merge_adds_counts() {
        let merged = count_text("aab").merge(count_text("bé"));
        assert_eq!(merged.count('a'), 2);
        assert_eq!(merged.count('b'), 2);
        assert_eq!(merged.count('é'), 1);
    }

    #[test]
    fn test_reader_matches_text() {
        let text = "The quick brown fox\njumps over the lazy dog\n";
        let from_reader = count_reader(text.as_bytes()).expect("in-memory read");
        assert_eq!(from_reader, count_text(text));
    }

    #[test]
    fn test_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'a', 0xff, b'\n'];
        assert!(count_reader(bytes).is_err());
    }

    #[test]
    fn test_empty_input() {
        let table = count_text("");
        assert_eq!(table, FrequencyTable::default());
        assert_eq!(table.max_letter_count(), 0);
    }
}
