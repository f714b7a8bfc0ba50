//! Stop-word list storage and loading.
//!
//! A stop-word list is held as one shared byte buffer plus a span per word,
//! so the automaton builder can compare and slice words without ever copying
//! characters. Lists are loaded from plain text files (one word per line,
//! blank lines skipped, ASCII-lowercased on load) or filled programmatically
//! with [`WordCollection::push`].
//!
//! # Examples
//!
//! ```
//! use sieva::analysis::stop_words::WordCollection;
//!
//! let mut words = WordCollection::new();
//! words.push("The");
//! words.push("And");
//!
//! assert_eq!(words.len(), 2);
//! assert_eq!(words.word_bytes(words.words()[0]), b"the");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, SievaError};

/// A half-open span `[start, end)` into a [`WordCollection`] buffer.
///
/// Words never own their characters; they borrow them from the collection
/// they were recorded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word {
    /// Index of the first byte.
    pub start: usize,
    /// Index one past the last byte.
    pub end: usize,
}

impl Word {
    /// Create a new word span.
    pub fn new(start: usize, end: usize) -> Self {
        Word { start, end }
    }

    /// Length of the word in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check whether the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Flat storage for a stop-word list: one shared byte buffer plus an ordered
/// list of [`Word`] spans.
///
/// The collection is built once (from a file or by pushing words) and then
/// consumed by the automaton builder. Duplicate and unsorted content is
/// legal; the builder canonicalizes on its own.
#[derive(Clone, Debug, Default)]
pub struct WordCollection {
    buffer: Vec<u8>,
    words: Vec<Word>,
}

impl WordCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        WordCollection::default()
    }

    /// Load a stop-word list from a text file.
    ///
    /// One word per line, blank lines skipped, ASCII characters lowercased
    /// as they are stored. Trailing `\r` from Windows line endings is
    /// stripped. Fails with [`SievaError::FileUnreadable`] if the file
    /// cannot be opened; the content itself is never validated.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| SievaError::file_unreadable(path, e))?;
        let reader = BufReader::new(file);

        let mut collection = WordCollection::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            collection.push(line);
        }

        Ok(collection)
    }

    /// Append a word, lowercasing its ASCII characters as they are stored.
    pub fn push(&mut self, word: &str) {
        let start = self.buffer.len();
        self.buffer
            .extend(word.bytes().map(|b| b.to_ascii_lowercase()));
        let end = self.buffer.len();
        self.words.push(Word::new(start, end));
    }

    /// Number of recorded words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the collection holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The recorded word spans, in insertion order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The shared character buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The bytes of a recorded word.
    pub fn word_bytes(&self, word: Word) -> &[u8] {
        &self.buffer[word.start..word.end]
    }

    /// Split the collection into its buffer and word spans.
    pub(crate) fn into_parts(self) -> (Vec<u8>, Vec<Word>) {
        (self.buffer, self.words)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordCollection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut collection = WordCollection::new();
        for word in iter {
            collection.push(word.as_ref());
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_push_lowercases() {
        let mut words = WordCollection::new();
        words.push("ThE");
        words.push("QUICK");

        assert_eq!(words.word_bytes(words.words()[0]), b"the");
        assert_eq!(words.word_bytes(words.words()[1]), b"quick");
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "The\n\nand\r\n\nOR\n").unwrap();

        let words = WordCollection::load(file.path()).unwrap();

        assert_eq!(words.len(), 3);
        assert_eq!(words.word_bytes(words.words()[0]), b"the");
        assert_eq!(words.word_bytes(words.words()[1]), b"and");
        assert_eq!(words.word_bytes(words.words()[2]), b"or");
    }

    #[test]
    fn test_load_missing_file() {
        let result = WordCollection::load("/no/such/stopwords.txt");

        match result {
            Err(SievaError::FileUnreadable { path, .. }) => {
                assert_eq!(path.to_str(), Some("/no/such/stopwords.txt"));
            }
            other => panic!("expected FileUnreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_from_iterator() {
        let words: WordCollection = ["a", "The", "and"].into_iter().collect();

        assert_eq!(words.len(), 3);
        assert_eq!(words.word_bytes(words.words()[1]), b"the");
    }

    #[test]
    fn test_duplicates_are_legal() {
        let words: WordCollection = ["the", "the", "the"].into_iter().collect();
        assert_eq!(words.len(), 3);
    }
}
