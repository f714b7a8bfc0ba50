//! Stop-word filtering lexical analyzer.
//!
//! [`LexicalAnalyzer`] ties the pieces together: it builds the minimal DFA
//! from a stop-word source, holds the byte classification tables, and hands
//! out lowercase terms from character streams with stop words suppressed.
//!
//! # Examples
//!
//! ```
//! use sieva::analysis::analyzer::LexicalAnalyzer;
//!
//! let mut analyzer = LexicalAnalyzer::new();
//! analyzer.set_stop_word_list(["the", "a"]);
//!
//! let terms = analyzer.analyze("The quick brown fox").unwrap();
//! assert_eq!(terms, vec!["quick", "brown", "fox"]);
//! ```

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::analysis::char_table::CharTable;
use crate::analysis::dfa::{Dfa, DfaBuilder};
use crate::analysis::reader::CharReader;
use crate::analysis::stop_words::WordCollection;
use crate::analysis::tokenizer::{DEFAULT_MAX_TERM_LEN, StreamTokenizer};
use crate::error::Result;

/// A tokenizing analyzer that filters stop words through a minimal DFA.
///
/// The automaton is rebuilt in full by every `set_stop_words*` call and
/// replaces the previous one only once complete; everything else is
/// read-only between rebuilds.
pub struct LexicalAnalyzer {
    dfa: Dfa,
    table: CharTable,
    max_term_len: usize,
}

impl LexicalAnalyzer {
    /// Create an analyzer with an empty stop-word set.
    ///
    /// Until a stop-word list is set, every alphabetic run passes through
    /// unfiltered.
    pub fn new() -> Self {
        LexicalAnalyzer {
            dfa: Dfa::empty(),
            table: CharTable::new(),
            max_term_len: DEFAULT_MAX_TERM_LEN,
        }
    }

    /// Override the maximum term length in bytes.
    pub fn with_max_term_len(mut self, max_term_len: usize) -> Self {
        self.max_term_len = max_term_len;
        self
    }

    /// Load a stop-word file and rebuild the automaton from it.
    ///
    /// Fails with [`FileUnreadable`](crate::error::SievaError::FileUnreadable)
    /// if the file cannot be opened; the previous automaton stays in place on
    /// failure.
    pub fn set_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let collection = WordCollection::load(path)?;
        self.rebuild(collection);
        Ok(())
    }

    /// Rebuild the automaton from an in-memory word list.
    pub fn set_stop_word_list<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.rebuild(words.into_iter().collect());
    }

    fn rebuild(&mut self, collection: WordCollection) {
        let word_count = collection.len();
        let dfa = DfaBuilder::build(collection);
        debug!(
            "built stop-word DFA: {} words, {} states, {} arcs",
            word_count,
            dfa.state_count(),
            dfa.arc_count()
        );
        self.dfa = dfa;
    }

    /// The current automaton.
    pub fn dfa(&self) -> &Dfa {
        &self.dfa
    }

    /// Produce the next accepted term from `reader`, or `None` at end of
    /// stream.
    pub fn next_term<R: Read>(&self, reader: &mut CharReader<R>) -> Result<Option<String>> {
        self.tokenizer().next_term(reader)
    }

    /// Iterate the accepted terms of a byte source.
    pub fn terms<R: Read>(&self, source: R) -> Terms<'_, R> {
        Terms {
            analyzer: self,
            reader: CharReader::new(source),
            done: false,
        }
    }

    /// Collect the accepted terms of a string.
    pub fn analyze(&self, text: &str) -> Result<Vec<String>> {
        self.terms(text.as_bytes()).collect()
    }

    fn tokenizer(&self) -> StreamTokenizer<'_> {
        StreamTokenizer::new(&self.dfa, &self.table).with_max_term_len(self.max_term_len)
    }
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the accepted terms of one character stream.
///
/// Yields `Err` items for I/O failures and oversized terms; iteration
/// continues past an oversized term and ends at end of stream.
pub struct Terms<'a, R: Read> {
    analyzer: &'a LexicalAnalyzer,
    reader: CharReader<R>,
    done: bool,
}

impl<R: Read> Iterator for Terms<'_, R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.analyzer.next_term(&mut self.reader) {
            Ok(Some(term)) => Some(Ok(term)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => Some(Err(e)),
        }
    }
}
