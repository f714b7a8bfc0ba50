//! Streaming stop-word filtering tokenizer.
//!
//! [`StreamTokenizer`] pulls lowercase alphabetic terms out of a character
//! stream, feeding each term's bytes through a DFA
//! [`Matcher`](crate::analysis::dfa::Matcher) as they are accumulated. A term the automaton recognizes is a stop word and is
//! discarded without surfacing; everything else is yielded in order.
//!
//! Terms are bounded by a maximum byte length. The original formulation of
//! this scanner wrote into a caller-supplied buffer with no bound at all;
//! here an oversized run drains to its end and surfaces
//! [`SievaError::TermTooLong`](crate::error::SievaError::TermTooLong), after
//! which scanning resumes at the next separator.

use std::io::Read;

use crate::analysis::char_table::CharTable;
use crate::analysis::dfa::Dfa;
use crate::analysis::reader::CharReader;
use crate::error::{Result, SievaError};

/// Default maximum term length in bytes.
pub const DEFAULT_MAX_TERM_LEN: usize = 255;

/// A tokenizer that drains a character stream into successive accepted
/// terms, suppressing stop words via the supplied automaton.
///
/// The automaton and classification tables are read-only for the
/// tokenizer's entire lifetime; the per-call scan state lives on the stack.
pub struct StreamTokenizer<'a> {
    dfa: &'a Dfa,
    table: &'a CharTable,
    max_term_len: usize,
}

impl<'a> StreamTokenizer<'a> {
    /// Create a tokenizer over a built automaton and classification tables.
    pub fn new(dfa: &'a Dfa, table: &'a CharTable) -> Self {
        StreamTokenizer {
            dfa,
            table,
            max_term_len: DEFAULT_MAX_TERM_LEN,
        }
    }

    /// Override the maximum term length.
    pub fn with_max_term_len(mut self, max_term_len: usize) -> Self {
        self.max_term_len = max_term_len;
        self
    }

    /// Produce the next accepted term, or `None` at end of stream.
    ///
    /// Loops internally past stop words and separators, so a stream made
    /// entirely of them yields `None` on the first call.
    pub fn next_term<R: Read>(&self, reader: &mut CharReader<R>) -> Result<Option<String>> {
        loop {
            // Recognize: separator* token-char+
            let mut ch = reader.next_char()?;
            while self.table.is_separator(ch) {
                ch = reader.next_char()?;
            }

            if ch.is_none() {
                return Ok(None);
            }

            let mut term = String::new();
            let mut matcher = self.dfa.matcher();
            let mut run_len = 0usize;

            while self.table.is_token_char(ch) {
                // The loop condition guarantees a byte here.
                if let Some(b) = ch {
                    run_len += 1;
                    if run_len <= self.max_term_len {
                        let lowered = self.table.to_lower(b);
                        term.push(lowered as char);
                        matcher.feed(lowered);
                    }
                }
                ch = reader.next_char()?;
            }

            // An oversized run has been drained to its end by now, so the
            // next call resumes at the following separator.
            if run_len > self.max_term_len {
                return Err(SievaError::TermTooLong {
                    len: run_len,
                    max: self.max_term_len,
                });
            }

            if !matcher.recognized() {
                return Ok(Some(term));
            }

            // Stop word: discard and keep scanning.
        }
    }
}
