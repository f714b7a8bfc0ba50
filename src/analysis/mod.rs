//! Text analysis: stop-word automaton construction and stream tokenization.
//!
//! The pipeline runs leaves-first: a stop-word file becomes a
//! [`WordCollection`](stop_words::WordCollection), the collection is
//! consumed by the [`DfaBuilder`](dfa::DfaBuilder) into a minimal
//! [`Dfa`](dfa::Dfa), and the [`StreamTokenizer`](tokenizer::StreamTokenizer)
//! walks that automaton against streamed input, using the
//! [`CharTable`](char_table::CharTable) to classify bytes.
//! [`LexicalAnalyzer`](analyzer::LexicalAnalyzer) wraps the whole pipeline
//! behind a two-call API: set the stop words, then pull terms.

pub mod analyzer;
pub mod char_table;
pub mod dfa;
pub mod reader;
pub mod stop_words;
pub mod tokenizer;

// Re-export the main entry points for convenient access
pub use analyzer::LexicalAnalyzer;
pub use char_table::CharTable;
pub use dfa::{Dfa, DfaBuilder, Matcher};
pub use reader::CharReader;
pub use stop_words::WordCollection;
pub use tokenizer::StreamTokenizer;
