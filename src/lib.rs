//! # Sieva
//!
//! A DFA-based stop-word filtering tokenizer for Rust.
//!
//! Sieva splits a byte stream into lowercase alphabetic terms and drops any
//! term that exactly matches a supplied stop-word list. The list is compiled
//! once into a minimal deterministic finite automaton, so checking a term
//! costs time proportional to its length no matter how large the list is.
//!
//! ## Features
//!
//! - Minimal DFA built top-down by suffix-set hashing
//! - Streaming tokenizer over any `Read` source
//! - ASCII byte classification tables (letters + apostrophes)
//! - Bounded term length with an explicit error, never silent truncation
//!
//! ## Example
//!
//! ```
//! use sieva::analysis::LexicalAnalyzer;
//!
//! let mut analyzer = LexicalAnalyzer::new();
//! analyzer.set_stop_word_list(["the", "a", "of"]);
//!
//! let terms = analyzer.analyze("The Tale of Two Cities").unwrap();
//! assert_eq!(terms, vec!["tale", "two", "cities"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{CharReader, LexicalAnalyzer, WordCollection};
    pub use crate::error::{Result, SievaError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
