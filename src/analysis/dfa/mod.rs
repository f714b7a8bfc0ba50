//! Minimal deterministic finite automaton over single-byte characters.
//!
//! A [`Dfa`] recognizes exactly the finite word set it was built from. It is
//! immutable once [`DfaBuilder`](builder::DfaBuilder) finishes: a flat state
//! table plus a flat arc table, with state 0 as the start state. Membership
//! tests walk the tables one byte at a time through a [`Matcher`] cursor, so
//! the cost of a lookup depends only on the length of the probed word, never
//! on the size of the word set.
//!
//! # Examples
//!
//! ```
//! use sieva::analysis::dfa::builder::DfaBuilder;
//! use sieva::analysis::stop_words::WordCollection;
//!
//! let words: WordCollection = ["the", "a", "and"].into_iter().collect();
//! let dfa = DfaBuilder::build(words);
//!
//! assert!(dfa.accepts(b"the"));
//! assert!(!dfa.accepts(b"then"));
//! ```

pub mod builder;

pub use builder::DfaBuilder;

/// A state in the automaton: a window into the shared arc table plus a final
/// flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct State {
    /// Index of this state's first arc in the arc table.
    pub arc_offset: usize,
    /// Number of consecutive arcs belonging to this state.
    pub num_arcs: usize,
    /// Whether reaching this state consumes exactly one complete word.
    pub is_final: bool,
}

/// A labeled transition out of a state.
///
/// Within one state's arc window, `on_char` values are pairwise distinct.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    /// The byte that selects this transition.
    pub on_char: u8,
    /// Index of the target state.
    pub target: usize,
}

/// The built automaton: state table plus arc table, immutable after build.
#[derive(Clone, Debug)]
pub struct Dfa {
    states: Vec<State>,
    arcs: Vec<Arc>,
}

impl Dfa {
    pub(crate) fn new(states: Vec<State>, arcs: Vec<Arc>) -> Self {
        Dfa { states, arcs }
    }

    /// Build an automaton that rejects every non-empty string.
    pub fn empty() -> Self {
        DfaBuilder::build(crate::analysis::stop_words::WordCollection::new())
    }

    /// Number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of arcs.
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Create a fresh matcher positioned at the start state.
    pub fn matcher(&self) -> Matcher<'_> {
        Matcher {
            dfa: self,
            state: 0,
            dead: false,
        }
    }

    /// Test whether the automaton accepts `word` in a single call.
    pub fn accepts(&self, word: &[u8]) -> bool {
        let mut matcher = self.matcher();
        for &b in word {
            matcher.feed(b);
        }
        matcher.recognized()
    }

    fn arcs_of(&self, state: usize) -> &[Arc] {
        let s = &self.states[state];
        &self.arcs[s.arc_offset..s.arc_offset + s.num_arcs]
    }
}

/// A stateful cursor walking a [`Dfa`] one byte at a time.
///
/// Feeding a byte with no matching arc kills the cursor permanently; only
/// [`Matcher::init`] revives it. The arc scan is linear, which is fine here:
/// per-state fan-out is bounded by the alphabet (at most a few dozen
/// letters).
#[derive(Clone, Debug)]
pub struct Matcher<'a> {
    dfa: &'a Dfa,
    state: usize,
    dead: bool,
}

impl Matcher<'_> {
    /// Reset to the start state and clear the dead flag.
    pub fn init(&mut self) {
        self.state = 0;
        self.dead = false;
    }

    /// Advance by one byte. A no-op once dead.
    pub fn feed(&mut self, c: u8) {
        if self.dead {
            return;
        }

        for arc in self.dfa.arcs_of(self.state) {
            if arc.on_char == c {
                self.state = arc.target;
                return;
            }
        }

        self.dead = true;
    }

    /// `true` iff the bytes fed since the last `init` spell a complete word.
    pub fn recognized(&self) -> bool {
        !self.dead && self.dfa.states[self.state].is_final
    }

    /// `true` once a byte with no matching arc has been fed.
    pub fn is_dead(&self) -> bool {
        self.dead
    }
}
