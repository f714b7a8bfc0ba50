//! Minimal DFA construction from a word list.
//!
//! The builder works top-down: state 0 starts out labeled with the entire
//! (sorted, deduplicated) word set, and each state's label is partitioned by
//! first byte into successor labels with that byte stripped. A label is the
//! state's *right language*, the set of suffixes still pending at that
//! point, so two positions with identical labels are by definition the same
//! minimal state and must collapse onto one index.
//!
//! Candidate states are found through an order-sensitive hash (the label's
//! *signature*) kept in a map from signature to the states carrying it. A
//! signature hit is never trusted on its own; an exact label comparison
//! decides reuse, so colliding labels can never be merged by accident. All
//! of this scratch (the labels table and the signature index) lives only for
//! the duration of [`DfaBuilder::build`]; the returned [`Dfa`] holds nothing
//! but the state and arc tables.

use ahash::AHashMap;

use crate::analysis::dfa::{Arc, Dfa, State};
use crate::analysis::stop_words::{Word, WordCollection};

const HASH_START: u32 = 5_775_863;
const HASH_INCREMENT: u32 = 38_873_647;

/// A state's right language: an ordered list of suffix spans into the shared
/// word buffer. Canonical once sorted and deduplicated.
type Label = Vec<Word>;

/// One-shot builder for a minimal [`Dfa`].
///
/// Consumes a [`WordCollection`]; the collection's buffer backs every label
/// span during construction, so no characters are copied at any point.
pub struct DfaBuilder {
    buffer: Vec<u8>,
    states: Vec<State>,
    arcs: Vec<Arc>,
    labels: Vec<Label>,
    index: AHashMap<u32, Vec<usize>>,
}

impl DfaBuilder {
    /// Build the minimal DFA accepting exactly the words in `collection`.
    ///
    /// Total over any input: duplicates, unsorted content, and the empty
    /// collection all have well-defined results.
    pub fn build(collection: WordCollection) -> Dfa {
        let (buffer, seed_words) = collection.into_parts();

        let mut builder = DfaBuilder {
            buffer,
            states: Vec::new(),
            arcs: Vec::new(),
            labels: Vec::new(),
            index: AHashMap::new(),
        };

        let mut seed = seed_words;
        builder.canonicalize(&mut seed);
        let seed_signature = builder.signature_of(&seed);
        builder.labels.push(seed);
        builder.states.push(State::default());
        builder.index.entry(seed_signature).or_default().push(0);

        // Index-based worklist: every discovered state is processed exactly
        // once, and processing may append new states.
        let mut state = 0;
        while state < builder.states.len() {
            builder.process_state(state);
            state += 1;
        }

        Dfa::new(builder.states, builder.arcs)
    }

    /// Emit the arcs for one state from its canonical label.
    fn process_state(&mut self, state: usize) {
        self.states[state].arc_offset = self.arcs.len();

        let word_count = self.labels[state].len();
        let mut run_char: Option<u8> = None;
        let mut successor: Label = Vec::new();

        for wi in 0..word_count {
            let word = self.labels[state][wi];

            // An empty suffix means a word ends exactly here.
            if word.is_empty() {
                self.states[state].is_final = true;
                continue;
            }

            let ch = self.buffer[word.start];
            match run_char {
                Some(current) if current != ch => {
                    let finished = std::mem::take(&mut successor);
                    self.add_arc(state, current, finished);
                    run_char = Some(ch);
                }
                None => run_char = Some(ch),
                _ => {}
            }

            successor.push(Word::new(word.start + 1, word.end));
        }

        // The loop leaves the final run unflushed.
        if let Some(current) = run_char {
            if !successor.is_empty() {
                self.add_arc(state, current, successor);
            }
        }
    }

    /// Resolve `label` to a state (reusing an equal one if it exists) and
    /// record an arc to it.
    fn add_arc(&mut self, state: usize, on_char: u8, mut label: Label) {
        self.canonicalize(&mut label);
        let target = self.get_state(label);

        self.arcs.push(Arc { on_char, target });
        self.states[state].num_arcs += 1;
    }

    /// Find the state whose canonical label equals `label`, or allocate one.
    ///
    /// The signature only narrows the search; reuse is decided by exact label
    /// comparison. Two structurally different labels that happen to hash
    /// identically land in the same bucket and stay distinct states.
    fn get_state(&mut self, label: Label) -> usize {
        let signature = self.signature_of(&label);

        if let Some(bucket) = self.index.get(&signature) {
            for &candidate in bucket {
                if self.labels_equal(&self.labels[candidate], &label) {
                    return candidate;
                }
            }
        }

        let state = self.states.len();
        self.states.push(State::default());
        self.labels.push(label);
        self.index.entry(signature).or_default().push(state);
        state
    }

    /// Sort lexicographically (a proper prefix sorts before its extensions)
    /// and drop exact duplicates.
    fn canonicalize(&self, label: &mut Label) {
        label.sort_by(|a, b| self.buffer[a.start..a.end].cmp(&self.buffer[b.start..b.end]));
        label.dedup_by(|a, b| self.buffer[a.start..a.end] == self.buffer[b.start..b.end]);
    }

    /// Order-sensitive hash over a canonical label.
    ///
    /// Identical canonical labels always produce identical signatures; the
    /// per-word increment keeps most differing labels apart, and the empty
    /// suffix contributes its own fixed increment.
    fn signature_of(&self, label: &[Word]) -> u32 {
        let mut signature = HASH_START;
        for word in label {
            if word.is_empty() {
                signature = signature.wrapping_add(HASH_INCREMENT);
                continue;
            }
            let first = self.buffer[word.start] as u32;
            signature = signature.wrapping_add((first + 1).wrapping_mul(HASH_INCREMENT));
            for &b in &self.buffer[word.start..word.end] {
                signature = signature.wrapping_add(b as u32);
            }
        }
        signature
    }

    fn labels_equal(&self, a: &[Word], b: &[Word]) -> bool {
        a.len() == b.len()
            && a.iter()
                .zip(b)
                .all(|(x, y)| self.buffer[x.start..x.end] == self.buffer[y.start..y.end])
    }
}
