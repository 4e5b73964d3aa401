//! Live sequence demo for the two animatable concepts
//!
//! - [`SequenceKind`]: which container a sequence models (stack or queue)
//! - [`BoundedSequence`]: an ordered list of labels with one removal discipline
//! - [`SequenceDemo`]: the pair of sequences shown by the UI
//!
//! # Label cycling
//!
//! The k-th append to a sequence (counting from 0, not reset by removals) takes
//! label `k mod 4` from the active interest's [`demo_labels`]. After more than four
//! net appends labels repeat, which is expected.
//!
//! # Guards
//!
//! Removing from an empty sequence is a no-op that returns `None`. It is a
//! precondition check, not an error.

use crate::catalog::flavor::demo_labels;
use crate::catalog::{Concept, Interest};
use std::collections::VecDeque;

/// Removal discipline of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Last in, first out
    Lifo,
    /// First in, first out
    Fifo,
}

/// The container a sequence models
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    Stack,
    Queue,
}

impl SequenceKind {
    pub fn removal(self) -> Removal {
        match self {
            SequenceKind::Stack => Removal::Lifo,
            SequenceKind::Queue => Removal::Fifo,
        }
    }

    /// Verb for the append control
    pub fn append_verb(self) -> &'static str {
        match self {
            SequenceKind::Stack => "push",
            SequenceKind::Queue => "enqueue",
        }
    }

    /// Verb for the remove control
    pub fn remove_verb(self) -> &'static str {
        match self {
            SequenceKind::Stack => "pop",
            SequenceKind::Queue => "dequeue",
        }
    }
}

/// An ordered sequence of demo labels
#[derive(Debug, Clone)]
pub struct BoundedSequence {
    kind: SequenceKind,
    items: VecDeque<String>,
    appended: usize, // total appends since last reset, drives label cycling
}

impl BoundedSequence {
    pub fn new(kind: SequenceKind) -> Self {
        BoundedSequence {
            kind,
            items: VecDeque::new(),
            appended: 0,
        }
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Items in insertion order (front first)
    pub fn items(&self) -> impl ExactSizeIterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of appends since the last reset
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Append the next cyclic label for `interest` and return it
    pub fn append(&mut self, interest: Option<Interest>) -> &str {
        let labels = demo_labels(interest);
        let label = labels[self.appended % labels.len()].clone();
        self.appended += 1;
        self.items.push_back(label);
        tracing::debug!(kind = ?self.kind, len = self.items.len(), "appended");
        self.items.back().map(String::as_str).unwrap_or_default()
    }

    /// Remove from the end this sequence's discipline dictates.
    ///
    /// Returns `None` and leaves the sequence untouched when it is empty.
    pub fn remove(&mut self) -> Option<String> {
        let removed = match self.kind.removal() {
            Removal::Lifo => self.items.pop_back(),
            Removal::Fifo => self.items.pop_front(),
        };
        if removed.is_some() {
            tracing::debug!(kind = ?self.kind, len = self.items.len(), "removed");
        }
        removed
    }

    /// Position (in insertion order) of the item [`remove`](Self::remove) would take next
    pub fn next_removal_index(&self) -> Option<usize> {
        match self.kind.removal() {
            Removal::Lifo => self.items.len().checked_sub(1),
            Removal::Fifo => (!self.items.is_empty()).then_some(0),
        }
    }

    /// The label [`remove`](Self::remove) would take next
    pub fn peek_next_removal(&self) -> Option<&str> {
        self.next_removal_index()
            .and_then(|idx| self.items.get(idx))
            .map(String::as_str)
    }

    /// Empty the sequence and restart label cycling
    pub fn reset(&mut self) {
        self.items.clear();
        self.appended = 0;
    }
}

/// Both demo sequences
#[derive(Debug, Clone)]
pub struct SequenceDemo {
    stack: BoundedSequence,
    queue: BoundedSequence,
}

impl SequenceDemo {
    pub fn new() -> Self {
        SequenceDemo {
            stack: BoundedSequence::new(SequenceKind::Stack),
            queue: BoundedSequence::new(SequenceKind::Queue),
        }
    }

    /// The sequence kind a concept animates, if any
    pub fn kind_for(concept: Concept) -> Option<SequenceKind> {
        match concept {
            Concept::Stack => Some(SequenceKind::Stack),
            Concept::Queue => Some(SequenceKind::Queue),
            Concept::LinkedList | Concept::Recursion | Concept::HashMap | Concept::Graph => None,
        }
    }

    pub fn sequence(&self, kind: SequenceKind) -> &BoundedSequence {
        match kind {
            SequenceKind::Stack => &self.stack,
            SequenceKind::Queue => &self.queue,
        }
    }

    pub fn sequence_mut(&mut self, kind: SequenceKind) -> &mut BoundedSequence {
        match kind {
            SequenceKind::Stack => &mut self.stack,
            SequenceKind::Queue => &mut self.queue,
        }
    }

    /// Sequence shown for `concept`, `None` for non-animatable concepts
    pub fn for_concept(&self, concept: Concept) -> Option<&BoundedSequence> {
        Self::kind_for(concept).map(|kind| self.sequence(kind))
    }

    /// Empty both sequences
    pub fn reset(&mut self) {
        self.stack.reset();
        self.queue.reset();
    }
}

impl Default for SequenceDemo {
    fn default() -> Self {
        Self::new()
    }
}
