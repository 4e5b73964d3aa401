//! Selection state of the presentation shell
//!
//! A [`Session`] holds the chosen interest and concept plus the sequence demo,
//! and enforces the selection rules:
//!
//! - choosing an interest clears the concept and both sequences
//! - a concept can only be chosen once an interest is set, and choosing one
//!   clears both sequences (switching away and back never restores old contents)
//! - demo mutations only apply while an animatable concept is active

use crate::catalog::{Concept, Interest};
use crate::demo::{BoundedSequence, SequenceDemo, SequenceKind};
use crate::explain::{self, Explanation};

#[derive(Debug, Clone, Default)]
pub struct Session {
    interest: Option<Interest>,
    concept: Option<Concept>,
    demo: SequenceDemo,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interest(&self) -> Option<Interest> {
        self.interest
    }

    pub fn concept(&self) -> Option<Concept> {
        self.concept
    }

    pub fn select_interest(&mut self, interest: Interest) {
        tracing::info!(%interest, "interest selected");
        self.interest = Some(interest);
        self.concept = None;
        self.demo.reset();
    }

    /// Select a concept. Returns `false` (and changes nothing) while no interest is set.
    pub fn select_concept(&mut self, concept: Concept) -> bool {
        if self.interest.is_none() {
            tracing::debug!(%concept, "concept ignored, no interest selected");
            return false;
        }
        tracing::info!(%concept, "concept selected");
        self.concept = Some(concept);
        self.demo.reset();
        true
    }

    /// Content for the current pair, once both halves are chosen
    pub fn explanation(&self) -> Option<Explanation> {
        Some(explain::resolve(self.interest?, self.concept?))
    }

    /// Which demo controls are exposed, if any
    pub fn controls(&self) -> Option<SequenceKind> {
        self.concept.and_then(SequenceDemo::kind_for)
    }

    /// The sequence currently on display
    pub fn active_sequence(&self) -> Option<&BoundedSequence> {
        self.concept.and_then(|concept| self.demo.for_concept(concept))
    }

    pub fn demo(&self) -> &SequenceDemo {
        &self.demo
    }

    /// Append to the active sequence; returns the new label
    pub fn append(&mut self) -> Option<String> {
        let kind = self.controls()?;
        let interest = self.interest;
        Some(self.demo.sequence_mut(kind).append(interest).to_string())
    }

    /// Remove from the active sequence; `None` if there is none or it is empty
    pub fn remove(&mut self) -> Option<String> {
        let kind = self.controls()?;
        self.demo.sequence_mut(kind).remove()
    }

    /// Whether the remove control is enabled
    pub fn can_remove(&self) -> bool {
        self.active_sequence().is_some_and(|seq| !seq.is_empty())
    }

    /// Empty both sequences
    pub fn reset(&mut self) {
        tracing::debug!("demo reset");
        self.demo.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concept_requires_interest() {
        let mut session = Session::new();
        assert!(!session.select_concept(Concept::Stack));
        assert_eq!(session.concept(), None);
        assert!(session.explanation().is_none());
    }

    #[test]
    fn test_new_interest_clears_concept_and_demo() {
        let mut session = Session::new();
        session.select_interest(Interest::Music);
        session.select_concept(Concept::Stack);
        session.append();
        session.select_interest(Interest::Dance);
        assert_eq!(session.concept(), None);
        assert_eq!(session.demo().sequence(SequenceKind::Stack).len(), 0);
    }

    #[test]
    fn test_switching_concept_force_clears() {
        let mut session = Session::new();
        session.select_interest(Interest::Music);
        session.select_concept(Concept::Stack);
        session.append();
        session.select_concept(Concept::Graph);
        session.select_concept(Concept::Stack);
        assert_eq!(session.active_sequence().map(|s| s.len()), Some(0));
    }

    #[test]
    fn test_demo_ops_need_animatable_concept() {
        let mut session = Session::new();
        session.select_interest(Interest::Cooking);
        assert_eq!(session.append(), None);
        session.select_concept(Concept::HashMap);
        assert_eq!(session.controls(), None);
        assert_eq!(session.append(), None);
        assert!(!session.can_remove());
    }

    #[test]
    fn test_can_remove_tracks_length() {
        let mut session = Session::new();
        session.select_interest(Interest::Cooking);
        session.select_concept(Concept::Queue);
        assert!(!session.can_remove());
        assert_eq!(session.append().as_deref(), Some("Ingredient A"));
        assert!(session.can_remove());
        session.remove();
        assert!(!session.can_remove());
    }
}
