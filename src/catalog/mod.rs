//! The two closed choice sets the user picks from
//!
//! - [`Interest`]: a personal hobby used to flavor every analogy
//! - [`Concept`]: the data-structure topic being explained
//! - [`flavor`]: per-interest noun substitutions
//!
//! Both enums are closed. The only way an arbitrary string becomes one of them is
//! [`str::parse`], which rejects anything outside the set with [`UnknownChoice`].

pub mod flavor;

use std::fmt;
use std::str::FromStr;

pub use flavor::Flavor;

/// Error returned when a label does not name any member of a choice set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{input}' (expected one of: {expected})")]
pub struct UnknownChoice {
    pub kind: &'static str,
    pub input: String,
    pub expected: String,
}

/// A personal interest used to personalize the explanations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    Dance,
    Poetry,
    Music,
    Sports,
    Cooking,
    Gaming,
}

impl Interest {
    /// All interests in display order
    pub const ALL: [Interest; 6] = [
        Interest::Dance,
        Interest::Poetry,
        Interest::Music,
        Interest::Sports,
        Interest::Cooking,
        Interest::Gaming,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::Dance => "Dance",
            Interest::Poetry => "Poetry",
            Interest::Music => "Music",
            Interest::Sports => "Sports",
            Interest::Cooking => "Cooking",
            Interest::Gaming => "Gaming",
        }
    }

    /// Position in [`Interest::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Next interest in display order, wrapping at the end
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous interest in display order, wrapping at the start
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Noun substitutions for this interest
    pub fn flavor(self) -> &'static Flavor {
        flavor::for_interest(self)
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "interest", &Self::ALL, |i| i.label())
    }
}

/// A data-structure concept with a canned explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    Stack,
    Queue,
    LinkedList,
    Recursion,
    HashMap,
    Graph,
}

impl Concept {
    /// All concepts in display order
    pub const ALL: [Concept; 6] = [
        Concept::Stack,
        Concept::Queue,
        Concept::LinkedList,
        Concept::Recursion,
        Concept::HashMap,
        Concept::Graph,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Concept::Stack => "Stack",
            Concept::Queue => "Queue",
            Concept::LinkedList => "Linked List",
            Concept::Recursion => "Recursion",
            Concept::HashMap => "Hash Map",
            Concept::Graph => "Graph",
        }
    }

    /// Position in [`Concept::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Whether this concept comes with a live sequence demo
    pub fn is_animatable(self) -> bool {
        matches!(self, Concept::Stack | Concept::Queue)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Concept {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_choice(s, "concept", &Self::ALL, |c| c.label())
    }
}

/// Lowercase and drop separators so "Linked List", "linked-list" and "LINKED_LIST" compare equal
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_choice<T: Copy>(
    input: &str,
    kind: &'static str,
    all: &[T],
    label: impl Fn(T) -> &'static str,
) -> Result<T, UnknownChoice> {
    let wanted = normalize(input);
    all.iter()
        .copied()
        .find(|&choice| normalize(label(choice)) == wanted)
        .ok_or_else(|| UnknownChoice {
            kind,
            input: input.to_string(),
            expected: all
                .iter()
                .map(|&choice| label(choice))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_index_order() {
        for (i, interest) in Interest::ALL.iter().enumerate() {
            assert_eq!(interest.index(), i);
        }
        for (i, concept) in Concept::ALL.iter().enumerate() {
            assert_eq!(concept.index(), i);
        }
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(Interest::Gaming.next(), Interest::Dance);
        assert_eq!(Interest::Dance.prev(), Interest::Gaming);
        assert_eq!(Concept::Graph.next(), Concept::Stack);
        assert_eq!(Concept::Stack.prev(), Concept::Graph);
        for concept in Concept::ALL {
            assert_eq!(concept.next().prev(), concept);
        }
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!("music".parse::<Interest>(), Ok(Interest::Music));
        assert_eq!("SPORTS".parse::<Interest>(), Ok(Interest::Sports));
        assert_eq!("linked-list".parse::<Concept>(), Ok(Concept::LinkedList));
        assert_eq!("Hash_Map".parse::<Concept>(), Ok(Concept::HashMap));
        assert_eq!("hashmap".parse::<Concept>(), Ok(Concept::HashMap));
    }

    #[test]
    fn test_parse_unknown_lists_expected() {
        let err = "knitting".parse::<Interest>().unwrap_err();
        assert_eq!(err.kind, "interest");
        assert_eq!(err.input, "knitting");
        assert!(err.to_string().contains("Dance, Poetry, Music"));
    }

    #[test]
    fn test_only_stack_and_queue_animate() {
        let animatable: Vec<Concept> = Concept::ALL
            .into_iter()
            .filter(|c| c.is_animatable())
            .collect();
        assert_eq!(animatable, vec![Concept::Stack, Concept::Queue]);
    }
}
