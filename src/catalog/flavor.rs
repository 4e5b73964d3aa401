//! Flavor vocabulary: the nouns each interest contributes to the templates

use super::Interest;

/// Noun substitutions for one interest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flavor {
    /// Singular noun for one element ("move", "bar")
    pub item: &'static str,
    /// Plural of `item`
    pub items: &'static str,
    /// Where the elements live ("dance floor")
    pub place: &'static str,
    /// The collection, one lowercase word, usable as an identifier in snippets
    pub group: &'static str,
}

impl Flavor {
    /// `item` with its first letter uppercased ("Bar")
    pub fn item_title(&self) -> String {
        capitalize(self.item)
    }
}

/// `word` with its first letter uppercased
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// Indexed by Interest discriminant
static FLAVORS: [Flavor; 6] = [
    Flavor {
        item: "move",
        items: "moves",
        place: "dance floor",
        group: "routine",
    },
    Flavor {
        item: "line",
        items: "lines",
        place: "notebook",
        group: "stanza",
    },
    Flavor {
        item: "bar",
        items: "bars",
        place: "score",
        group: "song",
    },
    Flavor {
        item: "play",
        items: "plays",
        place: "field",
        group: "playbook",
    },
    Flavor {
        item: "ingredient",
        items: "ingredients",
        place: "kitchen",
        group: "recipe",
    },
    Flavor {
        item: "level",
        items: "levels",
        place: "world",
        group: "quest",
    },
];

const LABEL_SUFFIXES: [&str; 4] = ["A", "B", "C", "D"];

pub fn for_interest(interest: Interest) -> &'static Flavor {
    &FLAVORS[interest.index()]
}

/// The four demo labels cycled through by sequence appends.
///
/// Falls back to "Item A".."Item D" when nothing is selected.
pub fn demo_labels(interest: Option<Interest>) -> [String; 4] {
    let prefix = match interest {
        Some(interest) => interest.flavor().item_title(),
        None => String::from("Item"),
    };
    LABEL_SUFFIXES.map(|suffix| format!("{} {}", prefix, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_interest_order() {
        assert_eq!(for_interest(Interest::Dance).item, "move");
        assert_eq!(for_interest(Interest::Music).item, "bar");
        assert_eq!(for_interest(Interest::Sports).item, "play");
        assert_eq!(for_interest(Interest::Gaming).group, "quest");
    }

    #[test]
    fn test_groups_are_identifiers() {
        for interest in Interest::ALL {
            let group = interest.flavor().group;
            assert!(!group.is_empty());
            assert!(group.chars().all(|c| c.is_ascii_lowercase()), "{}", group);
        }
    }

    #[test]
    fn test_demo_labels() {
        assert_eq!(
            demo_labels(Some(Interest::Music)),
            ["Bar A", "Bar B", "Bar C", "Bar D"]
        );
        assert_eq!(demo_labels(Some(Interest::Sports))[1], "Play B");
        assert_eq!(
            demo_labels(None),
            ["Item A", "Item B", "Item C", "Item D"]
        );
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("push"), "Push");
        assert_eq!(capitalize("dequeue"), "Dequeue");
        assert_eq!(capitalize(""), "");
        assert_eq!(for_interest(Interest::Cooking).item_title(), "Ingredient");
    }
}
