//! Explanation resolver
//!
//! [`resolve`] maps an ([`Interest`], [`Concept`]) pair to an [`Explanation`]:
//!
//! 1. look up the interest's [`Flavor`]
//! 2. pick the concept's hand-authored [`templates::ConceptTemplate`]
//! 3. substitute the flavor nouns into the analogy and code
//!
//! The function is total over all 36 pairs and pure: identical input always gives
//! identical text.

pub mod templates;

use crate::catalog::{Concept, Flavor, Interest};
use std::fmt::Write;

/// Display content for one (interest, concept) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub title: String,
    pub analogy: String,
    /// Display order, 2 to 4 entries
    pub steps: &'static [&'static str],
    pub code: String,
}

impl Explanation {
    /// Render as plain text for non-interactive output
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.analogy);
        let _ = writeln!(out);
        for (n, step) in self.steps.iter().enumerate() {
            let _ = writeln!(out, "{}. {}", n + 1, step);
        }
        let _ = writeln!(out);
        for line in self.code.lines() {
            let _ = writeln!(out, "    {}", line);
        }
        out
    }
}

/// Build the explanation of `concept` flavored for `interest`
pub fn resolve(interest: Interest, concept: Concept) -> Explanation {
    let flavor = interest.flavor();
    let template = templates::for_concept(concept);

    Explanation {
        title: format!("{} as {}", concept, interest),
        analogy: fill(template.analogy, flavor),
        steps: template.steps,
        code: fill(template.code, flavor),
    }
}

/// Substitute every flavor placeholder in `template`
fn fill(template: &str, flavor: &Flavor) -> String {
    // {items} before {item} so the plural placeholder is not split
    template
        .replace("{items}", flavor.items)
        .replace("{item}", flavor.item)
        .replace("{Item}", &flavor.item_title())
        .replace("{place}", flavor.place)
        .replace("{group}", flavor.group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_replaces_all_placeholders() {
        let flavor = Interest::Music.flavor();
        let filled = fill("{Item}: {items} {item} {place} {group}", flavor);
        assert_eq!(filled, "Bar: bars bar score song");
    }

    #[test]
    fn test_resolve_music_stack() {
        let explanation = resolve(Interest::Music, Concept::Stack);
        assert_eq!(explanation.title, "Stack as Music");
        assert!(explanation.analogy.contains("bar"));
        assert!(explanation.code.contains("song.push(\"Bar A\")"));
        assert_eq!(explanation.steps.len(), 3);
    }

    #[test]
    fn test_plain_text_layout() {
        let text = resolve(Interest::Dance, Concept::Queue).to_plain_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Queue as Dance");
        assert_eq!(lines[1], "==============");
        assert!(text.contains("1. Enqueue adds a new element at the back."));
        assert!(text.contains("    routine.push_back(\"Move A\");"));
    }
}
