//! Hand-authored explanation templates, one per concept
//!
//! Placeholders filled from the interest's [`Flavor`](crate::catalog::Flavor):
//! `{item}`, `{items}`, `{Item}`, `{place}`, `{group}`.

use crate::catalog::Concept;

/// Unfilled explanation for one concept
#[derive(Debug)]
pub struct ConceptTemplate {
    pub analogy: &'static str,
    pub steps: &'static [&'static str],
    pub code: &'static str,
}

// Indexed by Concept discriminant
static TEMPLATES: [ConceptTemplate; 6] = [
    // Stack
    ConceptTemplate {
        analogy: "Picture a pile of {items} on the {place}. Every new {item} goes on top, \
                  and when you take one back it is always the {item} you added last.",
        steps: &[
            "Push places a new element on top of the stack.",
            "Pop removes the element on top, the most recent one.",
            "Only the top is reachable: last in, first out (LIFO).",
        ],
        code: "let mut {group}: Vec<&str> = Vec::new();\n\
               {group}.push(\"{Item} A\");\n\
               {group}.push(\"{Item} B\");\n\
               // the last {item} in is the first out\n\
               let top = {group}.pop(); // Some(\"{Item} B\")",
    },
    // Queue
    ConceptTemplate {
        analogy: "Think of {items} waiting their turn to reach the {place}. A new {item} joins \
                  the back of the line, and the {item} that has waited longest goes first.",
        steps: &[
            "Enqueue adds a new element at the back.",
            "Dequeue removes the element at the front, the oldest one.",
            "First in, first out (FIFO) keeps arrival order.",
        ],
        code: "use std::collections::VecDeque;\n\
               \n\
               let mut {group} = VecDeque::new();\n\
               {group}.push_back(\"{Item} A\");\n\
               {group}.push_back(\"{Item} B\");\n\
               // the first {item} in is the first out\n\
               let front = {group}.pop_front(); // Some(\"{Item} A\")",
    },
    // Linked List
    ConceptTemplate {
        analogy: "Each {item} in your {group} only knows which {item} comes right after it. \
                  To find the fifth {item} you start at the first and follow the chain.",
        steps: &[
            "Every node holds a value and a link to the next node.",
            "The list is reached through its head node.",
            "Inserting after a known node only rewires one link.",
            "Reaching the n-th node means walking n links.",
        ],
        code: "struct Node {\n\
               \x20   value: &'static str,\n\
               \x20   next: Option<Box<Node>>,\n\
               }\n\
               \n\
               let {group} = Node {\n\
               \x20   value: \"{Item} A\",\n\
               \x20   next: Some(Box::new(Node { value: \"{Item} B\", next: None })),\n\
               };",
    },
    // Recursion
    ConceptTemplate {
        analogy: "To finish the {group}, perform the first {item} and then finish the rest \
                  of the {group} the same way, until no {items} are left.",
        steps: &[
            "A recursive function calls itself on a smaller input.",
            "The base case stops the calls when nothing is left.",
            "Each call waits on the stack until the smaller call returns.",
        ],
        code: "fn perform(rest: &[&str]) {\n\
               \x20   match rest {\n\
               \x20       [] => {} // base case: no {items} left\n\
               \x20       [first, tail @ ..] => {\n\
               \x20           println!(\"{}\", first);\n\
               \x20           perform(tail);\n\
               \x20       }\n\
               \x20   }\n\
               }\n\
               \n\
               perform(&[\"{Item} A\", \"{Item} B\", \"{Item} C\"]);",
    },
    // Hash Map
    ConceptTemplate {
        analogy: "Give every {item} a name tag and a labelled spot on the {place}. \
                  Knowing the name, you walk straight to the {item} without searching.",
        steps: &[
            "A hash function turns a key into a bucket position.",
            "Insert and lookup go straight to that bucket.",
            "Average cost stays constant as the map grows.",
        ],
        code: "use std::collections::HashMap;\n\
               \n\
               let mut {group} = HashMap::new();\n\
               {group}.insert(\"opening\", \"{Item} A\");\n\
               {group}.insert(\"finale\", \"{Item} D\");\n\
               // look up {items} by name\n\
               let finale = {group}.get(\"finale\");",
    },
    // Graph
    ConceptTemplate {
        analogy: "Draw every {item} as a dot on the {place} and connect two dots whenever \
                  one {item} can lead into the other. Your {group} is a path through the graph.",
        steps: &[
            "Vertices are the things; edges are the connections.",
            "An adjacency list stores each vertex's neighbours.",
            "Traversals such as BFS and DFS follow edges to explore.",
        ],
        code: "use std::collections::HashMap;\n\
               \n\
               let mut {group}: HashMap<&str, Vec<&str>> = HashMap::new();\n\
               {group}.insert(\"{Item} A\", vec![\"{Item} B\", \"{Item} C\"]);\n\
               {group}.insert(\"{Item} B\", vec![\"{Item} D\"]);\n\
               // every {item} lists where it can lead\n\
               let next = &{group}[\"{Item} A\"];",
    },
];

pub fn for_concept(concept: Concept) -> &'static ConceptTemplate {
    &TEMPLATES[concept.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_is_authored() {
        for concept in Concept::ALL {
            let template = for_concept(concept);
            assert!(!template.analogy.is_empty());
            assert!(!template.code.is_empty());
            assert!(
                (2..=4).contains(&template.steps.len()),
                "{} has {} steps",
                concept,
                template.steps.len()
            );
        }
    }

    #[test]
    fn test_every_analogy_mentions_the_item() {
        for concept in Concept::ALL {
            assert!(
                for_concept(concept).analogy.contains("{item"),
                "{} analogy has no item placeholder",
                concept
            );
        }
    }

    #[test]
    fn test_table_order_matches_concepts() {
        assert!(for_concept(Concept::Stack).steps[2].contains("LIFO"));
        assert!(for_concept(Concept::Queue).steps[2].contains("FIFO"));
        assert!(for_concept(Concept::HashMap).code.contains("HashMap"));
    }
}
