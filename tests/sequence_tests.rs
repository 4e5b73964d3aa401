// Integration tests for the stack/queue demo sequences

use analogize::catalog::flavor::demo_labels;
use analogize::catalog::Interest;
use analogize::demo::{BoundedSequence, SequenceDemo, SequenceKind};

fn contents(seq: &BoundedSequence) -> Vec<String> {
    seq.items().map(str::to_string).collect()
}

#[test]
fn test_append_grows_by_one() {
    for kind in [SequenceKind::Stack, SequenceKind::Queue] {
        let mut seq = BoundedSequence::new(kind);
        for n in 1..=10 {
            seq.append(Some(Interest::Poetry));
            assert_eq!(seq.len(), n);
        }
    }
}

#[test]
fn test_remove_takes_the_right_end() {
    let mut stack = BoundedSequence::new(SequenceKind::Stack);
    let mut queue = BoundedSequence::new(SequenceKind::Queue);
    for _ in 0..3 {
        stack.append(None);
        queue.append(None);
    }

    assert_eq!(stack.remove().as_deref(), Some("Item C"));
    assert_eq!(stack.len(), 2);
    assert_eq!(contents(&stack), ["Item A", "Item B"]);

    assert_eq!(queue.remove().as_deref(), Some("Item A"));
    assert_eq!(queue.len(), 2);
    assert_eq!(contents(&queue), ["Item B", "Item C"]);
}

#[test]
fn test_remove_on_empty_changes_nothing() {
    let mut demo = SequenceDemo::new();
    for kind in [SequenceKind::Stack, SequenceKind::Queue] {
        let seq = demo.sequence_mut(kind);
        assert_eq!(seq.remove(), None);
        assert_eq!(seq.remove(), None);
        assert!(seq.is_empty());
    }
}

#[test]
fn test_reset_empties_both() {
    let mut demo = SequenceDemo::new();
    for _ in 0..5 {
        demo.sequence_mut(SequenceKind::Stack).append(Some(Interest::Dance));
    }
    demo.sequence_mut(SequenceKind::Queue).append(Some(Interest::Dance));
    demo.reset();
    assert_eq!(demo.sequence(SequenceKind::Stack).len(), 0);
    assert_eq!(demo.sequence(SequenceKind::Queue).len(), 0);
}

#[test]
fn test_nth_append_cycles_through_four_labels() {
    for interest in Interest::ALL {
        let labels = demo_labels(Some(interest));
        let mut seq = BoundedSequence::new(SequenceKind::Queue);
        for n in 0..13 {
            let label = seq.append(Some(interest)).to_string();
            assert_eq!(label, labels[n % 4]);
        }
    }
}

#[test]
fn test_lifo_fifo_orders_over_a_long_run() {
    let mut stack = BoundedSequence::new(SequenceKind::Stack);
    let mut queue = BoundedSequence::new(SequenceKind::Queue);
    for _ in 0..4 {
        stack.append(Some(Interest::Cooking));
        queue.append(Some(Interest::Cooking));
    }

    let popped: Vec<String> = std::iter::from_fn(|| stack.remove()).collect();
    let dequeued: Vec<String> = std::iter::from_fn(|| queue.remove()).collect();

    assert_eq!(
        popped,
        ["Ingredient D", "Ingredient C", "Ingredient B", "Ingredient A"]
    );
    assert_eq!(
        dequeued,
        ["Ingredient A", "Ingredient B", "Ingredient C", "Ingredient D"]
    );
}
