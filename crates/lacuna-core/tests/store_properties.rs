//! Property tests for `KnowledgeStore` over random write sequences.

use lacuna_core::{Gap, KnowledgeStore};
use proptest::prelude::*;

const DOMAINS: [&str; 3] = ["Healthcare", "Physics", "Cryptography"];
const CLASSES: [&str; 3] = ["General", "Diagnostics", "Optics"];
const TASKS: [&str; 2] = ["Summary", "Digest"];

#[derive(Debug, Clone)]
enum Op {
    Add {
        domain: usize,
        class: usize,
        task: usize,
        content: String,
    },
    Declare {
        domain: usize,
        class: usize,
    },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..DOMAINS.len(), 0..CLASSES.len(), 0..TASKS.len(), "[a-c]{0,2}").prop_map(
            |(domain, class, task, content)| Op::Add {
                domain,
                class,
                task,
                content,
            }
        ),
        1 => (0..DOMAINS.len(), 0..CLASSES.len())
            .prop_map(|(domain, class)| Op::Declare { domain, class }),
    ]
}

fn apply(ops: &[Op]) -> KnowledgeStore {
    let mut store = KnowledgeStore::new();
    for op in ops {
        match op {
            Op::Add {
                domain,
                class,
                task,
                content,
            } => store.add_knowledge(DOMAINS[*domain], CLASSES[*class], TASKS[*task], content.as_str()),
            Op::Declare { domain, class } => store.declare_class(DOMAINS[*domain], CLASSES[*class]),
        }
    }
    store
}

/// Gaps a plain list model predicts: pairs first seen in store order,
/// minus every pair that ever received content.
fn expected_gaps(ops: &[Op]) -> Vec<Gap> {
    let mut domains: Vec<(usize, Vec<usize>)> = Vec::new();
    let mut filled: Vec<(usize, usize)> = Vec::new();

    for op in ops {
        let (domain, class) = match op {
            Op::Add { domain, class, .. } => {
                filled.push((*domain, *class));
                (*domain, *class)
            }
            Op::Declare { domain, class } => (*domain, *class),
        };
        let pos = match domains.iter().position(|(d, _)| *d == domain) {
            Some(pos) => pos,
            None => {
                domains.push((domain, Vec::new()));
                domains.len() - 1
            }
        };
        if !domains[pos].1.contains(&class) {
            domains[pos].1.push(class);
        }
    }

    domains
        .into_iter()
        .flat_map(|(domain, classes)| classes.into_iter().map(move |class| (domain, class)))
        .filter(|pair| !filled.contains(pair))
        .map(|(domain, class)| Gap::new(DOMAINS[domain], CLASSES[class]))
        .collect()
}

proptest! {
    #[test]
    fn gaps_never_include_a_class_with_tasks(ops in prop::collection::vec(arb_op(), 0..40)) {
        let store = apply(&ops);

        for gap in store.get_gaps() {
            let tasks = store.tasks(&gap.domain, &gap.class);
            prop_assert!(tasks.is_some_and(|t| t.is_empty()), "{} has tasks", gap);
        }
        for op in &ops {
            if let Op::Add { domain, class, .. } = op {
                let pair = Gap::new(DOMAINS[*domain], CLASSES[*class]);
                prop_assert!(!store.get_gaps().contains(&pair), "{} reported as gap", pair);
            }
        }
    }

    #[test]
    fn gaps_follow_insertion_order(ops in prop::collection::vec(arb_op(), 0..40)) {
        let store = apply(&ops);
        prop_assert_eq!(store.get_gaps(), expected_gaps(&ops));
    }

    #[test]
    fn add_only_sequences_have_no_gaps(
        ops in prop::collection::vec(arb_op(), 0..40)
            .prop_map(|ops| ops.into_iter().filter(|op| matches!(op, Op::Add { .. })).collect::<Vec<_>>())
    ) {
        prop_assert!(apply(&ops).get_gaps().is_empty());
    }

    #[test]
    fn entries_keep_every_write_in_order(ops in prop::collection::vec(arb_op(), 0..40)) {
        let store = apply(&ops);

        let adds = ops.iter().filter(|op| matches!(op, Op::Add { .. })).count();
        prop_assert_eq!(store.entry_count(), adds);

        for (d, domain) in DOMAINS.iter().enumerate() {
            for (c, class) in CLASSES.iter().enumerate() {
                for (t, task) in TASKS.iter().enumerate() {
                    let written: Vec<&str> = ops
                        .iter()
                        .filter_map(|op| match op {
                            Op::Add { domain, class, task, content }
                                if (*domain, *class, *task) == (d, c, t) => Some(content.as_str()),
                            _ => None,
                        })
                        .collect();

                    match store.entries(domain, class, task) {
                        Some(entries) => prop_assert_eq!(entries, written.as_slice()),
                        None => prop_assert!(written.is_empty()),
                    }
                }
            }
        }
    }
}
