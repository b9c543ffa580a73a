//! Property tests over the store invariants: sibling-name uniqueness, path
//! round-trips, root protection, and move atomicity under arbitrary inputs.

use std::collections::HashSet;

use proptest::prelude::*;

use deskshell::{Node, StoreError, VirtualFileStore};

/// Sibling names valid for creation: non-empty, no separator.
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._-]{0,11}"
}

/// A creation step: directory or file, under one of a few fixed parents.
#[derive(Clone, Debug)]
enum Step {
    Dir { parent: usize, name: String },
    File { parent: usize, name: String },
}

const PARENTS: &[&str] = &["/", "/alpha", "/alpha/beta"];

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..PARENTS.len(), name_strategy()).prop_map(|(parent, name)| Step::Dir { parent, name }),
        (0..PARENTS.len(), name_strategy()).prop_map(|(parent, name)| Step::File { parent, name }),
    ]
}

/// Walk the whole tree asserting pairwise-distinct sibling names.
fn assert_unique_siblings(node: &Node) {
    if let Some(children) = node.children() {
        let mut seen = HashSet::new();
        for child in children {
            assert!(
                seen.insert(child.name.as_str()),
                "duplicate sibling {:?} under {:?}",
                child.name,
                node.name
            );
            assert_unique_siblings(child);
        }
    }
}

proptest! {
    #[test]
    fn sibling_names_stay_unique(steps in prop::collection::vec(step_strategy(), 1..40)) {
        let mut store = VirtualFileStore::new();
        store.create_directory("/", "alpha").unwrap();
        store.create_directory("/alpha", "beta").unwrap();

        for step in steps {
            // Individual steps may fail (collisions); the invariant must
            // hold after every attempt regardless.
            let _ = match step {
                Step::Dir { parent, name } => store.create_directory(PARENTS[parent], &name),
                Step::File { parent, name } => store.create_file(PARENTS[parent], &name, "x"),
            };
            assert_unique_siblings(&store.snapshot());
        }
    }

    #[test]
    fn created_nodes_resolve_by_their_path(name in name_strategy()) {
        let mut store = VirtualFileStore::new();
        store.create_directory("/", "parent").unwrap();

        if store.create_directory("/parent", &name).is_ok() {
            let node = store.resolve(&format!("/parent/{name}"));
            prop_assert!(node.is_some_and(Node::is_directory));
        }
    }

    #[test]
    fn root_survives_any_delete(path in "/?[a-z/]{0,12}") {
        let mut store = VirtualFileStore::seeded();
        let _ = store.delete_node(&path);

        let root = store.resolve("/").expect("root must survive");
        prop_assert_eq!(root.name.as_str(), "/");
        prop_assert!(root.is_directory());
    }

    #[test]
    fn failed_moves_change_nothing(
        from in "/[a-z]{1,6}(/[a-z]{1,6})?",
        to in "/[a-z]{1,6}(/[a-z]{1,6})?",
    ) {
        let mut store = VirtualFileStore::new();
        store.create_directory("/", "stable").unwrap();
        store.create_file("/stable", "keep.txt", "kept").unwrap();
        let before = store.snapshot();

        if store.move_node(&from, &to).is_err() {
            prop_assert_eq!(&*store.snapshot(), &*before);
        }
        // Whatever happened, the file is intact at the old or new location.
        let moved_path = format!("{}/keep.txt", to);
        let file_intact = store.read_file("/stable/keep.txt") == Some("kept")
            || store.read_file(&moved_path) == Some("kept");
        prop_assert!(file_intact);
    }

    #[test]
    fn snapshots_never_change_in_place(names in prop::collection::vec(name_strategy(), 1..10)) {
        let mut store = VirtualFileStore::new();
        let empty = store.snapshot();

        for name in &names {
            let _ = store.create_file("/", name, "data");
        }

        prop_assert!(empty.children().is_some_and(<[Node]>::is_empty));
    }

    #[test]
    fn invalid_names_are_rejected_before_mutation(name in "[a-z]{0,3}/[a-z]{0,3}") {
        let mut store = VirtualFileStore::new();

        prop_assert_eq!(
            store.create_file("/", &name, ""),
            Err(StoreError::InvalidName(name.clone()))
        );
        prop_assert!(store.list("/").is_some_and(<[Node]>::is_empty));
    }
}
