use proptest::prelude::*;
use quickcheck::quickcheck;
use std::collections::HashSet;

use progress_chart::{get_dataset, level_name_id, node_id, sub_node_id};

proptest! {
    #[test]
    fn id_is_deterministic(level in 1u32..100, name in ".*") {
        prop_assert_eq!(level_name_id(level, &name), level_name_id(level, &name));
    }

    #[test]
    fn level_changes_id(level in 1u32..1000, name in "[A-Za-z ]{1,32}") {
        prop_assert_ne!(level_name_id(level, &name), level_name_id(level + 1, &name));
    }
}

quickcheck! {
    fn ids_are_sixteen_hex_chars(level: u32, name: String) -> bool {
        let id = level_name_id(level, &name);
        id.len() == 16 && id.chars().all(|c| c.is_ascii_hexdigit())
    }
}

#[test]
fn dataset_ids_are_unique() {
    let mut seen = HashSet::new();
    for node in get_dataset() {
        assert!(seen.insert(node_id(node)));
        for sub in node.sub_nodes() {
            assert!(seen.insert(sub_node_id(node, sub)));
        }
    }
}

#[test]
fn sub_node_id_is_scoped_by_parent() {
    // "Deliver Profitable Project" appears as both an item and a sub-node name.
    let de = &get_dataset()[2];
    let sub = &de.sub_nodes()[1];
    assert_ne!(sub_node_id(de, sub), level_name_id(sub.sub_level, &sub.name));
}
