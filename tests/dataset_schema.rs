use progress_chart::get_dataset;

#[test]
fn nodes_have_name_and_positive_level() {
    for node in get_dataset() {
        assert!(!node.name.is_empty());
        assert!(node.level > 0, "{} has level 0", node.name);
    }
}

#[test]
fn every_node_has_items_or_children() {
    for node in get_dataset() {
        assert!(
            node.progress_item.is_some() || node.subchild.is_some(),
            "{} has neither progress items nor sub-nodes",
            node.name
        );
    }
}

#[test]
fn progress_lists_are_non_empty() {
    for node in get_dataset() {
        if let Some(items) = &node.progress_item {
            assert!(!items.is_empty(), "{} has an empty item list", node.name);
        }
        for sub in node.sub_nodes() {
            assert!(sub.sub_level > 0);
            assert!(!sub.progress_item.is_empty(), "{} has no items", sub.name);
        }
    }
}

#[test]
fn items_have_field_and_value() {
    for node in get_dataset() {
        let nested = node.sub_nodes().iter().flat_map(|s| s.progress_item.iter());
        for item in node.items().iter().chain(nested) {
            assert!(!item.field.is_empty());
            assert!(!item.value.is_empty());
        }
    }
}

#[test]
fn first_node_is_production_optimization() {
    let first = &get_dataset()[0];
    assert_eq!(first.name, "Production optimization");
    assert_eq!(first.level, 1);
    assert_eq!(first.onprogress, Some(true));
    let item = &first.items()[0];
    assert_eq!(item.field, "Deliver Profitable Project");
    assert_eq!(item.value, "5-10%");
}

#[test]
fn third_node_nests_two_sub_nodes() {
    let de = &get_dataset()[2];
    assert_eq!(de.name, "DE");
    assert_eq!(de.level, 2);
    assert_eq!(de.onprogress, None);
    assert!(de.progress_item.is_none());
    let subs = de.subchild.as_ref().unwrap();
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].sub_level, 1);
    assert_eq!(subs[0].name, "Operational Efficienct");
    assert!(subs[0].onprogress);
    assert_eq!(subs[1].sub_level, 2);
    assert!(!subs[1].onprogress);
}

#[test]
fn order_and_levels_match_chart() {
    let summary: Vec<(&str, u32)> = get_dataset()
        .iter()
        .map(|n| (n.name.as_str(), n.level))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Production optimization", 1),
            ("Cost vigilance", 1),
            ("DE", 2),
            ("Operational Cost", 2),
            ("Decresing Methane Intensity", 2),
            ("Operating Performance", 3),
            ("More Energy", 4),
            ("Growing Cash Flow", 4),
        ]
    );
}

#[test]
fn values_are_kept_as_text() {
    let methane = &get_dataset()[4];
    let values: Vec<&str> = methane.items().iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["12%", "6%", "9%"]);
}
