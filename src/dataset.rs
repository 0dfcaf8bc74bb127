//! The baked-in progress chart.
//!
//! Built on first access and shared read-only for the rest of the process.

use std::sync::LazyLock;

use tracing::debug;

use crate::chart::{Node, ProgressItem, SubNode};

static DATASET: LazyLock<Vec<Node>> = LazyLock::new(|| {
    let nodes = build();
    debug!(nodes = nodes.len(), "progress chart initialised");
    nodes
});

/// Return the chart nodes in display order.
///
/// Every call yields the same slice for the lifetime of the process.
pub fn get_dataset() -> &'static [Node] {
    &DATASET
}

fn items(pairs: &[(&str, &str)]) -> Vec<ProgressItem> {
    pairs
        .iter()
        .map(|(field, value)| ProgressItem::new(field, value))
        .collect()
}

fn tracked(name: &str, level: u32, onprogress: bool, pairs: &[(&str, &str)]) -> Node {
    Node {
        name: name.to_string(),
        level,
        onprogress: Some(onprogress),
        progress_item: Some(items(pairs)),
        subchild: None,
    }
}

fn sub(sub_level: u32, name: &str, onprogress: bool, pairs: &[(&str, &str)]) -> SubNode {
    SubNode {
        sub_level,
        name: name.to_string(),
        onprogress,
        progress_item: items(pairs),
    }
}

fn build() -> Vec<Node> {
    vec![
        tracked(
            "Production optimization",
            1,
            true,
            &[("Deliver Profitable Project", "5-10%")],
        ),
        tracked(
            "Cost vigilance",
            1,
            true,
            &[
                ("Monitor Daily Expenses", "10%"),
                ("Review Supplier Contracts", "7%"),
            ],
        ),
        Node {
            name: "DE".to_string(),
            level: 2,
            onprogress: None,
            progress_item: None,
            subchild: Some(vec![
                sub(
                    1,
                    "Operational Efficienct",
                    true,
                    &[("Improve Process", "15%"), ("Train Staff", "8%")],
                ),
                sub(
                    2,
                    "Deliver Profitable Project",
                    false,
                    &[
                        ("Deliver Profitable Project Management", "100%"),
                        ("Project Review", "100%"),
                    ],
                ),
            ]),
        },
        tracked(
            "Operational Cost",
            2,
            false,
            &[
                ("Operational Cost Management", "100%"),
                ("Expense Review", "100%"),
            ],
        ),
        tracked(
            "Decresing Methane Intensity",
            2,
            true,
            &[
                ("Upgrade Equipment", "12%"),
                ("Monitor Emissions", "6%"),
                ("Implement Best Practices", "9%"),
            ],
        ),
        tracked(
            "Operating Performance",
            3,
            true,
            &[("System Tuning", "20%"), ("Asset Utilization", "15%")],
        ),
        tracked("More Energy", 4, true, &[("Increase Output", "11%")]),
        tracked(
            "Growing Cash Flow",
            4,
            true,
            &[("Optimize Sales", "10%"), ("Reduce Overheads", "13%")],
        ),
    ]
}
