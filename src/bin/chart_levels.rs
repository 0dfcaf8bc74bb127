//! Prints how many chart nodes sit at each level.

use std::collections::BTreeMap;

use progress_chart::{get_dataset, init_logging};

fn main() {
    init_logging();
    let mut table: BTreeMap<u32, usize> = BTreeMap::new();
    for node in get_dataset() {
        *table.entry(node.level).or_default() += 1;
    }

    for (level, count) in table.iter() {
        let noun = if *count == 1 { "node" } else { "nodes" };
        println!("level {}: {} {}", level, count, noun);
    }
}
