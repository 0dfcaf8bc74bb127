//! Writers that turn the chart into interchange formats.
//!
//! A node that carries both its own progress items and sub-nodes is written
//! with its own items first.

use std::io::Write;

use tracing::debug;

use crate::chart::{Node, ProgressItem};
use crate::config::{ExportConfig, ExportFormat};
use crate::error::ChartError;
use crate::identity::{node_id, sub_node_id};

const CSV_COLUMNS: [&str; 7] = [
    "node",
    "level",
    "sub_node",
    "sub_level",
    "onprogress",
    "field",
    "value",
];

/// Write `nodes` according to `config`.
pub fn export<W: Write>(
    nodes: &[Node],
    config: &ExportConfig,
    writer: W,
) -> Result<(), ChartError> {
    config.validate()?;
    match config.format {
        ExportFormat::Json => write_json(nodes, writer, config.pretty),
        ExportFormat::Csv => write_csv(nodes, writer, config.with_ids).map(|_| ()),
        ExportFormat::Tree => write_tree(nodes, writer, config.with_ids),
    }
}

/// Serialize `nodes` as a JSON array followed by a newline.
pub fn write_json<W: Write>(
    nodes: &[Node],
    mut writer: W,
    pretty: bool,
) -> Result<(), ChartError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, nodes)?;
    } else {
        serde_json::to_writer(&mut writer, nodes)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn flag(v: Option<bool>) -> String {
    v.map(|b| b.to_string()).unwrap_or_default()
}

/// Write one CSV row per progress item and return the number of rows.
pub fn write_csv<W: Write>(
    nodes: &[Node],
    writer: W,
    with_ids: bool,
) -> Result<usize, ChartError> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut header: Vec<&str> = Vec::with_capacity(CSV_COLUMNS.len() + 2);
    if with_ids {
        header.extend(["node_id", "sub_node_id"]);
    }
    header.extend(CSV_COLUMNS);
    wtr.write_record(&header)?;

    let mut rows = 0usize;
    for node in nodes {
        let nid = if with_ids { node_id(node) } else { String::new() };
        for item in node.items() {
            let mut record = Vec::with_capacity(header.len());
            if with_ids {
                record.extend([nid.clone(), String::new()]);
            }
            record.extend([
                node.name.clone(),
                node.level.to_string(),
                String::new(),
                String::new(),
                flag(node.onprogress),
                item.field.clone(),
                item.value.clone(),
            ]);
            wtr.write_record(&record)?;
            rows += 1;
        }
        for sub in node.sub_nodes() {
            let sid = if with_ids { sub_node_id(node, sub) } else { String::new() };
            for item in &sub.progress_item {
                let mut record = Vec::with_capacity(header.len());
                if with_ids {
                    record.extend([nid.clone(), sid.clone()]);
                }
                record.extend([
                    node.name.clone(),
                    node.level.to_string(),
                    sub.name.clone(),
                    sub.sub_level.to_string(),
                    sub.onprogress.to_string(),
                    item.field.clone(),
                    item.value.clone(),
                ]);
                wtr.write_record(&record)?;
                rows += 1;
            }
        }
    }
    wtr.flush()?;
    debug!(rows, "csv export complete");
    Ok(rows)
}

fn progress_label(onprogress: Option<bool>) -> &'static str {
    match onprogress {
        Some(true) => " (in progress)",
        Some(false) => " (not in progress)",
        None => "",
    }
}

fn write_items<W: Write>(
    writer: &mut W,
    indent: &str,
    items: &[ProgressItem],
) -> std::io::Result<()> {
    for item in items {
        writeln!(writer, "{indent}- {}: {}", item.field, item.value)?;
    }
    Ok(())
}

/// Write an indented outline of `nodes`.
pub fn write_tree<W: Write>(
    nodes: &[Node],
    mut writer: W,
    with_ids: bool,
) -> Result<(), ChartError> {
    for node in nodes {
        let id = if with_ids {
            format!(" #{}", node_id(node))
        } else {
            String::new()
        };
        writeln!(
            writer,
            "{} [level {}]{}{}",
            node.name,
            node.level,
            progress_label(node.onprogress),
            id
        )?;
        write_items(&mut writer, "  ", node.items())?;
        for sub in node.sub_nodes() {
            let id = if with_ids {
                format!(" #{}", sub_node_id(node, sub))
            } else {
                String::new()
            };
            writeln!(
                writer,
                "  {} [sub-level {}]{}{}",
                sub.name,
                sub.sub_level,
                progress_label(Some(sub.onprogress)),
                id
            )?;
            write_items(&mut writer, "    ", &sub.progress_item)?;
        }
    }
    writer.flush()?;
    Ok(())
}
