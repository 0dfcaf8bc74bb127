//! Static progress chart dataset and the schema that describes it.
//!
//! The chart is a fixed, ordered list of strategic categories ([`Node`]),
//! some of which nest sub-categories ([`SubNode`]). Both carry field/value
//! metrics ([`ProgressItem`]). [`get_dataset`] hands out the shared,
//! immutable list; [`export`] and [`identity`] are helpers for consumers
//! that need the data in another format or need stable ids.

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod identity;
pub mod io_utils;

pub use chart::{Node, ProgressItem, SubNode};
pub use config::{ExportConfig, ExportFormat};
pub use dataset::get_dataset;
pub use error::ChartError;
pub use export::{export, write_csv, write_json, write_tree};
pub use identity::{level_name_id, node_id, sub_node_id};

/// Install the stderr log subscriber used by the command line tools.
///
/// The filter is taken from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
