use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Parser;
use progress_chart::io_utils::{chart_cli_error, io_cli_error};
use progress_chart::{export, get_dataset, init_logging, ChartError, ExportConfig, ExportFormat};
use tracing::info;

#[derive(Parser)]
#[command(about = "Dump the progress chart dataset")]
struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,
    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
    /// Include derived node ids (csv and tree only)
    #[arg(long)]
    ids: bool,
    /// Write to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ExportConfig {
        format: args.format,
        pretty: args.pretty,
        with_ids: args.ids,
    };
    config
        .validate()
        .map_err(|e| chart_cli_error("invalid arguments", e))?;

    let nodes = get_dataset();
    match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| io_cli_error("creating output file", path, e))?;
            export(nodes, &config, BufWriter::new(file)).map_err(|e| match e {
                ChartError::Io(io) => io_cli_error("writing output file", path, io),
                other => chart_cli_error("export failed", other),
            })?;
            info!(path = %path.display(), format = ?config.format, "chart written");
        }
        None => {
            let stdout = io::stdout().lock();
            export(nodes, &config, BufWriter::new(stdout))
                .map_err(|e| chart_cli_error("export failed", e))?;
        }
    }
    Ok(())
}
