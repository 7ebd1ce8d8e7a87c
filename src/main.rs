use clap::Parser;
use pgn_report::{
    CompressionMode, DEFAULT_HEADER_FIELDS, DEFAULT_MOVE_LIMIT, ExtractError, ReportOptions,
    extract_file, log, render_json, render_lines,
};
use std::path::{Path, PathBuf};
use std::process;

/// Report the header fields and opening moves of the first game in a PGN
/// file.
#[derive(Parser)]
#[command(name = "pgn-report", version, about, long_about = None)]
struct Cli {
    /// Path to the PGN file (optionally zstd-compressed)
    file: PathBuf,

    /// Comma-separated header fields to print, in order
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_HEADER_FIELDS.map(String::from))]
    fields: Vec<String>,

    /// Maximum number of plies to print
    #[arg(long = "moves", default_value_t = DEFAULT_MOVE_LIMIT)]
    moves: usize,

    /// Input compression: auto, plain or zstd
    #[arg(long, default_value = "auto")]
    compression: String,

    /// Print the report as a single JSON object
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let compression = match CompressionMode::parse(&cli.compression) {
        Ok(mode) => mode,
        Err(msg) => {
            log::error(msg);
            process::exit(2);
        }
    };

    let options = ReportOptions {
        header_fields: cli.fields,
        move_limit: cli.moves,
    };

    if let Err(err) = run(&cli.file, compression, &options, cli.json) {
        log::error(err.to_string());
        process::exit(1);
    }
}

fn run(
    path: &Path,
    compression: CompressionMode,
    options: &ReportOptions,
    json: bool,
) -> Result<(), ExtractError> {
    let record = extract_file(path, compression)?;

    if json {
        println!("{}", render_json(&record, options));
    } else {
        for line in render_lines(&record, options) {
            println!("{}", line);
        }
    }

    Ok(())
}
