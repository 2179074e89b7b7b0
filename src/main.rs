// QuoteDeck - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing (the filter state comes from flags)
// 2. Logging initialisation (debug mode support)
// 3. Dataset loading and ingestion
// 4. Filtering/sorting and output rendering

use clap::Parser;
use quotedeck::app;
use quotedeck::core::export::{export_csv, export_json};
use quotedeck::core::filter::{filter_rows, tag_counts, FilterState, SortOrder};
use quotedeck::core::model::Row;
use quotedeck::ui::render;
use quotedeck::util;
use quotedeck::util::error::QuoteDeckError;
use std::collections::HashSet;
use std::io::{self, Write};
use std::path::PathBuf;

/// QuoteDeck - searchable, filterable card viewer for tab-separated
/// quote/event datasets.
///
/// Point QuoteDeck at a TSV file to ingest it leniently (malformed rows
/// are repaired, never dropped), filter it, and render the matches as
/// text cards or JSON/CSV.
#[derive(Parser, Debug)]
#[command(name = "QuoteDeck", version, about)]
struct Cli {
    /// Path to the tab-separated dataset file.
    file: PathBuf,

    /// Substring search (case- and diacritic-insensitive) across the
    /// quote, tweet, title, show/host, and tags columns.
    #[arg(short = 'q', long = "query")]
    query: Option<String>,

    /// Exact event type (case-insensitive).
    #[arg(long = "type")]
    event_type: Option<String>,

    /// Exact status (case-insensitive).
    #[arg(long)]
    status: Option<String>,

    /// Active tag; matches rows whose tag set contains it.
    #[arg(short = 't', long = "tag")]
    tag: Option<String>,

    /// Range start, inclusive; ISO (YYYY-MM-DD) or M/D/YYYY.
    #[arg(long = "date-start")]
    date_start: Option<String>,

    /// Range end, inclusive; ISO (YYYY-MM-DD) or M/D/YYYY.
    #[arg(long = "date-end")]
    date_end: Option<String>,

    /// Sort direction by event date: asc or desc.
    #[arg(short = 's', long = "sort", default_value = "desc")]
    sort: String,

    /// Output format: cards, json, or csv.
    #[arg(short = 'f', long = "format", default_value = "cards")]
    format: String,

    /// List tags with row counts (over the unfiltered dataset) and exit.
    #[arg(long = "tags")]
    list_tags: bool,

    /// Print repair diagnostics for malformed source lines.
    #[arg(long = "show-repairs")]
    show_repairs: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

impl Cli {
    fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone().unwrap_or_default(),
            event_type: self.event_type.clone().unwrap_or_default(),
            status: self.status.clone().unwrap_or_default(),
            tag: self.tag.clone().unwrap_or_default(),
            sort: SortOrder::from_flag(&self.sort),
            date_start: self.date_start.clone().unwrap_or_default(),
            date_end: self.date_end.clone().unwrap_or_default(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        file = %cli.file.display(),
        "QuoteDeck starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> util::error::Result<()> {
    let ingested = app::load::load_dataset(&cli.file)?;

    for note in &ingested.repairs {
        tracing::warn!(line = note.line_number, "Repaired malformed row: {note}");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_tags {
        let counts = tag_counts(&ingested.rows);
        render::render_tag_panel(&mut out, &counts).map_err(|e| stdout_error(cli, e))?;
        return Ok(());
    }

    let state = cli.filter_state();
    let filtered = filter_rows(&ingested.rows, &state);

    tracing::debug!(
        shown = filtered.len(),
        total = ingested.rows.len(),
        "Filter applied"
    );

    match cli.format.as_str() {
        "json" => {
            export_json(&filtered, &mut out)?;
            writeln!(out).map_err(|e| stdout_error(cli, e))?;
        }
        "csv" => {
            export_csv(&filtered, &mut out)?;
        }
        _ => {
            // Rows named by a repair note get a [repaired] card marker.
            let repaired: HashSet<Row> = ingested
                .repairs
                .iter()
                .filter_map(|note| ingested.rows.get(note.row_index).cloned())
                .collect();

            render::render_summary(&mut out, filtered.len(), ingested.rows.len(), &state.tag)
                .map_err(|e| stdout_error(cli, e))?;
            render::render_cards(&mut out, &filtered, &repaired)
                .map_err(|e| stdout_error(cli, e))?;
        }
    }

    if cli.show_repairs {
        render::render_repairs(&mut out, &ingested.repairs).map_err(|e| stdout_error(cli, e))?;
    }

    Ok(())
}

fn stdout_error(cli: &Cli, source: io::Error) -> QuoteDeckError {
    QuoteDeckError::Io {
        path: cli.file.clone(),
        operation: "writing output",
        source,
    }
}
