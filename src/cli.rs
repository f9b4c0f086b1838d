//! CLI module - Command-line interface definition and pipeline driver

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

use crate::backends::load::{load_csv, LoadOptions, DEFAULT_INDEX_COL};
use crate::backends::resolve::find_file_by_name;
use crate::backends::snapshot::write_snapshot;
use crate::core::encoding::DEFAULT_ENCODING;
use crate::core::error::LoaderError;
use crate::core::paths::{absolute_root, DEFAULT_DATASET};
use crate::core::render::{RenderConfig, Renderer, DEFAULT_HEAD};

/// loader - locate a CSV dataset, load it and print a summary.
#[derive(Parser, Debug)]
#[command(name = "loader")]
#[command(
    version,
    about,
    long_about = r#"Locate a CSV dataset, load it into a table and print its shape,
column names and first rows.

Without --path, the dataset is searched for by name: first as a literal path,
then recursively under ROOT by exact file name, then as any .csv file whose
name contains the target (case-insensitive).

Exit codes:
    0  success
    2  --path given but it does not exist
    3  no file found by searching
    4  the file could not be loaded (or the snapshot could not be written)

Examples:
    loader
    loader --path ./Alex_emails_march_04.csv --head 10
    loader --encoding utf-8 --no-index
    loader --save-pickle emails.pkl
"#
)]
pub struct Cli {
    /// Path to the CSV file; skips searching.
    #[arg(
        short,
        long,
        value_name = "PATH",
        long_help = "Path to the CSV file (relative to the current directory unless absolute).\n\n\
If omitted, the file is searched for under ROOT."
    )]
    pub path: Option<PathBuf>,

    /// Text encoding of the file.
    #[arg(
        short,
        long,
        default_value = DEFAULT_ENCODING,
        value_name = "ENC",
        long_help = "Text encoding used to decode the file.\n\n\
Accepts standard labels such as latin-1, iso-8859-1, cp1252, utf-8.\n\
Bytes that are invalid for the encoding cause a load failure."
    )]
    pub encoding: String,

    /// Do not promote the index column even if it exists.
    #[arg(long)]
    pub no_index: bool,

    /// Number of rows to preview (0 skips the preview).
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_HEAD,
        value_name = "N",
        allow_negative_numbers = true,
        long_help = "Number of rows to preview (default: 5). Use 0 to skip the preview.\n\n\
A negative N shows every row except the last |N|."
    )]
    pub head: i64,

    /// Write the loaded table to a binary snapshot file.
    #[arg(
        short,
        long,
        value_name = "OUT",
        long_help = "Write the loaded table to a binary snapshot file at OUT.\n\n\
An existing file at OUT is overwritten."
    )]
    pub save_pickle: Option<PathBuf>,

    /// Directory to search under when --path is not given.
    #[arg(long, default_value = ".", value_name = "ROOT")]
    pub root: PathBuf,

    /// File name to search for when --path is not given.
    #[arg(long, default_value = DEFAULT_DATASET, value_name = "FILE")]
    pub name: String,

    /// Column promoted to the row index.
    #[arg(long, default_value = DEFAULT_INDEX_COL, value_name = "COL")]
    pub index_col: String,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Loader options derived from the flags
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            encoding: self.encoding.clone(),
            index_col: (!self.no_index).then(|| self.index_col.clone()),
        }
    }
}

/// Run the pipeline, writing the report to `out`
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), LoaderError> {
    let file_path = match &cli.path {
        Some(path) => {
            if !path.exists() {
                return Err(LoaderError::PathNotFound(path.clone()));
            }
            path.clone()
        }
        None => {
            let root = absolute_root(&cli.root);
            tracing::debug!(name = %cli.name, root = %root.display(), "searching for dataset");
            let (path, stage) = find_file_by_name(&cli.name, &root).ok_or_else(|| {
                LoaderError::SearchExhausted {
                    name: cli.name.clone(),
                    root,
                }
            })?;
            tracing::debug!(path = %path.display(), ?stage, "resolved dataset");
            path
        }
    };

    writeln!(
        out,
        "Loading CSV: {} (encoding={})",
        file_path.display(),
        cli.encoding
    )
    .map_err(LoaderError::Report)?;

    let table = load_csv(&file_path, &cli.load_options())?;

    Renderer::with_config(RenderConfig::with_head(cli.head))
        .render_to(&table, &mut *out)
        .map_err(LoaderError::Report)?;

    if let Some(snapshot_path) = &cli.save_pickle {
        write_snapshot(snapshot_path, &file_path, &table).map_err(LoaderError::Snapshot)?;
        writeln!(out, "Wrote table snapshot to: {}", snapshot_path.display())
            .map_err(LoaderError::Report)?;
    }

    Ok(())
}
