//! Snapshot writer - persist a loaded table as an opaque binary file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::paths::normalize_path;
use crate::core::table::Table;

/// Snapshot format version
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk snapshot envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot<'a> {
    pub version: u32,

    /// Path the table was loaded from
    pub source: String,

    pub table: Cow<'a, Table>,
}

/// Write `table` to `out`, replacing any existing file.
pub fn write_snapshot(out: &Path, source: &Path, table: &Table) -> Result<()> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        source: normalize_path(source),
        table: Cow::Borrowed(table),
    };

    let file = File::create(out)
        .with_context(|| format!("Failed to create snapshot file: {:?}", out))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, &snapshot).context("Failed to serialize table")?;
    writer.flush().context("Failed to flush snapshot file")?;

    tracing::debug!(path = %out.display(), "snapshot written");
    Ok(())
}
