// src/process/mod.rs
pub mod classify;
pub mod extract;
pub mod group;
pub mod meetings;
pub mod raw_row;
pub mod time_parser;
pub mod utils;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::{fs::File, io::Read, path::Path};
use tracing::{debug, instrument, warn};

use crate::schema::aliases::ReaderConfig;
use raw_row::RawRow;
use utils::{clean_str, infer_cell_from_str};

/// Read a header-first CSV export of the sheet into rows, in file order.
#[instrument(level = "info", skip(path, cfg), fields(path = %path.as_ref().display()))]
pub fn read_rows<P: AsRef<Path>>(path: P, cfg: &ReaderConfig) -> Result<Vec<RawRow>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;
    read_rows_from_reader(file, cfg)
        .with_context(|| format!("Failed to read rows from {:?}", path.as_ref()))
}

/// Same as [`read_rows`], for any reader.
pub fn read_rows_from_reader<R: Read>(reader: R, cfg: &ReaderConfig) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // exported sheets drop trailing empty cells
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    debug!(columns = headers.len(), "read header row");

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error at record {}", idx))?;
        if record.len() > headers.len() {
            warn!(
                record = idx,
                fields = record.len(),
                "record has more fields than headers, extra fields ignored"
            );
        }

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(h, _)| !h.is_empty())
            .map(|(h, field)| {
                let cell = infer_cell_from_str(&clean_str(field), &cfg.na_values);
                (h.clone(), cell)
            })
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), "read rows");
    Ok(rows)
}
