// src/reference.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use encoding_rs::WINDOWS_1252;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::process::row::normalize;

/// Municipality code → name. Loaded once, read-only for the rest of the run.
pub type MunicipalityLookup = HashMap<String, String>;

/// Load the municipality reference table. The file is semicolon-delimited
/// with a header row; the first two columns are taken positionally as
/// (code, name) regardless of what the header calls them. Duplicate codes
/// keep their first occurrence.
///
/// A missing or unreadable file is fatal: the run cannot enrich anything
/// without the lookup.
pub fn load_municipalities(path: &Path) -> Result<MunicipalityLookup> {
    let bytes = fs::read(path)
        .with_context(|| format!("cannot read municipalities file `{}`", path.display()))?;
    let (text, _, _) = WINDOWS_1252.decode(&bytes);

    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut lookup = MunicipalityLookup::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.with_context(|| {
            format!("CSV parse error in `{}` at record {}", path.display(), index)
        })?;
        let (Some(code), Some(name)) = (record.get(0), record.get(1)) else {
            continue;
        };
        lookup
            .entry(normalize(code))
            .or_insert_with(|| normalize(name));
    }

    debug!(count = lookup.len(), "loaded municipality lookup");
    Ok(lookup)
}
