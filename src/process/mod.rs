// src/process/mod.rs
pub mod filter;
pub mod row;

pub use filter::{filter_chunk, FilteredRecord};
pub use row::EstablishmentRow;

use anyhow::{Context, Result};
use csv::{ByteRecord, ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

use crate::config::Config;

/// Stream one `PLAN*.ESTABELE` file in `chunk_size`-row chunks, appending
/// every surviving record to `results`. Peak memory stays bounded by one
/// chunk regardless of how large the file is.
pub fn process_file(path: &Path, config: &Config, results: &mut Vec<FilteredRecord>) -> Result<()> {
    let file = File::open(path)
        .with_context(|| format!("cannot open source file `{}`", path.display()))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut chunk: Vec<StringRecord> = Vec::with_capacity(config.chunk_size);
    let mut record = ByteRecord::new();
    let mut chunk_index = 0usize;

    loop {
        let more = reader
            .read_byte_record(&mut record)
            .with_context(|| format!("CSV parse error in `{}`", path.display()))?;
        if more {
            chunk.push(decode_record(&record));
        }

        if chunk.len() >= config.chunk_size || (!more && !chunk.is_empty()) {
            let kept = filter_chunk(&chunk, config);
            debug!(
                file = %path.display(),
                chunk = chunk_index,
                rows = chunk.len(),
                kept = kept.len(),
                "filtered chunk"
            );
            results.extend(kept);
            chunk.clear();
            chunk_index += 1;
        }

        if !more {
            break;
        }
    }

    Ok(())
}

/// Decode one raw record from the registry's legacy single-byte encoding.
/// The decode never fails; undecodable bytes become replacement characters
/// instead of aborting the file.
fn decode_record(record: &ByteRecord) -> StringRecord {
    let mut out = StringRecord::with_capacity(record.as_slice().len(), record.len());
    for field in record.iter() {
        let (text, _, _) = WINDOWS_1252.decode(field);
        out.push_field(&text);
    }
    out
}
