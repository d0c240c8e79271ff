// src/discover.rs
use anyhow::{anyhow, Context, Result};
use glob::glob;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filename convention of the establishment export.
const SOURCE_GLOB: &str = "PLAN*.ESTABELE";

static SEQUENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"PLAN(\d+)").expect("invalid sequence token regex"));

/// Discover `PLAN*.ESTABELE` files under `base_dir`, ordered by the numeric
/// sequence token embedded in each filename. The sort is numeric, not
/// lexical, so `PLAN2` comes before `PLAN10`.
///
/// A matching filename without a parsable token is a configuration error:
/// silently skipping it would make the processing order irreproducible.
pub fn discover_source_files(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/{}", base_dir.display(), SOURCE_GLOB);

    let mut files: Vec<(u64, PathBuf)> = Vec::new();
    for entry in glob(&pattern).context("invalid glob pattern for source discovery")? {
        let path = entry.context("cannot read glob entry")?;
        if !path.is_file() {
            continue;
        }
        let token = sequence_token(&path)?;
        files.push((token, path));
    }

    files.sort_by_key(|(token, _)| *token);
    debug!(count = files.len(), "discovered source files");
    Ok(files.into_iter().map(|(_, path)| path).collect())
}

/// Extract the decimal sequence token from a source filename.
fn sequence_token(path: &Path) -> Result<u64> {
    let name = path
        .file_name()
        .and_then(|f| f.to_str())
        .unwrap_or_default();
    let caps = SEQUENCE_RE.captures(name).ok_or_else(|| {
        anyhow!(
            "source file `{}` has no numeric sequence token",
            path.display()
        )
    })?;
    caps[1]
        .parse::<u64>()
        .with_context(|| format!("unparsable sequence token in `{}`", path.display()))
}
