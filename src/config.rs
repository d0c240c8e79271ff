// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Run configuration. The defaults are the constants of the
/// accounting-sector extraction; any subset can be overridden from a YAML
/// file passed as the only command-line argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the `PLAN*.ESTABELE` export and the municipalities file.
    pub base_dir: PathBuf,
    /// Municipality reference file inside `base_dir` (semicolon-delimited, header row).
    pub municipalities_filename: String,
    /// Output workbook filename, written into `base_dir`.
    pub output_filename: String,
    /// Accepted primary activity codes (CNAE).
    pub accepted_activity_codes: HashSet<String>,
    /// Registration status code kept by the filter.
    pub active_status_code: String,
    /// Two-letter region (UF) kept by the filter.
    pub target_region: String,
    /// Positional index of the primary activity code column.
    pub activity_code_index: usize,
    /// Rows per chunk when streaming source files.
    pub chunk_size: usize,
    /// Rows per sheet in the output workbook.
    pub max_rows_per_sheet: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            municipalities_filename: "MUNICIPIOS.MUNICCSV".to_string(),
            output_filename: "CNPJs_filtrados.xlsx".to_string(),
            accepted_activity_codes: ["6920601", "6920602", "7020400"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            active_status_code: "02".to_string(),
            target_region: "MG".to_string(),
            activity_code_index: 11,
            chunk_size: 100_000,
            max_rows_per_sheet: 1_000_000,
        }
    }
}

impl Config {
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file `{}`", path.display()))?;
        serde_yaml::from_str(&text)
            .with_context(|| format!("invalid config file `{}`", path.display()))
    }

    pub fn municipalities_path(&self) -> PathBuf {
        self.base_dir.join(&self.municipalities_filename)
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output_filename)
    }
}
