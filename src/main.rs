use anyhow::Result;
use cnpjfilter::{config::Config, discover, process, reference, report};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load configuration ───────────────────────────────────────
    let config = match env::args().nth(1) {
        Some(path) => Config::from_yaml_file(&PathBuf::from(path))?,
        None => Config::default(),
    };

    // ─── 3) load the municipality lookup ─────────────────────────────
    let municipalities = reference::load_municipalities(&config.municipalities_path())?;
    info!("{} municipalities in lookup", municipalities.len());

    // ─── 4) discover source files, in sequence order ─────────────────
    let sources = discover::discover_source_files(&config.base_dir)?;
    info!("{} source files to process", sources.len());

    // ─── 5) filter each file, one chunk at a time ────────────────────
    let mut results = Vec::new();
    for path in &sources {
        info!("processing {}", path.display());
        process::process_file(path, &config, &mut results)?;
    }
    info!("{} records after filtering", results.len());

    // ─── 6) enrich + export ──────────────────────────────────────────
    let table = report::ReportTable::build(results, &municipalities);
    let output = config.output_path();
    report::export::write_workbook(&table, &output, config.max_rows_per_sheet)?;
    info!("report saved to {}", output.display());

    Ok(())
}
