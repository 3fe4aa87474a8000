use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::adjust::FeePolicy;
use crate::{clean, enrich, filter, CleanRecord, RawRecord};

#[derive(Args)]
pub struct PrepareArgs {
    /// Scraped mytcas CSV export
    #[arg(short, long)]
    pub input: PathBuf,

    /// Destination for the cleaned, enriched CSV
    #[arg(short, long, default_value = "data/data_mark_01.csv")]
    pub output: PathBuf,

    /// University coordinate registry (JSON)
    #[arg(short, long, default_value = "data/university_coords.json")]
    pub registry: PathBuf,

    /// Subject keyword a row must mention to be kept
    #[arg(short, long, default_value = "วิศวกรรม")]
    pub keyword: String,

    /// Fee under-scaling heuristic
    #[arg(long, value_enum, default_value = "tiered")]
    pub fee_policy: FeePolicy,
}

/// Read the scraped export. A missing column is a fatal error: every later
/// stage assumes the fixed scraper column set.
pub fn read_raw_records<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: RawRecord = result
            .with_context(|| format!("{} does not match the scraper column set", path.display()))?;
        records.push(record);
    }

    Ok(records)
}

/// Serialize the final table with a header row. The rows are staged into a
/// sibling temp file and renamed into place, so a failed write never leaves
/// a truncated table behind.
pub fn write_clean_records<P: AsRef<Path>>(path: P, records: &[CleanRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let tmp_path = path.with_extension("csv.tmp");
    let mut writer = csv::Writer::from_path(&tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    drop(writer);

    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move output into {}", path.display()))?;
    Ok(())
}

pub fn run(args: PrepareArgs) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tcas_prep=info".parse().unwrap()),
        )
        .try_init()
        .ok();

    let raw = read_raw_records(&args.input)?;
    info!("Read {} scraped rows from {}", raw.len(), args.input.display());

    let registry = enrich::load_registry(&args.registry).with_context(|| {
        format!("Failed to load coordinate registry {}", args.registry.display())
    })?;
    info!("Loaded {} coordinate entries", registry.len());

    let filtered = filter::filter_records(&raw, &args.keyword);
    info!(
        "{} rows mention \"{}\" after deduplication",
        filtered.len(),
        args.keyword
    );

    let progress = ProgressBar::new(filtered.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    // The fee heuristic needs the original text, so each clean row is paired
    // with the raw row it came from.
    let mut cleaned: Vec<CleanRecord> = Vec::with_capacity(filtered.len());
    for raw_row in &filtered {
        let mut row = clean::normalize_record(raw_row);
        args.fee_policy.apply(raw_row, &mut row);
        cleaned.push(row);
        progress.inc(1);
    }
    progress.finish();

    enrich::enrich_coordinates(&mut cleaned, &registry);

    // A write failure ends the run but must not take the process down.
    match write_clean_records(&args.output, &cleaned) {
        Ok(()) => info!("Wrote {} rows to {}", cleaned.len(), args.output.display()),
        Err(e) => error!("Failed to write {}: {:#}", args.output.display(), e),
    }

    Ok(())
}
