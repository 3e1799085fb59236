//! Generate command: build a batch and export its series.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use rnd_io::{SUMMARY_COLUMNS, SeriesSummary, write_results, write_series_json};
use rnd_provider::{ConfigKey, RandomProvider};

use crate::cli::GenerateArgs;
use crate::config::RndConfig;
use crate::convert;

/// Run the generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // Step 1: Load config and build the specification
    let config = RndConfig::load(&args.config)?;
    let spec = convert::build_spec(&config.model, args.seed, args.count)?;
    let csv_cfg = convert::build_csv_config(&config.output)?;
    let key = ConfigKey::encode(&spec);
    info!(spec = %spec, count = spec.count(), length = spec.length(), "specification loaded");

    // Step 2: Generate and resolve every series
    let provider = RandomProvider::new();
    let series = provider
        .resolve_all(&key)
        .with_context(|| format!("failed to resolve {key}"))?;
    info!(n_series = series.len(), "batch generated");

    // Step 3: Export
    if let Some(path) = args.report.as_ref().or(config.output.report.as_ref()) {
        let rows: Vec<(String, SeriesSummary)> = series
            .iter()
            .map(|s| (s.name.clone(), SeriesSummary::from_series(s)))
            .collect();
        write_results(path, &rows, &SUMMARY_COLUMNS, &csv_cfg)
            .with_context(|| format!("failed to write report: {}", path.display()))?;
        info!(path = %path.display(), "summary report written");
    }
    if let Some(path) = args.json.as_ref().or(config.output.series_json.as_ref()) {
        write_series_json(path, &series)
            .with_context(|| format!("failed to write series: {}", path.display()))?;
        info!(path = %path.display(), "series written");
    }

    println!("{key}");
    Ok(())
}
