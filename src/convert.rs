//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use rnd_calendar::Frequency;
use rnd_io::{CsvConfig, TextEncoding};
use rnd_provider::{Coefficients, ModelSpecification};

use crate::config::{ModelToml, OutputToml};

/// Parses an encoding name into the corresponding enum variant.
pub fn parse_encoding(s: &str) -> Result<TextEncoding> {
    match s.to_lowercase().as_str() {
        "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
        "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
        other => bail!("unknown encoding: {other:?}"),
    }
}

/// Builds a validated [`ModelSpecification`] from the TOML model section.
///
/// `seed` and `count` override the file values when given.
pub fn build_spec(
    model: &ModelToml,
    seed: Option<u64>,
    count: Option<usize>,
) -> Result<ModelSpecification> {
    let frequency = Frequency::from_periods_per_year(model.frequency)
        .context("invalid [model].frequency")?;
    let mut builder = ModelSpecification::builder()
        .regular_orders(model.p, model.d, model.q)
        .seasonal_orders(model.bp, model.bd, model.bq)
        .frequency(frequency)
        .seed(seed.unwrap_or(model.seed))
        .noise_scale(model.noise_scale)
        .count(count.unwrap_or(model.count))
        .length(model.length);
    if let Some(ref c) = model.coefficients {
        builder = builder.coefficients(Coefficients {
            phi: c.phi.clone(),
            theta: c.theta.clone(),
            bphi: c.bphi.clone(),
            btheta: c.btheta.clone(),
        });
    }
    builder.build().context("invalid [model] section")
}

/// Builds a [`CsvConfig`] from the TOML output section.
pub fn build_csv_config(output: &OutputToml) -> Result<CsvConfig> {
    let encoding = parse_encoding(&output.encoding)?;
    let delimiter = u8::try_from(output.delimiter)
        .with_context(|| format!("delimiter {:?} is not a single byte", output.delimiter))?;
    Ok(CsvConfig::default()
        .with_delimiter(delimiter)
        .with_encoding(encoding))
}
