//! Inspect command: describe a configuration key or print one series.

use anyhow::{Context, Result};
use tracing::info;

use rnd_provider::{ChildRef, ConfigKey, RandomProvider};

use crate::cli::InspectArgs;

pub fn run(args: InspectArgs) -> Result<()> {
    let provider = RandomProvider::new();

    if args.target.contains('#') {
        let child: ChildRef = args
            .target
            .parse()
            .with_context(|| format!("invalid moniker: {}", args.target))?;
        let series = provider.resolve(&child)?;
        info!(name = %series.name, "resolved series");

        println!("name: {}", series.name);
        println!("frequency: {}", series.frequency);
        println!("anchor: {}", series.anchor_date()?);
        for (period, value) in
            rnd_calendar::period_sequence(series.start, series.values.len())
                .iter()
                .zip(&series.values)
        {
            println!("{period}\t{value}");
        }
        return Ok(());
    }

    let key = ConfigKey::from_raw(args.target.as_str());
    let spec = key.decode()?;
    let base = spec.base_model();
    let canonical = spec.canonical_model();

    println!("provider: {} ({} {})", provider.provider_name(), provider.source(), provider.version());
    println!("model: {}", provider.display_name(&key)?);
    println!("frequency: {}", spec.frequency());
    println!("seed: {}", spec.seed());
    println!("noise scale: {}", spec.noise_scale());
    println!("series: {} x {}", spec.count(), spec.length());
    if canonical != base {
        println!("base model is not stationary; using default coefficients");
    }
    println!("phi: {:?}", canonical.phi());
    println!("theta: {:?}", canonical.theta());
    println!("bphi: {:?}", canonical.bphi());
    println!("btheta: {:?}", canonical.btheta());
    println!("key: {}", ConfigKey::encode(&spec));
    Ok(())
}
