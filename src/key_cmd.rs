//! Key command: print the configuration key of a TOML configuration.

use anyhow::Result;

use rnd_provider::{ConfigKey, RandomProvider};

use crate::cli::KeyArgs;
use crate::config::RndConfig;
use crate::convert;

pub fn run(args: KeyArgs) -> Result<()> {
    let config = RndConfig::load(&args.config)?;
    let spec = convert::build_spec(&config.model, args.seed, None)?;
    let key = ConfigKey::encode(&spec);

    if args.children {
        for child in RandomProvider::new().child_refs(&key)? {
            println!("{child}");
        }
    } else {
        println!("{key}");
    }
    Ok(())
}
