use tracing_subscriber::EnvFilter;

/// Log targets of the `rnd` binary and its library crates.
const CRATE_TARGETS: &[&str] = &["rnd", "rnd_calendar", "rnd_io", "rnd_provider", "rnd_sarima"];

fn level_for(verbosity: u8) -> &'static str {
    ["warn", "info", "debug"]
        .get(usize::from(verbosity))
        .copied()
        .unwrap_or("trace")
}

/// Installs the global subscriber.
///
/// Every `rnd` command prints its result (keys, monikers, series values) on
/// stdout, so log events always go to stderr and `rnd key > key.txt` stays
/// clean. Without `-v` only warnings show, such as a base model replaced
/// by the default one. `RUST_LOG`, when set, replaces the `-v` filter.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity);
    let directives = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(9), "trace");
    }
}
