// Logging setup
// Events go to stderr so the menu on stdout stays readable.
// RUST_LOG, when set, wins over the --log-level flag.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

/// Build the filter: RUST_LOG if present, else `level`
pub fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init("debug");
        init("info");
    }

    #[test]
    fn test_bad_level_falls_back() {
        // Must not panic on garbage
        let _ = filter_for("not a level ===");
    }
}
