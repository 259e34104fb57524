use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PHONEBOOK_LOG";

/// Filter precedence: `PHONEBOOK_LOG`, then `--verbose`, then the configured level.
fn build_filter(verbose: bool, configured_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { configured_level };
        EnvFilter::try_new(format!("phonebook={}", level))
            .unwrap_or_else(|_| EnvFilter::new("phonebook=warn"))
    })
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init(verbose: bool, configured_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, configured_level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
