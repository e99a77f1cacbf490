use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,linkpost_cli=info,linkpost_validator=info",
        2 => "info,linkpost_cli=debug,linkpost_validator=debug",
        _ => "debug,linkpost_cli=trace,linkpost_validator=trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays
/// machine-readable for `--format json`.
pub fn init(verbose: u8) {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|f| EnvFilter::try_new(f).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_file(verbose >= 3)
        .with_line_number(verbose >= 3)
        .compact()
        .init();
}
