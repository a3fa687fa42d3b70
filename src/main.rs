//! Micro CLI entry point

fn main() {
    // Logs go to stderr so they never mix with the token dump or diagnostics on stdout.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    micro::cli::run();
}
