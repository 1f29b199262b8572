use tracing::Level;

/// Initialize the tracing subscriber writing to stderr, away from the
/// alternate screen on stdout. Safe to call multiple times; subsequent calls
/// are no-ops for the global subscriber.
pub fn init_default(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
