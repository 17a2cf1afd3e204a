use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// The level is read from the `LOGLEVEL` environment variable (`DEBUG`, `INFO`,
/// `WARN`, `ERROR`, `TRACE`) and defaults to `INFO`. Calling this function more
/// than once is harmless: only the first call installs a subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = parse_level(env::var("LOGLEVEL").ok().as_deref());

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_ok() {
            tracing::debug!("Log level set to: {}", level);
        }
    });
}

/// Maps a `LOGLEVEL` value onto a `tracing` level, falling back to `INFO`
pub fn parse_level(value: Option<&str>) -> Level {
    match value.map(|v| v.to_uppercase()).as_deref() {
        Some("TRACE") => Level::TRACE,
        Some("DEBUG") => Level::DEBUG,
        Some("WARN") => Level::WARN,
        Some("ERROR") => Level::ERROR,
        _ => Level::INFO,
    }
}
