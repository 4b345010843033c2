use asyncstore_core::constants::{ASYNCSTORE_LOG_VAR, DEFAULT_LOG_FILTER};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing system for a binary.
///
/// The filter comes from `ASYNCSTORE_LOG` (falling back to `warn`). Output is
/// a compact, colourless stderr formatter so stdout stays free for replies.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(ASYNCSTORE_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .compact()
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
