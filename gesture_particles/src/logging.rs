//! `tracing` subscriber setup.

use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Install a stderr subscriber.  `RUST_LOG` takes precedence over `filter`;
/// an unparsable `filter` falls back to `info`.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer()
        .with_writer(std::io::stderr) // stdout stays for the banner
        .with_target(false)
        .with_filter(env_filter);

    if tracing_subscriber::registry().with(console).try_init().is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}
