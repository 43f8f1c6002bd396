//! Tracing initialization

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for the service
///
/// Logs go to stderr. `RUST_LOG` is honored, and on top of it the service
/// crate and `tower_http` are enabled at `info`: the router's `TraceLayer`
/// emits one span and one response event per request at that level, so an
/// unconfigured deployment still records every `/api/corgi` call and its
/// status alongside the upstream query logged by the proxy.
///
/// Set `LOG_FORMAT=json` for one JSON object per line when the output goes to a
/// log collector rather than a terminal.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env()
        .add_directive(directive.parse()?)
        .add_directive("tower_http=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
