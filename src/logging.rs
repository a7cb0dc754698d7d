//! Global logging system.

use std::{env, panic};
use tracing::{error, trace};
use tracing_subscriber::{
    fmt::{self, time::uptime},
    prelude::*,
    EnvFilter, Registry,
};

/// Our crate is debug, everything else is warn.
const DEFAULT_FILTER: &str = "warn,tilecam=debug";

/// Installs a `tracing` backend writing compact lines to stdout. `RUST_LOG`
/// directives are appended to the default filter, so they win on conflict.
/// Panic messages are routed through the logger as well.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let format = fmt::format()
        .compact()
        .with_timer(uptime())
        .with_line_number(true);
    let stdout_log = fmt::layer().event_format(format);

    let mut filter = DEFAULT_FILTER.to_owned();
    if let Ok(env_filter) = env::var(EnvFilter::DEFAULT_ENV) {
        filter.push(',');
        filter.push_str(&env_filter);
    }

    let subscriber = Registry::default()
        .with(EnvFilter::new(filter))
        .with(stdout_log);
    tracing::subscriber::set_global_default(subscriber)?;

    panic::set_hook(Box::new(|info| {
        error!("{}", info);
    }));
    trace!("installed custom panic hook");
    Ok(())
}
