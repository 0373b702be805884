//! Tracing subscriber setup
//!
//! The subscriber is installed before configuration is read so that config
//! warnings reach the log. The filter sits behind a reload layer and the
//! configured level is applied once settings are resolved.

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Swaps the active filter of a subscriber built by [`build_subscriber`]
#[derive(Clone)]
pub struct LogLevelHandle(reload::Handle<EnvFilter, Registry>);

impl LogLevelHandle {
    /// Replace the active filter with `directives` (e.g. `"debug"` or `"fip_server=trace"`)
    pub fn apply(&self, directives: &str) -> Result<()> {
        let filter = EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid log level {:?}", directives))?;
        self.0
            .reload(filter)
            .context("Failed to apply log level")?;
        Ok(())
    }
}

/// Fmt subscriber writing to `writer`, filtered by a reloadable `initial` filter
pub fn build_subscriber<W>(
    initial: EnvFilter,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogLevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(initial);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, LogLevelHandle(handle))
}
