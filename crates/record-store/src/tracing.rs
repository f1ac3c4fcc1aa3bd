//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging for the process with the
//! `tracing-subscriber` fmt layer.
//!
//! - **Filtering**: the caller passes the filter it resolved from its own
//!   configuration. An unparseable filter falls back to `info`.
//! - **Compact format**: spans are shown inline and module paths are hidden, since
//!   every store event already carries a `record_type` field.
//!
//! ```rust
//! record_store::tracing::setup_tracing("record_store=debug,info");
//! ```
//!
//! With the `info` filter a create followed by an increment looks like:
//!
//! ```text
//! INFO Store started record_type="Beer"
//! INFO Inserted record_type="Beer" id=1 size=1
//! INFO create_beer: Beer created id=1
//! INFO Replaced record_type="Beer" id=1
//! ```

use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "info";

/// Installs the global subscriber with `filter`. Calling it a second time is
/// a no-op, so tests and binaries can both call it freely.
pub fn setup_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .with_target(false)
        .compact()
        .try_init();
}

fn env_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}
