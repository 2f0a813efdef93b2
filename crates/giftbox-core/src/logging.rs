//! Console logging setup.
//!
//! `RUST_LOG` takes precedence; otherwise the configured filter is used.
//!
//! ```ignore
//! giftbox_core::logging::init("info,giftbox_core=debug");
//! tracing::info!("ready");
//! ```

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, else `fallback`, else `info`.
pub fn filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global fmt subscriber. Later calls are no-ops.
pub fn init(fallback: &str) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter(fallback))
        .with_target(true)
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init("debug");
        init("warn");
        tracing::info!("still logging");
    }

    #[test]
    fn invalid_fallback_does_not_panic() {
        let _ = filter("[[not a filter");
    }
}
