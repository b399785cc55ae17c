//! Logging setup for binaries and examples embedding waktu.

use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    #[default]
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// The filter used when `RUST_LOG` is unset: every `waktu*` target at the
/// verbosity's level, everything else off.
#[must_use]
pub fn default_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::new(format!("waktu={}", verbosity.level()))
}

/// Installs a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is harmless.
pub fn init_logging(verbosity: Verbosity) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(Verbosity::Quiet.level(), Level::ERROR);
        assert_eq!(Verbosity::default().level(), Level::INFO);
        assert_eq!(Verbosity::Trace.level(), Level::TRACE);
    }

    fn under(verbosity: Verbosity, check: impl FnOnce() -> bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(default_filter(verbosity));
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn test_default_filter_scopes_to_waktu() {
        assert!(under(Verbosity::Verbose, || tracing::enabled!(target: "waktu_core::service", Level::DEBUG)));
        assert!(!under(Verbosity::Verbose, || tracing::enabled!(target: "hyper::client", Level::DEBUG)));
        assert!(under(Verbosity::Normal, || tracing::enabled!(target: "waktu_location::resolve", Level::INFO)));
        assert!(!under(Verbosity::Normal, || tracing::enabled!(target: "waktu_core::service", Level::DEBUG)));
        assert!(!under(Verbosity::Quiet, || tracing::enabled!(target: "waktu_core::service", Level::INFO)));
        assert!(under(Verbosity::Quiet, || tracing::enabled!(target: "waktu_core::service", Level::ERROR)));
    }
}
