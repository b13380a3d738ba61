//! Logging bootstrap shared by every crate in the workspace.
//!
//! Usage:
//! - `LANDING_LOG=off` (default) - no logs
//! - `LANDING_LOG=info` - one line per loaded client and written page
//! - `LANDING_LOG=debug` - per-section rendering details

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable selecting the minimum log level.
pub const LOG_ENV: &str = "LANDING_LOG";

static INIT: Once = Once::new();

/// Map a `LANDING_LOG` value to a minimum level.
///
/// `Ok(None)` means logging is off. Unknown values are returned as `Err`
/// so the caller can fall back to `info` and say so.
pub fn parse_level(value: &str) -> Result<Option<emit::Level>, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => Ok(None),
        "debug" => Ok(Some(emit::Level::Debug)),
        "info" => Ok(Some(emit::Level::Info)),
        "warn" => Ok(Some(emit::Level::Warn)),
        "error" => Ok(Some(emit::Level::Error)),
        other => Err(other.to_string()),
    }
}

/// Initialize diagnostics from the `LANDING_LOG` environment variable.
///
/// Safe to call more than once; only the first call installs the emitter.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_default();
        let (level, unknown) = match parse_level(&raw) {
            Ok(None) => return,
            Ok(Some(level)) => (level, None),
            Err(other) => (emit::Level::Info, Some(other)),
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if let Some(value) = unknown {
            emit::warn!("Unknown {env} value '{value}', using 'info'", env: LOG_ENV, value: value);
        }

        // emit_term writes synchronously, so the runtime never needs flushing.
        std::mem::forget(rt);
    });
}

/// Operations a user wants to see in normal usage: clients loaded, pages written.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Rendering details useful while authoring a client config.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Recoverable conditions: skipped clients, ignored files.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

pub use init_diagnostics as init;
