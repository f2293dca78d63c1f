//! Logging for the catalog tools
//!
//! Structured logging through `emit`, written to stderr by `emit_term`.
//!
//! Usage:
//! - Set CATALOG_LOG=off - no logs
//! - Set CATALOG_LOG=info (default) - build summaries and notices
//! - Set CATALOG_LOG=debug - one line per written page
//!
//! Errors that end the run are not logged here; the binary returns them from
//! `main`, so they reach stderr even with logging off.

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Environment variable selecting the log level.
pub const LOG_ENV: &str = "CATALOG_LOG";

/// Minimum level for a `CATALOG_LOG` value; `None` disables logging.
///
/// Unknown values fall back to `Info`.
pub fn parse_level(value: &str) -> Option<emit::Level> {
    match value.trim().to_lowercase().as_str() {
        "off" => None,
        "debug" => Some(emit::Level::Debug),
        "warn" => Some(emit::Level::Warn),
        "error" => Some(emit::Level::Error),
        _ => Some(emit::Level::Info),
    }
}

/// Initialize diagnostics based on the CATALOG_LOG environment variable
///
/// This should be called once at application startup. It's safe to call
/// multiple times - subsequent calls will be ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let log_level = std::env::var(LOG_ENV).unwrap_or_else(|_| "info".to_string());

        let Some(min_level) = parse_level(&log_level) else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min_level))
            .init();

        // The runtime must outlive every log call; the process owns it until exit.
        std::mem::forget(rt);
    });
}

/// Log basic operations (files read, pages generated, products converted)
///
/// Examples: "Generated 12 product pages", "Converted 40 products"
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (individual writes, internal steps)
///
/// Examples: "wrote materials/abc-1.html"
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (skipped rows, colliding ids, fallbacks)
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        init_diagnostics();
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("off"), None);
        assert_eq!(parse_level("DEBUG"), Some(emit::Level::Debug));
        assert_eq!(parse_level("warn"), Some(emit::Level::Warn));
        assert_eq!(parse_level("error"), Some(emit::Level::Error));
        assert_eq!(parse_level("info"), Some(emit::Level::Info));
        assert_eq!(parse_level("verbose"), Some(emit::Level::Info));
    }

    #[test]
    fn test_macros_compile() {
        log_info!("Test message");
        log_debug!("Debug message with {value}", value: 42);
        log_warn!("Warning message");
    }
}
