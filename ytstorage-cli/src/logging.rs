// ============================================================================
// ytstorage-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger Initialization
//
// The application uses the standard `log` facade with `env_logger` as the
// backend. Logs always go to stderr so stdout carries only the report.
//
// USAGE:
// - default: warnings and errors only
// - -v / --verbose: debug output from ytstorage itself
// - RUST_LOG=...: overrides both (e.g. RUST_LOG=trace)
//
// AI-ASSISTANT-INFO: Logger initialization for the CLI

use env_logger::{Builder, Env, Target};

/// Filter used when RUST_LOG is not set.
#[must_use]
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "warn,ytstorage_core=debug,ytstorage_cli=debug"
    } else {
        "warn"
    }
}

/// Initializes the global logger. Call once, before any work is done.
pub fn init(verbose: bool) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .target(Target::Stderr)
        .format_timestamp(None)
        .init();

    log::debug!("Logger initialized (verbose: {})", verbose);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert!(default_filter(true).contains("ytstorage_core=debug"));
    }
}
