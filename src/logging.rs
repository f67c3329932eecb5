//! Tracing subscriber setup shared by the binaries

use tracing_subscriber::EnvFilter;

/// Report crates log at DEBUG; HTTP and TLS dependencies stay at WARN.
const DEFAULT_DIRECTIVES: &str = "expo_reports=debug,csv_reports=debug,special_protocols=debug,warn";

const QUIET_DIRECTIVES: &str = "warn";

/// Filter directives used when `RUST_LOG` is not set
pub fn default_directives(quiet: bool) -> &'static str {
    if quiet {
        QUIET_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    }
}

/// Install the global fmt subscriber writing to stderr.
///
/// `RUST_LOG` overrides the defaults. A second call is a no-op.
pub fn init(quiet: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(false)).is_ok());
        assert!(EnvFilter::try_new(default_directives(true)).is_ok());
    }

    #[test]
    fn test_dependencies_stay_quiet_by_default() {
        let directives = default_directives(false);
        assert!(directives.contains("expo_reports=debug"));
        assert!(directives.ends_with(",warn"));
        assert!(!directives.contains("reqwest"));
        assert!(!directives.contains("hyper"));
    }
}
