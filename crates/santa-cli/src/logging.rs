//! Tracing setup for the `santa` binary

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a full filter directive, e.g. `santa_core=debug`
pub const LOG_ENV: &str = "SANTA_LOG";

/// Filter for a plain level applied to this workspace's crates only.
pub fn default_directive(level: &str) -> String {
    format!("santa={level},santa_core={level}")
}

/// Install the global subscriber. Logs go to stderr so they never interleave
/// with prompts on stdout.
pub fn init(level: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_to_workspace() {
        assert_eq!(default_directive("debug"), "santa=debug,santa_core=debug");
    }
}
