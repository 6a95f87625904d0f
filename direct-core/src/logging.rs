//! Structured logging setup using the `tracing` ecosystem.
//!
//! Console output on stderr plus a daily-rotated log file, in either
//! human-readable or JSON format. HTTP stack crates are held at `warn`
//! unless the filter names them explicitly.

use std::path::Path;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::APP_NAME;
use crate::error::DirectResult;

/// Dependency targets that are chatty at debug level.
const QUIET_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2"];

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `level` - "trace", "debug", "info", "warn", "error", or a full
///   `EnvFilter` directive such as "direct_api=trace,info"
/// * `log_dir` - Directory for log files
/// * `json_output` - If true, use JSON format for file output
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> DirectResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, format!("{APP_NAME}.log"));
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    let (json_layer, text_layer) = if json_output {
        let layer = fmt::layer()
            .with_writer(writer)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(console_layer)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::debug!("logging initialized at level={level}, dir={}", log_dir.display());

    Ok(LogGuard { _guard: guard })
}

/// Keeps the non-blocking log writer alive. Drop it to flush the log file.
pub struct LogGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Initialize a console-only logger for tests or simple embedding.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).compact())
        .try_init();
}

/// Filter directive for `level`, with the HTTP stack capped at `warn`.
fn filter_directive(level: &str) -> String {
    let level = level.trim();
    let mut directive = if level.is_empty() { "info".to_string() } else { level.to_string() };
    let named = named_targets(level);
    for target in QUIET_TARGETS {
        if !named.contains(target) {
            directive.push_str(&format!(",{target}=warn"));
        }
    }
    directive
}

/// Targets named explicitly in a directive such as "info,hyper_util=debug".
fn named_targets(level: &str) -> Vec<&str> {
    level
        .split(',')
        .filter_map(|part| part.split_once('='))
        .map(|(target, _)| target.split('[').next().unwrap_or_default().trim())
        .collect()
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(filter_directive(level))
        .or_else(|_| EnvFilter::try_new(filter_directive("info")))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_quiets_http_stack() {
        let d = filter_directive("debug");
        assert!(d.starts_with("debug,"));
        assert!(d.contains("hyper=warn"));
        assert!(d.contains("reqwest=warn"));
    }

    #[test]
    fn test_filter_directive_respects_explicit_targets() {
        let d = filter_directive("info,reqwest=trace");
        assert!(d.contains("reqwest=trace"));
        assert!(!d.contains("reqwest=warn"));
        assert_eq!(filter_directive("  "), "info,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn,h2=warn");
    }

    #[test]
    fn test_filter_directive_matches_exact_targets() {
        let d = filter_directive("info,hyper_util=debug");
        assert!(d.contains("hyper_util=debug"));
        assert!(d.contains(",hyper=warn"));
        assert!(!d.contains("hyper_util=warn"));
        assert_eq!(named_targets("debug,h2=trace,reqwest[span]=info"), ["h2", "reqwest"]);
    }

    #[test]
    fn test_invalid_directive_falls_back_to_quiet_info() {
        let filter = build_filter("debug,reqwest=loudest");
        assert_eq!(filter.to_string(), EnvFilter::new(filter_directive("info")).to_string());
    }

    #[test]
    fn test_console_logging_does_not_panic() {
        init_console_logging("debug");
        init_console_logging("not a level");
    }
}
