use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output for terminals.
    Compact,
    /// One JSON object per event, for log collectors.
    Json,
}

/// Filter used when `RUST_LOG` is unset: the crate at `level`, dependencies at `warn`.
pub fn default_directive(level: &str) -> String {
    format!("tryon_composer={},warn", level.to_ascii_lowercase())
}

pub fn init_logger(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_level_to_crate() {
        assert_eq!(default_directive("DEBUG"), "tryon_composer=debug,warn");
        assert!(EnvFilter::try_new(default_directive("info")).is_ok());
    }
}
