//! Process-wide tracing subscriber.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Lookup;

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn";

/// Output format of the `fmt` layer, chosen by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One flattened JSON object per event.
    #[default]
    Json,
    /// Single-line human-readable output for local runs.
    Compact,
}

impl LogFormat {
    pub fn from_lookup(env: &impl Lookup) -> Self {
        match env.get("LOG_FORMAT") {
            Some(v) if v.trim().eq_ignore_ascii_case("compact") => LogFormat::Compact,
            _ => LogFormat::Json,
        }
    }
}

/// Install the subscriber. Call once, from `main`, before anything logs.
pub fn init_tracing(format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(env_filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(false)
                    .with_ansi(false),
            )
            .init(),
        LogFormat::Compact => registry.with(fmt::layer().compact()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| (name == "LOG_FORMAT").then_some(value).flatten().map(str::to_string)
    }

    #[test]
    fn json_unless_compact_requested() {
        assert_eq!(LogFormat::from_lookup(&env(None)), LogFormat::Json);
        assert_eq!(LogFormat::from_lookup(&env(Some("pretty"))), LogFormat::Json);
        assert_eq!(LogFormat::from_lookup(&env(Some(" Compact "))), LogFormat::Compact);
    }
}
