use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn setup() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .flatten_event(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .fmt_fields(tracing_subscriber::fmt::format::JsonFields::new())
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_filter(default_filter());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialise the tracing subscriber")
}
