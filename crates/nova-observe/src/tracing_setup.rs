//! Logging for the `nova` binary.
//!
//! Log lines go to stderr so that `nova --json ...` keeps stdout
//! machine-readable. With `NOVA_OTEL=1` every closed span (one
//! `handle_message` or `summarize_journal` call, including the time spent
//! waiting on the model process) is also exported as OpenTelemetry JSON on
//! stdout.
//!
//! ```no_run
//! let otel = nova_observe::tracing_setup::otel_requested();
//! nova_observe::tracing_setup::init_tracing("info,nova=debug", otel).unwrap();
//! // ... run the command or server ...
//! nova_observe::tracing_setup::shutdown_tracing();
//! ```

use std::sync::OnceLock;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable that turns on span export.
pub const OTEL_ENV: &str = "NOVA_OTEL";

/// Kept so `shutdown_tracing` can flush the exporter before exit.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Install the global subscriber.
///
/// `default_filter` is what the CLI derives from `-v`/`--quiet`; an explicit
/// `RUST_LOG` replaces it entirely.
///
/// # Errors
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(
    default_filter: &str,
    enable_otel: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);
    let registry = tracing_subscriber::registry()
        .with(log_filter(default_filter))
        .with(fmt_layer);

    if !enable_otel {
        registry.try_init()?;
        return Ok(());
    }

    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
        .build();
    let otel_layer = tracing_opentelemetry::layer().with_tracer(provider.tracer("nova"));

    let _ = TRACER_PROVIDER.set(provider.clone());
    opentelemetry::global::set_tracer_provider(provider);

    registry.with(otel_layer).try_init()?;
    Ok(())
}

fn log_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Flush exported spans. A no-op unless `init_tracing` enabled export.
pub fn shutdown_tracing() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            eprintln!("Warning: span exporter shutdown error: {e}");
        }
    }
}

/// Whether [`OTEL_ENV`] asks for span export.
pub fn otel_requested() -> bool {
    otel_flag(std::env::var(OTEL_ENV).ok().as_deref())
}

/// `1`, `true` and `yes` (any case, surrounding whitespace ignored) enable export.
fn otel_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
}
