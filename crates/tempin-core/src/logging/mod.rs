use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const QUIET_DIRECTIVE: &str = "tempin=error";
const VERBOSE_DIRECTIVE: &str = "tempin=info";

/// Initialize JSON logging on stderr.
///
/// stdout is reserved for descriptor output. When `quiet` is true only
/// error-level events are emitted. `RUST_LOG` directives are layered
/// underneath. Calling this when a global subscriber is already installed
/// (a host embedding the library) leaves that subscriber in place.
pub fn init_logging(quiet: bool) {
    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(build_filter(quiet))
        .try_init();

    if installed.is_err() {
        tracing::debug!(event = "core.logging.subscriber_already_set");
    }
}

fn build_filter(quiet: bool) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match crate_directive(quiet) {
        Some(directive) => filter.add_directive(directive),
        None => filter,
    }
}

fn crate_directive(quiet: bool) -> Option<Directive> {
    let raw = if quiet { QUIET_DIRECTIVE } else { VERBOSE_DIRECTIVE };
    raw.parse().ok()
}
