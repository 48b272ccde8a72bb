//! Test logging: routes lexitree spans through the libtest capture.

use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

/// Filter used when RUST_LOG is unset.
const DEFAULT_FILTER: &str = "lexitree=debug";

static LOGGING: Once = Once::new();

/// Install the test subscriber once per test binary; later calls are no-ops.
///
/// Graph operations are instrumented, so span close events show the
/// duration of each add, move and update in failing test output.
pub fn init_test_setup() {
    LOGGING.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let layer = fmt::layer()
            .with_target(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_test_writer()
            .with_filter(filter);

        match tracing_subscriber::registry().with(layer).try_init() {
            Ok(()) => debug!("test logging ready ({})", DEFAULT_FILTER),
            Err(e) => eprintln!("test logging not installed: {}", e),
        }
    });
}
