pub mod builders;
pub mod fake_sink;
pub mod scripted_runner;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a test-captured subscriber once per test binary.
///
/// Reads the filter from `STATUSRUN_LOG` (same variable as the binary),
/// then `RUST_LOG`, and otherwise stays at `warn` so passing tests are
/// quiet. Output only shows for failing tests unless run with
/// `-- --nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("STATUSRUN_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(false)
            .try_init();
    });
}
