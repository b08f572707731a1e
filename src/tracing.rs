//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// Defaults to INFO, overridable via `RUST_LOG`. Under a test harness the
/// subscriber writes through the capture-aware test writer at DEBUG.
pub fn init() {
    INIT.call_once(|| {
        let under_test = std::env::var_os("CARGO_TARGET_TMPDIR").is_some();
        let default_level = if under_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let filter = EnvFilter::from_default_env().add_directive(default_level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact();

        // Install as the global default so the subscriber stays alive for the
        // whole process; a scoped default would uninstall when its guard drops.
        let installed = if under_test {
            builder.with_test_writer().try_init()
        } else {
            builder.with_writer(std::io::stderr).try_init()
        };
        if let Err(e) = installed {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
