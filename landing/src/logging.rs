//! Tracing setup.
//!
//! In the browser events go to the devtools console through `tracing-wasm`.
//! Native builds (tests, tooling) get a plain `tracing-subscriber` fmt layer.

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    INIT.call_once(install);
}

#[cfg(target_arch = "wasm32")]
fn install() {
    tracing_wasm::set_as_global_default();
}

#[cfg(not(target_arch = "wasm32"))]
fn install() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Another subscriber (e.g. a test harness) may already own the global slot.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
        tracing::info!("logging initialised twice without panicking");
    }
}
