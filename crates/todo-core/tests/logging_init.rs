//! Installs the global subscriber, so it runs in its own test binary.

use todo_core::logging;

#[test]
fn test_init_twice_is_harmless() {
    logging::init("warn");
    logging::init("debug");
    tracing::warn!("subscriber installed");
}
