#![doc(test(attr(deny(warnings))))]

//! Booking Core offers the appointment, service, and category state
//! management primitives behind scheduling dashboards and CLIs.

pub mod business;
pub mod cli;
pub mod core;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Booking Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
