//! Test fixtures and helpers for celltype tests.
//!
//! - [`RecordingRenderer`] - Renderer that logs every write
//! - [`assertions`] - Surface and row comparison helpers

#![allow(clippy::nursery)] // Test fixtures prioritize clarity over pedantry
#![allow(clippy::pedantic)] // Test fixtures prioritize clarity over pedantry
#![allow(dead_code)] // Not every test binary uses every helper

pub mod assertions;
pub mod recording_renderer;

pub use assertions::*;
pub use recording_renderer::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Install a test-writer tracing subscriber once per test binary.
pub fn setup_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}
