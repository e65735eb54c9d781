//! Adapters implementing domain ports.
//!
//! Following hexagonal architecture, adapters depend on domain ports, not the
//! other way around.

pub mod recording_observer;
pub mod tracing_observer;

pub use recording_observer::{RecordingObserver, SessionEvent};
pub use tracing_observer::TracingObserver;
