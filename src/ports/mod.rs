//! Ports (trait boundaries) for external collaborators.
//!
//! Following hexagonal architecture, these traits are owned by the domain and
//! implemented by adapters outside it.

pub mod observer;

pub use observer::SessionObserver;
