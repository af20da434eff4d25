//! Infrastructure adapters for Timetable.
//!
//! This crate implements the ports defined in `timetable-core::application::ports`.
//! It contains all storage and I/O concerns.

pub mod store;

// Re-export commonly used adapters
pub use store::{InMemoryStore, Tables};
