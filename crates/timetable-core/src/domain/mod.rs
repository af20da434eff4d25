// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Timetable.
//!
//! Pure data and rules: entities, colour and time arithmetic. Nothing here
//! performs I/O; checks that need stored facts live in
//! `crate::application::validators`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or storage calls
//! - **Plain data**: All entities are Clone + PartialEq + serde
//!
pub mod color;
pub mod entities;
pub mod error;
pub mod time;

pub use entities::{
    Audited, ClassEntity, Day, Options, Planning, Room, Slot, Subject, Teacher, TimeSlot, Weekday,
};

pub use error::{DomainError, ErrorCategory};
