//! Business-rule checks guarding every create and update.
//!
//! Each validator is a stateless unit struct. `validate` returns the ordered
//! list of violated rules (empty means valid); a failing repository lookup
//! short-circuits with a [`StorageError`](crate::application::StorageError)
//! instead of being merged into the list. Validating the same input twice
//! against unchanged storage yields the same list.
//!
//! Messages are user-facing and kept in French, exactly as clients and
//! their tests expect them.

mod class;
mod options;
mod planning;
mod room;
mod slot;
mod subject;
mod teacher;
mod time_slot;

pub use class::ClassValidator;
pub use options::{OptionsCheck, OptionsValidator};
pub use planning::PlanningValidator;
pub use room::RoomValidator;
pub use slot::{MAX_SLOTS_PER_DAY_AND_TIME_SLOT, SlotValidator};
pub use subject::SubjectValidator;
pub use teacher::TeacherValidator;
pub use time_slot::TimeSlotValidator;

/// `true` when the optional string is absent or empty.
fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
