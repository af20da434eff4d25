//! Application services - orchestrate use cases.
//!
//! Every create/update follows the same sequence:
//! 1. Run the entity's validator (storage failures short-circuit)
//! 2. Reject with [`ApplicationError::Validation`] if any rule is broken
//! 3. Stamp audit timestamps from a single `Utc::now()` reading
//! 4. Delegate to the repository and hand back its result
//!
//! Services own their ports as `Box<dyn Port>`; nothing here is global.

pub mod class_service;
pub mod day_service;
pub mod options_service;
pub mod planning_service;
pub mod room_service;
pub mod slot_service;
pub mod subject_service;
pub mod teacher_service;
pub mod time_slot_service;

pub use class_service::ClassService;
pub use day_service::DayService;
pub use options_service::OptionsService;
pub use planning_service::PlanningService;
pub use room_service::RoomService;
pub use slot_service::SlotService;
pub use subject_service::SubjectService;
pub use teacher_service::TeacherService;
pub use time_slot_service::TimeSlotService;

use tracing::warn;

use crate::application::{ApplicationError, ServiceResult, ValidationErrors};

/// The request entity, once its validator reported no violation.
///
/// Validators always report a missing entity, so `None` only comes back
/// here together with messages.
fn accept<T>(entity: Option<T>, errors: Vec<String>) -> ServiceResult<T> {
    match entity {
        Some(entity) if errors.is_empty() => Ok(entity),
        _ => {
            warn!(count = errors.len(), "Request rejected by business rules");
            Err(ApplicationError::Validation(ValidationErrors(errors)))
        }
    }
}
