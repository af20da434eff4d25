//! Application layer for Timetable.
//!
//! This layer contains:
//! - **Validators**: Business-rule checks returning ordered French messages
//! - **Services**: Use case orchestration (validate, stamp, delegate)
//! - **Ports**: Repository traits implemented by `timetable-adapters`
//! - **Response**: The `{value, errors}` envelope rendered by driving adapters
//! - **Errors**: Validation vs storage failures, never merged

pub mod error;
pub mod ports;
pub mod response;
pub mod services;
pub mod validators;

pub use services::{
    ClassService, DayService, OptionsService, PlanningService, RoomService, SlotService,
    SubjectService, TeacherService, TimeSlotService,
};

pub use ports::{
    ClassRepository, DayRepository, OptionsRepository, PlanningRepository, RoomRepository,
    SlotRepository, SubjectRepository, TeacherRepository, TimeSlotRepository,
};

pub use error::{
    ApplicationError, ServiceResult, StorageContext, StorageError, StorageResult,
    ValidationErrors,
};
pub use response::Response;
