//! Timetable Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the school timetable engine: entities,
//! the business rules guarding every create/update, and the services that
//! stamp and store accepted entities.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          timetable-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ClassService, SlotService, ...)       │
//! │   validate -> stamp -> delegate         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (ClassRepository, OptionsRepository)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    timetable-adapters (Infrastructure)  │
//! │   (InMemoryStore, JSON snapshot file)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Slot, Planning, Options, time, colour) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timetable_core::prelude::*;
//!
//! fn create(repository: Box<dyn ClassRepository>) -> ServiceResult<ClassEntity> {
//!     let service = ClassService::new(repository);
//!     service.insert(Some(ClassEntity::named("6ème A")))
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ApplicationError, ClassService, DayService, OptionsService, PlanningService, Response,
        RoomService, ServiceResult, SlotService, StorageError, StorageResult, SubjectService,
        TeacherService, TimeSlotService, ValidationErrors,
        ports::{
            ClassRepository, DayRepository, NameQuery, OptionsRepository, PageRequest,
            PlanningFilter, PlanningRepository, RoomRepository, SlotFilter, SlotRepository,
            SubjectRepository, TeacherRepository, TimeSlotRepository,
        },
    };
    pub use crate::domain::{
        ClassEntity, Day, Options, Planning, Room, Slot, Subject, Teacher, TimeSlot, Weekday,
    };
    pub use crate::error::{ErrorCategory, TimetableError, TimetableResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
