//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `timetable-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - one repository per entity (`ClassRepository`, `SlotRepository`, ...)
//!   - `OptionsRepository` for the global options row
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;
pub mod query;

pub use output::{
    ClassRepository, DayRepository, OptionsRepository, PlanningRepository, RoomRepository,
    SlotRepository, SubjectRepository, TeacherRepository, TimeSlotRepository,
};
pub use query::{NameQuery, PageRequest, PlanningFilter, SlotFilter};

#[cfg(test)]
pub use output::{
    MockClassRepository, MockDayRepository, MockOptionsRepository, MockPlanningRepository,
    MockRoomRepository, MockSlotRepository, MockSubjectRepository, MockTeacherRepository,
    MockTimeSlotRepository,
};
