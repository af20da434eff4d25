//! Driven (output) ports - implemented by infrastructure.
//!
//! One repository per entity. Every operation may fail with a
//! [`StorageError`](crate::application::StorageError); the core never
//! interprets the cause.
//!
//! Implemented by:
//! - `timetable_adapters::InMemoryStore` (all repositories, optional JSON snapshot)

#[cfg(test)]
use mockall::automock;

use crate::application::StorageResult;
use crate::application::ports::query::{NameQuery, PageRequest, PlanningFilter, SlotFilter};
use crate::domain::{ClassEntity, Day, Options, Planning, Room, Slot, Subject, Teacher, TimeSlot};

/// Storage of classes.
#[cfg_attr(test, automock)]
pub trait ClassRepository: Send + Sync {
    fn exists_by_name(&self, name: &str) -> StorageResult<bool>;

    /// Store a new class and return it with its assigned id.
    fn insert(&self, class: ClassEntity) -> StorageResult<ClassEntity>;

    /// Replace a stored class. `None` when no class has that id.
    fn update(&self, class: ClassEntity) -> StorageResult<Option<ClassEntity>>;

    fn find_by_id(&self, id: i64) -> StorageResult<Option<ClassEntity>>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    /// `true` when a planning references the class.
    fn is_used_by_plannings(&self, id: i64) -> StorageResult<bool>;

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<ClassEntity>>;

    fn count(&self, query: &NameQuery) -> StorageResult<u64>;
}

/// Storage of teachers.
#[cfg_attr(test, automock)]
pub trait TeacherRepository: Send + Sync {
    /// `true` when a stored teacher has the same last and first name.
    fn is_exist_by_name(&self, teacher: &Teacher) -> StorageResult<bool>;

    fn insert(&self, teacher: Teacher) -> StorageResult<Teacher>;

    fn update(&self, teacher: Teacher) -> StorageResult<Option<Teacher>>;

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Teacher>>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    /// `true` when a slot references the teacher.
    fn is_used_by_slots(&self, id: i64) -> StorageResult<bool>;

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<Teacher>>;

    fn count(&self, query: &NameQuery) -> StorageResult<u64>;
}

/// Storage of rooms.
#[cfg_attr(test, automock)]
pub trait RoomRepository: Send + Sync {
    fn is_exist_by_name(&self, name: &str) -> StorageResult<bool>;

    fn insert(&self, room: Room) -> StorageResult<Room>;

    fn update(&self, room: Room) -> StorageResult<Option<Room>>;

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Room>>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    /// `true` when a slot references the room.
    fn is_used_by_slots(&self, id: i64) -> StorageResult<bool>;

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<Room>>;

    fn count(&self, query: &NameQuery) -> StorageResult<u64>;
}

/// Storage of subjects.
#[cfg_attr(test, automock)]
pub trait SubjectRepository: Send + Sync {
    fn insert(&self, subject: Subject) -> StorageResult<Subject>;

    fn update(&self, subject: Subject) -> StorageResult<Option<Subject>>;

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Subject>>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<Subject>>;
}

/// Storage of slots.
#[cfg_attr(test, automock)]
pub trait SlotRepository: Send + Sync {
    fn insert(&self, slot: Slot) -> StorageResult<Slot>;

    fn update(&self, slot: Slot) -> StorageResult<Option<Slot>>;

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Slot>>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    /// `true` when any stored slot uses the same background colour.
    fn is_exist_by_color_background(&self, slot: &Slot) -> StorageResult<bool>;

    /// Number of stored slots on `day_id` at the same interval as `time_slot`.
    fn count_by_day(&self, day_id: i64, time_slot: &TimeSlot) -> StorageResult<u64>;

    fn find_all(&self, filter: &SlotFilter) -> StorageResult<Vec<Slot>>;

    fn count(&self, filter: &SlotFilter) -> StorageResult<u64>;
}

/// Storage of plannings.
#[cfg_attr(test, automock)]
pub trait PlanningRepository: Send + Sync {
    fn insert(&self, planning: Planning) -> StorageResult<Planning>;

    fn update(&self, planning: Planning) -> StorageResult<Option<Planning>>;

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Planning>>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    fn find_all(&self, filter: &PlanningFilter) -> StorageResult<Vec<Planning>>;
}

/// Storage of time slots.
#[cfg_attr(test, automock)]
pub trait TimeSlotRepository: Send + Sync {
    fn insert(&self, time_slot: TimeSlot) -> StorageResult<TimeSlot>;

    /// `true` when a stored time slot has the same start and end.
    fn exists(&self, time_slot: &TimeSlot) -> StorageResult<bool>;

    fn delete(&self, id: i64) -> StorageResult<bool>;

    fn find_all(&self, page: &PageRequest) -> StorageResult<Vec<TimeSlot>>;

    fn count(&self) -> StorageResult<u64>;
}

/// Storage of the global options row.
#[cfg_attr(test, automock)]
pub trait OptionsRepository: Send + Sync {
    fn get_options(&self) -> StorageResult<Option<Options>>;

    /// Write the fields set in `changes`. `false` when no row was updated.
    fn update(&self, changes: Options) -> StorageResult<bool>;
}

/// Read access to the school days.
#[cfg_attr(test, automock)]
pub trait DayRepository: Send + Sync {
    fn get_days(&self) -> StorageResult<Vec<Day>>;
}
