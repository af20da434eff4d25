//! Port implementations over [`Tables`].

use std::collections::BTreeMap;

use timetable_core::{
    application::{
        StorageResult,
        ports::{
            ClassRepository, DayRepository, NameQuery, OptionsRepository, PageRequest,
            PlanningFilter, PlanningRepository, RoomRepository, SlotFilter, SlotRepository,
            SubjectRepository, TeacherRepository, TimeSlotRepository,
        },
    },
    domain::{
        Audited, ClassEntity, Day, Options, Planning, Room, Slot, Subject, Teacher, TimeSlot,
    },
};
use tracing::debug;

use super::{InMemoryStore, Tables};

fn insert_row<T: Audited + Clone>(table: &mut BTreeMap<i64, T>, id: i64, mut entity: T) -> T {
    entity.set_id(id);
    table.insert(id, entity.clone());
    entity
}

/// Replace the row with the same id. `None` when there is no such row.
fn update_row<T: Audited + Clone>(table: &mut BTreeMap<i64, T>, mut entity: T) -> Option<T> {
    let row = table.get_mut(&entity.id()?)?;
    entity.inherit_creation_date(row);
    *row = entity.clone();
    Some(entity)
}

fn named<'a, T: 'a>(
    table: &'a BTreeMap<i64, T>,
    query: &'a NameQuery,
    name: impl Fn(&T) -> Option<&str> + 'a,
) -> impl Iterator<Item = &'a T> + 'a {
    table.values().filter(move |row| query.matches(name(*row)))
}

fn page<'a, T: Clone + 'a>(rows: impl Iterator<Item = &'a T>, page: &PageRequest) -> Vec<T> {
    page.apply(rows.cloned().collect())
}

fn class_name(class: &ClassEntity) -> Option<&str> {
    class.name.as_deref()
}

fn room_name(room: &Room) -> Option<&str> {
    room.name.as_deref()
}

fn subject_name(subject: &Subject) -> Option<&str> {
    subject.name.as_deref()
}

/// Teachers match on either name.
fn teachers<'a>(tables: &'a Tables, query: &'a NameQuery) -> impl Iterator<Item = &'a Teacher> {
    tables.teachers.values().filter(move |teacher| {
        query.matches(teacher.last_name.as_deref()) || query.matches(teacher.first_name.as_deref())
    })
}

// ============================================================================
// Classes
// ============================================================================

impl ClassRepository for InMemoryStore {
    fn exists_by_name(&self, name: &str) -> StorageResult<bool> {
        Ok(self
            .read()?
            .classes
            .values()
            .any(|class| class.name.as_deref() == Some(name)))
    }

    fn insert(&self, class: ClassEntity) -> StorageResult<ClassEntity> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing class");
        Ok(insert_row(&mut tables.classes, id, class))
    }

    fn update(&self, class: ClassEntity) -> StorageResult<Option<ClassEntity>> {
        Ok(update_row(&mut self.write()?.classes, class))
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<ClassEntity>> {
        Ok(self.read()?.classes.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.classes.remove(&id).is_some())
    }

    fn is_used_by_plannings(&self, id: i64) -> StorageResult<bool> {
        Ok(self
            .read()?
            .plannings
            .values()
            .any(|planning| planning.class.as_ref().and_then(|c| c.id) == Some(id)))
    }

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<ClassEntity>> {
        let tables = self.read()?;
        Ok(page(named(&tables.classes, query, class_name), &query.page))
    }

    fn count(&self, query: &NameQuery) -> StorageResult<u64> {
        let tables = self.read()?;
        Ok(named(&tables.classes, query, class_name).count() as u64)
    }
}

// ============================================================================
// Teachers
// ============================================================================

impl TeacherRepository for InMemoryStore {
    fn is_exist_by_name(&self, teacher: &Teacher) -> StorageResult<bool> {
        let (Some(last), Some(first)) = (&teacher.last_name, &teacher.first_name) else {
            return Ok(false);
        };
        Ok(self.read()?.teachers.values().any(|stored| {
            stored.last_name.as_ref() == Some(last) && stored.first_name.as_ref() == Some(first)
        }))
    }

    fn insert(&self, teacher: Teacher) -> StorageResult<Teacher> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing teacher");
        Ok(insert_row(&mut tables.teachers, id, teacher))
    }

    fn update(&self, teacher: Teacher) -> StorageResult<Option<Teacher>> {
        Ok(update_row(&mut self.write()?.teachers, teacher))
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Teacher>> {
        Ok(self.read()?.teachers.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.teachers.remove(&id).is_some())
    }

    fn is_used_by_slots(&self, id: i64) -> StorageResult<bool> {
        Ok(self
            .read()?
            .slots
            .values()
            .any(|slot| slot.teacher.as_ref().and_then(|t| t.id) == Some(id)))
    }

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<Teacher>> {
        let tables = self.read()?;
        Ok(page(teachers(&tables, query), &query.page))
    }

    fn count(&self, query: &NameQuery) -> StorageResult<u64> {
        let tables = self.read()?;
        Ok(teachers(&tables, query).count() as u64)
    }
}

// ============================================================================
// Rooms
// ============================================================================

impl RoomRepository for InMemoryStore {
    fn is_exist_by_name(&self, name: &str) -> StorageResult<bool> {
        Ok(self
            .read()?
            .rooms
            .values()
            .any(|room| room.name.as_deref() == Some(name)))
    }

    fn insert(&self, room: Room) -> StorageResult<Room> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing room");
        Ok(insert_row(&mut tables.rooms, id, room))
    }

    fn update(&self, room: Room) -> StorageResult<Option<Room>> {
        Ok(update_row(&mut self.write()?.rooms, room))
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Room>> {
        Ok(self.read()?.rooms.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.rooms.remove(&id).is_some())
    }

    fn is_used_by_slots(&self, id: i64) -> StorageResult<bool> {
        Ok(self
            .read()?
            .slots
            .values()
            .any(|slot| slot.room.as_ref().and_then(|r| r.id) == Some(id)))
    }

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<Room>> {
        let tables = self.read()?;
        Ok(page(named(&tables.rooms, query, room_name), &query.page))
    }

    fn count(&self, query: &NameQuery) -> StorageResult<u64> {
        let tables = self.read()?;
        Ok(named(&tables.rooms, query, room_name).count() as u64)
    }
}

// ============================================================================
// Subjects
// ============================================================================

impl SubjectRepository for InMemoryStore {
    fn insert(&self, subject: Subject) -> StorageResult<Subject> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing subject");
        Ok(insert_row(&mut tables.subjects, id, subject))
    }

    fn update(&self, subject: Subject) -> StorageResult<Option<Subject>> {
        Ok(update_row(&mut self.write()?.subjects, subject))
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Subject>> {
        Ok(self.read()?.subjects.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.subjects.remove(&id).is_some())
    }

    fn find_all(&self, query: &NameQuery) -> StorageResult<Vec<Subject>> {
        let tables = self.read()?;
        Ok(page(named(&tables.subjects, query, subject_name), &query.page))
    }
}

// ============================================================================
// Slots
// ============================================================================

impl SlotRepository for InMemoryStore {
    fn insert(&self, slot: Slot) -> StorageResult<Slot> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing slot");
        Ok(insert_row(&mut tables.slots, id, slot))
    }

    fn update(&self, slot: Slot) -> StorageResult<Option<Slot>> {
        Ok(update_row(&mut self.write()?.slots, slot))
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Slot>> {
        Ok(self.read()?.slots.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.slots.remove(&id).is_some())
    }

    fn is_exist_by_color_background(&self, slot: &Slot) -> StorageResult<bool> {
        let Some(background) = slot.background_color.as_deref() else {
            return Ok(false);
        };
        Ok(self.read()?.slots.values().any(|stored| {
            stored
                .background_color
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(background))
        }))
    }

    fn count_by_day(&self, day_id: i64, time_slot: &TimeSlot) -> StorageResult<u64> {
        Ok(self
            .read()?
            .slots
            .values()
            .filter(|slot| slot.day_id() == Some(day_id))
            .filter(|slot| {
                slot.time_slot
                    .as_ref()
                    .is_some_and(|ts| ts.same_interval(time_slot))
            })
            .count() as u64)
    }

    fn find_all(&self, filter: &SlotFilter) -> StorageResult<Vec<Slot>> {
        let tables = self.read()?;
        let rows = tables.slots.values().filter(|slot| filter.matches(slot));
        Ok(page(rows, &filter.page))
    }

    fn count(&self, filter: &SlotFilter) -> StorageResult<u64> {
        let tables = self.read()?;
        Ok(tables.slots.values().filter(|slot| filter.matches(slot)).count() as u64)
    }
}

// ============================================================================
// Plannings
// ============================================================================

impl PlanningRepository for InMemoryStore {
    fn insert(&self, planning: Planning) -> StorageResult<Planning> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing planning");
        Ok(insert_row(&mut tables.plannings, id, planning))
    }

    fn update(&self, planning: Planning) -> StorageResult<Option<Planning>> {
        Ok(update_row(&mut self.write()?.plannings, planning))
    }

    fn find_by_id(&self, id: i64) -> StorageResult<Option<Planning>> {
        Ok(self.read()?.plannings.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.plannings.remove(&id).is_some())
    }

    fn find_all(&self, filter: &PlanningFilter) -> StorageResult<Vec<Planning>> {
        let tables = self.read()?;
        let rows = tables
            .plannings
            .values()
            .filter(|planning| filter.matches(planning));
        Ok(page(rows, &filter.page))
    }
}

// ============================================================================
// Time slots
// ============================================================================

impl TimeSlotRepository for InMemoryStore {
    fn insert(&self, mut time_slot: TimeSlot) -> StorageResult<TimeSlot> {
        let mut tables = self.write()?;
        let id = tables.allocate_id();
        debug!(id, "Storing time slot");
        time_slot.id = Some(id);
        tables.time_slots.insert(id, time_slot.clone());
        Ok(time_slot)
    }

    fn exists(&self, time_slot: &TimeSlot) -> StorageResult<bool> {
        Ok(self
            .read()?
            .time_slots
            .values()
            .any(|stored| stored.same_interval(time_slot)))
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.write()?.time_slots.remove(&id).is_some())
    }

    /// Ordered by start, then end.
    fn find_all(&self, page: &PageRequest) -> StorageResult<Vec<TimeSlot>> {
        let mut rows: Vec<TimeSlot> = self.read()?.time_slots.values().cloned().collect();
        rows.sort_by_key(|ts| (ts.start, ts.end));
        Ok(page.apply(rows))
    }

    fn count(&self) -> StorageResult<u64> {
        Ok(self.read()?.time_slots.len() as u64)
    }
}

// ============================================================================
// Options and days
// ============================================================================

impl OptionsRepository for InMemoryStore {
    fn get_options(&self) -> StorageResult<Option<Options>> {
        Ok(self.read()?.options)
    }

    fn update(&self, changes: Options) -> StorageResult<bool> {
        let mut tables = self.write()?;
        let Some(options) = tables.options.as_mut() else {
            return Ok(false);
        };
        options.merge(&changes);
        Ok(true)
    }
}

impl DayRepository for InMemoryStore {
    fn get_days(&self) -> StorageResult<Vec<Day>> {
        Ok(self.read()?.days.clone())
    }
}
