//! Thread-safe in-memory storage backing every repository port.
//!
//! One [`InMemoryStore`] holds all tables behind a single `RwLock`, so a
//! clone handed to each service sees the same data. The whole state can be
//! written to and read back from a JSON snapshot file.

mod repositories;
mod snapshot;

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use timetable_core::{
    application::{StorageError, StorageResult},
    domain::{
        ClassEntity, Day, Options, Planning, Room, Slot, Subject, Teacher, TimeSlot, Weekday,
    },
};

/// Default planning options seeded into a fresh store.
pub const DEFAULT_SPLIT: u32 = 60;

/// Every table of the timetable, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tables {
    pub classes: BTreeMap<i64, ClassEntity>,
    pub teachers: BTreeMap<i64, Teacher>,
    pub rooms: BTreeMap<i64, Room>,
    pub subjects: BTreeMap<i64, Subject>,
    pub slots: BTreeMap<i64, Slot>,
    pub plannings: BTreeMap<i64, Planning>,
    pub time_slots: BTreeMap<i64, TimeSlot>,
    pub options: Option<Options>,
    pub days: Vec<Day>,
    /// Last id handed out; ids are unique across tables.
    pub next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Thread-safe in-memory store.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new empty store: no days, no options.
    pub fn new() -> Self {
        Self::from_tables(Tables::default())
    }

    /// Create a store seeded with the six school days and default options
    /// (hourly split, 08:00 to 18:00).
    pub fn with_defaults() -> Self {
        let tables = Tables {
            days: Weekday::ALL.iter().map(|day| day.to_day()).collect(),
            options: NaiveTime::from_hms_opt(8, 0, 0)
                .zip(NaiveTime::from_hms_opt(18, 0, 0))
                .map(|(start, end)| Options::new(DEFAULT_SPLIT, start, end)),
            ..Tables::default()
        };
        Self::from_tables(tables)
    }

    pub fn from_tables(tables: Tables) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tables)),
        }
    }

    /// Copy of the current state.
    pub fn tables(&self) -> StorageResult<Tables> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Tables>> {
        self.inner
            .read()
            .map_err(|_| StorageError::new("Le stockage est verrouillé suite à une erreur"))
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Tables>> {
        self.inner
            .write()
            .map_err(|_| StorageError::new("Le stockage est verrouillé suite à une erreur"))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
