//! Scheduling entities: days, time slots, slots and plannings.

use std::fmt;

use chrono::{DateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    ClassEntity, DomainError, Room, Subject, Teacher,
    time::{self, format_time_unit},
};

// ============================================================================
// Day
// ============================================================================

/// Reference data row for a school day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Day {
    pub id: Option<i64>,
    pub name: Option<String>,
}

/// The six school days, Monday (1) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    pub fn id(self) -> i64 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
        }
    }

    /// Display name as stored in the day table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "Lundi",
            Self::Tuesday => "Mardi",
            Self::Wednesday => "Mercredi",
            Self::Thursday => "Jeudi",
            Self::Friday => "Vendredi",
            Self::Saturday => "Samedi",
        }
    }

    pub fn from_id(id: i64) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|day| day.id() == id)
            .ok_or(DomainError::UnknownDay { id })
    }

    pub fn to_day(self) -> Day {
        Day {
            id: Some(self.id()),
            name: Some(self.name().to_owned()),
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TimeSlot
// ============================================================================

/// A reusable `[start, end)` time-of-day interval shared across slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimeSlot {
    pub id: Option<i64>,
    #[serde(with = "time::hhmm")]
    pub start: Option<NaiveTime>,
    #[serde(with = "time::hhmm")]
    pub end: Option<NaiveTime>,
}

impl TimeSlot {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            id: None,
            start: Some(start),
            end: Some(end),
        }
    }

    /// Same interval, ignoring ids.
    pub fn same_interval(&self, other: &TimeSlot) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Length in minutes, when both bounds are known.
    pub fn duration_minutes(&self) -> Option<i64> {
        Some(time::minutes_between(self.start?, self.end?))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |value: Option<NaiveTime>| match value {
            Some(t) => format!("{}:{}", format_time_unit(t.hour()), format_time_unit(t.minute())),
            None => "--:--".to_owned(),
        };
        write!(f, "{}-{}", bound(self.start), bound(self.end))
    }
}

// ============================================================================
// Slot
// ============================================================================

/// One timetabled occurrence of a subject at a time slot on a day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Slot {
    pub id: Option<i64>,
    pub comment: Option<String>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub time_slot: Option<TimeSlot>,
    pub subject: Option<Subject>,
    pub teacher: Option<Teacher>,
    pub room: Option<Room>,
    pub day: Option<Day>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Slot {
    pub fn day_id(&self) -> Option<i64> {
        self.day.as_ref().and_then(|d| d.id)
    }
}

// ============================================================================
// Planning
// ============================================================================

/// A named timetable for one class, composed of slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Planning {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub class: Option<ClassEntity>,
    pub slots: Option<Vec<Slot>>,
    pub wednesday_used: bool,
    pub saturday_used: bool,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Default for Planning {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            class: None,
            slots: None,
            wednesday_used: true,
            saturday_used: false,
            creation_date: None,
            modification_date: None,
        }
    }
}
