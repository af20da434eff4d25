//! School resources: classes, teachers, rooms and subjects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A class (group of pupils). The name is unique across all classes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassEntity {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl ClassEntity {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A teacher. No two teachers share the same (last name, first name) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Teacher {
    pub id: Option<i64>,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Teacher {
    pub fn new(last_name: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            last_name: Some(last_name.into()),
            first_name: Some(first_name.into()),
            ..Self::default()
        }
    }
}

/// A room. The name is unique across all rooms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Room {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Room {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// A taught subject with its display colours.
///
/// `weekly_hours` is free text, conventionally `HH:MM`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subject {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub weekly_hours: Option<String>,
    pub description: Option<String>,
    pub creation_date: Option<DateTime<Utc>>,
    pub modification_date: Option<DateTime<Utc>>,
}

impl Subject {
    pub fn new(
        name: impl Into<String>,
        background_color: impl Into<String>,
        font_color: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            background_color: Some(background_color.into()),
            font_color: Some(font_color.into()),
            ..Self::default()
        }
    }
}
