//! Global planning options (singleton row).

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::domain::time;

/// Planning split and day boundaries.
///
/// Used both as the stored singleton and as a partial update, where an
/// absent field means "leave unchanged".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub split_planning: Option<u32>,
    #[serde(with = "time::hhmm")]
    pub start_hour_planning: Option<NaiveTime>,
    #[serde(with = "time::hhmm")]
    pub end_hour_planning: Option<NaiveTime>,
}

impl Options {
    pub fn new(split: u32, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            split_planning: Some(split),
            start_hour_planning: Some(start),
            end_hour_planning: Some(end),
        }
    }

    /// `true` when no field is set (a no-op update).
    pub fn is_empty(&self) -> bool {
        self.split_planning.is_none()
            && self.start_hour_planning.is_none()
            && self.end_hour_planning.is_none()
    }

    /// Overwrite the fields that are set in `changes`.
    pub fn merge(&mut self, changes: &Options) {
        if let Some(split) = changes.split_planning {
            self.split_planning = Some(split);
        }
        if let Some(start) = changes.start_hour_planning {
            self.start_hour_planning = Some(start);
        }
        if let Some(end) = changes.end_hour_planning {
            self.end_hour_planning = Some(end);
        }
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hour = |t: Option<NaiveTime>| {
            t.map(|t| t.format("%H:%M").to_string())
                .unwrap_or_else(|| "unset".into())
        };
        let split = self
            .split_planning
            .map(|s| format!("{s} min"))
            .unwrap_or_else(|| "unset".into());
        write!(
            f,
            "split {}, from {} to {}",
            split,
            hour(self.start_hour_planning),
            hour(self.end_hour_planning)
        )
    }
}
