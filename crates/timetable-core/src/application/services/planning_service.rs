//! Planning use cases, including the weekly hours audit.

use std::collections::BTreeMap;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::{
    ServiceResult,
    ports::{PlanningFilter, PlanningRepository},
    validators::PlanningValidator,
};
use crate::domain::{Audited, Planning, Subject, time};

use super::accept;

/// Create, update and query plannings.
pub struct PlanningService {
    repository: Box<dyn PlanningRepository>,
}

impl PlanningService {
    pub fn new(repository: Box<dyn PlanningRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub fn insert(&self, planning: Option<Planning>) -> ServiceResult<Planning> {
        let errors = PlanningValidator::validate(planning.as_ref(), false);
        let mut planning = accept(planning, errors)?;

        planning.stamp_created(Utc::now());
        let inserted = self.repository.insert(planning)?;
        info!(id = ?inserted.id, "Planning inserted");
        Ok(inserted)
    }

    #[instrument(skip_all, fields(id = ?planning.as_ref().and_then(|p| p.id)))]
    pub fn update(&self, planning: Option<Planning>) -> ServiceResult<Option<Planning>> {
        let errors = PlanningValidator::validate(planning.as_ref(), true);
        let mut planning = accept(planning, errors)?;

        planning.stamp_modified(Utc::now());
        let updated = self.repository.update(planning)?;
        info!(found = updated.is_some(), "Planning updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Planning delete processed");
        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Option<Planning>> {
        Ok(self.repository.find_by_id(id)?)
    }

    pub fn list(&self, filter: &PlanningFilter) -> ServiceResult<Vec<Planning>> {
        Ok(self.repository.find_all(filter)?)
    }

    /// Subjects whose scheduled minutes miss their weekly hours.
    ///
    /// `Ok(None)` when no planning has the given id.
    #[instrument(skip(self))]
    pub fn weekly_hours_warnings(&self, id: i64) -> ServiceResult<Option<Vec<String>>> {
        let Some(planning) = self.repository.find_by_id(id)? else {
            return Ok(None);
        };
        let warnings = weekly_hours_warnings(&planning);
        info!(count = warnings.len(), "Weekly hours checked");
        Ok(Some(warnings))
    }
}

/// One warning per subject (by id order) whose weekly hours are set and
/// differ from the minutes its slots occupy in `planning`.
pub fn weekly_hours_warnings(planning: &Planning) -> Vec<String> {
    let slots = planning.slots.as_deref().unwrap_or_default();

    let mut scheduled: BTreeMap<i64, (&Subject, i64)> = BTreeMap::new();
    for slot in slots {
        let Some(subject) = slot.subject.as_ref() else {
            continue;
        };
        let Some(id) = subject.id else {
            continue;
        };
        let minutes = slot
            .time_slot
            .as_ref()
            .and_then(|ts| ts.duration_minutes())
            .unwrap_or(0);
        scheduled.entry(id).or_insert((subject, 0)).1 += minutes;
    }

    let mut warnings = Vec::new();
    for (subject, minutes) in scheduled.into_values() {
        let Some(weekly_hours) = subject.weekly_hours.as_deref().filter(|h| !h.is_empty()) else {
            continue;
        };
        let expected = match time::hhmm_to_minutes(weekly_hours) {
            Ok(expected) => expected,
            Err(e) => {
                warn!(subject = ?subject.id, error = %e, "Unreadable weekly hours skipped");
                continue;
            }
        };
        if expected != minutes {
            warnings.push(format!(
                "La matière {} ne respecte pas son volume horaire hebdomadaire de {}",
                subject.name.as_deref().unwrap_or_default(),
                weekly_hours.replace(':', "H")
            ));
        }
    }
    warnings
}
