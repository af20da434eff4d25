//! Time slot use cases.

use tracing::{info, instrument};

use crate::application::{
    ServiceResult,
    ports::{OptionsRepository, PageRequest, TimeSlotRepository},
    validators::TimeSlotValidator,
};
use crate::domain::TimeSlot;

use super::accept;

/// Create and query time slots. Time slots carry no audit dates.
pub struct TimeSlotService {
    repository: Box<dyn TimeSlotRepository>,
    options: Box<dyn OptionsRepository>,
}

impl TimeSlotService {
    pub fn new(repository: Box<dyn TimeSlotRepository>, options: Box<dyn OptionsRepository>) -> Self {
        Self {
            repository,
            options,
        }
    }

    #[instrument(skip_all, fields(time_slot = ?time_slot.as_ref().map(ToString::to_string)))]
    pub fn insert(&self, time_slot: Option<TimeSlot>) -> ServiceResult<TimeSlot> {
        let errors = TimeSlotValidator::validate(
            time_slot.as_ref(),
            self.repository.as_ref(),
            self.options.as_ref(),
        )?;
        let time_slot = accept(time_slot, errors)?;

        let inserted = self.repository.insert(time_slot)?;
        info!(id = ?inserted.id, "Time slot inserted");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Time slot delete processed");
        Ok(deleted)
    }

    pub fn list(&self, page: &PageRequest) -> ServiceResult<Vec<TimeSlot>> {
        Ok(self.repository.find_all(page)?)
    }

    pub fn count(&self) -> ServiceResult<u64> {
        Ok(self.repository.count()?)
    }
}
