//! Slot use cases.

use chrono::Utc;
use tracing::{info, instrument};

use crate::application::{
    ServiceResult,
    ports::{SlotFilter, SlotRepository},
    validators::SlotValidator,
};
use crate::domain::{Audited, Slot};

use super::accept;

/// Create, update and query slots.
pub struct SlotService {
    repository: Box<dyn SlotRepository>,
}

impl SlotService {
    pub fn new(repository: Box<dyn SlotRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub fn insert(&self, slot: Option<Slot>) -> ServiceResult<Slot> {
        let errors = SlotValidator::validate(slot.as_ref(), false, self.repository.as_ref())?;
        let mut slot = accept(slot, errors)?;

        slot.stamp_created(Utc::now());
        let inserted = self.repository.insert(slot)?;
        info!(id = ?inserted.id, "Slot inserted");
        Ok(inserted)
    }

    #[instrument(skip_all, fields(id = ?slot.as_ref().and_then(|s| s.id)))]
    pub fn update(&self, slot: Option<Slot>) -> ServiceResult<Option<Slot>> {
        let errors = SlotValidator::validate(slot.as_ref(), true, self.repository.as_ref())?;
        let mut slot = accept(slot, errors)?;

        slot.stamp_modified(Utc::now());
        let updated = self.repository.update(slot)?;
        info!(found = updated.is_some(), "Slot updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Slot delete processed");
        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Option<Slot>> {
        Ok(self.repository.find_by_id(id)?)
    }

    pub fn list(&self, filter: &SlotFilter) -> ServiceResult<Vec<Slot>> {
        Ok(self.repository.find_all(filter)?)
    }

    pub fn count(&self, filter: &SlotFilter) -> ServiceResult<u64> {
        Ok(self.repository.count(filter)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::application::{ApplicationError, ports::MockSlotRepository};
    use crate::domain::{Subject, TimeSlot, Weekday};

    fn slot() -> Slot {
        let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
        Slot {
            background_color: Some("#FF0000".into()),
            font_color: Some("#FFFFFF".into()),
            subject: Some(Subject {
                id: Some(1),
                ..Subject::default()
            }),
            time_slot: Some(TimeSlot {
                id: Some(2),
                ..TimeSlot::new(t(8), t(9))
            }),
            day: Some(Weekday::Tuesday.to_day()),
            ..Slot::default()
        }
    }

    #[test]
    fn insert_valid_slot() {
        let mut repository = MockSlotRepository::new();
        repository
            .expect_is_exist_by_color_background()
            .returning(|_| Ok(false));
        repository.expect_count_by_day().returning(|_, _| Ok(0));
        repository.expect_insert().returning(|mut slot| {
            slot.id = Some(30);
            Ok(slot)
        });

        let inserted = SlotService::new(Box::new(repository))
            .insert(Some(slot()))
            .unwrap();
        assert_eq!(inserted.id, Some(30));
        assert_eq!(inserted.creation_date, inserted.modification_date);
    }

    #[test]
    fn update_of_existing_slot_hits_its_own_colour() {
        let mut repository = MockSlotRepository::new();
        repository
            .expect_is_exist_by_color_background()
            .returning(|_| Ok(true));
        repository.expect_count_by_day().returning(|_, _| Ok(1));
        repository.expect_update().never();

        let existing = Slot {
            id: Some(30),
            ..slot()
        };
        let err = SlotService::new(Box::new(repository))
            .update(Some(existing))
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Validation(crate::application::ValidationErrors(vec![
                "Il existe déjà un slot avec ce fond de couleur".into()
            ]))
        );
    }

    #[test]
    fn count_forwards_filter() {
        let mut repository = MockSlotRepository::new();
        repository
            .expect_count()
            .withf(|filter| filter.room_name.as_deref() == Some("B240"))
            .returning(|_| Ok(4));

        let filter = SlotFilter {
            room_name: Some("B240".into()),
            ..SlotFilter::default()
        };
        assert_eq!(
            SlotService::new(Box::new(repository)).count(&filter).unwrap(),
            4
        );
    }
}
