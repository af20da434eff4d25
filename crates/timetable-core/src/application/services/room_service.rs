//! Room use cases.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::{
    ServiceResult, StorageError,
    ports::{NameQuery, RoomRepository},
    validators::RoomValidator,
};
use crate::domain::{Audited, Room};

use super::accept;

/// Create, update and query rooms.
pub struct RoomService {
    repository: Box<dyn RoomRepository>,
}

impl RoomService {
    pub fn new(repository: Box<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub fn insert(&self, room: Option<Room>) -> ServiceResult<Room> {
        let errors = RoomValidator::validate(room.as_ref(), false, self.repository.as_ref())?;
        let mut room = accept(room, errors)?;

        room.stamp_created(Utc::now());
        let inserted = self.repository.insert(room)?;
        info!(id = ?inserted.id, "Room inserted");
        Ok(inserted)
    }

    #[instrument(skip_all, fields(id = ?room.as_ref().and_then(|r| r.id)))]
    pub fn update(&self, room: Option<Room>) -> ServiceResult<Option<Room>> {
        let errors = RoomValidator::validate(room.as_ref(), true, self.repository.as_ref())?;
        let mut room = accept(room, errors)?;

        room.stamp_modified(Utc::now());
        let updated = self.repository.update(room)?;
        info!(found = updated.is_some(), "Room updated");
        Ok(updated)
    }

    /// Refused while a slot still references the room.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        if self.repository.is_used_by_slots(id)? {
            warn!("Room is still used by a slot");
            return Err(StorageError::new(
                "Impossible de supprimer la salle : La salle que vous tentez de supprimer est peut-être utilisée par un ou plusieurs slot(s)",
            )
            .into());
        }
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Room delete processed");
        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Option<Room>> {
        Ok(self.repository.find_by_id(id)?)
    }

    pub fn list(&self, query: &NameQuery) -> ServiceResult<Vec<Room>> {
        Ok(self.repository.find_all(query)?)
    }

    pub fn count(&self, query: &NameQuery) -> ServiceResult<u64> {
        Ok(self.repository.count(query)?)
    }
}
