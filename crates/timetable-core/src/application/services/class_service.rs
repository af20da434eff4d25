//! Class use cases.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::{
    ServiceResult, StorageError,
    ports::{ClassRepository, NameQuery},
    validators::ClassValidator,
};
use crate::domain::{Audited, ClassEntity};

use super::accept;

/// Create, update and query classes.
pub struct ClassService {
    repository: Box<dyn ClassRepository>,
}

impl ClassService {
    pub fn new(repository: Box<dyn ClassRepository>) -> Self {
        Self { repository }
    }

    /// Validate and store a new class. `None` stands for a missing request body.
    #[instrument(skip_all)]
    pub fn insert(&self, class: Option<ClassEntity>) -> ServiceResult<ClassEntity> {
        let errors = ClassValidator::validate(class.as_ref(), false, self.repository.as_ref())?;
        let mut class = accept(class, errors)?;

        class.stamp_created(Utc::now());
        let inserted = self.repository.insert(class)?;
        info!(id = ?inserted.id, "Class inserted");
        Ok(inserted)
    }

    /// `Ok(None)` when no class has the given id.
    #[instrument(skip_all, fields(id = ?class.as_ref().and_then(|c| c.id)))]
    pub fn update(&self, class: Option<ClassEntity>) -> ServiceResult<Option<ClassEntity>> {
        let errors = ClassValidator::validate(class.as_ref(), true, self.repository.as_ref())?;
        let mut class = accept(class, errors)?;

        class.stamp_modified(Utc::now());
        let updated = self.repository.update(class)?;
        info!(found = updated.is_some(), "Class updated");
        Ok(updated)
    }

    /// Refused while a planning still references the class.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        if self.repository.is_used_by_plannings(id)? {
            warn!("Class is still used by a planning");
            return Err(StorageError::new(
                "Impossible de supprimer la classe : La classe que vous tentez de supprimer est peut-être utilisée par un ou plusieurs planning(s)",
            )
            .into());
        }
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Class delete processed");
        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Option<ClassEntity>> {
        Ok(self.repository.find_by_id(id)?)
    }

    pub fn list(&self, query: &NameQuery) -> ServiceResult<Vec<ClassEntity>> {
        Ok(self.repository.find_all(query)?)
    }

    pub fn count(&self, query: &NameQuery) -> ServiceResult<u64> {
        Ok(self.repository.count(query)?)
    }
}
