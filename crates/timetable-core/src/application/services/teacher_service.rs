//! Teacher use cases.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::{
    ServiceResult, StorageError,
    ports::{NameQuery, TeacherRepository},
    validators::TeacherValidator,
};
use crate::domain::{Audited, Teacher};

use super::accept;

/// Create, update and query teachers.
pub struct TeacherService {
    repository: Box<dyn TeacherRepository>,
}

impl TeacherService {
    pub fn new(repository: Box<dyn TeacherRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub fn insert(&self, teacher: Option<Teacher>) -> ServiceResult<Teacher> {
        let errors =
            TeacherValidator::validate(teacher.as_ref(), false, self.repository.as_ref())?;
        let mut teacher = accept(teacher, errors)?;

        teacher.stamp_created(Utc::now());
        let inserted = self.repository.insert(teacher)?;
        info!(id = ?inserted.id, "Teacher inserted");
        Ok(inserted)
    }

    #[instrument(skip_all, fields(id = ?teacher.as_ref().and_then(|t| t.id)))]
    pub fn update(&self, teacher: Option<Teacher>) -> ServiceResult<Option<Teacher>> {
        let errors = TeacherValidator::validate(teacher.as_ref(), true, self.repository.as_ref())?;
        let mut teacher = accept(teacher, errors)?;

        teacher.stamp_modified(Utc::now());
        let updated = self.repository.update(teacher)?;
        info!(found = updated.is_some(), "Teacher updated");
        Ok(updated)
    }

    /// Refused while a slot still references the teacher.
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        if self.repository.is_used_by_slots(id)? {
            warn!("Teacher is still used by a slot");
            return Err(StorageError::new(
                "Impossible de supprimer l'enseignant : L'enseignant que vous tentez de supprimer est peut-être utilisé par un ou plusieurs slot(s)",
            )
            .into());
        }
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Teacher delete processed");
        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Option<Teacher>> {
        Ok(self.repository.find_by_id(id)?)
    }

    /// The name filter matches the last or the first name.
    pub fn list(&self, query: &NameQuery) -> ServiceResult<Vec<Teacher>> {
        Ok(self.repository.find_all(query)?)
    }

    pub fn count(&self, query: &NameQuery) -> ServiceResult<u64> {
        Ok(self.repository.count(query)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockTeacherRepository};

    fn service(repository: MockTeacherRepository) -> TeacherService {
        TeacherService::new(Box::new(repository))
    }

    #[test]
    fn insert_valid_teacher() {
        let mut repository = MockTeacherRepository::new();
        repository.expect_is_exist_by_name().returning(|_| Ok(false));
        repository.expect_insert().returning(|mut teacher| {
            teacher.id = Some(12);
            Ok(teacher)
        });

        let inserted = service(repository)
            .insert(Some(Teacher::new("Dupont", "Marie")))
            .unwrap();
        assert_eq!(inserted.id, Some(12));
        assert_eq!(inserted.creation_date, inserted.modification_date);
    }

    #[test]
    fn duplicate_teacher_is_rejected_with_both_names() {
        let mut repository = MockTeacherRepository::new();
        repository
            .expect_is_exist_by_name()
            .withf(|t| t.last_name.as_deref() == Some("Dupont"))
            .returning(|_| Ok(true));
        repository.expect_insert().never();

        let err = service(repository)
            .insert(Some(Teacher::new("Dupont", "Marie")))
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::Validation(crate::application::ValidationErrors(vec![
                "L'enseignant : Dupont Marie existe déjà dans la base de données.".into()
            ]))
        );
    }

    #[test]
    fn update_refreshes_modification_date_only() {
        let mut repository = MockTeacherRepository::new();
        repository.expect_is_exist_by_name().returning(|_| Ok(false));
        repository.expect_update().returning(|teacher| Ok(Some(teacher)));

        let teacher = Teacher {
            id: Some(2),
            ..Teacher::new("Martin", "Paul")
        };
        let updated = service(repository).update(Some(teacher)).unwrap().unwrap();
        assert!(updated.creation_date.is_none());
        assert!(updated.modification_date.is_some());
    }

    #[test]
    fn delete_refused_while_used() {
        let mut repository = MockTeacherRepository::new();
        repository.expect_is_used_by_slots().returning(|_| Ok(true));
        repository.expect_delete().never();

        let err = service(repository).delete(2).unwrap_err();
        assert!(err.to_string().starts_with("Impossible de supprimer l'enseignant"));
    }
}
