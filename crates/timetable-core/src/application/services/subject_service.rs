//! Subject use cases.

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::application::{
    ApplicationError, ServiceResult, ValidationErrors,
    ports::{NameQuery, SubjectRepository},
    validators::SubjectValidator,
};
use crate::domain::{Audited, Subject};

use super::accept;

/// Create, update and query subjects.
pub struct SubjectService {
    repository: Box<dyn SubjectRepository>,
}

impl SubjectService {
    pub fn new(repository: Box<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip_all)]
    pub fn insert(&self, subject: Option<Subject>) -> ServiceResult<Subject> {
        let errors = SubjectValidator::validate(subject.as_ref());
        let mut subject = accept(subject, errors)?;

        subject.stamp_created(Utc::now());
        let inserted = self.repository.insert(subject)?;
        info!(id = ?inserted.id, "Subject inserted");
        Ok(inserted)
    }

    /// Merge the request into the stored subject.
    ///
    /// Name and colours are always overwritten; weekly hours and description
    /// only when given.
    #[instrument(skip_all, fields(id = ?subject.as_ref().and_then(|s| s.id)))]
    pub fn update(&self, subject: Option<Subject>) -> ServiceResult<Option<Subject>> {
        let errors = SubjectValidator::validate(subject.as_ref());
        let changes = accept(subject, errors)?;

        let stored = match changes.id {
            Some(id) => self.repository.find_by_id(id)?,
            None => None,
        };
        let Some(mut stored) = stored else {
            warn!("No stored subject to update");
            return Err(ApplicationError::Validation(ValidationErrors(vec![
                "La modification de la matière est impossible : l'identifiant n'est pas renseigné."
                    .to_owned(),
            ])));
        };

        stored.name = changes.name;
        stored.background_color = changes.background_color;
        stored.font_color = changes.font_color;
        if changes.weekly_hours.is_some() {
            stored.weekly_hours = changes.weekly_hours;
        }
        if changes.description.is_some() {
            stored.description = changes.description;
        }
        stored.stamp_modified(Utc::now());

        let updated = self.repository.update(stored)?;
        info!(found = updated.is_some(), "Subject updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<bool> {
        let deleted = self.repository.delete(id)?;
        info!(deleted, "Subject delete processed");
        Ok(deleted)
    }

    pub fn get(&self, id: i64) -> ServiceResult<Option<Subject>> {
        Ok(self.repository.find_by_id(id)?)
    }

    pub fn list(&self, query: &NameQuery) -> ServiceResult<Vec<Subject>> {
        Ok(self.repository.find_all(query)?)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::application::ports::MockSubjectRepository;

    fn service(repository: MockSubjectRepository) -> SubjectService {
        SubjectService::new(Box::new(repository))
    }

    fn stored_subject() -> Subject {
        Subject {
            id: Some(5),
            weekly_hours: Some("04:00".into()),
            description: Some("Algèbre et géométrie".into()),
            creation_date: Some(Utc.with_ymd_and_hms(2024, 9, 1, 8, 0, 0).unwrap()),
            ..Subject::new("Maths", "#FFFFFF", "#000000")
        }
    }

    #[test]
    fn invalid_subject_never_reaches_storage() {
        let mut repository = MockSubjectRepository::new();
        repository.expect_insert().never();

        let err = service(repository)
            .insert(Some(Subject::new("Maths", "#FFF", "#FFF")))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "La couleur du fond et de la police ne peuvent pas être la même"
        );
    }

    #[test]
    fn update_merges_into_stored_subject() {
        let mut repository = MockSubjectRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .returning(|_| Ok(Some(stored_subject())));
        repository.expect_update().returning(|subject| Ok(Some(subject)));

        let changes = Subject {
            id: Some(5),
            ..Subject::new("Mathématiques", "#EEEEEE", "#111111")
        };
        let updated = service(repository).update(Some(changes)).unwrap().unwrap();

        assert_eq!(updated.name.as_deref(), Some("Mathématiques"));
        assert_eq!(updated.background_color.as_deref(), Some("#EEEEEE"));
        assert_eq!(updated.weekly_hours.as_deref(), Some("04:00"));
        assert_eq!(updated.description.as_deref(), Some("Algèbre et géométrie"));
        assert_eq!(updated.creation_date, stored_subject().creation_date);
        assert!(updated.modification_date > updated.creation_date);
    }

    #[test]
    fn update_overwrites_optional_fields_when_given() {
        let mut repository = MockSubjectRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored_subject())));
        repository.expect_update().returning(|subject| Ok(Some(subject)));

        let changes = Subject {
            id: Some(5),
            weekly_hours: Some("03:30".into()),
            ..Subject::new("Maths", "#FFFFFF", "#000000")
        };
        let updated = service(repository).update(Some(changes)).unwrap().unwrap();
        assert_eq!(updated.weekly_hours.as_deref(), Some("03:30"));
    }

    #[test]
    fn update_without_stored_subject() {
        let mut repository = MockSubjectRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_update().never();

        let changes = Subject {
            id: Some(5),
            ..Subject::new("Maths", "#FFFFFF", "#000000")
        };
        let err = service(repository).update(Some(changes)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "La modification de la matière est impossible : l'identifiant n'est pas renseigné."
        );
    }

    #[test]
    fn update_without_id_skips_lookup() {
        let mut repository = MockSubjectRepository::new();
        repository.expect_find_by_id().never();

        let err = service(repository)
            .update(Some(Subject::new("Maths", "#FFFFFF", "#000000")))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
    }
}
