use crate::application::{StorageResult, ports::ClassRepository};
use crate::domain::ClassEntity;

use super::is_blank;

/// Rules for creating and updating a class.
pub struct ClassValidator;

impl ClassValidator {
    /// The name uniqueness lookup always runs, even when the name is missing.
    pub fn validate(
        class: Option<&ClassEntity>,
        is_update: bool,
        repository: &dyn ClassRepository,
    ) -> StorageResult<Vec<String>> {
        let Some(class) = class else {
            let message = if is_update {
                "La classe à mettre à jour est obligatoire"
            } else {
                "La classe à insérer est obligatoire"
            };
            return Ok(vec![message.to_owned()]);
        };

        let mut errors = Vec::new();
        if is_update && class.id.is_none() {
            errors.push("L'identifiant de la classe à mettre à jour est obligatoire".to_owned());
        }
        if is_blank(class.name.as_deref()) {
            errors.push("Le nom d'une classe est obligatoire".to_owned());
        }
        let name = class.name.as_deref().unwrap_or_default();
        if repository.exists_by_name(name)? {
            errors.push(format!(
                "Une classe avec le nom {name} existe déjà dans la base de données"
            ));
        }
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{StorageError, ports::MockClassRepository};

    fn repository_returning(exists: bool) -> MockClassRepository {
        let mut repository = MockClassRepository::new();
        repository
            .expect_exists_by_name()
            .returning(move |_| Ok(exists));
        repository
    }

    #[test]
    fn valid_class_has_no_errors() {
        let class = ClassEntity::named("6ème A");
        let errors = ClassValidator::validate(Some(&class), false, &repository_returning(false));
        assert!(errors.unwrap().is_empty());
    }

    #[test]
    fn missing_class_wording_depends_on_operation() {
        let repository = MockClassRepository::new();
        assert_eq!(
            ClassValidator::validate(None, false, &repository).unwrap(),
            vec!["La classe à insérer est obligatoire"]
        );
        assert_eq!(
            ClassValidator::validate(None, true, &repository).unwrap(),
            vec!["La classe à mettre à jour est obligatoire"]
        );
    }

    #[test]
    fn empty_name_is_rejected_and_lookup_still_runs() {
        let mut repository = MockClassRepository::new();
        repository
            .expect_exists_by_name()
            .withf(|name| name.is_empty())
            .times(1)
            .returning(|_| Ok(false));

        let class = ClassEntity::named("");
        assert_eq!(
            ClassValidator::validate(Some(&class), false, &repository).unwrap(),
            vec!["Le nom d'une classe est obligatoire"]
        );
    }

    #[test]
    fn update_without_id_accumulates_with_duplicate_name() {
        let class = ClassEntity::named("6ème A");
        assert_eq!(
            ClassValidator::validate(Some(&class), true, &repository_returning(true)).unwrap(),
            vec![
                "L'identifiant de la classe à mettre à jour est obligatoire",
                "Une classe avec le nom 6ème A existe déjà dans la base de données",
            ]
        );
    }

    #[test]
    fn storage_failure_is_not_a_validation_message() {
        let mut repository = MockClassRepository::new();
        repository.expect_exists_by_name().returning(|name| {
            Err(StorageError::new(format!(
                "Impossible de rechercher une classe ayant le nom {name}"
            )))
        });

        let class = ClassEntity::named("6ème A");
        let err = ClassValidator::validate(Some(&class), false, &repository).unwrap_err();
        assert_eq!(
            err.message,
            "Impossible de rechercher une classe ayant le nom 6ème A"
        );
    }
}
