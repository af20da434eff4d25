use crate::application::{StorageResult, ports::TeacherRepository};
use crate::domain::Teacher;

use super::is_blank;

/// Rules for creating and updating a teacher.
pub struct TeacherValidator;

impl TeacherValidator {
    /// Order: id, last name, (last, first) uniqueness, first name.
    pub fn validate(
        teacher: Option<&Teacher>,
        is_update: bool,
        repository: &dyn TeacherRepository,
    ) -> StorageResult<Vec<String>> {
        let Some(teacher) = teacher else {
            let message = if is_update {
                "L'enseignant à mettre à jour est obligatoire"
            } else {
                "L'enseignant à insérer est obligatoire"
            };
            return Ok(vec![message.to_owned()]);
        };

        let mut errors = Vec::new();
        if is_update && teacher.id.is_none() {
            errors.push("L'identifiant de l'enseignant à mettre à jour est obligatoire".to_owned());
        }
        if is_blank(teacher.last_name.as_deref()) {
            errors.push("Le nom de l'enseignant est obligatoire".to_owned());
        }
        if repository.is_exist_by_name(teacher)? {
            errors.push(format!(
                "L'enseignant : {} {} existe déjà dans la base de données.",
                teacher.last_name.as_deref().unwrap_or_default(),
                teacher.first_name.as_deref().unwrap_or_default(),
            ));
        }
        if is_blank(teacher.first_name.as_deref()) {
            errors.push("Le prénom de l'enseignant est obligatoire".to_owned());
        }
        Ok(errors)
    }
}
