use crate::application::{StorageResult, ports::RoomRepository};
use crate::domain::Room;

use super::is_blank;

/// Rules for creating and updating a room.
pub struct RoomValidator;

impl RoomValidator {
    /// The uniqueness lookup only runs when a name is present.
    pub fn validate(
        room: Option<&Room>,
        is_update: bool,
        repository: &dyn RoomRepository,
    ) -> StorageResult<Vec<String>> {
        let Some(room) = room else {
            let message = if is_update {
                "La salle à mettre à jour est obligatoire"
            } else {
                "La salle à insérer est obligatoire"
            };
            return Ok(vec![message.to_owned()]);
        };

        let mut errors = Vec::new();
        if is_update && room.id.is_none() {
            errors.push("L'identifiant de la salle est obligatoire".to_owned());
        }
        if is_blank(room.name.as_deref()) {
            errors.push("Le nom d'une salle est obligatoire".to_owned());
        }
        if let Some(name) = room.name.as_deref() {
            if repository.is_exist_by_name(name)? {
                errors.push("Le nom de la salle existe déjà en base de données".to_owned());
            }
        }
        Ok(errors)
    }
}
