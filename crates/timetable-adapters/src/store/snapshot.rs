//! JSON snapshot of the whole store.

use std::{fs, path::Path};

use timetable_core::application::{StorageContext, StorageResult};
use tracing::{debug, info};

use super::{InMemoryStore, Tables};

impl InMemoryStore {
    /// Load a snapshot, or start from [`InMemoryStore::with_defaults`] when
    /// the file does not exist yet.
    pub fn open(path: &Path) -> StorageResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No data file yet, starting with defaults");
            return Ok(Self::with_defaults());
        }
        let raw = fs::read_to_string(path)
            .storage_context(format!("Impossible de lire le fichier {}", path.display()))?;
        let tables: Tables = serde_json::from_str(&raw).storage_context(format!(
            "Le fichier {} n'est pas un instantané valide",
            path.display()
        ))?;
        debug!(path = %path.display(), next_id = tables.next_id, "Data file loaded");
        Ok(Self::from_tables(tables))
    }

    /// Write the current state as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).storage_context(format!(
                "Impossible de créer le dossier {}",
                parent.display()
            ))?;
        }
        let json = serde_json::to_string_pretty(&*self.read()?)
            .storage_context("Impossible de sérialiser les données")?;
        fs::write(path, json)
            .storage_context(format!("Impossible d'écrire le fichier {}", path.display()))?;
        debug!(path = %path.display(), "Data file saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use timetable_core::application::ports::{ClassRepository, NameQuery};
    use timetable_core::domain::ClassEntity;

    use super::*;

    #[test]
    fn missing_file_starts_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryStore::open(&dir.path().join("data.json")).unwrap();
        assert_eq!(store.tables().unwrap().days.len(), 6);
    }

    #[test]
    fn save_then_open_restores_rows_and_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.json");

        let store = InMemoryStore::with_defaults();
        ClassRepository::insert(&store, ClassEntity::named("6ème A")).unwrap();
        store.save(&path).unwrap();

        let reopened = InMemoryStore::open(&path).unwrap();
        assert_eq!(reopened.tables().unwrap(), store.tables().unwrap());

        let next = ClassRepository::insert(&reopened, ClassEntity::named("6ème B")).unwrap();
        assert_eq!(next.id, Some(2));
        assert_eq!(ClassRepository::count(&reopened, &NameQuery::named("6ème")).unwrap(), 2);
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "not json").unwrap();

        let err = InMemoryStore::open(&path).unwrap_err();
        assert!(err.message.contains("n'est pas un instantané valide"));
    }
}
