//! Command handlers.
//!
//! Every handler opens a [`Session`] on the data file, calls one service and
//! writes the outcome through the [`OutputManager`]. The data file is only
//! rewritten after a change was accepted.

use std::fs;
use std::io::Read as _;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use timetable_adapters::InMemoryStore;
use timetable_core::application::{
    ClassService, PlanningService, RoomService, ServiceResult, SlotService, SubjectService,
    TeacherService,
};
use timetable_core::domain::{ClassEntity, Planning, Room, Slot, Subject, Teacher};
use tracing::{debug, info, instrument};

use crate::{
    cli::{CrudAction, GlobalArgs, PageArgs, PayloadArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod options;
pub mod schedule;
pub mod school;

// ── session ───────────────────────────────────────────────────────────────────

/// The store loaded from the data file for the duration of one command.
pub struct Session {
    store: InMemoryStore,
    data_file: PathBuf,
}

impl Session {
    pub fn open(global: &GlobalArgs, config: &AppConfig) -> CliResult<Self> {
        let data_file = config.data_file(global.data.as_deref()).to_path_buf();
        debug!(path = %data_file.display(), "Opening data file");
        let store = InMemoryStore::open(&data_file)?;
        Ok(Self { store, data_file })
    }

    /// A boxed handle on the shared store, for one service.
    pub fn port(&self) -> Box<InMemoryStore> {
        Box::new(self.store.clone())
    }

    /// Persist the store.
    pub fn save(&self) -> CliResult<()> {
        self.store.save(&self.data_file)?;
        info!(path = %self.data_file.display(), "Data file written");
        Ok(())
    }
}

// ── payloads ──────────────────────────────────────────────────────────────────

/// Read a JSON payload. A literal `null` document is a missing body.
pub fn read_payload<T: DeserializeOwned>(args: &PayloadArgs) -> CliResult<Option<T>> {
    let raw = if args.file == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .with_cli_context(|| "Cannot read payload from standard input")?;
        raw
    } else {
        fs::read_to_string(&args.file)
            .with_cli_context(|| format!("Cannot read payload {}", args.file.display()))?
    };
    serde_json::from_str(&raw).with_cli_context(|| args.file.display().to_string())
}

impl From<PageArgs> for timetable_core::application::ports::PageRequest {
    fn from(args: PageArgs) -> Self {
        Self::new(args.page, args.per_page)
    }
}

// ── shared entity actions ─────────────────────────────────────────────────────

/// Driving port: what the CLI needs from a service to run the shared
/// insert/update/delete/get actions.
pub trait EntityService {
    type Entity: Serialize + DeserializeOwned;

    /// Singular name used in messages and suggestions.
    const NAME: &'static str;

    fn insert(&self, entity: Option<Self::Entity>) -> ServiceResult<Self::Entity>;
    fn update(&self, entity: Option<Self::Entity>) -> ServiceResult<Option<Self::Entity>>;
    fn delete(&self, id: i64) -> ServiceResult<bool>;
    fn get(&self, id: i64) -> ServiceResult<Option<Self::Entity>>;
    fn id_of(entity: &Self::Entity) -> Option<i64>;
}

macro_rules! entity_service {
    ($service:ty, $entity:ty, $name:literal) => {
        impl EntityService for $service {
            type Entity = $entity;
            const NAME: &'static str = $name;

            fn insert(&self, entity: Option<$entity>) -> ServiceResult<$entity> {
                <$service>::insert(self, entity)
            }
            fn update(&self, entity: Option<$entity>) -> ServiceResult<Option<$entity>> {
                <$service>::update(self, entity)
            }
            fn delete(&self, id: i64) -> ServiceResult<bool> {
                <$service>::delete(self, id)
            }
            fn get(&self, id: i64) -> ServiceResult<Option<$entity>> {
                <$service>::get(self, id)
            }
            fn id_of(entity: &$entity) -> Option<i64> {
                entity.id
            }
        }
    };
}

entity_service!(ClassService, ClassEntity, "class");
entity_service!(TeacherService, Teacher, "teacher");
entity_service!(RoomService, Room, "room");
entity_service!(SubjectService, Subject, "subject");
entity_service!(SlotService, Slot, "slot");
entity_service!(PlanningService, Planning, "planning");

/// Run one of the actions every entity supports.
#[instrument(skip_all, fields(entity = S::NAME))]
pub fn run_entity_action<S: EntityService>(
    service: &S,
    action: CrudAction,
    session: &Session,
    output: &OutputManager,
) -> CliResult<()> {
    match action {
        CrudAction::Insert(args) => {
            let payload = read_payload::<S::Entity>(&args)?;
            let result = service.insert(payload);
            if result.is_ok() {
                session.save()?;
            }
            output.emit(result, &format!("{} inserted", capitalised(S::NAME)))
        }
        CrudAction::Update(args) => {
            let payload = read_payload::<S::Entity>(&args)?;
            let id = payload.as_ref().and_then(S::id_of).unwrap_or_default();
            match service.update(payload) {
                Ok(Some(updated)) => {
                    session.save()?;
                    output.value(&updated, &format!("{} updated", capitalised(S::NAME)))
                }
                Ok(None) => Err(CliError::NotFound { entity: S::NAME, id }),
                Err(err) => output.emit::<S::Entity>(Err(err), ""),
            }
        }
        CrudAction::Delete(args) => match service.delete(args.id) {
            Ok(true) => {
                session.save()?;
                output.value(&true, &format!("{} {} deleted", capitalised(S::NAME), args.id))
            }
            Ok(false) => Err(CliError::NotFound {
                entity: S::NAME,
                id: args.id,
            }),
            Err(err) => output.emit::<bool>(Err(err), ""),
        },
        CrudAction::Get(args) => match service.get(args.id) {
            Ok(Some(entity)) => output.value(&entity, &format!("{} {}", capitalised(S::NAME), args.id)),
            Ok(None) => Err(CliError::NotFound {
                entity: S::NAME,
                id: args.id,
            }),
            Err(err) => output.emit::<S::Entity>(Err(err), ""),
        },
    }
}

fn capitalised(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
