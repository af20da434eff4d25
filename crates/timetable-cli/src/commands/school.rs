//! `timetable class|teacher|room|subject`.

use timetable_core::application::{
    ClassService, RoomService, SubjectService, TeacherService, ports::NameQuery,
};

use crate::{
    cli::{NameListArgs, NamedAction},
    error::CliResult,
    output::OutputManager,
};

use super::{Session, run_entity_action};

fn query(args: NameListArgs) -> NameQuery {
    NameQuery {
        name: args.name,
        page: args.page.into(),
    }
}

pub fn class(action: NamedAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = ClassService::new(session.port());
    match action {
        NamedAction::Crud(action) => run_entity_action(&service, action, session, output),
        NamedAction::List(args) => {
            let query = query(args);
            let total = service.count(&query)?;
            output.emit(service.list(&query), &format!("{total} class(es)"))
        }
    }
}

pub fn teacher(action: NamedAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = TeacherService::new(session.port());
    match action {
        NamedAction::Crud(action) => run_entity_action(&service, action, session, output),
        NamedAction::List(args) => {
            let query = query(args);
            let total = service.count(&query)?;
            output.emit(service.list(&query), &format!("{total} teacher(s)"))
        }
    }
}

pub fn room(action: NamedAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = RoomService::new(session.port());
    match action {
        NamedAction::Crud(action) => run_entity_action(&service, action, session, output),
        NamedAction::List(args) => {
            let query = query(args);
            let total = service.count(&query)?;
            output.emit(service.list(&query), &format!("{total} room(s)"))
        }
    }
}

pub fn subject(action: NamedAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = SubjectService::new(session.port());
    match action {
        NamedAction::Crud(action) => run_entity_action(&service, action, session, output),
        NamedAction::List(args) => {
            let subjects = service.list(&query(args));
            let summary = match &subjects {
                Ok(subjects) => format!("{} subject(s)", subjects.len()),
                Err(_) => String::new(),
            };
            output.emit(subjects, &summary)
        }
    }
}
