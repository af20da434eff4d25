//! `timetable slot|planning|timeslot|days`.

use timetable_core::application::{
    DayService, PlanningService, SlotService, TimeSlotService,
    ports::{PageRequest, PlanningFilter, SlotFilter},
};
use timetable_core::domain::TimeSlot;

use crate::{
    cli::{PlanningAction, SlotAction, TimeSlotAction},
    error::{CliError, CliResult},
    output::OutputManager,
};

use super::{Session, run_entity_action};

pub fn slot(action: SlotAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = SlotService::new(session.port());
    match action {
        SlotAction::Crud(action) => run_entity_action(&service, action, session, output),
        SlotAction::List(args) => {
            let filter = SlotFilter {
                background_color: args.background_color,
                font_color: args.font_color,
                teacher_last_name: args.teacher_last_name,
                teacher_first_name: args.teacher_first_name,
                subject_name: args.subject_name,
                room_name: args.room_name,
                start_hour: args.start_hour,
                end_hour: args.end_hour,
                page: args.page.into(),
            };
            let total = service.count(&filter)?;
            output.emit(service.list(&filter), &format!("{total} slot(s)"))
        }
    }
}

pub fn planning(action: PlanningAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = PlanningService::new(session.port());
    match action {
        PlanningAction::Crud(action) => run_entity_action(&service, action, session, output),
        PlanningAction::List(args) => {
            let filter = PlanningFilter {
                name: args.name,
                class_id: args.class_id,
                page: args.page.into(),
            };
            let plannings = service.list(&filter);
            let summary = match &plannings {
                Ok(plannings) => format!("{} planning(s)", plannings.len()),
                Err(_) => String::new(),
            };
            output.emit(plannings, &summary)
        }
        PlanningAction::Warnings(args) => {
            let Some(warnings) = service.weekly_hours_warnings(args.id)? else {
                return Err(CliError::NotFound {
                    entity: "planning",
                    id: args.id,
                });
            };
            if !output.is_json() {
                for warning in &warnings {
                    output.warning(warning)?;
                }
            }
            let summary = if warnings.is_empty() {
                "Every subject matches its weekly hours".to_owned()
            } else {
                format!("{} subject(s) off their weekly hours", warnings.len())
            };
            output.value(&warnings, &summary)
        }
    }
}

pub fn time_slot(action: TimeSlotAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = TimeSlotService::new(session.port(), session.port());
    match action {
        TimeSlotAction::Insert(args) => {
            let time_slot = TimeSlot {
                id: None,
                start: args.start,
                end: args.end,
            };
            let result = service.insert(Some(time_slot));
            if result.is_ok() {
                session.save()?;
            }
            output.emit(result, "Time slot inserted")
        }
        TimeSlotAction::Delete(args) => {
            if !service.delete(args.id)? {
                return Err(CliError::NotFound {
                    entity: "timeslot",
                    id: args.id,
                });
            }
            session.save()?;
            output.value(&true, &format!("Time slot {} deleted", args.id))
        }
        TimeSlotAction::List(args) => {
            let total = service.count()?;
            output.emit(
                service.list(&PageRequest::from(args)),
                &format!("{total} time slot(s)"),
            )
        }
    }
}

pub fn days(session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = DayService::new(session.port());
    output.emit(service.list(), "Days of the week")
}
