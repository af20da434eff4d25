//! `timetable options`: read and change the global planning options.

use timetable_core::application::OptionsService;
use timetable_core::domain::Options;

use crate::{
    cli::{OptionsAction, OptionsArgs},
    error::CliResult,
    output::OutputManager,
};

use super::Session;

pub fn execute(action: OptionsAction, session: &Session, output: &OutputManager) -> CliResult<()> {
    let service = OptionsService::new(session.port());
    match action {
        OptionsAction::Show => output.emit(service.get_options(), "Planning options"),
        OptionsAction::Set(args) => {
            let result = service.change_options(Some(changes(args)));
            let summary = match result {
                Ok(true) => {
                    session.save()?;
                    "Options updated"
                }
                Ok(false) => "Nothing to change",
                Err(_) => "",
            };
            output.emit(result, summary)
        }
        OptionsAction::Values => output.emit(
            Ok(service.accepted_split_values()),
            "Accepted split values (minutes)",
        ),
    }
}

fn changes(args: OptionsArgs) -> Options {
    Options {
        split_planning: args.split,
        start_hour_planning: args.start,
        end_hour_planning: args.end,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    #[test]
    fn absent_flags_stay_absent() {
        let options = changes(OptionsArgs {
            split: None,
            start: NaiveTime::from_hms_opt(8, 0, 0),
            end: None,
        });
        assert_eq!(options.split_planning, None);
        assert_eq!(options.start_hour_planning, NaiveTime::from_hms_opt(8, 0, 0));
        assert!(!options.is_empty());
    }

    #[test]
    fn no_flags_is_an_empty_change() {
        let options = changes(OptionsArgs {
            split: None,
            start: None,
            end: None,
        });
        assert!(options.is_empty());
    }
}
