use chrono::NaiveTime;

use crate::application::{StorageResult, ports::OptionsRepository};
use crate::domain::{
    Options,
    time::{self, SPLIT_VALUES_ACCEPTED},
};

/// Outcome of checking a partial options update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsCheck {
    /// Every field was absent: nothing to write.
    Unchanged,
    /// Messages for the update (empty means valid).
    Validated(Vec<String>),
}

/// Rules for partial updates of the global planning options.
pub struct OptionsValidator;

impl OptionsValidator {
    /// A bound given alone is checked against the stored opposite bound;
    /// storage is only read in that case, and an empty store skips the check.
    pub fn validate(
        options: Option<&Options>,
        repository: &dyn OptionsRepository,
    ) -> StorageResult<OptionsCheck> {
        let Some(options) = options else {
            return Ok(OptionsCheck::Validated(vec!["Options is missing".to_owned()]));
        };
        if options.is_empty() {
            return Ok(OptionsCheck::Unchanged);
        }

        let mut errors = Vec::new();
        if let Some(split) = options.split_planning {
            if !SPLIT_VALUES_ACCEPTED.contains(&split) {
                errors.push(format!(
                    "Le découpage du planning ne peut se faire qu'avec les valeurs suivantes (exprimées en minutes) : {:?}",
                    SPLIT_VALUES_ACCEPTED
                ));
            }
        }

        match (options.start_hour_planning, options.end_hour_planning) {
            (Some(start), Some(end)) => check_bounds(start, end, &mut errors),
            (Some(start), None) => {
                if let Some(end) = repository.get_options()?.and_then(|o| o.end_hour_planning) {
                    check_bounds(start, end, &mut errors);
                }
            }
            (None, Some(end)) => {
                if let Some(start) = repository.get_options()?.and_then(|o| o.start_hour_planning)
                {
                    check_bounds(start, end, &mut errors);
                }
            }
            (None, None) => {}
        }

        Ok(OptionsCheck::Validated(errors))
    }
}

/// Ordering, then a length every accepted split divides.
fn check_bounds(start: NaiveTime, end: NaiveTime, errors: &mut Vec<String>) {
    if start >= end {
        errors.push(
            "L'heure du début du planning ne doit pas être supérieur ou égal à l'heure de fin du planning"
                .to_owned(),
        );
    }
    if !time::is_divisible_by_all(time::minutes_between(start, end), &SPLIT_VALUES_ACCEPTED) {
        errors.push(
            "L'heure de fin du planning et son heure de début doivent être cohérents avec le découpage du planning"
                .to_owned(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockOptionsRepository;

    const ORDER: &str =
        "L'heure du début du planning ne doit pas être supérieur ou égal à l'heure de fin du planning";
    const SPLIT: &str = "L'heure de fin du planning et son heure de début doivent être cohérents avec le découpage du planning";

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn full() -> Options {
        Options::new(60, t(9, 0), t(19, 0))
    }

    fn stored(options: Option<Options>) -> MockOptionsRepository {
        let mut repository = MockOptionsRepository::new();
        repository
            .expect_get_options()
            .returning(move || Ok(options));
        repository
    }

    fn messages(check: OptionsCheck) -> Vec<String> {
        match check {
            OptionsCheck::Validated(errors) => errors,
            OptionsCheck::Unchanged => panic!("expected a validated update"),
        }
    }

    #[test]
    fn missing_options() {
        let check = OptionsValidator::validate(None, &MockOptionsRepository::new()).unwrap();
        assert_eq!(messages(check), vec!["Options is missing"]);
    }

    #[test]
    fn empty_update_is_unchanged_without_lookup() {
        let check =
            OptionsValidator::validate(Some(&Options::default()), &MockOptionsRepository::new());
        assert_eq!(check.unwrap(), OptionsCheck::Unchanged);
    }

    #[test]
    fn full_day_accepts_every_split() {
        for split in SPLIT_VALUES_ACCEPTED {
            let options = Options {
                split_planning: Some(split),
                ..full()
            };
            let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
            assert!(messages(check.unwrap()).is_empty(), "split {split}");
        }
    }

    #[test]
    fn split_outside_accepted_values() {
        let options = Options {
            split_planning: Some(45),
            ..full()
        };
        let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
        assert_eq!(
            messages(check.unwrap()),
            vec![
                "Le découpage du planning ne peut se faire qu'avec les valeurs suivantes (exprimées en minutes) : [15, 20, 30, 60]"
            ]
        );
    }

    #[test]
    fn split_alone_needs_no_lookup() {
        let options = Options {
            split_planning: Some(60),
            ..Options::default()
        };
        let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
        assert!(messages(check.unwrap()).is_empty());
    }

    #[test]
    fn start_after_end() {
        let options = Options {
            start_hour_planning: Some(t(22, 0)),
            ..full()
        };
        let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
        assert_eq!(messages(check.unwrap()), vec![ORDER]);
    }

    #[test]
    fn day_length_must_fit_every_split() {
        let options = Options {
            start_hour_planning: Some(t(8, 11)),
            ..full()
        };
        let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
        assert_eq!(messages(check.unwrap()), vec![SPLIT]);
    }

    #[test]
    fn half_hour_day_fails_the_hourly_split() {
        let options = Options {
            start_hour_planning: Some(t(9, 0)),
            end_hour_planning: Some(t(9, 30)),
            split_planning: None,
        };
        let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
        assert_eq!(messages(check.unwrap()), vec![SPLIT]);
    }

    #[test]
    fn start_alone_without_stored_options_is_accepted() {
        let options = Options {
            start_hour_planning: Some(t(9, 0)),
            ..Options::default()
        };
        let check = OptionsValidator::validate(Some(&options), &stored(None));
        assert!(messages(check.unwrap()).is_empty());
    }

    #[test]
    fn start_alone_against_stored_end() {
        let in_db = Some(Options::new(60, t(5, 0), t(15, 0)));

        let options = Options {
            start_hour_planning: Some(t(18, 0)),
            ..Options::default()
        };
        let check = OptionsValidator::validate(Some(&options), &stored(in_db));
        assert_eq!(messages(check.unwrap()), vec![ORDER]);

        let options = Options {
            start_hour_planning: Some(t(5, 23)),
            ..Options::default()
        };
        let check = OptionsValidator::validate(Some(&options), &stored(in_db));
        assert_eq!(messages(check.unwrap()), vec![SPLIT]);
    }

    #[test]
    fn end_alone_against_stored_start() {
        let options = Options {
            end_hour_planning: Some(t(15, 0)),
            ..Options::default()
        };
        let check = OptionsValidator::validate(
            Some(&options),
            &stored(Some(Options::new(60, t(5, 0), t(18, 0)))),
        );
        assert!(messages(check.unwrap()).is_empty());

        let in_db = Some(Options::new(60, t(5, 0), t(15, 0)));
        let options = Options {
            end_hour_planning: Some(t(3, 0)),
            ..Options::default()
        };
        let check = OptionsValidator::validate(Some(&options), &stored(in_db));
        assert_eq!(messages(check.unwrap()), vec![ORDER]);

        let options = Options {
            end_hour_planning: Some(t(5, 23)),
            ..Options::default()
        };
        let check = OptionsValidator::validate(Some(&options), &stored(in_db));
        assert_eq!(messages(check.unwrap()), vec![SPLIT]);
    }

    #[test]
    fn messages_accumulate() {
        let options = Options {
            split_planning: Some(45),
            start_hour_planning: Some(t(19, 7)),
            end_hour_planning: Some(t(9, 0)),
        };
        let check = OptionsValidator::validate(Some(&options), &MockOptionsRepository::new());
        assert_eq!(messages(check.unwrap()).len(), 3);
    }
}
