//! Global options use cases.

use tracing::{info, instrument};

use crate::application::{
    ServiceResult,
    ports::OptionsRepository,
    validators::{OptionsCheck, OptionsValidator},
};
use crate::domain::{Options, time::SPLIT_VALUES_ACCEPTED};

use super::accept;

/// Read and change the planning options.
pub struct OptionsService {
    repository: Box<dyn OptionsRepository>,
}

impl OptionsService {
    pub fn new(repository: Box<dyn OptionsRepository>) -> Self {
        Self { repository }
    }

    /// Apply a partial update.
    ///
    /// Returns `false` without touching storage when no field is set;
    /// otherwise whatever the repository reports.
    #[instrument(skip_all, fields(changes = ?options))]
    pub fn change_options(&self, options: Option<Options>) -> ServiceResult<bool> {
        let errors = match OptionsValidator::validate(options.as_ref(), self.repository.as_ref())? {
            OptionsCheck::Unchanged => {
                info!("Nothing to change");
                return Ok(false);
            }
            OptionsCheck::Validated(errors) => errors,
        };
        let options = accept(options, errors)?;

        let updated = self.repository.update(options)?;
        info!(updated, "Options changed");
        Ok(updated)
    }

    pub fn get_options(&self) -> ServiceResult<Option<Options>> {
        Ok(self.repository.get_options()?)
    }

    /// Minute increments a planning may be split into.
    pub fn accepted_split_values(&self) -> &'static [u32] {
        &SPLIT_VALUES_ACCEPTED
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::application::{ApplicationError, ports::MockOptionsRepository};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn empty_change_returns_false_without_update() {
        let mut repository = MockOptionsRepository::new();
        repository.expect_update().never();
        repository.expect_get_options().never();

        let service = OptionsService::new(Box::new(repository));
        assert!(!service.change_options(Some(Options::default())).unwrap());
    }

    #[test]
    fn full_change_is_written() {
        let full = Options::new(60, t(9, 0), t(19, 0));
        let mut repository = MockOptionsRepository::new();
        repository
            .expect_update()
            .withf(move |changes| *changes == full)
            .times(1)
            .returning(|_| Ok(true));

        let service = OptionsService::new(Box::new(repository));
        assert!(service.change_options(Some(full)).unwrap());
    }

    #[test]
    fn missing_options() {
        let service = OptionsService::new(Box::new(MockOptionsRepository::new()));
        let err = service.change_options(None).unwrap_err();
        assert_eq!(err.to_string(), "Options is missing");
    }

    #[test]
    fn split_of_45_lists_accepted_values() {
        let mut repository = MockOptionsRepository::new();
        repository.expect_update().never();

        let options = Options {
            split_planning: Some(45),
            ..Options::new(60, t(9, 0), t(19, 0))
        };
        let err = OptionsService::new(Box::new(repository))
            .change_options(Some(options))
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Le découpage du planning ne peut se faire qu'avec les valeurs suivantes (exprimées en minutes) : [15, 20, 30, 60]"
        );
    }

    #[test]
    fn accepted_values() {
        let service = OptionsService::new(Box::new(MockOptionsRepository::new()));
        assert_eq!(service.accepted_split_values(), &[15, 20, 30, 60]);
    }
}
