use crate::application::{
    StorageResult,
    ports::{OptionsRepository, TimeSlotRepository},
};
use crate::domain::{TimeSlot, time};

/// Rules tying a time slot to the planning options.
pub struct TimeSlotValidator;

impl TimeSlotValidator {
    /// Options are read only once both bounds are known. The length must be
    /// a multiple of the configured split, and the interval must sit inside
    /// the configured planning day.
    pub fn validate(
        time_slot: Option<&TimeSlot>,
        repository: &dyn TimeSlotRepository,
        options_repository: &dyn OptionsRepository,
    ) -> StorageResult<Vec<String>> {
        let Some(time_slot) = time_slot else {
            return Ok(vec!["Créneau horaire manquant".to_owned()]);
        };
        let (Some(start), Some(end)) = (time_slot.start, time_slot.end) else {
            return Ok(vec![
                "L'heure de début et l'heure de fin sont obligatoires".to_owned(),
            ]);
        };

        let mut errors = Vec::new();
        if start >= end {
            errors.push(
                "L'heure de début ne doit pas être supérieur ou égal à l'heure de fin".to_owned(),
            );
        }

        if let Some(options) = options_repository.get_options()? {
            if let Some(split) = options.split_planning {
                if !time::is_divisible_by(time::minutes_between(start, end), split) {
                    errors.push(
                        "L'heure de fin et l'heure de début doivent être cohérents avec le découpage du planning"
                            .to_owned(),
                    );
                }
            }
            if options.start_hour_planning.is_some_and(|day_start| start < day_start) {
                errors.push(
                    "L'heure de début doit être postérieur ou égal à l'heure de début d'un planning"
                        .to_owned(),
                );
            }
            if options.end_hour_planning.is_some_and(|day_end| end > day_end) {
                errors.push(
                    "L'heure de fin doit être antérieur l'heure de fin d'un planning".to_owned(),
                );
            }
        }

        if repository.exists(time_slot)? {
            errors.push("Ce créneau horaire existe déjà".to_owned());
        }
        Ok(errors)
    }
}
