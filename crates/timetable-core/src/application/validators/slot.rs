use crate::application::{StorageResult, ports::SlotRepository};
use crate::domain::{Slot, color};

use super::is_blank;

/// Threshold for slots sharing one day and one time slot.
///
/// The stored count is compared with `>`, so the rule fires once the day
/// already holds more than this many slots at that interval.
pub const MAX_SLOTS_PER_DAY_AND_TIME_SLOT: u64 = 2;

/// Rules for creating and updating a slot.
pub struct SlotValidator;

impl SlotValidator {
    /// The background colour lookup is not scoped to other slots: on update
    /// a slot matches its own stored colour.
    pub fn validate(
        slot: Option<&Slot>,
        is_update: bool,
        repository: &dyn SlotRepository,
    ) -> StorageResult<Vec<String>> {
        let Some(slot) = slot else {
            return Ok(vec!["Le slot est obligatoire".to_owned()]);
        };
        if is_update && slot.id.is_none() {
            return Ok(vec![
                "Le slot doit obligatoirement avoir un identifiant".to_owned(),
            ]);
        }

        let mut errors = Vec::new();
        match &slot.subject {
            None => errors.push("La matière est obligatoire".to_owned()),
            Some(subject) if subject.id.is_none() => {
                errors.push("L'identifiant de la matière est obligatoire".to_owned())
            }
            Some(_) => {}
        }
        match &slot.time_slot {
            None => errors.push("Le créneau horaire est obligatoire".to_owned()),
            Some(time_slot) if time_slot.id.is_none() => {
                errors.push("L'identifiant du créneau horaire est obligatoire".to_owned())
            }
            Some(_) => {}
        }

        let background = slot.background_color.as_deref();
        let font = slot.font_color.as_deref();
        if is_blank(background) {
            errors.push("La couleur de fond est obligatoire".to_owned());
        }
        if is_blank(font) {
            errors.push("La couleur de la police est obligatoire".to_owned());
        }
        if background.is_some() && background == font {
            errors.push("La couleur de fond et de la police ne peuvent pas être la même".to_owned());
        }
        if !is_blank(background) && !color::is_hex(background) {
            errors.push("La couleur de fond doit être au format hexadécimal".to_owned());
        }
        if !is_blank(font) && !color::is_hex(font) {
            errors.push("La couleur de la police doit être au format hexadécimal".to_owned());
        }
        if repository.is_exist_by_color_background(slot)? {
            errors.push("Il existe déjà un slot avec ce fond de couleur".to_owned());
        }
        if let (Some(day_id), Some(time_slot)) = (slot.day_id(), slot.time_slot.as_ref()) {
            if repository.count_by_day(day_id, time_slot)? > MAX_SLOTS_PER_DAY_AND_TIME_SLOT {
                errors.push(format!(
                    "Le nombre de slots pour le même jour et le même créneau horaire est limité à {MAX_SLOTS_PER_DAY_AND_TIME_SLOT} slots"
                ));
            }
        }
        Ok(errors)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;
    use crate::application::ports::MockSlotRepository;
    use crate::domain::{Subject, TimeSlot, Weekday};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn complete_slot() -> Slot {
        Slot {
            background_color: Some("#FFFFFF".into()),
            font_color: Some("#000000".into()),
            subject: Some(Subject {
                id: Some(1),
                ..Subject::new("Mathématiques", "#FFFFFF", "#000000")
            }),
            time_slot: Some(TimeSlot {
                id: Some(1),
                ..TimeSlot::new(t(8, 0), t(9, 0))
            }),
            day: Some(Weekday::Monday.to_day()),
            ..Slot::default()
        }
    }

    fn repository(colour_taken: bool, same_day_count: u64) -> MockSlotRepository {
        let mut repository = MockSlotRepository::new();
        repository
            .expect_is_exist_by_color_background()
            .returning(move |_| Ok(colour_taken));
        repository
            .expect_count_by_day()
            .returning(move |_, _| Ok(same_day_count));
        repository
    }

    #[test]
    fn complete_slot_is_valid() {
        let errors = SlotValidator::validate(Some(&complete_slot()), false, &repository(false, 0));
        assert!(errors.unwrap().is_empty());
    }

    #[test]
    fn missing_slot() {
        let repository = MockSlotRepository::new();
        assert_eq!(
            SlotValidator::validate(None, false, &repository).unwrap(),
            vec!["Le slot est obligatoire"]
        );
    }

    #[test]
    fn update_without_id_stops_before_other_checks() {
        let repository = MockSlotRepository::new();
        assert_eq!(
            SlotValidator::validate(Some(&Slot::default()), true, &repository).unwrap(),
            vec!["Le slot doit obligatoirement avoir un identifiant"]
        );
    }

    #[test]
    fn identical_colours_reported_even_when_not_hex() {
        let slot = Slot {
            background_color: Some("#GGGGGG".into()),
            font_color: Some("#GGGGGG".into()),
            ..complete_slot()
        };
        assert_eq!(
            SlotValidator::validate(Some(&slot), false, &repository(false, 0)).unwrap(),
            vec![
                "La couleur de fond et de la police ne peuvent pas être la même",
                "La couleur de fond doit être au format hexadécimal",
                "La couleur de la police doit être au format hexadécimal",
            ]
        );
    }

    #[test]
    fn identical_empty_colours_are_also_reported() {
        let slot = Slot {
            background_color: Some(String::new()),
            font_color: Some(String::new()),
            ..complete_slot()
        };
        assert_eq!(
            SlotValidator::validate(Some(&slot), false, &repository(false, 0)).unwrap(),
            vec![
                "La couleur de fond est obligatoire",
                "La couleur de la police est obligatoire",
                "La couleur de fond et de la police ne peuvent pas être la même",
            ]
        );
    }

    #[test]
    fn empty_slot_reports_references_then_colours() {
        let mut repository = MockSlotRepository::new();
        repository
            .expect_is_exist_by_color_background()
            .returning(|_| Ok(false));
        // No day and no time slot: the per-day count is never requested.
        assert_eq!(
            SlotValidator::validate(Some(&Slot::default()), false, &repository).unwrap(),
            vec![
                "La matière est obligatoire",
                "Le créneau horaire est obligatoire",
                "La couleur de fond est obligatoire",
                "La couleur de la police est obligatoire",
            ]
        );
    }

    #[test]
    fn references_without_ids() {
        let slot = Slot {
            subject: Some(Subject::new("Mathématiques", "#FFF", "#000")),
            time_slot: Some(TimeSlot::new(t(8, 0), t(9, 0))),
            ..complete_slot()
        };
        assert_eq!(
            SlotValidator::validate(Some(&slot), false, &repository(false, 0)).unwrap(),
            vec![
                "L'identifiant de la matière est obligatoire",
                "L'identifiant du créneau horaire est obligatoire",
            ]
        );
    }

    #[test]
    fn taken_background_colour_is_reported() {
        assert_eq!(
            SlotValidator::validate(Some(&complete_slot()), false, &repository(true, 0)).unwrap(),
            vec!["Il existe déjà un slot avec ce fond de couleur"]
        );
    }

    #[test]
    fn update_collides_with_its_own_colour() {
        let mut slot = complete_slot();
        slot.id = Some(7);
        let mut repository = MockSlotRepository::new();
        repository
            .expect_is_exist_by_color_background()
            .withf(|candidate| candidate.id == Some(7))
            .returning(|_| Ok(true));
        repository.expect_count_by_day().returning(|_, _| Ok(1));
        assert_eq!(
            SlotValidator::validate(Some(&slot), true, &repository).unwrap(),
            vec!["Il existe déjà un slot avec ce fond de couleur"]
        );
    }

    #[test]
    fn crowded_day_and_time_slot() {
        assert!(
            SlotValidator::validate(Some(&complete_slot()), false, &repository(false, 2))
                .unwrap()
                .is_empty()
        );
        assert_eq!(
            SlotValidator::validate(Some(&complete_slot()), false, &repository(false, 3)).unwrap(),
            vec!["Le nombre de slots pour le même jour et le même créneau horaire est limité à 2 slots"]
        );
    }

    #[test]
    fn count_is_asked_for_the_slot_day() {
        let mut repository = MockSlotRepository::new();
        repository
            .expect_is_exist_by_color_background()
            .returning(|_| Ok(false));
        repository
            .expect_count_by_day()
            .withf(|day_id, time_slot| *day_id == 1 && time_slot.id == Some(1))
            .times(1)
            .returning(|_, _| Ok(0));
        assert!(
            SlotValidator::validate(Some(&complete_slot()), false, &repository)
                .unwrap()
                .is_empty()
        );
    }
}
