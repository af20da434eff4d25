use crate::domain::Planning;

use super::is_blank;

/// Structural rules for plannings. Slots are validated on their own.
pub struct PlanningValidator;

impl PlanningValidator {
    pub fn validate(planning: Option<&Planning>, is_update: bool) -> Vec<String> {
        let Some(planning) = planning else {
            return vec!["Le planning est obligatoire".to_owned()];
        };

        let mut errors = Vec::new();
        if is_update && planning.id.is_none() {
            errors.push("L'identifiant du planning est obligatoire".to_owned());
        }
        if planning.class.as_ref().is_none_or(|class| class.id.is_none()) {
            errors.push("La classe est obligatoire".to_owned());
        }
        if is_blank(planning.name.as_deref()) {
            errors.push("Le nom du planning est obligatoire".to_owned());
        }
        if planning.slots.as_ref().is_none_or(Vec::is_empty) {
            errors.push("Un ou plusieurs slot(s) est/sont obligatoire(s)".to_owned());
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClassEntity, Slot};

    fn complete_planning() -> Planning {
        Planning {
            name: Some("Planning 6ème A".into()),
            class: Some(ClassEntity {
                id: Some(1),
                ..ClassEntity::named("6ème A")
            }),
            slots: Some(vec![Slot::default()]),
            ..Planning::default()
        }
    }

    #[test]
    fn complete_planning_is_valid() {
        assert!(PlanningValidator::validate(Some(&complete_planning()), false).is_empty());
    }

    #[test]
    fn missing_planning() {
        assert_eq!(
            PlanningValidator::validate(None, true),
            vec!["Le planning est obligatoire"]
        );
    }

    #[test]
    fn class_without_id_counts_as_missing() {
        let mut planning = complete_planning();
        planning.class = Some(ClassEntity::named("6ème A"));
        assert_eq!(
            PlanningValidator::validate(Some(&planning), false),
            vec!["La classe est obligatoire"]
        );

        planning.class = None;
        assert_eq!(
            PlanningValidator::validate(Some(&planning), false),
            vec!["La classe est obligatoire"]
        );
    }

    #[test]
    fn empty_slot_list_rejected() {
        let mut planning = complete_planning();
        planning.slots = Some(Vec::new());
        assert_eq!(
            PlanningValidator::validate(Some(&planning), false),
            vec!["Un ou plusieurs slot(s) est/sont obligatoire(s)"]
        );
    }

    #[test]
    fn empty_update_reports_everything_in_order() {
        assert_eq!(
            PlanningValidator::validate(Some(&Planning::default()), true),
            vec![
                "L'identifiant du planning est obligatoire",
                "La classe est obligatoire",
                "Le nom du planning est obligatoire",
                "Un ou plusieurs slot(s) est/sont obligatoire(s)",
            ]
        );
    }
}
