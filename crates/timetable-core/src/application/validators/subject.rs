use std::ops::RangeInclusive;

use crate::domain::{Subject, color};

use super::is_blank;

const DESCRIPTION_LENGTH: RangeInclusive<usize> = 10..=255;
const NAME_LENGTH: RangeInclusive<usize> = 3..=40;

/// Rules for subjects. Pure: subjects may share names, so nothing is looked up.
pub struct SubjectValidator;

impl SubjectValidator {
    pub fn validate(subject: Option<&Subject>) -> Vec<String> {
        let Some(subject) = subject else {
            return vec!["La matière est obligatoire".to_owned()];
        };

        let name = subject.name.as_deref();
        let background = subject.background_color.as_deref();
        let font = subject.font_color.as_deref();

        let mut errors = Vec::new();
        if is_blank(name) {
            errors.push("Le nom de la matière est obligatoire".to_owned());
        }
        if is_blank(background) {
            errors.push("La couleur de fond est obligatoire".to_owned());
        }
        // Same wording as the missing background.
        if is_blank(font) {
            errors.push("La couleur de fond est obligatoire".to_owned());
        }
        if background.is_some() && background == font {
            errors.push("La couleur du fond et de la police ne peuvent pas être la même".to_owned());
        }
        if !is_blank(background) && !color::is_hex(background) {
            errors.push("La couleur de fond doit être au format hexadécimal".to_owned());
        }
        if !is_blank(font) && !color::is_hex(font) {
            errors.push("La couleur de la police doit être au format hexadécimal".to_owned());
        }
        if let Some(description) = subject.description.as_deref() {
            if !DESCRIPTION_LENGTH.contains(&description.chars().count()) {
                errors.push("La description doit être comprise entre 10 et 255 caractères".to_owned());
            }
        }
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            if !NAME_LENGTH.contains(&name.chars().count()) {
                errors.push("Le nom d'une matière doit contenir entre 3 et 40 caractères".to_owned());
            }
        }
        errors
    }
}
