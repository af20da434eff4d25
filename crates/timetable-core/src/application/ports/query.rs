//! Query objects passed to repository list/count operations.
//!
//! Text filters are case-insensitive "contains" matches; an absent or empty
//! filter matches everything.

use chrono::NaiveTime;

use crate::domain::{Planning, Slot};

/// 1-based pagination. Only applied when both fields are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PageRequest {
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Self {
        Self { page, per_page }
    }

    /// Keep the requested page of `items`.
    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        match (self.page, self.per_page) {
            (Some(page), Some(per_page)) => {
                let offset = page.saturating_sub(1) as usize * per_page as usize;
                items.into_iter().skip(offset).take(per_page as usize).collect()
            }
            _ => items,
        }
    }
}

/// Filter on an entity's name, with pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub name: Option<String>,
    pub page: PageRequest,
}

impl NameQuery {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn matches(&self, candidate: Option<&str>) -> bool {
        contains(self.name.as_deref(), candidate)
    }
}

/// Filters accepted by the slot listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotFilter {
    pub background_color: Option<String>,
    pub font_color: Option<String>,
    pub teacher_last_name: Option<String>,
    pub teacher_first_name: Option<String>,
    pub subject_name: Option<String>,
    pub room_name: Option<String>,
    pub start_hour: Option<NaiveTime>,
    pub end_hour: Option<NaiveTime>,
    pub page: PageRequest,
}

impl SlotFilter {
    pub fn matches(&self, slot: &Slot) -> bool {
        let teacher = slot.teacher.as_ref();
        let time_slot = slot.time_slot.as_ref();
        equals(self.background_color.as_deref(), slot.background_color.as_deref())
            && equals(self.font_color.as_deref(), slot.font_color.as_deref())
            && contains(
                self.teacher_last_name.as_deref(),
                teacher.and_then(|t| t.last_name.as_deref()),
            )
            && contains(
                self.teacher_first_name.as_deref(),
                teacher.and_then(|t| t.first_name.as_deref()),
            )
            && contains(
                self.subject_name.as_deref(),
                slot.subject.as_ref().and_then(|s| s.name.as_deref()),
            )
            && contains(
                self.room_name.as_deref(),
                slot.room.as_ref().and_then(|r| r.name.as_deref()),
            )
            && self
                .start_hour
                .is_none_or(|h| time_slot.and_then(|ts| ts.start) == Some(h))
            && self
                .end_hour
                .is_none_or(|h| time_slot.and_then(|ts| ts.end) == Some(h))
    }
}

/// Filters accepted by the planning listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanningFilter {
    pub name: Option<String>,
    pub class_id: Option<i64>,
    pub page: PageRequest,
}

impl PlanningFilter {
    pub fn matches(&self, planning: &Planning) -> bool {
        contains(self.name.as_deref(), planning.name.as_deref())
            && self
                .class_id
                .is_none_or(|id| planning.class.as_ref().and_then(|c| c.id) == Some(id))
    }
}

fn contains(filter: Option<&str>, candidate: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(filter) => candidate
            .is_some_and(|c| c.to_lowercase().contains(&filter.to_lowercase())),
    }
}

fn equals(filter: Option<&str>, candidate: Option<&str>) -> bool {
    match filter {
        None | Some("") => true,
        Some(filter) => candidate.is_some_and(|c| c.eq_ignore_ascii_case(filter)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Subject, Teacher, TimeSlot};

    #[test]
    fn pagination_requires_both_fields() {
        let items: Vec<u32> = (1..=5).collect();
        assert_eq!(PageRequest::new(Some(2), Some(2)).apply(items.clone()), vec![3, 4]);
        assert_eq!(PageRequest::new(Some(3), Some(2)).apply(items.clone()), vec![5]);
        assert_eq!(PageRequest::new(None, Some(2)).apply(items.clone()), items);
    }

    #[test]
    fn name_query_is_case_insensitive_contains() {
        let query = NameQuery::named("b2");
        assert!(query.matches(Some("B240")));
        assert!(!query.matches(Some("A110")));
        assert!(!query.matches(None));
        assert!(NameQuery::default().matches(None));
        assert!(NameQuery::named("").matches(Some("anything")));
    }

    #[test]
    fn slot_filter_combines_criteria() {
        let slot = Slot {
            background_color: Some("#FFFFFF".into()),
            teacher: Some(Teacher::new("Dupont", "Marie")),
            subject: Some(Subject::new("Mathématiques", "#fff", "#000")),
            time_slot: Some(TimeSlot::new(
                NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            )),
            ..Slot::default()
        };

        let mut filter = SlotFilter {
            teacher_last_name: Some("dup".into()),
            subject_name: Some("math".into()),
            ..SlotFilter::default()
        };
        assert!(filter.matches(&slot));

        filter.start_hour = NaiveTime::from_hms_opt(10, 0, 0);
        assert!(!filter.matches(&slot));
    }
}
