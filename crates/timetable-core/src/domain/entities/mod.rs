//! Domain entities.
//!
//! Every field a client may omit is an `Option`. Ids are assigned by the
//! storage layer, timestamps by the application services.

pub mod options;
pub mod schedule;
pub mod school;

use chrono::{DateTime, Utc};

pub use options::Options;
pub use schedule::{Day, Planning, Slot, TimeSlot, Weekday};
pub use school::{ClassEntity, Room, Subject, Teacher};

/// Entities carrying creation/modification audit timestamps.
pub trait Audited {
    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);

    /// Stamp a freshly created entity: both dates take the same instant.
    fn stamp_created(&mut self, now: DateTime<Utc>);

    /// Refresh the modification date only.
    fn stamp_modified(&mut self, now: DateTime<Utc>);

    /// Take the stored creation date when the incoming copy has none.
    fn inherit_creation_date(&mut self, stored: &Self);
}

macro_rules! impl_audited {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl Audited for $entity {
                fn id(&self) -> Option<i64> {
                    self.id
                }

                fn set_id(&mut self, id: i64) {
                    self.id = Some(id);
                }

                fn stamp_created(&mut self, now: DateTime<Utc>) {
                    self.creation_date = Some(now);
                    self.modification_date = Some(now);
                }

                fn stamp_modified(&mut self, now: DateTime<Utc>) {
                    self.modification_date = Some(now);
                }

                fn inherit_creation_date(&mut self, stored: &Self) {
                    if self.creation_date.is_none() {
                        self.creation_date = stored.creation_date;
                    }
                }
            }
        )+
    };
}

impl_audited!(ClassEntity, Teacher, Room, Subject, Slot, Planning);
