//! School days (reference data).

use crate::application::{ServiceResult, ports::DayRepository};
use crate::domain::Day;

pub struct DayService {
    repository: Box<dyn DayRepository>,
}

impl DayService {
    pub fn new(repository: Box<dyn DayRepository>) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> ServiceResult<Vec<Day>> {
        Ok(self.repository.get_days()?)
    }
}
