use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::super::domain::LeaveError;

pub const STANDARD_MATERNITY_WEEKS: u32 = 12;
pub const MAX_EXTENSION_WEEKS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaternityLeave {
    expected_delivery: NaiveDate,
    extension_weeks: u32,
}

impl MaternityLeave {
    pub(crate) fn new(expected_delivery: NaiveDate) -> Self {
        Self {
            expected_delivery,
            extension_weeks: 0,
        }
    }

    pub(crate) const fn standard_days() -> i64 {
        STANDARD_MATERNITY_WEEKS as i64 * 7
    }

    /// Validates a one-time extension without recording it.
    pub(crate) fn check_extension(&self, weeks: u32) -> Result<(), LeaveError> {
        if self.extension_weeks > 0 {
            return Err(LeaveError::ExtensionAlreadyGranted {
                weeks: self.extension_weeks,
            });
        }
        if weeks == 0 {
            return Err(LeaveError::EmptyExtension);
        }
        if weeks > MAX_EXTENSION_WEEKS {
            return Err(LeaveError::ExtensionTooLong {
                requested: weeks,
                max: MAX_EXTENSION_WEEKS,
            });
        }

        Ok(())
    }

    pub(crate) fn record_extension(&mut self, weeks: u32) {
        self.extension_weeks = weeks;
    }

    pub(crate) fn is_prenatal(&self, start: NaiveDate) -> bool {
        start < self.expected_delivery
    }

    pub(crate) fn weeks_before_delivery(&self, start: NaiveDate) -> i64 {
        if !self.is_prenatal(start) {
            return 0;
        }
        (self.expected_delivery - start).num_days() / 7
    }

    pub fn expected_delivery(&self) -> NaiveDate {
        self.expected_delivery
    }

    pub fn extension_weeks(&self) -> u32 {
        self.extension_weeks
    }

    pub fn is_extension_requested(&self) -> bool {
        self.extension_weeks > 0
    }
}
