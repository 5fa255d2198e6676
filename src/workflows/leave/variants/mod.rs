mod bereavement;
mod maternity;
mod paternity;
mod sick;
mod study;
mod unpaid;
mod vacation;

pub use bereavement::{
    is_immediate_family, BereavementLeave, EXTENDED_FAMILY_DAYS, IMMEDIATE_FAMILY_DAYS,
    TRAVEL_DAYS,
};
pub use maternity::{MaternityLeave, MAX_EXTENSION_WEEKS, STANDARD_MATERNITY_WEEKS};
pub use paternity::{
    PaternityLeave, ADOPTION_PATERNITY_DAYS, MAX_WEEKS_AFTER_BIRTH, STANDARD_PATERNITY_DAYS,
};
pub use sick::{
    MedicalCertificate, SickLeave, CERTIFICATE_VALIDITY_DAYS, DAYS_REQUIRING_CERTIFICATE,
};
pub use study::{StudyLeave, MAX_STUDY_LEAVE_DAYS};
pub use unpaid::{UnpaidLeave, DOCUMENTATION_THRESHOLD_DAYS, MAX_UNPAID_LEAVE_DAYS};
pub use vacation::{TravelDetails, VacationLeave, MAX_CONSECUTIVE_DAYS, MIN_ADVANCE_NOTICE_DAYS};

use super::domain::LeaveType;
use serde::{Deserialize, Serialize};

/// Type-specific payload carried by a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LeaveDetails {
    Sick(SickLeave),
    Vacation(VacationLeave),
    Maternity(MaternityLeave),
    Paternity(PaternityLeave),
    Bereavement(BereavementLeave),
    Unpaid(UnpaidLeave),
    Study(StudyLeave),
}

impl LeaveDetails {
    pub const fn leave_type(&self) -> LeaveType {
        match self {
            Self::Sick(_) => LeaveType::Sick,
            Self::Vacation(_) => LeaveType::Vacation,
            Self::Maternity(_) => LeaveType::Maternity,
            Self::Paternity(_) => LeaveType::Paternity,
            Self::Bereavement(_) => LeaveType::Bereavement,
            Self::Unpaid(_) => LeaveType::Unpaid,
            Self::Study(_) => LeaveType::Study,
        }
    }
}
