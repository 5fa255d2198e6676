//! Per-type eligibility and documentation rules.
//!
//! | Type        | Eligible when                               | Documentation when       |
//! |-------------|---------------------------------------------|--------------------------|
//! | Sick        | no documentation needed, or certificate     | > 3 days or hospitalised |
//! | Vacation    | <= 21 days                                  | never                    |
//! | Maternity   | always                                      | always                   |
//! | Paternity   | starts 0-8 whole weeks after the birth      | always                   |
//! | Bereavement | always                                      | always                   |
//! | Unpaid      | <= 30 days and Manager (+HR if > 5) signed  | > 5 days                 |
//! | Study       | <= 10 days or company-sponsored             | always                   |

use super::domain::LeavePeriod;
use super::variants::{LeaveDetails, UnpaidLeave, VacationLeave};

pub(crate) fn is_eligible(details: &LeaveDetails, period: &LeavePeriod) -> bool {
    let leave_days = period.days();
    match details {
        LeaveDetails::Sick(sick) => sick.is_eligible(leave_days),
        LeaveDetails::Vacation(_) => !VacationLeave::exceeds_max_duration(leave_days),
        LeaveDetails::Maternity(_) | LeaveDetails::Bereavement(_) => true,
        LeaveDetails::Paternity(paternity) => paternity.is_within_valid_period(period.start()),
        LeaveDetails::Unpaid(unpaid) => unpaid.is_eligible(leave_days),
        LeaveDetails::Study(study) => study.is_eligible(leave_days),
    }
}

pub(crate) fn requires_documentation(details: &LeaveDetails, period: &LeavePeriod) -> bool {
    let leave_days = period.days();
    match details {
        LeaveDetails::Sick(sick) => sick.requires_documentation(leave_days),
        LeaveDetails::Vacation(_) => false,
        LeaveDetails::Maternity(_)
        | LeaveDetails::Paternity(_)
        | LeaveDetails::Bereavement(_)
        | LeaveDetails::Study(_) => true,
        LeaveDetails::Unpaid(_) => UnpaidLeave::requires_documentation(leave_days),
    }
}
