use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::approval::ApprovalWorkflow;
use super::domain::{EmployeeId, LeaveError, LeavePeriod, LeaveStatus, LeaveType, RequestId};
use super::history::StatusHistory;
use super::policy;
use super::variants::{
    BereavementLeave, LeaveDetails, MaternityLeave, MedicalCertificate, PaternityLeave,
    SickLeave, StudyLeave, TravelDetails, UnpaidLeave, VacationLeave, TRAVEL_DAYS,
};

pub const SYSTEM_ACTOR: &str = "System";

/// A time-off request for one employee.
///
/// The request owns its status history and, for unpaid leave, its approval workflow. The
/// employee is referenced by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    id: RequestId,
    employee_id: EmployeeId,
    period: LeavePeriod,
    status: LeaveStatus,
    requested_on: NaiveDate,
    history: StatusHistory,
    details: LeaveDetails,
}

impl LeaveRequest {
    fn create(
        id: RequestId,
        employee_id: EmployeeId,
        period: LeavePeriod,
        details: LeaveDetails,
    ) -> Self {
        let mut history = StatusHistory::default();
        history.record(
            SYSTEM_ACTOR,
            None,
            LeaveStatus::Pending,
            Some("Created".to_string()),
        );

        debug!(
            request = %id,
            employee = %employee_id,
            leave_type = details.leave_type().name(),
            start = %period.start(),
            end = %period.end(),
            "leave request created"
        );

        Self {
            id,
            employee_id,
            period,
            status: LeaveStatus::Pending,
            requested_on: Local::now().date_naive(),
            history,
            details,
        }
    }

    pub fn sick(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
        illness_description: impl Into<String>,
    ) -> Result<Self, LeaveError> {
        let period = LeavePeriod::new(start, end)?;
        let details = LeaveDetails::Sick(SickLeave::new(illness_description.into()));
        Ok(Self::create(id, employee_id, period, details))
    }

    pub fn vacation(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, LeaveError> {
        let period = LeavePeriod::new(start, end)?;
        let details = LeaveDetails::Vacation(VacationLeave::default());
        Ok(Self::create(id, employee_id, period, details))
    }

    /// Covers the standard twelve weeks from `start`.
    pub fn maternity(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        expected_delivery: NaiveDate,
    ) -> Result<Self, LeaveError> {
        let period = LeavePeriod::spanning(start, MaternityLeave::standard_days())?;
        let details = LeaveDetails::Maternity(MaternityLeave::new(expected_delivery));
        Ok(Self::create(id, employee_id, period, details))
    }

    pub fn paternity(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        child_birth_date: NaiveDate,
        adoption: bool,
    ) -> Result<Self, LeaveError> {
        let period = LeavePeriod::spanning(start, PaternityLeave::days_for(adoption))?;
        let details = LeaveDetails::Paternity(PaternityLeave::new(child_birth_date, adoption));
        Ok(Self::create(id, employee_id, period, details))
    }

    pub fn bereavement(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        relationship: impl Into<String>,
        deceased_name: impl Into<String>,
    ) -> Result<Self, LeaveError> {
        let leave = BereavementLeave::new(relationship.into(), deceased_name.into());
        let period = LeavePeriod::spanning(start, leave.base_days())?;
        Ok(Self::create(
            id,
            employee_id,
            period,
            LeaveDetails::Bereavement(leave),
        ))
    }

    pub fn unpaid(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
        reason: impl Into<String>,
    ) -> Result<Self, LeaveError> {
        let period = LeavePeriod::new(start, end)?;
        let details = LeaveDetails::Unpaid(UnpaidLeave::new(reason.into()));
        Ok(Self::create(id, employee_id, period, details))
    }

    pub fn study(
        id: RequestId,
        employee_id: EmployeeId,
        start: NaiveDate,
        end: NaiveDate,
        course_name: impl Into<String>,
        institution_name: impl Into<String>,
    ) -> Result<Self, LeaveError> {
        let period = LeavePeriod::new(start, end)?;
        let details = LeaveDetails::Study(StudyLeave::new(
            course_name.into(),
            institution_name.into(),
        ));
        Ok(Self::create(id, employee_id, period, details))
    }

    /// Overrides the filing date, which otherwise defaults to the local date at creation.
    pub fn with_requested_on(mut self, requested_on: NaiveDate) -> Self {
        self.requested_on = requested_on;
        self
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn period(&self) -> LeavePeriod {
        self.period
    }

    pub fn start_date(&self) -> NaiveDate {
        self.period.start()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.period.end()
    }

    pub fn status(&self) -> &LeaveStatus {
        &self.status
    }

    pub fn leave_type(&self) -> LeaveType {
        self.details.leave_type()
    }

    pub fn requested_on(&self) -> NaiveDate {
        self.requested_on
    }

    pub fn history(&self) -> &StatusHistory {
        &self.history
    }

    pub fn details(&self) -> &LeaveDetails {
        &self.details
    }

    /// Inclusive number of calendar days between start and end.
    pub fn calculate_leave_days(&self) -> i64 {
        self.period.days()
    }

    pub fn is_eligible(&self) -> bool {
        policy::is_eligible(&self.details, &self.period)
    }

    pub fn requires_documentation(&self) -> bool {
        policy::requires_documentation(&self.details, &self.period)
    }

    /// Moves the request to Approved. Unpaid leave is refused until its workflow carries
    /// every required sign-off; a refusal records nothing.
    pub fn approve(&mut self, approver: &str) -> Result<(), LeaveError> {
        if let LeaveDetails::Unpaid(unpaid) = &self.details {
            let missing = unpaid
                .workflow()
                .missing_roles(self.calculate_leave_days());
            if !missing.is_empty() {
                return Err(self.refused(LeaveError::ApprovalsOutstanding { missing }));
            }
        }

        self.transition(approver, LeaveStatus::Approved);
        Ok(())
    }

    pub fn reject(&mut self, approver: &str, reason: impl Into<String>) {
        self.transition(
            approver,
            LeaveStatus::Rejected {
                reason: reason.into(),
            },
        );
    }

    pub fn attach_medical_certificate(
        &mut self,
        certificate: MedicalCertificate,
    ) -> Result<(), LeaveError> {
        let LeaveDetails::Sick(sick) = &mut self.details else {
            return Err(self.not_applicable("attach_medical_certificate"));
        };
        sick.attach(certificate);
        self.annotate(SYSTEM_ACTOR, "Medical certificate attached".to_string());
        Ok(())
    }

    pub fn mark_hospitalized(&mut self) -> Result<(), LeaveError> {
        let LeaveDetails::Sick(sick) = &mut self.details else {
            return Err(self.not_applicable("mark_hospitalized"));
        };
        sick.mark_hospitalized();
        Ok(())
    }

    pub fn set_travel_details(&mut self, details: TravelDetails) -> Result<(), LeaveError> {
        let LeaveDetails::Vacation(vacation) = &mut self.details else {
            return Err(self.not_applicable("set_travel_details"));
        };
        vacation.set_travel_details(details);
        Ok(())
    }

    /// Vacation only: filed at least two weeks before it starts.
    pub fn has_advance_notice(&self) -> Result<bool, LeaveError> {
        match &self.details {
            LeaveDetails::Vacation(_) => Ok(VacationLeave::has_advance_notice(
                self.requested_on,
                self.period.start(),
            )),
            _ => Err(self.not_applicable("has_advance_notice")),
        }
    }

    /// Vacation and unpaid leave carry a maximum duration.
    pub fn exceeds_max_duration(&self) -> Result<bool, LeaveError> {
        let leave_days = self.calculate_leave_days();
        match &self.details {
            LeaveDetails::Vacation(_) => Ok(VacationLeave::exceeds_max_duration(leave_days)),
            LeaveDetails::Unpaid(_) => Ok(UnpaidLeave::exceeds_max_duration(leave_days)),
            _ => Err(self.not_applicable("exceeds_max_duration")),
        }
    }

    /// Grants a one-time maternity extension of up to four weeks. A refusal leaves the
    /// period and the extension record untouched.
    pub fn request_extension(&mut self, weeks: u32) -> Result<(), LeaveError> {
        let LeaveDetails::Maternity(maternity) = &mut self.details else {
            return Err(self.not_applicable("request_extension"));
        };
        let extended = maternity
            .check_extension(weeks)
            .and_then(|()| self.period.extended_by_days(i64::from(weeks) * 7));
        match extended {
            Ok(period) => {
                maternity.record_extension(weeks);
                self.period = period;
            }
            Err(err) => return Err(self.refused(err)),
        }

        self.annotate(SYSTEM_ACTOR, format!("Extension requested: {weeks} weeks"));
        Ok(())
    }

    pub fn is_prenatal(&self) -> Result<bool, LeaveError> {
        match &self.details {
            LeaveDetails::Maternity(maternity) => Ok(maternity.is_prenatal(self.period.start())),
            _ => Err(self.not_applicable("is_prenatal")),
        }
    }

    pub fn weeks_before_delivery(&self) -> Result<i64, LeaveError> {
        match &self.details {
            LeaveDetails::Maternity(maternity) => {
                Ok(maternity.weeks_before_delivery(self.period.start()))
            }
            _ => Err(self.not_applicable("weeks_before_delivery")),
        }
    }

    pub fn is_within_valid_period(&self) -> Result<bool, LeaveError> {
        match &self.details {
            LeaveDetails::Paternity(paternity) => {
                Ok(paternity.is_within_valid_period(self.period.start()))
            }
            _ => Err(self.not_applicable("is_within_valid_period")),
        }
    }

    /// Adds two travel days to a bereavement request. Repeated calls change nothing.
    pub fn mark_requires_travel(&mut self) -> Result<(), LeaveError> {
        let LeaveDetails::Bereavement(bereavement) = &mut self.details else {
            return Err(self.not_applicable("mark_requires_travel"));
        };
        if bereavement.requires_travel() {
            return Ok(());
        }
        match self.period.extended_by_days(TRAVEL_DAYS) {
            Ok(period) => {
                bereavement.mark_requires_travel();
                self.period = period;
            }
            Err(err) => return Err(self.refused(err)),
        }

        debug!(request = %self.id, end = %self.period.end(), "bereavement travel days added");
        Ok(())
    }

    /// Records a sign-off on an unpaid request's workflow and notes it in the history.
    pub fn add_approval(
        &mut self,
        approver: &str,
        role: &str,
        approved: bool,
        comments: Option<&str>,
    ) -> Result<(), LeaveError> {
        let LeaveDetails::Unpaid(unpaid) = &mut self.details else {
            return Err(self.not_applicable("add_approval"));
        };
        unpaid
            .workflow_mut()
            .add_approval(approver, role, approved, comments);

        let action = if approved { "approved" } else { "rejected" };
        let note = format!("{role} {action}: {}", comments.unwrap_or("No comments"));
        self.annotate(approver, note);
        Ok(())
    }

    pub fn approval_workflow(&self) -> Option<&ApprovalWorkflow> {
        match &self.details {
            LeaveDetails::Unpaid(unpaid) => Some(unpaid.workflow()),
            _ => None,
        }
    }

    pub fn has_all_approvals(&self) -> Result<bool, LeaveError> {
        match &self.details {
            LeaveDetails::Unpaid(unpaid) => Ok(unpaid
                .workflow()
                .is_fully_approved(self.calculate_leave_days())),
            _ => Err(self.not_applicable("has_all_approvals")),
        }
    }

    pub fn mark_company_sponsored(&mut self) -> Result<(), LeaveError> {
        let LeaveDetails::Study(study) = &mut self.details else {
            return Err(self.not_applicable("mark_company_sponsored"));
        };
        study.mark_company_sponsored();
        Ok(())
    }

    pub fn mark_job_related(&mut self) -> Result<(), LeaveError> {
        let LeaveDetails::Study(study) = &mut self.details else {
            return Err(self.not_applicable("mark_job_related"));
        };
        study.mark_job_related();
        Ok(())
    }

    pub fn is_paid(&self) -> Result<bool, LeaveError> {
        match &self.details {
            LeaveDetails::Study(study) => Ok(study.is_paid()),
            _ => Err(self.not_applicable("is_paid")),
        }
    }

    fn transition(&mut self, actor: &str, to: LeaveStatus) {
        let from = std::mem::replace(&mut self.status, to.clone());
        debug!(request = %self.id, %actor, from = %from, to = %to, "leave status changed");
        self.history.record(actor, Some(from), to, None);
    }

    fn annotate(&mut self, actor: &str, note: String) {
        let status = self.status.clone();
        self.history
            .record(actor, Some(status.clone()), status, Some(note));
    }

    fn not_applicable(&self, operation: &'static str) -> LeaveError {
        self.refused(LeaveError::NotApplicable {
            operation,
            leave_type: self.leave_type(),
        })
    }

    fn refused(&self, err: LeaveError) -> LeaveError {
        warn!(request = %self.id, error = %err, "leave operation refused");
        err
    }
}
