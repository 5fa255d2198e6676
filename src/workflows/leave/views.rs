use chrono::NaiveDate;
use serde::Serialize;

use super::approval::{ApprovalStep, ApprovalWorkflow};
use super::balance::LeaveBalance;
use super::domain::{EmployeeId, LeaveType, RequestId};
use super::employee::Employee;
use super::history::StatusChange;
use super::request::LeaveRequest;
use super::variants::LeaveDetails;

#[derive(Debug, Clone, Serialize)]
pub struct LeaveSummaryView {
    pub request_id: RequestId,
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub leave_type_label: &'static str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: i64,
    pub status_label: String,
    pub eligible: bool,
    pub requires_documentation: bool,
}

impl LeaveSummaryView {
    pub fn new(request: &LeaveRequest, employee: &Employee) -> Self {
        Self {
            request_id: request.id(),
            employee_id: employee.id(),
            employee_name: employee.full_name(),
            leave_type: request.leave_type(),
            leave_type_label: request.leave_type().label(),
            start_date: request.start_date(),
            end_date: request.end_date(),
            days: request.calculate_leave_days(),
            status_label: request.status().to_string(),
            eligible: request.is_eligible(),
            requires_documentation: request.requires_documentation(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceEntry {
    pub leave_type: LeaveType,
    pub allotted: u32,
    pub used: u32,
    pub remaining: u32,
}

impl BalanceEntry {
    pub fn collect(balance: &LeaveBalance) -> Vec<Self> {
        balance
            .entries()
            .map(|(leave_type, allotted, used)| Self {
                leave_type,
                allotted,
                used,
                remaining: balance.balance(leave_type),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BalanceView {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub tenure_years: u32,
    pub tenure_bonus: u32,
    pub entries: Vec<BalanceEntry>,
}

impl BalanceView {
    pub fn new(employee: &Employee, today: NaiveDate) -> Self {
        let balance = employee.leave_balance();
        Self {
            employee_id: employee.id(),
            employee_name: employee.full_name(),
            tenure_years: employee.tenure_years(today),
            tenure_bonus: balance.tenure_bonus(),
            entries: BalanceEntry::collect(balance),
        }
    }
}

/// Standard allotments for a hire date, independent of any employee record.
#[derive(Debug, Clone, Serialize)]
pub struct PolicyView {
    pub hire_date: NaiveDate,
    pub as_of: NaiveDate,
    pub tenure_bonus: u32,
    pub entries: Vec<BalanceEntry>,
}

impl PolicyView {
    pub fn new(hire_date: NaiveDate, as_of: NaiveDate) -> Self {
        let balance = LeaveBalance::new(hire_date, as_of);
        Self {
            hire_date,
            as_of,
            tenure_bonus: balance.tenure_bonus(),
            entries: BalanceEntry::collect(&balance),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub request_id: RequestId,
    pub employee_name: String,
    pub leave_type_label: &'static str,
    pub changes: Vec<StatusChange>,
}

impl HistoryView {
    pub fn new(request: &LeaveRequest, employee: &Employee) -> Self {
        Self {
            request_id: request.id(),
            employee_name: employee.full_name(),
            leave_type_label: request.leave_type().label(),
            changes: request.history().changes().to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkflowView {
    pub request_id: RequestId,
    pub reason: String,
    pub leave_days: i64,
    pub required_roles: Vec<&'static str>,
    pub missing_roles: Vec<&'static str>,
    pub fully_approved: bool,
    pub steps: Vec<ApprovalStep>,
}

impl WorkflowView {
    /// `None` for anything other than unpaid leave.
    pub fn new(request: &LeaveRequest) -> Option<Self> {
        let LeaveDetails::Unpaid(unpaid) = request.details() else {
            return None;
        };
        let workflow = unpaid.workflow();
        let leave_days = request.calculate_leave_days();

        Some(Self {
            request_id: request.id(),
            reason: unpaid.reason().to_string(),
            leave_days,
            required_roles: ApprovalWorkflow::required_roles(leave_days),
            missing_roles: workflow.missing_roles(leave_days),
            fully_approved: workflow.is_fully_approved(leave_days),
            steps: workflow.steps().to_vec(),
        })
    }
}
