use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::info;

use super::balance::BalanceError;
use super::domain::{EmployeeId, LeaveError, RequestId};
use super::employee::{Employee, EmployeeError};
use super::request::LeaveRequest;
use super::views::{BalanceView, HistoryView, LeaveSummaryView, WorkflowView};

/// Error raised by the in-memory registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("employee {0} is already registered")]
    DuplicateEmployee(EmployeeId),
    #[error("employee {0} not found")]
    UnknownEmployee(EmployeeId),
    #[error("request {0} already exists")]
    DuplicateRequest(RequestId),
    #[error("request {0} not found")]
    RequestNotFound(RequestId),
    #[error(transparent)]
    Leave(#[from] LeaveError),
    #[error(transparent)]
    Employee(#[from] EmployeeError),
    #[error(transparent)]
    Balance(#[from] BalanceError),
}

/// In-memory store of employees and their leave requests.
#[derive(Debug, Default)]
pub struct LeaveRegistry {
    employees: BTreeMap<EmployeeId, Employee>,
    requests: BTreeMap<RequestId, LeaveRequest>,
}

impl LeaveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_employee(&mut self, employee: Employee) -> Result<EmployeeId, RegistryError> {
        let id = employee.id();
        if self.employees.contains_key(&id) {
            return Err(RegistryError::DuplicateEmployee(id));
        }

        info!(employee = %id, name = %employee.full_name(), "employee registered");
        self.employees.insert(id, employee);
        Ok(id)
    }

    pub fn employee(&self, id: EmployeeId) -> Result<&Employee, RegistryError> {
        self.employees
            .get(&id)
            .ok_or(RegistryError::UnknownEmployee(id))
    }

    pub fn employee_mut(&mut self, id: EmployeeId) -> Result<&mut Employee, RegistryError> {
        self.employees
            .get_mut(&id)
            .ok_or(RegistryError::UnknownEmployee(id))
    }

    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Stores a request for a registered employee.
    pub fn submit(&mut self, request: LeaveRequest) -> Result<RequestId, RegistryError> {
        let id = request.id();
        if !self.employees.contains_key(&request.employee_id()) {
            return Err(RegistryError::UnknownEmployee(request.employee_id()));
        }
        if self.requests.contains_key(&id) {
            return Err(RegistryError::DuplicateRequest(id));
        }

        info!(
            request = %id,
            employee = %request.employee_id(),
            leave_type = request.leave_type().name(),
            days = request.calculate_leave_days(),
            "leave request submitted"
        );
        self.requests.insert(id, request);
        Ok(id)
    }

    pub fn request(&self, id: RequestId) -> Result<&LeaveRequest, RegistryError> {
        self.requests
            .get(&id)
            .ok_or(RegistryError::RequestNotFound(id))
    }

    pub fn request_mut(&mut self, id: RequestId) -> Result<&mut LeaveRequest, RegistryError> {
        self.requests
            .get_mut(&id)
            .ok_or(RegistryError::RequestNotFound(id))
    }

    pub fn approve(&mut self, id: RequestId, approver: &str) -> Result<(), RegistryError> {
        self.request_mut(id)?.approve(approver)?;
        Ok(())
    }

    pub fn reject(
        &mut self,
        id: RequestId,
        approver: &str,
        reason: impl Into<String>,
    ) -> Result<(), RegistryError> {
        self.request_mut(id)?.reject(approver, reason);
        Ok(())
    }

    pub fn requests_for(&self, employee_id: EmployeeId) -> Vec<&LeaveRequest> {
        self.requests
            .values()
            .filter(|request| request.employee_id() == employee_id)
            .collect()
    }

    /// Every request, longest first; equal durations keep id order.
    pub fn by_duration_desc(&self) -> Vec<&LeaveRequest> {
        let mut requests: Vec<&LeaveRequest> = self.requests.values().collect();
        requests.sort_by(|a, b| b.calculate_leave_days().cmp(&a.calculate_leave_days()));
        requests
    }

    pub fn summaries(&self) -> Vec<LeaveSummaryView> {
        self.by_duration_desc()
            .into_iter()
            .filter_map(|request| {
                self.employees
                    .get(&request.employee_id())
                    .map(|employee| LeaveSummaryView::new(request, employee))
            })
            .collect()
    }

    pub fn balance_view(
        &self,
        employee_id: EmployeeId,
        today: NaiveDate,
    ) -> Result<BalanceView, RegistryError> {
        Ok(BalanceView::new(self.employee(employee_id)?, today))
    }

    pub fn history_view(&self, id: RequestId) -> Result<HistoryView, RegistryError> {
        let request = self.request(id)?;
        let employee = self.employee(request.employee_id())?;
        Ok(HistoryView::new(request, employee))
    }

    /// Workflow state for unpaid requests; `None` for other leave types.
    pub fn workflow_view(&self, id: RequestId) -> Result<Option<WorkflowView>, RegistryError> {
        Ok(WorkflowView::new(self.request(id)?))
    }
}
