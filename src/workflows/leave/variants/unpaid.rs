use serde::{Deserialize, Serialize};

use super::super::approval::ApprovalWorkflow;

pub const MAX_UNPAID_LEAVE_DAYS: i64 = 30;
pub const DOCUMENTATION_THRESHOLD_DAYS: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnpaidLeave {
    reason: String,
    workflow: ApprovalWorkflow,
}

impl UnpaidLeave {
    pub(crate) fn new(reason: String) -> Self {
        Self {
            reason,
            workflow: ApprovalWorkflow::new(),
        }
    }

    pub(crate) fn exceeds_max_duration(leave_days: i64) -> bool {
        leave_days > MAX_UNPAID_LEAVE_DAYS
    }

    pub(crate) fn requires_documentation(leave_days: i64) -> bool {
        leave_days > DOCUMENTATION_THRESHOLD_DAYS
    }

    pub(crate) fn is_eligible(&self, leave_days: i64) -> bool {
        !Self::exceeds_max_duration(leave_days) && self.workflow.is_fully_approved(leave_days)
    }

    pub(crate) fn workflow_mut(&mut self) -> &mut ApprovalWorkflow {
        &mut self.workflow
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn workflow(&self) -> &ApprovalWorkflow {
        &self.workflow
    }
}
