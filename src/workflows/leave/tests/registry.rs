use super::common::*;
use crate::workflows::leave::{
    EmployeeId, LeaveError, LeaveRequest, LeaveType, RegistryError, RequestId, HR_ROLE,
    MANAGER_ROLE,
};

#[test]
fn register_refuses_duplicate_employees() {
    let mut registry = registry_with_staff();
    match registry.register_employee(alice()) {
        Err(RegistryError::DuplicateEmployee(id)) => assert_eq!(id, ALICE),
        other => panic!("expected duplicate employee, got {other:?}"),
    }
    assert_eq!(registry.employees().count(), 2);
}

#[test]
fn submit_requires_known_employee_and_unique_id() {
    let mut registry = registry_with_staff();
    let stranger =
        LeaveRequest::bereavement(RequestId(1), EmployeeId(99), today(), "Parent", "John")
            .expect("valid period");
    assert!(matches!(
        registry.submit(stranger),
        Err(RegistryError::UnknownEmployee(EmployeeId(99)))
    ));

    let first = LeaveRequest::bereavement(RequestId(1), ALICE, today(), "Parent", "John")
        .expect("valid period");
    registry.submit(first.clone()).expect("first submission");
    assert!(matches!(
        registry.submit(first),
        Err(RegistryError::DuplicateRequest(RequestId(1)))
    ));
    assert!(matches!(
        registry.request(RequestId(2)),
        Err(RegistryError::RequestNotFound(RequestId(2)))
    ));
}

#[test]
fn approve_surfaces_workflow_refusals() {
    let mut registry = registry_with_staff();
    let mut unpaid = LeaveRequest::unpaid(
        RequestId(601),
        BOB,
        days_from_today(10),
        days_from_today(20),
        "Sabbatical travel",
    )
    .expect("valid period");
    unpaid
        .add_approval("Manager Mike", MANAGER_ROLE, true, None)
        .expect("unpaid leave");
    registry.submit(unpaid).expect("submitted");

    match registry.approve(RequestId(601), "System") {
        Err(RegistryError::Leave(LeaveError::ApprovalsOutstanding { missing })) => {
            assert_eq!(missing, vec![HR_ROLE]);
        }
        other => panic!("expected outstanding approvals, got {other:?}"),
    }

    let view = registry
        .workflow_view(RequestId(601))
        .expect("request exists")
        .expect("unpaid workflow");
    assert_eq!(view.leave_days, 11);
    assert_eq!(view.missing_roles, vec![HR_ROLE]);
    assert!(!view.fully_approved);
}

#[test]
fn requests_sort_longest_first_with_stable_ties() {
    let mut registry = registry_with_staff();
    registry
        .submit(
            LeaveRequest::bereavement(RequestId(3), ALICE, today(), "Parent", "John")
                .expect("valid period"),
        )
        .expect("submitted");
    registry
        .submit(
            LeaveRequest::maternity(RequestId(2), ALICE, today(), days_from_today(7))
                .expect("valid period"),
        )
        .expect("submitted");
    registry
        .submit(
            LeaveRequest::sick(RequestId(1), BOB, today(), days_from_today(4), "Flu")
                .expect("valid period"),
        )
        .expect("submitted");

    let ids: Vec<RequestId> = registry
        .by_duration_desc()
        .iter()
        .map(|request| request.id())
        .collect();
    assert_eq!(ids, vec![RequestId(2), RequestId(1), RequestId(3)]);

    let summaries = registry.summaries();
    assert_eq!(summaries[0].leave_type, LeaveType::Maternity);
    assert_eq!(summaries[1].employee_name, "Bob Smith");
    assert!(summaries[1].requires_documentation);
    assert!(!summaries[1].eligible);

    assert_eq!(registry.requests_for(ALICE).len(), 2);
    assert!(registry.workflow_view(RequestId(3)).expect("exists").is_none());
}

#[test]
fn views_reflect_balances_and_history() {
    let mut registry = registry_with_staff();
    registry
        .employee_mut(BOB)
        .expect("bob registered")
        .leave_balance_mut()
        .deduct(LeaveType::Vacation, 5)
        .expect("vacation available");

    let view = registry.balance_view(BOB, today()).expect("bob registered");
    assert_eq!(view.tenure_years, 6);
    let vacation = view
        .entries
        .iter()
        .find(|entry| entry.leave_type == LeaveType::Vacation)
        .expect("vacation entry");
    assert_eq!((vacation.allotted, vacation.used, vacation.remaining), (20, 5, 15));

    registry
        .submit(
            LeaveRequest::bereavement(RequestId(9), BOB, today(), "Sibling", "Ann")
                .expect("valid period"),
        )
        .expect("submitted");
    registry
        .reject(RequestId(9), "Manager Jane", "Duplicate request")
        .expect("request exists");
    let history = registry.history_view(RequestId(9)).expect("request exists");
    assert_eq!(history.employee_name, "Bob Smith");
    assert_eq!(history.leave_type_label, "Bereavement Leave");
    assert_eq!(history.changes.len(), 2);
}
