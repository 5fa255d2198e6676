use chrono::{Duration, NaiveDate};

use super::common::*;
use crate::workflows::leave::{
    LeaveDetails, LeaveError, LeaveRequest, LeaveStatus, LeaveType, RequestId, TravelDetails,
    SYSTEM_ACTOR,
};

fn sick(days: i64) -> LeaveRequest {
    LeaveRequest::sick(
        RequestId(101),
        ALICE,
        today(),
        days_from_today(days - 1),
        "Severe flu",
    )
    .expect("valid period")
}

#[test]
fn new_requests_start_pending_with_creation_entry() {
    let request = sick(2);
    assert_eq!(request.status(), &LeaveStatus::Pending);
    assert_eq!(request.leave_type(), LeaveType::Sick);
    assert_eq!(request.history().len(), 1);

    let created = request.history().latest().expect("creation entry");
    assert_eq!(created.changed_by(), SYSTEM_ACTOR);
    assert_eq!(created.from_status(), None);
    assert_eq!(created.to_status(), &LeaveStatus::Pending);
    assert!(created.to_string().contains("System: Created -> Pending"));
}

#[test]
fn inverted_periods_are_refused() {
    let err = LeaveRequest::vacation(RequestId(1), ALICE, days_from_today(5), today())
        .expect_err("end before start");
    assert!(matches!(err, LeaveError::EndBeforeStart { .. }));
}

#[test]
fn short_sick_leave_needs_no_certificate() {
    let request = sick(3);
    assert_eq!(request.calculate_leave_days(), 3);
    assert!(!request.requires_documentation());
    assert!(request.is_eligible());
}

#[test]
fn hospitalisation_requires_documentation() {
    let mut request = sick(1);
    request.mark_hospitalized().expect("sick leave");
    assert!(request.requires_documentation());
    assert!(!request.is_eligible());

    request
        .attach_medical_certificate(certificate())
        .expect("sick leave");
    assert!(request.is_eligible());
    let note = request.history().latest().and_then(|change| change.note());
    assert_eq!(note, Some("Medical certificate attached"));
    assert!(!request.history().latest().expect("entry").is_transition());
}

#[test]
fn certificates_expire_after_thirty_days() {
    let cert = certificate();
    assert!(cert.certificate_number().starts_with("MC-"));
    assert!(cert.is_valid(today()));
    assert!(cert.is_valid(days_from_today(30)));
    assert!(!cert.is_valid(days_from_today(31)));
    assert!(!cert.is_valid(days_from_today(-1)));
    assert_ne!(cert.certificate_number(), certificate().certificate_number());
}

#[test]
fn vacation_duration_and_notice_rules() {
    let mut request = LeaveRequest::vacation(
        RequestId(201),
        BOB,
        days_from_today(30),
        days_from_today(40),
    )
    .expect("valid period")
    .with_requested_on(today());
    assert_eq!(request.calculate_leave_days(), 11);
    assert_eq!(request.has_advance_notice(), Ok(true));
    assert_eq!(request.exceeds_max_duration(), Ok(false));
    assert!(request.is_eligible());
    assert!(!request.requires_documentation());

    let mut travel = TravelDetails::new("Tokyo, Japan", "Hotel", "Sarah Smith", "+1-555-0200");
    travel.mark_as_international();
    request.set_travel_details(travel).expect("vacation");
    let LeaveDetails::Vacation(vacation) = request.details() else {
        panic!("expected vacation details");
    };
    assert!(vacation.travel_details().is_some_and(|t| t.international));

    let rushed = LeaveRequest::vacation(RequestId(202), BOB, days_from_today(13), days_from_today(34))
        .expect("valid period")
        .with_requested_on(today());
    assert_eq!(rushed.calculate_leave_days(), 22);
    assert_eq!(rushed.has_advance_notice(), Ok(false));
    assert_eq!(rushed.exceeds_max_duration(), Ok(true));
    assert!(!rushed.is_eligible());
}

#[test]
fn maternity_covers_twelve_weeks_with_one_extension() {
    let start = days_from_today(14);
    let mut request = LeaveRequest::maternity(RequestId(301), ALICE, start, days_from_today(28))
        .expect("valid period");
    assert_eq!(request.calculate_leave_days(), 84);
    assert_eq!(request.is_prenatal(), Ok(true));
    assert_eq!(request.weeks_before_delivery(), Ok(2));
    assert!(request.is_eligible());
    assert!(request.requires_documentation());

    assert_eq!(request.request_extension(0), Err(LeaveError::EmptyExtension));
    assert_eq!(
        request.request_extension(5),
        Err(LeaveError::ExtensionTooLong {
            requested: 5,
            max: 4
        })
    );
    assert_eq!(request.calculate_leave_days(), 84);

    request.request_extension(4).expect("extension granted");
    assert_eq!(request.calculate_leave_days(), 112);
    assert_eq!(
        request.history().latest().and_then(|change| change.note()),
        Some("Extension requested: 4 weeks")
    );
    assert_eq!(
        request.request_extension(1),
        Err(LeaveError::ExtensionAlreadyGranted { weeks: 4 })
    );
    assert_eq!(request.calculate_leave_days(), 112);
}

#[test]
fn maternity_after_delivery_is_not_prenatal() {
    let request = LeaveRequest::maternity(RequestId(302), ALICE, today(), days_from_today(-3))
        .expect("valid period");
    assert_eq!(request.is_prenatal(), Ok(false));
    assert_eq!(request.weeks_before_delivery(), Ok(0));
}

#[test]
fn paternity_window_is_eight_weeks_from_birth() {
    let birth = today();
    let standard =
        LeaveRequest::paternity(RequestId(401), BOB, days_from_today(3), birth, false)
            .expect("valid period");
    assert_eq!(standard.calculate_leave_days(), 10);
    assert_eq!(standard.is_within_valid_period(), Ok(true));

    let adoption = LeaveRequest::paternity(RequestId(402), BOB, birth, birth, true)
        .expect("valid period");
    assert_eq!(adoption.calculate_leave_days(), 14);

    let last_day =
        LeaveRequest::paternity(RequestId(403), BOB, days_from_today(62), birth, false)
            .expect("valid period");
    assert_eq!(last_day.is_within_valid_period(), Ok(true));

    let early = LeaveRequest::paternity(RequestId(404), BOB, days_from_today(-1), birth, false)
        .expect("valid period");
    assert_eq!(early.is_within_valid_period(), Ok(false));
    assert!(!early.is_eligible());
}

#[test]
fn bereavement_length_depends_on_relationship() {
    let extended = LeaveRequest::bereavement(RequestId(502), ALICE, today(), "Cousin", "Sam")
        .expect("valid period");
    assert_eq!(extended.calculate_leave_days(), 3);

    let mut parent =
        LeaveRequest::bereavement(RequestId(501), ALICE, today(), "Parent", "John")
            .expect("valid period");
    assert_eq!(parent.calculate_leave_days(), 5);
    parent.mark_requires_travel().expect("bereavement");
    parent.mark_requires_travel().expect("bereavement");
    assert_eq!(parent.calculate_leave_days(), 7);
    assert_eq!(parent.end_date(), days_from_today(6));
    assert!(parent.is_eligible());
    assert!(parent.requires_documentation());
}

#[test]
fn derived_end_dates_past_the_calendar_are_refused() {
    let result =
        LeaveRequest::bereavement(RequestId(503), ALICE, NaiveDate::MAX, "Sibling", "Ann");
    assert!(matches!(
        result,
        Err(LeaveError::DateOutOfRange { days: 4, .. })
    ));
}

#[test]
fn extensions_that_overflow_the_calendar_leave_the_request_untouched() {
    let last_start = NaiveDate::MAX - Duration::days(83);
    let mut maternity = LeaveRequest::maternity(RequestId(303), ALICE, last_start, last_start)
        .expect("ends on the last supported day");
    let entries = maternity.history().len();

    assert_eq!(
        maternity.request_extension(1),
        Err(LeaveError::DateOutOfRange {
            from: NaiveDate::MAX,
            days: 7
        })
    );
    assert_eq!(maternity.end_date(), NaiveDate::MAX);
    assert_eq!(maternity.history().len(), entries);
    let LeaveDetails::Maternity(details) = maternity.details() else {
        panic!("expected maternity details");
    };
    assert_eq!(details.extension_weeks(), 0);

    let mut bereavement = LeaveRequest::bereavement(
        RequestId(504),
        ALICE,
        NaiveDate::MAX - Duration::days(4),
        "Parent",
        "John",
    )
    .expect("ends on the last supported day");
    assert!(matches!(
        bereavement.mark_requires_travel(),
        Err(LeaveError::DateOutOfRange { days: 2, .. })
    ));
    assert_eq!(bereavement.end_date(), NaiveDate::MAX);
    let LeaveDetails::Bereavement(details) = bereavement.details() else {
        panic!("expected bereavement details");
    };
    assert!(!details.requires_travel());
}

#[test]
fn study_leave_beyond_ten_days_needs_sponsorship() {
    let mut request = LeaveRequest::study(
        RequestId(701),
        BOB,
        today(),
        days_from_today(11),
        "Data Analytics",
        "State University",
    )
    .expect("valid period");
    assert!(!request.is_eligible());
    assert_eq!(request.is_paid(), Ok(false));

    request.mark_job_related().expect("study leave");
    assert_eq!(request.is_paid(), Ok(true));
    assert!(!request.is_eligible());

    request.mark_company_sponsored().expect("study leave");
    assert!(request.is_eligible());
    assert!(request.requires_documentation());
}

#[test]
fn variant_operations_refuse_other_leave_types() {
    let mut request = sick(2);
    let before = request.clone();

    assert_eq!(
        request.request_extension(2),
        Err(LeaveError::NotApplicable {
            operation: "request_extension",
            leave_type: LeaveType::Sick,
        })
    );
    assert!(request.mark_requires_travel().is_err());
    assert!(request.has_advance_notice().is_err());
    assert!(request.add_approval("Mike", "Manager", true, None).is_err());
    assert!(request.approval_workflow().is_none());
    assert_eq!(request, before);
}

#[test]
fn reject_records_reason_and_actor() {
    let mut request = sick(2);
    request.reject("Manager Jane", "Team at capacity");

    assert_eq!(request.status().to_string(), "Rejected: Team at capacity");
    let change = request.history().latest().expect("rejection entry");
    assert_eq!(change.changed_by(), "Manager Jane");
    assert_eq!(change.from_status(), Some(&LeaveStatus::Pending));
    assert!(change.is_transition());
    assert_eq!(request.history().len(), 2);
}
