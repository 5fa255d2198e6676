use chrono::{Duration, NaiveDate};
use clap::Args;
use leave_tracker::config::{parse_date, AppConfig};
use leave_tracker::error::AppError;
use leave_tracker::workflows::leave::{
    BalanceView, ContactInfo, Employee, EmployeeId, HistoryView, LeaveError, LeaveRegistry,
    LeaveRequest, LeaveSummaryView, LeaveType, MedicalCertificate, PolicyView, RegistryError,
    RequestId, TravelDetails, WorkflowView, HR_ROLE, MANAGER_ROLE, SYSTEM_ACTOR,
};
use serde::Serialize;
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (YYYY-MM-DD). Defaults to LEAVE_AS_OF or today.
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Include each request's status history in the output.
    #[arg(long)]
    pub(crate) include_history: bool,
}

#[derive(Args, Debug)]
pub(crate) struct PolicyArgs {
    /// Hire date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) hire_date: NaiveDate,
    /// Evaluation date (YYYY-MM-DD). Defaults to LEAVE_AS_OF or today.
    #[arg(long, value_parser = crate::cli::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct DemoReport {
    as_of: NaiveDate,
    balances: Vec<BalanceView>,
    requests: Vec<LeaveSummaryView>,
    workflows: Vec<WorkflowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    histories: Option<Vec<HistoryView>>,
}

const ALICE: EmployeeId = EmployeeId(1);
const BOB: EmployeeId = EmployeeId(2);
const CAROL: EmployeeId = EmployeeId(3);

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| config.leave.today());
    let registry = build_case_study(today)?;
    let report = demo_report(&registry, today, args.include_history)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub(crate) fn run_policy(args: PolicyArgs, config: &AppConfig) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| config.leave.today());
    let view = PolicyView::new(args.hire_date, today);

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn demo_report(
    registry: &LeaveRegistry,
    today: NaiveDate,
    include_history: bool,
) -> Result<DemoReport, RegistryError> {
    let balances = registry
        .employees()
        .map(|employee| registry.balance_view(employee.id(), today))
        .collect::<Result<Vec<_>, _>>()?;

    let mut workflows = Vec::new();
    let mut histories = Vec::new();
    for request in registry.by_duration_desc() {
        if let Some(view) = registry.workflow_view(request.id())? {
            workflows.push(view);
        }
        if include_history {
            histories.push(registry.history_view(request.id())?);
        }
    }

    Ok(DemoReport {
        as_of: today,
        balances,
        requests: registry.summaries(),
        workflows,
        histories: include_history.then_some(histories),
    })
}

fn date(base: NaiveDate, offset_days: i64) -> Result<NaiveDate, LeaveError> {
    base.checked_add_signed(Duration::days(offset_days))
        .ok_or(LeaveError::DateOutOfRange {
            from: base,
            days: offset_days,
        })
}

/// Three employees with one request of each kind, walked through certificates, travel,
/// sign-offs, extensions and a rejection.
pub(crate) fn build_case_study(today: NaiveDate) -> Result<LeaveRegistry, AppError> {
    let mut registry = LeaveRegistry::new();

    let mut alice = Employee::new(
        ALICE,
        "Alice",
        "Johnson",
        "alice@company.com",
        "Engineering",
        parse_date("2020-03-15")?,
        today,
    )?;
    let mut contact = ContactInfo::new("+1-555-0101", "123 Tech Street, San Francisco");
    contact.set_emergency_contact("John Johnson", "+1-555-0102");
    alice.set_contact(contact);
    registry.register_employee(alice)?;

    let bob = Employee::new(
        BOB,
        "Bob",
        "Smith",
        "bob@company.com",
        "Marketing",
        parse_date("2018-08-01")?,
        today,
    )?;
    registry.register_employee(bob)?;

    let carol = Employee::new(
        CAROL,
        "Carol",
        "Williams",
        "carol@company.com",
        "HR",
        parse_date("2023-01-10")?,
        today,
    )?;
    registry.register_employee(carol)?;

    registry
        .employee_mut(BOB)?
        .leave_balance_mut()
        .deduct(LeaveType::Vacation, 5)?;

    let mut sick =
        LeaveRequest::sick(RequestId(101), ALICE, today, date(today, 5)?, "Severe flu")?
            .with_requested_on(today);
    sick.attach_medical_certificate(MedicalCertificate::new(
        "Dr. Smith",
        "City Hospital",
        "Influenza Type A",
        today,
    ))?;
    registry.submit(sick)?;
    registry.approve(RequestId(101), "Manager Jane")?;

    let mut vacation =
        LeaveRequest::vacation(RequestId(201), BOB, date(today, 30)?, date(today, 40)?)?
            .with_requested_on(today);
    let mut travel = TravelDetails::new("Tokyo, Japan", "Hotel", "Sarah Smith", "+1-555-0200");
    travel.mark_as_international();
    vacation.set_travel_details(travel)?;
    registry.submit(vacation)?;

    let long_vacation =
        LeaveRequest::vacation(RequestId(202), CAROL, date(today, 7)?, date(today, 31)?)?
            .with_requested_on(today);
    registry.submit(long_vacation)?;
    registry.reject(
        RequestId(202),
        "Manager Mike",
        "Exceeds the maximum consecutive vacation days",
    )?;

    let mut maternity =
        LeaveRequest::maternity(RequestId(301), ALICE, date(today, 60)?, date(today, 74)?)?
            .with_requested_on(today);
    maternity.request_extension(2)?;
    registry.submit(maternity)?;

    let paternity =
        LeaveRequest::paternity(RequestId(401), BOB, date(today, 3)?, date(today, -5)?, false)?
            .with_requested_on(today);
    registry.submit(paternity)?;
    registry.approve(RequestId(401), "Manager Jane")?;

    let mut bereavement =
        LeaveRequest::bereavement(RequestId(501), ALICE, today, "Parent", "John")?
            .with_requested_on(today);
    bereavement.mark_requires_travel()?;
    registry.submit(bereavement)?;

    let mut unpaid = LeaveRequest::unpaid(
        RequestId(601),
        CAROL,
        date(today, 10)?,
        date(today, 20)?,
        "Extended family vacation abroad",
    )?
    .with_requested_on(today);
    unpaid.add_approval(
        "Manager Mike",
        MANAGER_ROLE,
        true,
        Some("Approved, good timing"),
    )?;
    unpaid.add_approval("HR Helen", HR_ROLE, true, Some("All policies met"))?;
    registry.submit(unpaid)?;
    registry.approve(RequestId(601), SYSTEM_ACTOR)?;

    let mut study = LeaveRequest::study(
        RequestId(701),
        CAROL,
        date(today, 45)?,
        date(today, 56)?,
        "Data Analytics Certificate",
        "State University",
    )?
    .with_requested_on(today);
    study.mark_company_sponsored()?;
    study.mark_job_related()?;
    registry.submit(study)?;

    info!(
        employees = registry.employees().count(),
        requests = registry.by_duration_desc().len(),
        "case study assembled"
    );
    Ok(registry)
}
