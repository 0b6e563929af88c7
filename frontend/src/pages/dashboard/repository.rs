use crate::api::{ApiClient, ApiError, DashboardSnapshot, TaskRecord, TilesQuery};
use crate::components::charts::Slice;
use crate::navigation::{DomainTerm, ViewRequest};
use crate::pages::dashboard::range::DateSpan;
use crate::pages::dashboard::utils::{format_count, format_hours, format_leave_days};

pub async fn fetch_tiles(
    api: &ApiClient,
    query: &TilesQuery,
) -> Result<DashboardSnapshot, ApiError> {
    api.get_tiles_data(query).await
}

/// A labelled value with an optional host view behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterTile {
    pub label: &'static str,
    pub value: String,
    pub link: Option<ViewRequest>,
}

pub fn attendance_metrics(snapshot: &DashboardSnapshot) -> Vec<(&'static str, String)> {
    vec![
        ("This Month", format_hours(snapshot.my_attendance)),
        ("Today", format_hours(snapshot.hours_today)),
        (
            "Ongoing",
            format_hours(snapshot.last_attendance_worked_hours),
        ),
        ("Overtime", format_hours(snapshot.total_overtime)),
        ("Total Days", format_count(snapshot.total_days_present)),
    ]
}

pub fn leave_metrics(snapshot: &DashboardSnapshot) -> Vec<(&'static str, String)> {
    vec![
        (
            "Total Leaves Taken",
            format_leave_days(snapshot.total_leaves_taken),
        ),
        (
            "Leaves This Month",
            format_leave_days(snapshot.leaves_this_month),
        ),
        (
            "Pending Leave Requests",
            format_count(snapshot.pending_leaves_count),
        ),
    ]
}

// Chart palettes, matching the host theme.
const ATTENDANCE_COLORS: [&str; 4] = ["#36A2EB", "#4BC0C0", "#FFCE56", "#FF6384"];
const LEAVE_COLORS: [&str; 3] = ["#36A2EB", "#FF6384", "#FFCE56"];

pub fn attendance_chart_series(snapshot: &DashboardSnapshot) -> Vec<Slice> {
    let values = [
        ("Month Total", snapshot.my_attendance),
        ("Today", snapshot.hours_today),
        ("Ongoing", snapshot.last_attendance_worked_hours),
        ("Overtime", snapshot.total_overtime),
    ];
    values
        .iter()
        .zip(ATTENDANCE_COLORS)
        .map(|((label, value), color)| Slice {
            label: (*label).into(),
            value: value.unwrap_or(0.0),
            color,
        })
        .collect()
}

pub fn leave_chart_series(snapshot: &DashboardSnapshot) -> Vec<Slice> {
    let values = [
        ("Total Taken", snapshot.total_leaves_taken),
        ("This Month", snapshot.leaves_this_month),
        (
            "Pending",
            snapshot.pending_leaves_count.map(|c| c as f64),
        ),
    ];
    values
        .iter()
        .zip(LEAVE_COLORS)
        .map(|((label, value), color)| Slice {
            label: (*label).into(),
            value: value.unwrap_or(0.0),
            color,
        })
        .collect()
}

fn span_terms(field: &str, span: Option<DateSpan>) -> Vec<DomainTerm> {
    match span {
        Some(DateSpan { start, end }) => vec![
            DomainTerm::new(field, ">=", start.format("%Y-%m-%d").to_string()),
            DomainTerm::new(field, "<=", end.format("%Y-%m-%d").to_string()),
        ],
        None => Vec::new(),
    }
}

/// Attendance list bounded by the active range, optionally per gender.
pub fn attendance_view(span: Option<DateSpan>, gender: Option<&str>) -> ViewRequest {
    let mut request = ViewRequest::list("hr.attendance");
    request.domain.extend(span_terms("check_in", span));
    if let Some(gender) = gender {
        request = request.with_term(DomainTerm::new("employee_id.gender", "=", gender));
    }
    request
}

pub fn leave_view(span: Option<DateSpan>, gender: Option<&str>) -> ViewRequest {
    let mut request = ViewRequest::list("hr.leave");
    request.domain.extend(span_terms("request_date_from", span));
    if let Some(gender) = gender {
        request = request.with_term(DomainTerm::new("employee_id.gender", "=", gender));
    }
    request
}

pub fn task_view(task: &TaskRecord) -> Option<ViewRequest> {
    let id = task.id?;
    Some(ViewRequest::list("project.task").with_term(DomainTerm::new("id", "=", id)))
}

fn open_tasks_view() -> ViewRequest {
    ViewRequest::list("project.task").with_term(DomainTerm::new("is_closed", "=", false))
}

fn open_projects_view() -> ViewRequest {
    ViewRequest::list("project.project").with_term(DomainTerm::new(
        "last_update_status",
        "!=",
        "done",
    ))
}

pub fn employee_counters(snapshot: &DashboardSnapshot) -> Vec<CounterTile> {
    let counts = snapshot.project_task_count.clone().unwrap_or_default();
    vec![
        CounterTile {
            label: "Projects",
            value: counts.project_count.to_string(),
            link: Some(ViewRequest::list("project.project")),
        },
        CounterTile {
            label: "Tasks",
            value: counts.task_count.to_string(),
            link: Some(ViewRequest::list("project.task")),
        },
        CounterTile {
            label: "Remaining Projects",
            value: counts.remaining_project_count.to_string(),
            link: Some(open_projects_view()),
        },
        CounterTile {
            label: "Remaining Tasks",
            value: counts.remaining_task_count.to_string(),
            link: Some(open_tasks_view()),
        },
    ]
}

pub fn manager_counters(snapshot: &DashboardSnapshot, span: Option<DateSpan>) -> Vec<CounterTile> {
    let attendance = snapshot.manager_attendance.clone().unwrap_or_default();
    let leaves = snapshot.manager_leaves.clone().unwrap_or_default();
    let projects = snapshot.manager_project_count.clone().unwrap_or_default();
    vec![
        CounterTile {
            label: "Present",
            value: format!("{:.0}", attendance.total),
            link: Some(attendance_view(span, None)),
        },
        CounterTile {
            label: "Men Present",
            value: format!("{:.0}", attendance.men),
            link: Some(attendance_view(span, Some("male"))),
        },
        CounterTile {
            label: "Women Present",
            value: format!("{:.0}", attendance.women),
            link: Some(attendance_view(span, Some("female"))),
        },
        CounterTile {
            label: "On Leave",
            value: format_leave_days(Some(leaves.total)),
            link: Some(leave_view(span, None)),
        },
        CounterTile {
            label: "Men On Leave",
            value: format_leave_days(Some(leaves.men)),
            link: Some(leave_view(span, Some("male"))),
        },
        CounterTile {
            label: "Women On Leave",
            value: format_leave_days(Some(leaves.women)),
            link: Some(leave_view(span, Some("female"))),
        },
        CounterTile {
            label: "Projects",
            value: projects.total_projects.to_string(),
            link: Some(ViewRequest::list("project.project")),
        },
        CounterTile {
            label: "Tasks",
            value: projects.total_tasks.to_string(),
            link: Some(ViewRequest::list("project.task")),
        },
        CounterTile {
            label: "Remaining Projects",
            value: projects.remaining_projects.to_string(),
            link: Some(open_projects_view()),
        },
        CounterTile {
            label: "Remaining Tasks",
            value: projects.remaining_tasks.to_string(),
            link: Some(open_tasks_view()),
        },
    ]
}
