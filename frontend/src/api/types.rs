use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters of one `get_tiles_data` call. Every user-triggered refresh
/// sends the full filter state; the aggregation service owns the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TilesQuery {
    pub filter_type: String,
    pub filter_value: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub filter_date: Option<NaiveDate>,
    pub assignee: Option<i64>,
    pub deadline: Option<NaiveDate>,
    pub status: Option<i64>,
}

impl TilesQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("filter_type", self.filter_type.clone()),
            ("filter_value", self.filter_value.clone()),
        ];
        if let Some(start) = self.start_date {
            params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.filter_date {
            params.push(("filter_date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(assignee) = self.assignee {
            params.push(("assignee", assignee.to_string()));
        }
        if let Some(deadline) = self.deadline {
            params.push(("deadline", deadline.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        params
    }
}

/// One task row, exactly as the aggregation service returns it. `assignees`
/// is only populated for the manager view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonalDetails {
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub employee_email: Option<String>,
    #[serde(default)]
    pub employee_phone: Option<String>,
    #[serde(default)]
    pub employee_job: Option<String>,
    #[serde(default)]
    pub employee_department: Option<String>,
    #[serde(default)]
    pub employee_image: Option<String>,
}

/// Flat org-chart node: `pid` links to the parent's `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyNode {
    pub id: i64,
    #[serde(default)]
    pub pid: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

/// Entry of the manager filter selects (assignees, task stages).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub name: String,
}

/// Headcount or day totals broken down by gender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GenderTally {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub men: f64,
    #[serde(default)]
    pub women: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProjectTaskCount {
    #[serde(default)]
    pub project_count: i64,
    #[serde(default)]
    pub task_count: i64,
    #[serde(default)]
    pub remaining_project_count: i64,
    #[serde(default)]
    pub remaining_task_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ManagerProjectCount {
    #[serde(default)]
    pub total_projects: i64,
    #[serde(default)]
    pub total_tasks: i64,
    #[serde(default)]
    pub remaining_projects: i64,
    #[serde(default)]
    pub remaining_tasks: i64,
}

/// The response of one fetch. Created fresh per refresh and fully replaces
/// the previous snapshot. Every field is optional on the wire; missing
/// values render as a placeholder, never as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub is_manager: bool,
    #[serde(default)]
    pub filter_period: Option<String>,
    #[serde(default)]
    pub employee_hierarchy: Vec<HierarchyNode>,
    #[serde(default)]
    pub assignees: Vec<SelectOption>,
    #[serde(default)]
    pub statuses: Vec<SelectOption>,

    // Employee tiles
    #[serde(default)]
    pub my_attendance: Option<f64>,
    #[serde(default)]
    pub hours_today: Option<f64>,
    #[serde(default)]
    pub hours_previously_today: Option<f64>,
    #[serde(default)]
    pub last_attendance_worked_hours: Option<f64>,
    #[serde(default)]
    pub total_overtime: Option<f64>,
    #[serde(default)]
    pub total_days_present: Option<i64>,
    #[serde(default)]
    pub total_leaves_taken: Option<f64>,
    #[serde(default)]
    pub leaves_this_month: Option<f64>,
    #[serde(default)]
    pub pending_leaves_count: Option<i64>,
    #[serde(default)]
    pub project_tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub project_task_count: Option<ProjectTaskCount>,
    #[serde(default)]
    pub personal_details: Option<PersonalDetails>,

    // Manager tiles
    #[serde(default)]
    pub manager_attendance: Option<GenderTally>,
    #[serde(default)]
    pub manager_leaves: Option<GenderTally>,
    #[serde(default)]
    pub manager_project_count: Option<ManagerProjectCount>,
    #[serde(default)]
    pub manager_projects: Vec<TaskRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn tiles_query_serializes_only_set_params() {
        let query = TilesQuery {
            filter_type: "month".into(),
            filter_value: "current".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
            filter_date: None,
            assignee: None,
            deadline: None,
            status: Some(7),
        };
        let params = query.to_params();
        assert_eq!(
            params,
            vec![
                ("filter_type", "month".to_string()),
                ("filter_value", "current".to_string()),
                ("start_date", "2024-03-01".to_string()),
                ("end_date", "2024-03-31".to_string()),
                ("status", "7".to_string()),
            ]
        );
    }

    #[test]
    fn snapshot_tolerates_missing_fields() {
        let snapshot: DashboardSnapshot = serde_json::from_value(json!({})).unwrap();
        assert!(!snapshot.is_manager);
        assert!(snapshot.my_attendance.is_none());
        assert!(snapshot.project_tasks.is_empty());
        assert!(snapshot.personal_details.is_none());
    }

    #[test]
    fn snapshot_parses_employee_payload() {
        let snapshot: DashboardSnapshot = serde_json::from_value(json!({
            "is_manager": false,
            "filter_period": "2024-03-01 to 2024-03-31",
            "my_attendance": 152.5,
            "hours_today": 6.25,
            "last_attendance_worked_hours": 1.75,
            "total_overtime": 3.0,
            "total_days_present": 19,
            "total_leaves_taken": 2.5,
            "leaves_this_month": 1.0,
            "pending_leaves_count": 1,
            "project_tasks": [
                {"id": 4, "name": "Website", "task_name": "Landing page", "deadline": "2024-04-01", "stage": "In Progress"}
            ],
            "project_task_count": {
                "project_count": 2, "task_count": 9,
                "remaining_project_count": 1, "remaining_task_count": 4
            },
            "personal_details": {"employee_name": "Mia", "employee_department": "R&D"},
            "employee_hierarchy": [
                {"id": 1, "pid": null, "name": "Ana", "title": "CTO", "img": "/img/1"},
                {"id": 2, "pid": 1, "name": "Mia", "title": "Engineer", "img": "/img/2"}
            ]
        }))
        .unwrap();
        assert_eq!(snapshot.my_attendance, Some(152.5));
        assert_eq!(snapshot.project_tasks.len(), 1);
        assert_eq!(snapshot.project_tasks[0].assignees.len(), 0);
        assert_eq!(snapshot.employee_hierarchy[1].pid, Some(1));
        assert_eq!(
            snapshot.project_task_count.as_ref().unwrap().remaining_task_count,
            4
        );
    }

    #[test]
    fn snapshot_parses_manager_payload() {
        let snapshot: DashboardSnapshot = serde_json::from_value(json!({
            "is_manager": true,
            "manager_attendance": {"total": 14, "men": 8, "women": 6},
            "manager_leaves": {"total": 3.5, "men": 2.0, "women": 1.5},
            "manager_project_count": {
                "total_projects": 5, "total_tasks": 40,
                "remaining_projects": 2, "remaining_tasks": 11
            },
            "manager_projects": [
                {"id": 9, "name": "ERP", "task_name": "Migration", "deadline": "",
                 "stage": "New", "assignees": ["Ana", "Mia"]}
            ],
            "assignees": [{"id": 3, "name": "Ana"}],
            "statuses": [{"id": 1, "name": "New"}]
        }))
        .unwrap();
        assert!(snapshot.is_manager);
        assert_eq!(snapshot.manager_attendance.as_ref().unwrap().men, 8.0);
        assert_eq!(snapshot.manager_projects[0].assignees, vec!["Ana", "Mia"]);
        assert_eq!(snapshot.statuses[0].name, "New");
    }
}
