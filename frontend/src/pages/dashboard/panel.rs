use leptos::*;

use crate::pages::dashboard::{
    components::{
        AttendanceSection, ChartsSection, CounterGrid, FilterBar, LeaveSection, OrgChartSection,
        PersonalDetailsSection, TaskTable,
    },
    layout::DashboardFrame,
    range::resolve,
    repository::{employee_counters, manager_counters},
    view_model::{use_dashboard_view_model, LoadState},
};
use crate::utils::time::today_in_app_tz;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let snapshot = vm.snapshot;
    let filter = vm.filter;
    let load_state = vm.load_state;
    let error_signal = vm.filter_error;
    let loading = Signal::derive(move || load_state.get() == LoadState::Loading);
    let filter_error = Signal::derive(move || error_signal.get());

    // Initial fetch. Untracked so filter edits refetch only on apply.
    {
        let vm = vm.clone();
        create_effect(move |_| {
            untrack(|| vm.refresh());
        });
    }

    let is_manager = move || snapshot.get().map(|s| s.is_manager).unwrap_or(false);
    let active_span = move || resolve(&filter.current_preset(), today_in_app_tz());

    let employee_tiles = Signal::derive(move || {
        snapshot
            .get()
            .map(|s| employee_counters(&s))
            .unwrap_or_default()
    });
    let manager_tiles = Signal::derive(move || {
        snapshot
            .get()
            .map(|s| manager_counters(&s, active_span()))
            .unwrap_or_default()
    });
    let employee_tasks = Signal::derive(move || {
        snapshot
            .get()
            .map(|s| s.project_tasks)
            .unwrap_or_default()
    });
    let manager_tasks = Signal::derive(move || {
        snapshot
            .get()
            .map(|s| s.manager_projects)
            .unwrap_or_default()
    });

    view! {
        <DashboardFrame>
            <div class="space-y-6">
                <FilterBar
                    filter=filter
                    snapshot=snapshot
                    loading=loading
                    error=filter_error
                    on_apply={Callback::new(vm.handle_apply())}
                />
                <Show
                    when=is_manager
                    fallback=move || view! {
                        <div class="space-y-6">
                            <PersonalDetailsSection snapshot=snapshot />
                            <AttendanceSection snapshot=snapshot />
                            <LeaveSection snapshot=snapshot />
                            <ChartsSection snapshot=snapshot />
                            <CounterGrid title="My Projects" tiles=employee_tiles />
                            <TaskTable title="My Tasks" tasks=employee_tasks />
                            <OrgChartSection snapshot=snapshot />
                        </div>
                    }
                >
                    <div class="space-y-6">
                        <CounterGrid title="Team Overview" tiles=manager_tiles />
                        <TaskTable title="Team Tasks" tasks=manager_tasks show_assignees=true />
                        <OrgChartSection snapshot=snapshot />
                    </div>
                </Show>
            </div>
        </DashboardFrame>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{ApiClient, DashboardSnapshot};
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    fn employee_snapshot() -> DashboardSnapshot {
        serde_json::from_value(json!({
            "is_manager": false,
            "my_attendance": 152.5,
            "hours_today": 6.25,
            "last_attendance_worked_hours": 1.75,
            "total_overtime": 3.0,
            "total_days_present": 19,
            "total_leaves_taken": 2.5,
            "leaves_this_month": 1.0,
            "pending_leaves_count": 1,
            "project_tasks": [
                {"id": 4, "name": "Website", "task_name": "Landing page",
                 "deadline": "2024-04-01", "stage": "In Progress"}
            ],
            "personal_details": {"employee_name": "Mia Park"},
            "employee_hierarchy": [
                {"id": 1, "pid": null, "name": "Ana", "title": "CTO"},
                {"id": 2, "pid": 1, "name": "Mia", "title": "Engineer"}
            ]
        }))
        .unwrap()
    }

    fn render_with_snapshot(snapshot: DashboardSnapshot) -> String {
        render_to_string(move || {
            provide_context(ApiClient::new_with_base_url("http://mock/api"));
            let vm = use_dashboard_view_model();
            vm.snapshot.set(Some(snapshot.clone()));
            view! { <DashboardPage /> }
        })
    }

    #[test]
    fn dashboard_page_renders_employee_sections() {
        let html = render_with_snapshot(employee_snapshot());
        assert!(html.contains("Filters"));
        assert!(html.contains("My Attendance"));
        assert!(html.contains("My Leaves"));
        assert!(html.contains("152.50 hrs"));
        assert!(html.contains("Mia Park"));
        assert!(html.contains("Landing page"));
    }

    #[test]
    fn rendering_the_same_snapshot_twice_is_identical() {
        let first = render_with_snapshot(employee_snapshot());
        let second = render_with_snapshot(employee_snapshot());
        assert_eq!(first, second);
        // One doughnut and one bar chart, never duplicated.
        assert_eq!(first.matches("<svg").count(), 2);
    }

    #[test]
    fn manager_snapshot_renders_team_sections() {
        let snapshot: DashboardSnapshot = serde_json::from_value(json!({
            "is_manager": true,
            "manager_attendance": {"total": 14, "men": 8, "women": 6},
            "manager_project_count": {
                "total_projects": 5, "total_tasks": 40,
                "remaining_projects": 2, "remaining_tasks": 11
            },
            "manager_projects": [
                {"id": 9, "name": "ERP", "task_name": "Migration",
                 "stage": "New", "assignees": ["Ana", "Mia"]}
            ]
        }))
        .unwrap();
        let html = render_with_snapshot(snapshot);
        assert!(html.contains("Team Overview"));
        assert!(html.contains("Team Tasks"));
        assert!(html.contains("Ana, Mia"));
        assert!(!html.contains("My Attendance"));
    }
}
