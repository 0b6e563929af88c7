use leptos::*;

use crate::api::DashboardSnapshot;
use crate::components::charts::{BarChart, DonutChart};
use crate::pages::dashboard::repository::{attendance_chart_series, leave_chart_series};

/// Attendance doughnut and leave bar chart. Each snapshot produces a fresh
/// SVG subtree, so re-rendering can never stack chart instances.
#[component]
pub fn ChartsSection(snapshot: RwSignal<Option<DashboardSnapshot>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6">
            {move || match snapshot.get() {
                None => view! {
                    <p class="text-sm text-fg-muted">{"Charts appear once data is loaded."}</p>
                }.into_view(),
                Some(data) => view! {
                    <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                        <DonutChart title="Attendance Summary" slices={attendance_chart_series(&data)} />
                        <BarChart title="Leave Summary" bars={leave_chart_series(&data)} />
                    </div>
                }.into_view(),
            }}
        </div>
    }
}
