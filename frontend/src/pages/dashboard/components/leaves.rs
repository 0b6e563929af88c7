use leptos::*;

use crate::api::DashboardSnapshot;
use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::repository::leave_metrics;

#[component]
pub fn LeaveSection(snapshot: RwSignal<Option<DashboardSnapshot>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">{"My Leaves"}</h3>
                <p class="text-sm text-fg-muted">{"Taken, current month and pending requests"}</p>
            </div>
            {move || match snapshot.get() {
                None => view! {
                    <div class="flex items-center gap-2 text-sm text-fg-muted">
                        <LoadingSpinner />
                        <span>{"Loading leave totals..."}</span>
                    </div>
                }.into_view(),
                Some(data) => view! {
                    <dl class="grid grid-cols-1 gap-4 lg:grid-cols-3">
                        {leave_metrics(&data)
                            .into_iter()
                            .map(|(label, value)| view! {
                                <div>
                                    <dt class="text-sm font-medium text-fg-muted">{label}</dt>
                                    <dd class="mt-1 text-lg font-semibold text-fg">{value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                }.into_view(),
            }}
        </div>
    }
}
