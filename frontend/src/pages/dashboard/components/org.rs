use leptos::*;

use crate::api::DashboardSnapshot;
use crate::components::{empty_state::EmptyState, org_tree::OrgTree};

#[component]
pub fn OrgChartSection(snapshot: RwSignal<Option<DashboardSnapshot>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">{"Team"}</h3>
            {move || {
                let nodes = snapshot
                    .get()
                    .map(|s| s.employee_hierarchy)
                    .unwrap_or_default();
                if nodes.is_empty() {
                    view! {
                        <EmptyState
                            title="No hierarchy"
                            description={"No reporting line to display.".to_string()}
                        />
                    }.into_view()
                } else {
                    view! { <OrgTree nodes=nodes /> }.into_view()
                }
            }}
        </div>
    }
}
