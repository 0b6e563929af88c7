use leptos::*;

use crate::api::DashboardSnapshot;
use crate::pages::dashboard::utils::display_or_dash;

#[component]
pub fn PersonalDetailsSection(snapshot: RwSignal<Option<DashboardSnapshot>>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">{"Personal Details"}</h3>
            {move || {
                let details = snapshot.get().and_then(|s| s.personal_details).unwrap_or_default();
                let rows = vec![
                    ("Name", display_or_dash(details.employee_name.as_deref())),
                    ("Email", display_or_dash(details.employee_email.as_deref())),
                    ("Phone", display_or_dash(details.employee_phone.as_deref())),
                    ("Job Position", display_or_dash(details.employee_job.as_deref())),
                    ("Department", display_or_dash(details.employee_department.as_deref())),
                ];
                view! {
                    <div class="flex items-start gap-4">
                        {details.employee_image.clone().map(|src| view! {
                            <img src=src class="h-16 w-16 rounded-full object-cover" alt="" />
                        })}
                        <dl class="grid grid-cols-1 gap-2 sm:grid-cols-2">
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div>
                                        <dt class="text-xs font-medium text-fg-muted">{label}</dt>
                                        <dd class="text-sm text-fg">{value}</dd>
                                    </div>
                                })
                                .collect_view()}
                        </dl>
                    </div>
                }
            }}
        </div>
    }
}
