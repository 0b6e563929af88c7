use leptos::*;

use crate::api::TaskRecord;
use crate::components::empty_state::EmptyState;
use crate::navigation::use_host_navigator;
use crate::pages::dashboard::repository::task_view;
use crate::pages::dashboard::utils::display_or_dash;

#[component]
pub fn TaskTable(
    #[prop(into)] title: String,
    tasks: Signal<Vec<TaskRecord>>,
    #[prop(optional)] show_assignees: bool,
) -> impl IntoView {
    let navigator = use_host_navigator();
    let row_navigator = navigator.clone();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">{title}</h3>
            {move || {
                let list = tasks.get();
                if list.is_empty() {
                    return view! {
                        <EmptyState
                            title="No tasks"
                            description={"Nothing is assigned within the selected filters.".to_string()}
                        />
                    }
                    .into_view();
                }
                let navigator = row_navigator.clone();
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-xs uppercase tracking-wide text-fg-muted">
                                <th class="py-2 pr-4">{"Project"}</th>
                                <th class="py-2 pr-4">{"Task"}</th>
                                <th class="py-2 pr-4">{"Deadline"}</th>
                                <th class="py-2 pr-4">{"Stage"}</th>
                                <Show when=move || show_assignees>
                                    <th class="py-2">{"Assignees"}</th>
                                </Show>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || list.clone()
                                key=|task| (task.id, task.task_name.clone())
                                children=move |task: TaskRecord| {
                                    let navigator = navigator.clone();
                                    let link = task_view(&task);
                                    let assignees = task.assignees.join(", ");
                                    view! {
                                        <tr
                                            class="cursor-pointer hover:bg-surface-muted"
                                            on:click=move |_| {
                                                if let Some(request) = link.clone() {
                                                    navigator.open(request);
                                                }
                                            }
                                        >
                                            <td class="py-2 pr-4 text-fg">{display_or_dash(task.name.as_deref())}</td>
                                            <td class="py-2 pr-4 text-fg">{display_or_dash(task.task_name.as_deref())}</td>
                                            <td class="py-2 pr-4 text-fg-muted">{display_or_dash(task.deadline.as_deref())}</td>
                                            <td class="py-2 pr-4 text-fg-muted">{display_or_dash(task.stage.as_deref())}</td>
                                            <Show when=move || show_assignees>
                                                <td class="py-2 text-fg-muted">{display_or_dash(Some(assignees.as_str()))}</td>
                                            </Show>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </div>
    }
}
