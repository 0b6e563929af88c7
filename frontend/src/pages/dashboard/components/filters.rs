use leptos::*;

use crate::api::{ApiError, DashboardSnapshot, SelectOption};
use crate::components::{common::Button, error::InlineErrorMessage};
use crate::pages::dashboard::range::Granularity;
use crate::pages::dashboard::utils::FilterState;
use crate::utils::time::today_in_app_tz;

fn preset_options(granularity: Granularity) -> Vec<(&'static str, &'static str)> {
    match granularity {
        Granularity::Day => vec![
            ("today", "Today"),
            ("yesterday", "Yesterday"),
            ("last7", "Last 7 Days"),
            ("last15", "Last 15 Days"),
            ("last30", "Last 30 Days"),
            ("custom", "Custom"),
        ],
        Granularity::Month => vec![
            ("current", "Current Month"),
            ("last", "Last Month"),
            ("last3", "Last 3 Months"),
            ("last6", "Last 6 Months"),
            ("last12", "Last 12 Months"),
            ("custom", "Custom"),
        ],
        Granularity::Year => vec![
            ("current", "Current Year"),
            ("last", "Last Year"),
            ("custom", "Custom"),
        ],
    }
}

#[component]
fn FilterSelect(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-fg">
            <span class="font-medium">{label}</span>
            <select
                class="border rounded px-2 py-1 text-sm"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(token, _)| token.clone()
                    children=move |(token, label): (String, String)| {
                        view! { <option value=token>{label}</option> }
                    }
                />
            </select>
        </label>
    }
}

#[component]
fn DateInput(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    view! {
        <label class="flex items-center gap-2 text-sm text-fg">
            <span class="font-medium">{label}</span>
            <input
                type="date"
                class="border rounded px-2 py-1 text-sm"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn FilterBar(
    filter: FilterState,
    snapshot: RwSignal<Option<DashboardSnapshot>>,
    #[prop(into)] loading: MaybeSignal<bool>,
    error: Signal<Option<ApiError>>,
    #[prop(into)] on_apply: Callback<ev::MouseEvent>,
) -> impl IntoView {
    let granularity = filter.granularity_signal();
    let preset = filter.preset_signal();

    let presets = Signal::derive(move || {
        preset_options(granularity.get())
            .into_iter()
            .map(|(token, label)| (token.to_string(), label.to_string()))
            .collect::<Vec<_>>()
    });
    let custom = move || preset.get() == "custom";
    let is_manager = move || {
        snapshot
            .get()
            .map(|s| s.is_manager)
            .unwrap_or(false)
    };
    let assignee_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All Assignees".to_string())];
        if let Some(snapshot) = snapshot.get() {
            options.extend(select_entries(&snapshot.assignees));
        }
        options
    });
    let status_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "All Stages".to_string())];
        if let Some(snapshot) = snapshot.get() {
            options.extend(select_entries(&snapshot.statuses));
        }
        options
    });
    // The service echoes the applied period; until a snapshot is in, show
    // the locally resolved one.
    let period = move || {
        snapshot
            .get()
            .and_then(|s| s.filter_period)
            .unwrap_or_else(|| filter.period_label(today_in_app_tz()))
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <div class="flex flex-col gap-3 md:flex-row md:items-center md:justify-between">
                <div>
                    <h3 class="text-sm font-semibold text-fg">{"Filters"}</h3>
                    <p class="text-xs text-fg-muted">{move || period()}</p>
                </div>
                <div class="flex flex-wrap items-center gap-3">
                    <label class="flex items-center gap-2 text-sm text-fg">
                        <span class="font-medium">{"Period"}</span>
                        <select
                            class="border rounded px-2 py-1 text-sm"
                            prop:value=move || granularity.get().as_str().to_string()
                            on:change=move |ev| {
                                if let Some(parsed) = Granularity::parse(&event_target_value(&ev)) {
                                    filter.set_granularity(parsed);
                                }
                            }
                        >
                            <option value="day">{"Days"}</option>
                            <option value="month">{"Months"}</option>
                            <option value="year">{"Years"}</option>
                        </select>
                    </label>
                    <FilterSelect label="Range" value=preset options=presets />
                    <Show when=move || granularity.get() == Granularity::Year>
                        <label class="flex items-center gap-2 text-sm text-fg">
                            <span class="font-medium">{"Year"}</span>
                            <input
                                type="text"
                                placeholder="e.g. 2021"
                                class="border rounded px-2 py-1 text-sm w-24"
                                prop:value=move || filter.year_signal().get()
                                on:change=move |ev| filter.year_signal().set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <Show when=custom>
                        <DateInput label="From" value=filter.start_signal() />
                        <DateInput label="To" value=filter.end_signal() />
                    </Show>
                    <Button loading=loading on_click=on_apply>
                        {"Apply"}
                    </Button>
                </div>
            </div>
            <Show when=is_manager>
                <div class="flex flex-wrap items-center gap-3 border-t border-border pt-3">
                    <FilterSelect label="Assignee" value=filter.assignee_signal() options=assignee_options />
                    <FilterSelect label="Stage" value=filter.status_signal() options=status_options />
                    <DateInput label="Deadline from" value=filter.deadline_signal() />
                </div>
            </Show>
            <InlineErrorMessage error=error />
        </div>
    }
}

fn select_entries(options: &[SelectOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|o| (o.id.to_string(), o.name.clone()))
        .collect()
}
