use leptos::*;

use crate::navigation::use_host_navigator;
use crate::pages::dashboard::repository::CounterTile;

/// Clickable counter tiles. Tiles with a view behind them open the host's
/// filtered list on click.
#[component]
pub fn CounterGrid(#[prop(into)] title: String, tiles: Signal<Vec<CounterTile>>) -> impl IntoView {
    let navigator = use_host_navigator();
    let tile_navigator = navigator.clone();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">{title}</h3>
            <div class="grid grid-cols-2 gap-4 lg:grid-cols-4">
                {move || {
                    let navigator = tile_navigator.clone();
                    tiles
                        .get()
                        .into_iter()
                        .map(|tile| {
                            let navigator = navigator.clone();
                            let link = tile.link.clone();
                            let clickable = link.is_some();
                            view! {
                                <div
                                    class=move || {
                                        if clickable {
                                            "rounded-lg border border-border p-4 cursor-pointer hover:bg-surface-muted"
                                        } else {
                                            "rounded-lg border border-border p-4"
                                        }
                                    }
                                    on:click=move |_| {
                                        if let Some(request) = link.clone() {
                                            navigator.open(request);
                                        }
                                    }
                                >
                                    <p class="text-xs font-medium uppercase tracking-wide text-fg-muted">{tile.label}</p>
                                    <p class="mt-2 text-2xl font-bold text-fg">{tile.value.clone()}</p>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
