use std::cell::Cell;
use std::rc::Rc;

use leptos::{ev::MouseEvent, *};

use crate::api::{ApiClient, ApiError, DashboardSnapshot};
use crate::pages::dashboard::{repository, utils::FilterState};
use crate::utils::time::today_in_app_tz;

/// Widget display state: `Idle -> Loading -> Rendered` on mount and on
/// every filter apply, `Loading -> Idle` on fetch failure (the stale
/// snapshot stays on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Rendered,
}

/// Request-generation counter. A fetch cannot be cancelled, so a slow
/// response may arrive after a newer request was issued; the gate makes
/// sure only the newest generation is ever applied.
#[derive(Clone, Default)]
pub struct ResponseGate {
    latest: Rc<Cell<u64>>,
}

impl ResponseGate {
    pub fn issue(&self) -> u64 {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        next
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }
}

#[derive(Clone)]
pub struct DashboardViewModel {
    pub snapshot: RwSignal<Option<DashboardSnapshot>>,
    pub load_state: RwSignal<LoadState>,
    pub filter_error: RwSignal<Option<ApiError>>,
    pub filter: FilterState,
    gate: ResponseGate,
    api: ApiClient,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Self {
            snapshot: create_rw_signal(None),
            load_state: create_rw_signal(LoadState::Idle),
            filter_error: create_rw_signal(None),
            filter: FilterState::default(),
            gate: ResponseGate::default(),
            api,
        }
    }

    /// Issues one fetch for the current filter state. Always awaited to
    /// completion; a response that has been superseded by a newer request
    /// is discarded without touching the display.
    pub fn refresh(&self) {
        let query = match self.filter.to_query(today_in_app_tz()) {
            Ok(query) => query,
            Err(err) => {
                self.filter_error.set(Some(err));
                return;
            }
        };
        self.filter_error.set(None);

        let generation = self.gate.issue();
        self.load_state.set(LoadState::Loading);

        let api = self.api.clone();
        let gate = self.gate.clone();
        let snapshot = self.snapshot;
        let load_state = self.load_state;
        spawn_local(async move {
            let result = repository::fetch_tiles(&api, &query).await;
            settle(snapshot, load_state, &gate, generation, result);
        });
    }

    pub fn handle_apply(&self) -> impl Fn(MouseEvent) {
        let vm = self.clone();
        move |_| {
            if vm.load_state.get_untracked() == LoadState::Loading {
                return;
            }
            vm.refresh();
        }
    }
}

/// Applies a completed fetch to the display. A superseded response is
/// dropped; a failure keeps the stale snapshot visible and only clears the
/// loading flag.
fn settle(
    snapshot: RwSignal<Option<DashboardSnapshot>>,
    load_state: RwSignal<LoadState>,
    gate: &ResponseGate,
    generation: u64,
    result: Result<DashboardSnapshot, ApiError>,
) {
    if !gate.is_current(generation) {
        return;
    }
    match result {
        Ok(data) => {
            snapshot.set(Some(data));
            load_state.set(LoadState::Rendered);
        }
        Err(err) => {
            log::error!("dashboard fetch failed: {err}");
            load_state.set(LoadState::Idle);
        }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm.clone());
            vm
        }
    }
}
