use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

mod api;
mod components;
pub mod config;
pub mod navigation;
mod pages;
pub mod utils;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_support;

use pages::dashboard::DashboardPage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! {
        <Title text="Staffboard"/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardPage/>
                <Route path="/dashboard" view=DashboardPage/>
            </Routes>
        </Router>
    }
}

#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting Staffboard Frontend (wasm)");

    // Kick off runtime config load from ./config.json (non-blocking).
    // If window.__STAFFBOARD_ENV is present (env.js), it takes precedence.
    wasm_bindgen_futures::spawn_local(async move {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    mount_to_body(|| view! { <App/> });
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    mount();
}
