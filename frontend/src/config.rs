use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();
static TIME_ZONE: OnceLock<Tz> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn window() -> web_sys::Window {
    web_sys::window().expect("no global `window` exists")
}

#[cfg(target_arch = "wasm32")]
fn global_value(holder: &str, key: &str, alt_key: &str) -> Option<String> {
    let w = window();
    let any = js_sys::Reflect::get(&w, &holder.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &alt_key.into()).ok());
    val.and_then(|v| v.as_string())
}

// Expect optional globals, checked in order:
//   window.__STAFFBOARD_ENV    = { API_BASE_URL: "...", TIME_ZONE: "..." }
//   window.__STAFFBOARD_CONFIG = { api_base_url: "...", time_zone: "..." }
#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: global_value("__STAFFBOARD_ENV", "API_BASE_URL", "api_base_url")
            .or_else(|| global_value("__STAFFBOARD_CONFIG", "api_base_url", "API_BASE_URL")),
        time_zone: global_value("__STAFFBOARD_ENV", "TIME_ZONE", "time_zone")
            .or_else(|| global_value("__STAFFBOARD_CONFIG", "time_zone", "TIME_ZONE")),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> RuntimeConfig {
    RuntimeConfig::default()
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

fn cache_time_zone(name: &str) {
    if let Ok(tz) = name.parse::<Tz>() {
        let _ = TIME_ZONE.set(tz);
    } else {
        log::warn!("Unknown time zone in runtime config: {name}");
    }
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let globals = snapshot_from_globals();
    if let Some(tz) = &globals.time_zone {
        cache_time_zone(tz);
    }
    if let Some(existing) = globals.api_base_url {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        if let Some(tz) = &cfg.time_zone {
            cache_time_zone(tz);
        }
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url("http://localhost:3000/api")
}

/// Time zone the dashboard anchors "today" to. Falls back to UTC until the
/// runtime config has been loaded.
pub fn current_time_zone() -> Tz {
    TIME_ZONE.get().copied().unwrap_or(chrono_tz::UTC)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
