use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const THEME_STORAGE_KEY: &str = "theme";

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const GLOBAL_SEARCH_MIN_LEN: usize = 2;

pub const DESKTOP_BREAKPOINT_PX: f64 = 1024.0;
pub const SIDEBAR_COLLAPSED_PX: u32 = 64;
pub const SIDEBAR_EXPANDED_PX: u32 = 256;

/// Assets created within this many days count as new on the dashboard.
pub const NEW_ASSET_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn normalize_base_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global(object_name: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &object_name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter().find_map(|key| {
        js_sys::Reflect::get(&obj, &(*key).into())
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    })
}

fn snapshot_from_globals() -> Option<String> {
    // window.__ASSETFLOW_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__ASSETFLOW_CONFIG = { api_base_url: "..." }.
    #[cfg(target_arch = "wasm32")]
    {
        read_global("__ASSETFLOW_ENV", &["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__ASSETFLOW_CONFIG", &["api_base_url", "API_BASE_URL"]))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn cache_base_url(value: &str) -> String {
    let _ = API_BASE_URL.set(value.to_string());
    API_BASE_URL.get().cloned().unwrap_or_else(|| value.to_string())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals().and_then(|raw| normalize_base_url(&raw)) {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .and_then(|raw| normalize_base_url(&raw))
    {
        return cache_base_url(&url);
    }
    log::warn!(
        "No API base URL configured, falling back to {}",
        DEFAULT_API_BASE_URL
    );
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
