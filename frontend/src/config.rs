use anyhow::Context as _;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub time_zone: Option<String>,
}

impl RuntimeConfig {
    /// Fills unset fields from `fallback`; fields already present win.
    fn or(self, fallback: RuntimeConfig) -> RuntimeConfig {
        RuntimeConfig {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            time_zone: self.time_zone.or(fallback.time_zone),
        }
    }

    fn is_complete(&self) -> bool {
        self.api_base_url.is_some() && self.time_zone.is_some()
    }
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn read_global_object(name: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
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

fn config_from_global(name: &str) -> RuntimeConfig {
    RuntimeConfig {
        api_base_url: read_global_object(name, &["API_BASE_URL", "api_base_url"]),
        time_zone: read_global_object(name, &["TIME_ZONE", "time_zone"]),
    }
}

// window.__HABIT_TRACKER_ENV (env.js) takes precedence over window.__HABIT_TRACKER_CONFIG.
fn snapshot_from_globals() -> RuntimeConfig {
    config_from_global("__HABIT_TRACKER_ENV").or(config_from_global("__HABIT_TRACKER_CONFIG"))
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let origin = web_sys::window()
        .context("no global `window` exists")?
        .location()
        .origin()
        .map_err(|_| anyhow::anyhow!("window.location.origin is unavailable"))?;
    let resp = reqwest::get(format!("{}/config.json", origin))
        .await
        .context("request for config.json failed")?;
    if !resp.status().is_success() {
        anyhow::bail!("config.json returned status {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid runtime config")
}

pub async fn await_runtime_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    let mut resolved = snapshot_from_globals();
    if !resolved.is_complete() {
        match fetch_runtime_config().await {
            Ok(fetched) => resolved = resolved.or(fetched),
            Err(err) => log::debug!("runtime config.json not used: {err:#}"),
        }
    }
    RUNTIME_CONFIG.get_or_init(|| resolved).clone()
}

pub async fn await_api_base_url() -> String {
    await_runtime_config()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

/// Zone used for the "same calendar day" rule. `None` means the browser's local zone.
pub fn display_time_zone() -> Option<Tz> {
    RUNTIME_CONFIG
        .get()
        .and_then(|cfg| cfg.time_zone.as_deref())
        .and_then(parse_time_zone)
}

fn parse_time_zone(name: &str) -> Option<Tz> {
    match name.trim().parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            log::warn!("ignoring unknown time zone `{}`", name);
            None
        }
    }
}

pub async fn init() {
    let _ = await_runtime_config().await;
}
