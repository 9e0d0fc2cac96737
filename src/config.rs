//! Runtime configuration read from `window.ENV`
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const DEFAULT_REFRESH_INTERVAL_MS: u32 = 5_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;
const DEFAULT_TOAST_TIMEOUT_MS: u32 = 5_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for API paths; empty means same origin
    pub api_url: String,
    pub refresh_interval_ms: u32,
    pub request_timeout_ms: u32,
    pub toast_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Build a config from a key lookup, keeping defaults for absent or bad values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let millis = |key: &str, default: u32| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(default)
        };

        Self {
            api_url: lookup("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            refresh_interval_ms: millis("REFRESH_INTERVAL_MS", defaults.refresh_interval_ms),
            request_timeout_ms: millis("REQUEST_TIMEOUT_MS", defaults.request_timeout_ms),
            toast_timeout_ms: millis("TOAST_TIMEOUT_MS", defaults.toast_timeout_ms),
        }
    }

    /// Load from `window.ENV`, falling back to defaults outside the browser
    pub fn load() -> Self {
        Self::from_lookup(window_env)
    }
}

fn window_env(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() || env.is_null() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        value
            .as_string()
            .or_else(|| value.as_f64().map(|n| format!("{}", n as u64)))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.refresh_interval_ms, 5_000);
    }

    #[test]
    fn test_values_from_lookup() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("API_URL", "https://energia.local/"),
            ("REFRESH_INTERVAL_MS", "2000"),
            ("REQUEST_TIMEOUT_MS", "not-a-number"),
            ("TOAST_TIMEOUT_MS", "0"),
        ]);
        let config = AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.api_url, "https://energia.local");
        assert_eq!(config.refresh_interval_ms, 2_000);
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.toast_timeout_ms, 5_000);
    }
}
