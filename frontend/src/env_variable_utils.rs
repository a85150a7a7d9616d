use lazy_static::lazy_static;

lazy_static! {
    pub static ref BACKEND_URL: String = get_backend_url();
}

#[cfg(target_arch = "wasm32")]
pub fn get_env_var(key: &str) -> Option<String> {
    let window = web_sys::window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - environment variables not loaded");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::warn!("Environment variable '{}' is undefined", key);
        None
    }
}

// Outside the browser (unit tests, ssr) there is no window to read from.
#[cfg(not(target_arch = "wasm32"))]
pub fn get_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Base URL prepended to every `/api/...` path. Empty means same origin.
pub fn get_backend_url() -> String {
    get_env_var("BACKEND_URL")
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "TA".to_string())
}

pub fn is_debug_mode() -> bool {
    parse_flag(get_env_var("DEBUG_MODE").as_deref())
}

fn parse_flag(value: Option<&str>) -> bool {
    value.unwrap_or("false").trim().parse().unwrap_or(false)
}
