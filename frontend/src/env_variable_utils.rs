use web_sys::window;

/// Reads a key from the `window.ENV_CONFIG` object injected by the hosting page.
pub fn get_env_var(key: &str) -> Option<String> {
    let window = window()?;

    // Get the ENV_CONFIG object
    let env_config = js_sys::Reflect::get(&window, &"ENV_CONFIG".into()).ok()?;

    if env_config.is_undefined() {
        log::warn!("ENV_CONFIG is undefined - using built-in defaults");
        return None;
    }

    let value = js_sys::Reflect::get(&env_config, &key.into()).ok()?;

    if !value.is_undefined() {
        value.as_string()
    } else {
        log::debug!("Environment variable '{}' is undefined", key);
        None
    }
}

pub fn get_category_api_url() -> String {
    get_env_var("CATEGORY_API")
        .unwrap_or_else(|| "https://acharyaprashant.org/api/v2/uni/category".to_string())
}

pub fn get_video_api_url() -> String {
    get_env_var("VIDEO_API").unwrap_or_else(|| "https://acharyaprashant.org/api/v2/uni/yt".to_string())
}

pub fn get_app_name() -> String {
    get_env_var("APP_NAME").unwrap_or_else(|| "Video Catalog".to_string())
}

pub fn is_debug_mode() -> bool {
    get_env_var("DEBUG_MODE")
        .unwrap_or_else(|| "false".to_string())
        .parse()
        .unwrap_or(false)
}
