use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use url::Url;

use crate::{
    badge, external_links, page_bridge, proxy_settings::ProxyRules,
    shell_config::{self, ShellConfig, WindowBounds},
    ShellState, MAIN_WINDOW_LABEL, MAIN_WINDOW_MIN_HEIGHT, MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_TITLE,
    WEBVIEW_USER_AGENT, WHATSAPP_WEB_URL,
};

pub fn open_main_window(app_handle: &AppHandle, config: &ShellConfig) -> Result<WebviewWindow, String> {
    tracing::info!("Open main window");
    let url = Url::parse(WHATSAPP_WEB_URL)
        .map_err(|error| format!("Invalid WhatsApp Web URL: {error}"))?;

    let mut builder = WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, WebviewUrl::External(url))
        .title(MAIN_WINDOW_TITLE)
        .user_agent(WEBVIEW_USER_AGENT)
        .inner_size(f64::from(config.width), f64::from(config.height))
        .min_inner_size(MAIN_WINDOW_MIN_WIDTH, MAIN_WINDOW_MIN_HEIGHT)
        .visible(!config.start_minimized)
        .initialization_script(&page_bridge::page_bridge_script())
        .on_document_title_changed(|window, title| {
            badge::apply_unread_badge(&window, badge::parse_unread_count(&title));
        })
        .on_navigation(|url| {
            if !external_links::should_open_externally(url) {
                return true;
            }
            if let Err(error) = external_links::open_external_url(url.as_str()) {
                tracing::warn!("failed to open external navigation {url}: {error}");
            }
            false
        });

    builder = match config.position() {
        Some((x, y)) => builder.position(f64::from(x), f64::from(y)),
        None => builder.center(),
    };

    builder = builder
        .icon(tauri::include_image!("./icons/icon.png"))
        .map_err(|error| format!("Failed to set main window icon: {error}"))?;

    if let Some(rules) = ProxyRules::from_config(config) {
        match rules.webview_proxy_url() {
            Ok(proxy_url) => {
                tracing::info!("Proxy configured: {}", rules.rules_string());
                builder = builder.proxy_url(proxy_url);
            }
            Err(error) => tracing::error!("ignoring proxy configuration: {error}"),
        }
    } else if config.use_proxy {
        tracing::info!("No proxy");
    }

    builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))
}

pub fn show_main_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::warn!("show_main_window skipped: main window not found");
        return;
    };

    if let Ok(true) = window.is_minimized() {
        if let Err(error) = window.unminimize() {
            tracing::warn!("failed to restore main window: {error}");
        }
    }
    if let Err(error) = window.show() {
        tracing::warn!("failed to show main window: {error}");
    }
    if let Err(error) = window.set_focus() {
        tracing::warn!("failed to focus main window: {error}");
    }
}

pub fn hide_main_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::warn!("hide_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.hide() {
        tracing::warn!("failed to hide main window: {error}");
    }
}

pub fn reload_main_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        tracing::warn!("reload_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.reload() {
        tracing::warn!("failed to reload main window: {error}");
    }
}

pub fn maximize_main_window(app_handle: &AppHandle) {
    if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        if let Err(error) = window.maximize() {
            tracing::warn!("failed to maximize main window: {error}");
        }
    }
}

/// Logical outer position and inner size; `None` while the window is hidden,
/// minimized or maximized so the last restored geometry survives.
pub fn capture_window_bounds<R: tauri::Runtime>(window: &WebviewWindow<R>) -> Option<WindowBounds> {
    let visible = window.is_visible().unwrap_or(false);
    let minimized = window.is_minimized().unwrap_or(false);
    let maximized = window.is_maximized().unwrap_or(false);
    if !should_capture_bounds(visible, minimized, maximized) {
        return None;
    }

    let scale_factor = window.scale_factor().ok()?;
    let position = window.outer_position().ok()?.to_logical::<i32>(scale_factor);
    let size = window.inner_size().ok()?.to_logical::<u32>(scale_factor);
    Some(WindowBounds {
        x: position.x,
        y: position.y,
        width: size.width,
        height: size.height,
    })
}

pub fn should_capture_bounds(visible: bool, minimized: bool, maximized: bool) -> bool {
    visible && !minimized && !maximized
}

pub fn persist_main_window_state(app_handle: &AppHandle) {
    let Some(state) = app_handle.try_state::<ShellState>() else {
        return;
    };
    let window = app_handle.get_webview_window(MAIN_WINDOW_LABEL);

    let snapshot = {
        let mut config = state.lock_config();
        if let Some(window) = window.as_ref() {
            if let Some(bounds) = capture_window_bounds(window) {
                config.set_window_bounds(bounds);
            }
            config.set_maximized(window.is_maximized().unwrap_or(false));
        }
        config.clone()
    };

    if let Err(error) = shell_config::save(state.settings_path(), &snapshot) {
        tracing::error!("failed to persist main window state: {error}");
    }
}
