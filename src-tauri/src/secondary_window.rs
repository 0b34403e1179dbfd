//! Helpers shared by the settings and phone info dialogs.

use tauri::{AppHandle, Manager, WebviewWindow};

use crate::{PHONE_INFO_WINDOW_LABEL, SETTINGS_WINDOW_LABEL};

pub(crate) fn focus_existing(app_handle: &AppHandle, label: &str) -> bool {
    let Some(window) = app_handle.get_webview_window(label) else {
        return false;
    };

    if let Err(error) = window.show() {
        tracing::warn!("failed to show {label} window: {error}");
    }
    if let Ok(true) = window.is_minimized() {
        let _ = window.unminimize();
    }
    if let Err(error) = window.set_focus() {
        tracing::warn!("failed to focus {label} window: {error}");
    }
    true
}

/// The app menu is attached to every window on Windows/Linux; dialogs go without it.
pub(crate) fn hide_menu_bar(window: &WebviewWindow) {
    #[cfg(not(target_os = "macos"))]
    if let Err(error) = window.remove_menu() {
        tracing::warn!("failed to remove menu from {} window: {error}", window.label());
    }
    #[cfg(target_os = "macos")]
    let _ = window;
}

pub(crate) fn close_dialogs(app_handle: &AppHandle) {
    for label in [SETTINGS_WINDOW_LABEL, PHONE_INFO_WINDOW_LABEL] {
        if let Some(window) = app_handle.get_webview_window(label) {
            if let Err(error) = window.close() {
                tracing::warn!("failed to close {label} window: {error}");
            }
        }
    }
}
