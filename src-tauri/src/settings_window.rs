use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::{secondary_window, shell_locale, SETTINGS_WINDOW_LABEL};

pub(crate) fn open_settings_window(app_handle: &AppHandle) {
    if secondary_window::focus_existing(app_handle, SETTINGS_WINDOW_LABEL) {
        return;
    }

    let texts = shell_locale::current_shell_texts();
    let result = WebviewWindowBuilder::new(
        app_handle,
        SETTINGS_WINDOW_LABEL,
        WebviewUrl::App("settings.html".into()),
    )
    .title(texts.settings_title)
    .inner_size(550.0, 550.0)
    .resizable(true)
    .center()
    .decorations(true)
    .build();

    match result {
        Ok(window) => {
            secondary_window::hide_menu_bar(&window);
            tracing::info!("settings window opened");
        }
        Err(error) => tracing::error!("failed to open settings window: {error}"),
    }
}

pub(crate) fn close_settings_window(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(SETTINGS_WINDOW_LABEL) else {
        return;
    };
    if let Err(error) = window.close() {
        tracing::warn!("failed to close settings window: {error}");
    }
}
