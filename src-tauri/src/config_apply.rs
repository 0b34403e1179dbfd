use tauri::{AppHandle, Manager};
use tauri_plugin_autostart::ManagerExt;

use crate::{main_window, tray_labels, tray_setup, ShellState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutostartAction {
    Enable,
    Disable,
    Keep,
}

pub fn decide_autostart(desired: bool, currently_enabled: bool) -> AutostartAction {
    match (desired, currently_enabled) {
        (true, false) => AutostartAction::Enable,
        (false, true) => AutostartAction::Disable,
        _ => AutostartAction::Keep,
    }
}

fn sync_autostart(app_handle: &AppHandle, desired: bool) -> Result<(), String> {
    let autostart_manager = app_handle.autolaunch();
    let currently_enabled = autostart_manager
        .is_enabled()
        .map_err(|error| format!("Failed to check autostart status: {error}"))?;

    match decide_autostart(desired, currently_enabled) {
        AutostartAction::Enable => {
            autostart_manager
                .enable()
                .map_err(|error| format!("Failed to enable autostart: {error}"))?;
            tracing::info!("Autostart enabled");
        }
        AutostartAction::Disable => {
            autostart_manager
                .disable()
                .map_err(|error| format!("Failed to disable autostart: {error}"))?;
            tracing::info!("Autostart disabled");
        }
        AutostartAction::Keep => {}
    }
    Ok(())
}

/// Brings window, tray and login item in line with the stored configuration.
pub fn apply_configuration(app_handle: &AppHandle) {
    let Some(state) = app_handle.try_state::<ShellState>() else {
        tracing::warn!("apply_configuration skipped: shell state not managed");
        return;
    };
    let config = state.config_snapshot();

    if config.maximized {
        main_window::maximize_main_window(app_handle);
    }

    if let Err(error) = tray_setup::ensure_tray(app_handle, config.tray_icon) {
        tracing::error!("failed to apply tray setting: {error}");
    }
    tray_labels::update_tray_menu_labels(app_handle);

    if let Err(error) = sync_autostart(app_handle, config.autostart) {
        tracing::error!("{error}");
    }
}
