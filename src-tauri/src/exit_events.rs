use tauri::{AppHandle, CloseRequestApi, Manager};

use crate::{
    close_policy::{self, MainCloseAction, ShellPlatform},
    main_window, secondary_window, tray_setup, window_actions, ShellState,
};

pub fn handle_main_close_requested(app_handle: &AppHandle, api: &CloseRequestApi) {
    let quitting = app_handle
        .try_state::<ShellState>()
        .map(|state| state.is_quitting())
        .unwrap_or(false);

    secondary_window::close_dialogs(app_handle);
    main_window::persist_main_window_state(app_handle);

    match close_policy::decide_main_close(
        ShellPlatform::current(),
        tray_setup::tray_present(app_handle),
        quitting,
    ) {
        MainCloseAction::AllowClose => {}
        MainCloseAction::HideWindow => {
            api.prevent_close();
            window_actions::hide_main_window(app_handle);
        }
        MainCloseAction::QuitApp => {
            api.prevent_close();
            if let Some(state) = app_handle.try_state::<ShellState>() {
                state.mark_quitting();
            }
            tracing::info!("Main window closed, quitting");
            app_handle.exit(0);
        }
    }
}

pub fn handle_exit_requested(app_handle: &AppHandle) {
    if let Some(state) = app_handle.try_state::<ShellState>() {
        state.mark_quitting();
    }
    main_window::persist_main_window_state(app_handle);
}

#[cfg(target_os = "macos")]
pub fn handle_reopen(app_handle: &AppHandle, has_visible_windows: bool) {
    if !has_visible_windows {
        window_actions::show_main_window(app_handle);
    }
}
