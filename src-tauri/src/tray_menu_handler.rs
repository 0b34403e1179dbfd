use tauri::{AppHandle, Manager};

use crate::{tray_actions, window_actions, ShellState};

pub fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ToggleWindow) => {
            window_actions::toggle_main_window(app_handle)
        }
        Some(tray_actions::TrayMenuAction::Quit) => {
            if let Some(state) = app_handle.try_state::<ShellState>() {
                state.mark_quitting();
            }
            tracing::info!("Quit requested from tray");
            app_handle.exit(0);
        }
        None => {}
    }
}
