use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle, Manager,
};

use crate::{phone_info, settings_window, shell_locale, window_actions, ShellState};

pub const APP_MENU_SETTINGS: &str = "app_settings";
pub const APP_MENU_PHONE_INFO: &str = "app_phone_info";
pub const APP_MENU_QUIT: &str = "app_quit";
pub const APP_MENU_RELOAD: &str = "view_reload";
pub const APP_MENU_TOGGLE_DEVTOOLS: &str = "view_toggle_devtools";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMenuAction {
    OpenSettings,
    OpenPhoneInfo,
    Quit,
    Reload,
    ToggleDevtools,
}

pub fn action_from_menu_id(menu_id: &str) -> Option<AppMenuAction> {
    match menu_id {
        APP_MENU_SETTINGS => Some(AppMenuAction::OpenSettings),
        APP_MENU_PHONE_INFO => Some(AppMenuAction::OpenPhoneInfo),
        APP_MENU_QUIT => Some(AppMenuAction::Quit),
        APP_MENU_RELOAD => Some(AppMenuAction::Reload),
        APP_MENU_TOGGLE_DEVTOOLS => Some(AppMenuAction::ToggleDevtools),
        _ => None,
    }
}

pub fn build_app_menu(app: &AppHandle) -> tauri::Result<Menu<tauri::Wry>> {
    let texts = shell_locale::current_shell_texts();
    let package_name = app.package_info().name.clone();

    let settings = MenuItem::with_id(
        app,
        APP_MENU_SETTINGS,
        texts.menu_settings,
        true,
        Some("CmdOrCtrl+,"),
    )?;
    let phone_info = MenuItem::with_id(
        app,
        APP_MENU_PHONE_INFO,
        texts.menu_phone_info,
        true,
        None::<&str>,
    )?;
    let quit = MenuItem::with_id(app, APP_MENU_QUIT, texts.menu_quit, true, Some("CmdOrCtrl+Q"))?;
    let reload = MenuItem::with_id(
        app,
        APP_MENU_RELOAD,
        texts.menu_reload,
        true,
        Some("CmdOrCtrl+R"),
    )?;

    let view_menu = Submenu::with_items(
        app,
        texts.menu_view,
        true,
        &[
            &reload,
            &PredefinedMenuItem::separator(app)?,
            &PredefinedMenuItem::fullscreen(app, None)?,
        ],
    )?;
    #[cfg(debug_assertions)]
    view_menu.append(&MenuItem::with_id(
        app,
        APP_MENU_TOGGLE_DEVTOOLS,
        texts.menu_toggle_devtools,
        true,
        Some("CmdOrCtrl+Shift+I"),
    )?)?;

    Menu::with_items(
        app,
        &[
            &Submenu::with_items(
                app,
                package_name,
                true,
                &[
                    &settings,
                    &phone_info,
                    &PredefinedMenuItem::separator(app)?,
                    &quit,
                ],
            )?,
            &Submenu::with_items(
                app,
                texts.menu_edit,
                true,
                &[
                    &PredefinedMenuItem::undo(app, None)?,
                    &PredefinedMenuItem::redo(app, None)?,
                    &PredefinedMenuItem::separator(app)?,
                    &PredefinedMenuItem::cut(app, None)?,
                    &PredefinedMenuItem::copy(app, None)?,
                    &PredefinedMenuItem::paste(app, None)?,
                    &PredefinedMenuItem::select_all(app, None)?,
                ],
            )?,
            &view_menu,
            &Submenu::with_items(
                app,
                texts.menu_window,
                true,
                &[
                    &PredefinedMenuItem::minimize(app, None)?,
                    &PredefinedMenuItem::separator(app)?,
                    &PredefinedMenuItem::close_window(app, None)?,
                ],
            )?,
        ],
    )
}

pub fn handle_app_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match action_from_menu_id(menu_id) {
        Some(AppMenuAction::OpenSettings) => settings_window::open_settings_window(app_handle),
        Some(AppMenuAction::OpenPhoneInfo) => phone_info::open_phone_info_window(app_handle),
        Some(AppMenuAction::Quit) => {
            if let Some(state) = app_handle.try_state::<ShellState>() {
                state.mark_quitting();
            }
            tracing::info!("Quit requested from menu");
            app_handle.exit(0);
        }
        Some(AppMenuAction::Reload) => window_actions::reload_main_window(app_handle),
        Some(AppMenuAction::ToggleDevtools) => toggle_devtools(app_handle),
        None => {}
    }
}

#[cfg(debug_assertions)]
fn toggle_devtools(app_handle: &AppHandle) {
    let Some(window) = app_handle.get_webview_window(crate::MAIN_WINDOW_LABEL) else {
        return;
    };
    if window.is_devtools_open() {
        window.close_devtools();
    } else {
        window.open_devtools();
    }
}

#[cfg(not(debug_assertions))]
fn toggle_devtools(_app_handle: &AppHandle) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        let cases = [
            (APP_MENU_SETTINGS, AppMenuAction::OpenSettings),
            (APP_MENU_PHONE_INFO, AppMenuAction::OpenPhoneInfo),
            (APP_MENU_QUIT, AppMenuAction::Quit),
            (APP_MENU_RELOAD, AppMenuAction::Reload),
            (APP_MENU_TOGGLE_DEVTOOLS, AppMenuAction::ToggleDevtools),
        ];
        for (menu_id, action) in cases {
            assert_eq!(action_from_menu_id(menu_id), Some(action));
        }
    }

    #[test]
    fn action_from_menu_id_ignores_tray_and_predefined_ids() {
        assert_eq!(action_from_menu_id(crate::tray_actions::TRAY_MENU_QUIT), None);
        assert_eq!(action_from_menu_id(""), None);
    }
}
