use tauri::{
    image::Image,
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager,
};

use crate::{
    shell_locale, tray_actions, tray_labels, tray_menu_handler, window_actions, TrayMenuItems,
    TrayMenuState, MAIN_WINDOW_LABEL, TRAY_ID, TRAY_TOOLTIP,
};

fn normal_tray_icon() -> Image<'static> {
    #[cfg(target_os = "macos")]
    {
        tauri::include_image!("./icons/tray.png")
    }
    #[cfg(not(target_os = "macos"))]
    {
        tauri::include_image!("./icons/icon.png")
    }
}

fn warning_tray_icon() -> Image<'static> {
    tauri::include_image!("./icons/icon-warning.png")
}

pub fn tray_present(app_handle: &AppHandle) -> bool {
    app_handle.tray_by_id(TRAY_ID).is_some()
}

/// Creates or removes the tray icon so it matches the `trayicon` setting.
pub fn ensure_tray(app_handle: &AppHandle, enabled: bool) -> Result<(), String> {
    match (enabled, tray_present(app_handle)) {
        (true, false) => setup_tray(app_handle),
        (false, true) => {
            tracing::info!("Removing tray icon");
            app_handle.remove_tray_by_id(TRAY_ID);
            if let Some(tray_state) = app_handle.try_state::<TrayMenuState>() {
                tray_state.set_items(None);
                tray_state.set_warning_icon(false);
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

fn setup_tray(app_handle: &AppHandle) -> Result<(), String> {
    tracing::info!("Creating tray icon");
    let shell_texts = shell_locale::current_shell_texts();
    let main_window_visible = app_handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .and_then(|window| window.is_visible().ok())
        .unwrap_or(true);

    let toggle_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        tray_labels::toggle_label(&shell_texts, main_window_visible),
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray toggle menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_QUIT,
        shell_texts.tray_quit,
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray quit menu item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create tray separator menu item: {error}"))?;

    let menu = Menu::with_items(app_handle, &[&toggle_item, &separator, &quit_item])
        .map_err(|error| format!("Failed to build tray menu: {error}"))?;

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip(TRAY_TOOLTIP)
        .icon(normal_tray_icon())
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                if button == MouseButton::Left {
                    window_actions::show_main_window(tray.app_handle());
                } else {
                    tray_labels::update_tray_menu_labels(tray.app_handle());
                }
            }
        });

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .build(app_handle)
        .map_err(|error| format!("Failed to create tray icon: {error}"))?;

    if let Some(tray_state) = app_handle.try_state::<TrayMenuState>() {
        tray_state.set_items(Some(TrayMenuItems {
            toggle_item,
            quit_item,
        }));
        tray_state.set_warning_icon(false);
    }
    Ok(())
}

/// Swaps the tray image between the normal and warning variants. macOS keeps
/// its template image.
pub fn set_warning_icon(app_handle: &AppHandle, warning: bool) {
    if cfg!(target_os = "macos") {
        return;
    }
    let Some(tray) = app_handle.tray_by_id(TRAY_ID) else {
        return;
    };
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };
    if tray_state.warning_icon() == warning {
        return;
    }

    let icon = if warning {
        tracing::info!("Setting tray icon to warning");
        warning_tray_icon()
    } else {
        tracing::info!("Setting tray icon to normal");
        normal_tray_icon()
    };

    match tray.set_icon(Some(icon)) {
        Ok(()) => tray_state.set_warning_icon(warning),
        Err(error) => tracing::warn!("failed to update tray icon: {error}"),
    }
}
