use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};
use tauri_plugin_autostart::MacosLauncher;

use crate::{
    app_menu, config_apply, css_injection, exit_events, logging, main_window, shell_config,
    shell_locale, window_actions, ShellState, TrayMenuState, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            tracing::info!("Second instance started, focusing main window");
            window_actions::show_main_window(app);
        }))
        .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, None))
        .plugin(tauri_plugin_dialog::init())
        .manage(TrayMenuState::default())
        .menu(app_menu::build_app_menu)
        .on_menu_event(|app, event| {
            let menu_id = event.id().as_ref();
            app_menu::handle_app_menu_event(app, menu_id);
        })
        .invoke_handler(tauri::generate_handler![
            crate::shell_commands::shell_get_settings,
            crate::shell_commands::shell_save_settings,
            crate::shell_commands::shell_pick_custom_css,
            crate::shell_commands::shell_get_texts,
            crate::shell_commands::shell_get_phone_info,
            crate::shell_commands::shell_report_phone_info,
            crate::shell_commands::shell_open_external_url,
        ])
        .on_window_event(|window, event| {
            if window.label() != MAIN_WINDOW_LABEL {
                return;
            }

            if let WindowEvent::CloseRequested { api, .. } = event {
                exit_events::handle_main_close_requested(window.app_handle(), api);
            }
        })
        .on_page_load(|webview, payload| {
            if webview.label() != MAIN_WINDOW_LABEL {
                return;
            }
            if let PageLoadEvent::Finished = payload.event() {
                tracing::debug!("page-load finished: {}", payload.url());
                if let Some(state) = webview.app_handle().try_state::<ShellState>() {
                    css_injection::inject_page_css(webview, &state.config_snapshot());
                }
            }
        })
        .setup(|app| {
            let app_handle = app.handle().clone();
            logging::init(&app_handle);
            tracing::info!(
                "Starting {} {}",
                app_handle.package_info().name,
                app_handle.package_info().version
            );
            shell_locale::log_resolved_locale();

            let data_dir = app_handle
                .path()
                .app_data_dir()
                .map_err(|error| format!("Failed to resolve app data directory: {error}"))?;
            let settings_path = shell_config::settings_path(&data_dir);
            let config = shell_config::load(&settings_path);

            app.manage(ShellState::new(config.clone(), settings_path));
            main_window::open_main_window(&app_handle, &config)?;
            config_apply::apply_configuration(&app_handle);
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { .. } => {
                exit_events::handle_exit_requested(app_handle);
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => {
                exit_events::handle_reopen(app_handle, has_visible_windows);
            }
            _ => {}
        });
}
