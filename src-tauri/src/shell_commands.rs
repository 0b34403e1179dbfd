use tauri::{AppHandle, Manager};
use tauri_plugin_dialog::DialogExt;

use crate::{
    config_apply, external_links, phone_info, proxy_settings::ProxyRules,
    settings_form::SettingsForm, settings_window, shell_config::{self, ShellConfig},
    shell_locale::{self, ShellTexts}, window_actions, PhoneInfo, ShellCommandResult, ShellState,
};

fn proxy_rules_changed(before: &ShellConfig, after: &ShellConfig) -> bool {
    ProxyRules::from_config(before) != ProxyRules::from_config(after)
}

#[tauri::command]
pub(crate) fn shell_get_settings(app_handle: AppHandle) -> SettingsForm {
    let state = app_handle.state::<ShellState>();
    let form = SettingsForm::from_config(&state.lock_config());
    form
}

#[tauri::command]
pub(crate) fn shell_save_settings(app_handle: AppHandle, form: SettingsForm) -> ShellCommandResult {
    if let Err(error) = form.validate() {
        tracing::warn!("rejected settings: {error}");
        return ShellCommandResult::from_result(Err(error));
    }

    let state = app_handle.state::<ShellState>();
    let (previous, updated) = {
        let mut config = state.lock_config();
        let previous = config.clone();
        form.apply_to(&mut config);
        (previous, config.clone())
    };

    if let Err(error) = shell_config::save(state.settings_path(), &updated) {
        tracing::error!("failed to save settings: {error}");
        return ShellCommandResult::from_result(Err(error));
    }
    tracing::info!("Settings saved");

    config_apply::apply_configuration(&app_handle);
    if proxy_rules_changed(&previous, &updated) {
        tracing::info!("Proxy settings changed, restarting");
        app_handle.request_restart();
    } else {
        window_actions::reload_main_window(&app_handle);
    }
    settings_window::close_settings_window(&app_handle);
    ShellCommandResult::from_result(Ok(()))
}

#[tauri::command]
pub(crate) async fn shell_pick_custom_css(app_handle: AppHandle) -> Option<String> {
    let picked = app_handle
        .dialog()
        .file()
        .add_filter("CSS", &["css"])
        .blocking_pick_file()?;

    match picked.into_path() {
        Ok(path) => Some(path.display().to_string()),
        Err(error) => {
            tracing::warn!("custom CSS selection is not a local file: {error}");
            None
        }
    }
}

#[tauri::command]
pub(crate) fn shell_get_texts() -> ShellTexts {
    shell_locale::current_shell_texts()
}

#[tauri::command]
pub(crate) fn shell_get_phone_info(app_handle: AppHandle) -> Option<PhoneInfo> {
    app_handle.state::<ShellState>().phone_info()
}

#[tauri::command]
pub(crate) fn shell_report_phone_info(app_handle: AppHandle, info: PhoneInfo) {
    phone_info::record_phone_info(&app_handle, info);
}

#[tauri::command]
pub(crate) fn shell_open_external_url(url: String) -> ShellCommandResult {
    let result = external_links::open_external_url(&url);
    if let Err(error) = &result {
        tracing::warn!("failed to open external url: {error}");
    }
    ShellCommandResult::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proxied(http: &str) -> ShellConfig {
        ShellConfig {
            use_proxy: true,
            http_proxy: Some(http.to_string()),
            ..ShellConfig::default()
        }
    }

    #[test]
    fn proxy_rules_changed_ignores_unrelated_settings() {
        let before = ShellConfig::default();
        let after = ShellConfig {
            hide_avatars: true,
            ..ShellConfig::default()
        };
        assert!(!proxy_rules_changed(&before, &after));
    }

    #[test]
    fn proxy_rules_changed_detects_endpoint_and_toggle_changes() {
        assert!(proxy_rules_changed(&ShellConfig::default(), &proxied("proxy:3128")));
        assert!(proxy_rules_changed(&proxied("proxy:3128"), &proxied("proxy:8080")));
        assert!(!proxy_rules_changed(&proxied("proxy:3128"), &proxied("proxy:3128")));
    }

    #[test]
    fn proxy_rules_changed_treats_incomplete_proxy_as_disabled() {
        let enabled_without_endpoint = ShellConfig {
            use_proxy: true,
            ..ShellConfig::default()
        };
        assert!(!proxy_rules_changed(&ShellConfig::default(), &enabled_without_endpoint));
    }
}
