use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex, MutexGuard,
    },
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tauri::menu::MenuItem;

use crate::shell_config::ShellConfig;

#[derive(Clone)]
pub(crate) struct TrayMenuItems {
    pub(crate) toggle_item: MenuItem<tauri::Wry>,
    pub(crate) quit_item: MenuItem<tauri::Wry>,
}

/// Tray menu handles plus the icon variant currently shown. Emptied when the
/// tray is removed so a recreated tray gets fresh handles.
#[derive(Default)]
pub(crate) struct TrayMenuState {
    items: Mutex<Option<TrayMenuItems>>,
    warning_icon: AtomicBool,
}

impl TrayMenuState {
    pub(crate) fn items(&self) -> Option<TrayMenuItems> {
        self.items.lock().ok().and_then(|guard| guard.clone())
    }

    pub(crate) fn set_items(&self, items: Option<TrayMenuItems>) {
        if let Ok(mut guard) = self.items.lock() {
            *guard = items;
        }
    }

    pub(crate) fn warning_icon(&self) -> bool {
        self.warning_icon.load(Ordering::Relaxed)
    }

    pub(crate) fn set_warning_icon(&self, warning: bool) {
        self.warning_icon.store(warning, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ShellCommandResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl ShellCommandResult {
    pub(crate) fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                reason: None,
            },
            Err(error) => Self {
                ok: false,
                reason: Some(error),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct PhoneInfo {
    pub(crate) info: String,
    #[serde(flatten)]
    pub(crate) details: Map<String, Value>,
}

#[derive(Debug)]
pub(crate) struct ShellState {
    config: Mutex<ShellConfig>,
    settings_path: PathBuf,
    phone_info: Mutex<Option<PhoneInfo>>,
    quitting: AtomicBool,
}

impl ShellState {
    pub(crate) fn new(config: ShellConfig, settings_path: PathBuf) -> Self {
        Self {
            config: Mutex::new(config),
            settings_path,
            phone_info: Mutex::new(None),
            quitting: AtomicBool::new(false),
        }
    }

    pub(crate) fn settings_path(&self) -> &PathBuf {
        &self.settings_path
    }

    pub(crate) fn lock_config(&self) -> MutexGuard<'_, ShellConfig> {
        // Writers never leave a partially updated config, so poisoning is ignored.
        self.config
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn config_snapshot(&self) -> ShellConfig {
        self.lock_config().clone()
    }

    pub(crate) fn phone_info(&self) -> Option<PhoneInfo> {
        self.phone_info.lock().ok().and_then(|guard| guard.clone())
    }

    pub(crate) fn set_phone_info(&self, info: PhoneInfo) {
        if let Ok(mut guard) = self.phone_info.lock() {
            *guard = Some(info);
        }
    }

    pub(crate) fn is_quitting(&self) -> bool {
        self.quitting.load(Ordering::Relaxed)
    }

    pub(crate) fn mark_quitting(&self) {
        self.quitting.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_state_tracks_quitting_flag() {
        let state = ShellState::new(ShellConfig::default(), PathBuf::from("settings.json"));
        assert!(!state.is_quitting());
        state.mark_quitting();
        assert!(state.is_quitting());
    }

    #[test]
    fn config_snapshot_reflects_last_write() {
        let state = ShellState::new(ShellConfig::default(), PathBuf::from("settings.json"));
        state.lock_config().hide_avatars = true;
        assert!(state.config_snapshot().hide_avatars);
    }

    #[test]
    fn phone_info_keeps_extra_fields() {
        let info: PhoneInfo =
            serde_json::from_str(r#"{"info": "OFFLINE", "online": false}"#).expect("parse");
        assert_eq!(info.info, "OFFLINE");
        assert_eq!(info.details.get("online"), Some(&Value::Bool(false)));

        let state = ShellState::new(ShellConfig::default(), PathBuf::from("settings.json"));
        assert_eq!(state.phone_info(), None);
        state.set_phone_info(info.clone());
        assert_eq!(state.phone_info(), Some(info));
    }

    #[test]
    fn shell_command_result_carries_error_reason() {
        let ok = ShellCommandResult::from_result(Ok(()));
        assert!(ok.ok);
        assert_eq!(ok.reason, None);

        let failed = ShellCommandResult::from_result(Err("boom".to_string()));
        assert!(!failed.ok);
        assert_eq!(failed.reason.as_deref(), Some("boom"));
    }

    #[test]
    fn tray_menu_state_defaults_to_normal_icon_without_items() {
        let state = TrayMenuState::default();
        assert!(state.items().is_none());
        assert!(!state.warning_icon());
        state.set_warning_icon(true);
        assert!(state.warning_icon());
    }
}
