//! Values exchanged with the settings dialog and their mapping onto [`ShellConfig`].

use serde::{Deserialize, Serialize};

use crate::{proxy_settings, shell_config::ShellConfig};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    pub autostart: bool,
    pub start_minimized: bool,
    pub tray_icon: bool,
    pub hide_avatars: bool,
    pub hide_previews: bool,
    pub thumb_size: Option<u32>,
    pub use_proxy: bool,
    pub http_proxy: String,
    pub https_proxy: String,
    pub custom_css_enabled: bool,
    pub custom_css_path: String,
}

fn trimmed_or_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl SettingsForm {
    pub fn from_config(config: &ShellConfig) -> Self {
        Self {
            autostart: config.autostart,
            start_minimized: config.start_minimized,
            tray_icon: config.tray_icon,
            hide_avatars: config.hide_avatars,
            hide_previews: config.hide_previews,
            thumb_size: config.thumb_size.filter(|size| *size > 0),
            use_proxy: config.use_proxy,
            http_proxy: config.http_proxy.clone().unwrap_or_default(),
            https_proxy: config.https_proxy.clone().unwrap_or_default(),
            custom_css_enabled: config.custom_css.is_some(),
            custom_css_path: config.custom_css.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.use_proxy {
            return Ok(());
        }
        for (field, value) in [("HTTP proxy", &self.http_proxy), ("HTTPS proxy", &self.https_proxy)] {
            if value.trim().is_empty() {
                continue;
            }
            proxy_settings::parse_proxy_url(value).map_err(|error| format!("{field}: {error}"))?;
        }
        Ok(())
    }

    pub fn apply_to(&self, config: &mut ShellConfig) {
        config.custom_css = if self.custom_css_enabled {
            trimmed_or_none(&self.custom_css_path)
        } else {
            None
        };
        config.autostart = self.autostart;
        config.start_minimized = self.start_minimized;
        config.hide_avatars = self.hide_avatars;
        config.hide_previews = self.hide_previews;
        config.thumb_size = self.thumb_size;
        config.tray_icon = self.tray_icon;

        if self.use_proxy {
            config.use_proxy = true;
            config.http_proxy = trimmed_or_none(&self.http_proxy);
            config.https_proxy = trimmed_or_none(&self.https_proxy);
        } else {
            config.use_proxy = false;
            config.http_proxy = None;
            config.https_proxy = None;
        }
    }
}
