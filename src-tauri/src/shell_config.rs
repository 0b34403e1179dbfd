//! Persisted shell configuration (`settings.json` in the app data dir).

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 720;

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_x: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_y: Option<i32>,
    #[serde(default)]
    pub maximized: bool,
    #[serde(default)]
    pub thumb_size: Option<u32>,
    #[serde(default)]
    pub hide_avatars: bool,
    #[serde(default)]
    pub hide_previews: bool,
    #[serde(rename = "customcss", default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub use_proxy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    #[serde(rename = "trayicon", default = "default_true")]
    pub tray_icon: bool,
    #[serde(rename = "autostart", default)]
    pub autostart: bool,
    #[serde(rename = "startminimized", default)]
    pub start_minimized: bool,
    /// Keys this version does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pos_x: None,
            pos_y: None,
            maximized: false,
            thumb_size: Some(0),
            hide_avatars: false,
            hide_previews: false,
            custom_css: None,
            use_proxy: false,
            http_proxy: None,
            https_proxy: None,
            tray_icon: true,
            autostart: false,
            start_minimized: false,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ShellConfig {
    pub fn set_window_bounds(&mut self, bounds: WindowBounds) {
        self.pos_x = Some(bounds.x);
        self.pos_y = Some(bounds.y);
        self.width = bounds.width;
        self.height = bounds.height;
    }

    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        Some((self.pos_x?, self.pos_y?))
    }

    pub fn thumb_size(&self) -> u32 {
        self.thumb_size.unwrap_or(0)
    }

    pub fn custom_css_path(&self) -> Option<&str> {
        self.custom_css
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

pub fn settings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(crate::SETTINGS_FILE_NAME)
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    Empty,
    Failed(String),
}

const KNOWN_KEYS: [&str; 15] = [
    "width",
    "height",
    "posX",
    "posY",
    "maximized",
    "thumbSize",
    "hideAvatars",
    "hidePreviews",
    "customcss",
    "useProxy",
    "httpProxy",
    "httpsProxy",
    "trayicon",
    "autostart",
    "startminimized",
];

fn is_blank_document(raw: &str) -> bool {
    matches!(raw.trim(), "" | "{}" | "[]")
}

pub fn parse_config(raw: &str) -> Result<Option<ShellConfig>, String> {
    if is_blank_document(raw) {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_str(raw).map_err(|error| format!("invalid JSON: {error}"))?;
    let Value::Object(mut object) = value else {
        return Err("configuration root is not an object".to_string());
    };

    drop_invalid_fields(&mut object);
    serde_json::from_value(Value::Object(object))
        .map(Some)
        .map_err(|error| format!("invalid configuration: {error}"))
}

/// Removes known keys whose value has the wrong shape so they fall back to
/// their defaults without discarding the rest of the file.
fn drop_invalid_fields(object: &mut Map<String, Value>) {
    object.retain(|key, value| {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            return true;
        }
        let single = Map::from_iter([(key.clone(), value.clone())]);
        match serde_json::from_value::<ShellConfig>(Value::Object(single)) {
            Ok(_) => true,
            Err(error) => {
                tracing::warn!("Ignoring invalid configuration value for {key}: {error}");
                false
            }
        }
    });
}

pub fn load_with_outcome(path: &Path) -> (ShellConfig, LoadOutcome) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => return (ShellConfig::default(), LoadOutcome::Failed(error.to_string())),
    };

    match parse_config(&raw) {
        Ok(Some(config)) => (config, LoadOutcome::Loaded),
        Ok(None) => (ShellConfig::default(), LoadOutcome::Empty),
        Err(error) => (ShellConfig::default(), LoadOutcome::Failed(error)),
    }
}

/// Never fails; anything unusable falls back to the defaults.
pub fn load(path: &Path) -> ShellConfig {
    tracing::info!("Loading configuration");
    let (config, outcome) = load_with_outcome(path);
    match outcome {
        LoadOutcome::Loaded => {
            tracing::info!("Configuration loaded from {}", path.display());
        }
        LoadOutcome::Empty => {
            tracing::warn!("Configuration file empty, loading default");
        }
        LoadOutcome::Failed(reason) => {
            tracing::warn!(
                "Error loading configuration from {} ({}), loading default",
                path.display(),
                reason
            );
        }
    }
    config
}

pub fn save(path: &Path, config: &ShellConfig) -> Result<(), String> {
    tracing::info!("Saving configuration");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create configuration directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }

    let serialized = serde_json::to_vec_pretty(config)
        .map_err(|error| format!("Failed to serialize configuration: {error}"))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(crate::SETTINGS_FILE_NAME);
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
    fs::write(&tmp_path, serialized).map_err(|error| {
        format!(
            "Failed to write configuration {}: {}",
            tmp_path.display(),
            error
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|error| {
        format!(
            "Failed to finalize configuration {}: {}",
            path.display(),
            error
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config_treats_blank_documents_as_empty() {
        assert_eq!(parse_config(""), Ok(None));
        assert_eq!(parse_config("  {} \n"), Ok(None));
        assert_eq!(parse_config("[]"), Ok(None));
    }

    #[test]
    fn parse_config_rejects_non_object_roots() {
        assert!(parse_config("42").is_err());
        assert!(parse_config("[1, 2]").is_err());
        assert!(parse_config("{not json").is_err());
    }

    #[test]
    fn parse_config_fills_missing_keys_with_defaults() {
        let config = parse_config(r#"{"hideAvatars": true}"#)
            .expect("parse")
            .expect("non-empty");
        assert!(config.hide_avatars);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert!(config.tray_icon);
        assert_eq!(config.position(), None);
    }

    #[test]
    fn parse_config_reads_existing_key_names() {
        let config = parse_config(
            r#"{
                "width": 1200, "height": 800, "posX": -10, "posY": 40,
                "thumbSize": 150, "customcss": "/tmp/theme.css",
                "useProxy": true, "httpProxy": "proxy:3128",
                "trayicon": false, "autostart": true, "startminimized": true,
                "maximized": true
            }"#,
        )
        .expect("parse")
        .expect("non-empty");

        assert_eq!(config.position(), Some((-10, 40)));
        assert_eq!(config.thumb_size(), 150);
        assert_eq!(config.custom_css_path(), Some("/tmp/theme.css"));
        assert!(config.use_proxy);
        assert_eq!(config.http_proxy.as_deref(), Some("proxy:3128"));
        assert!(!config.tray_icon);
        assert!(config.autostart);
        assert!(config.start_minimized);
        assert!(config.maximized);
    }

    #[test]
    fn thumb_size_null_counts_as_disabled() {
        let config = parse_config(r#"{"thumbSize": null}"#)
            .expect("parse")
            .expect("non-empty");
        assert_eq!(config.thumb_size(), 0);
    }

    #[test]
    fn custom_css_path_ignores_blank_values() {
        let config = ShellConfig {
            custom_css: Some("   ".to_string()),
            ..ShellConfig::default()
        };
        assert_eq!(config.custom_css_path(), None);
    }

    #[test]
    fn load_falls_back_to_defaults_when_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (config, outcome) = load_with_outcome(&dir.path().join("missing.json"));
        assert_eq!(config, ShellConfig::default());
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
    }

    #[test]
    fn load_falls_back_to_defaults_for_corrupt_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = settings_path(dir.path());
        fs::write(&path, "{\"width\": 1200,").expect("write");
        let (config, outcome) = load_with_outcome(&path);
        assert_eq!(config, ShellConfig::default());
        assert!(matches!(outcome, LoadOutcome::Failed(_)));
    }

    #[test]
    fn wrong_typed_value_only_resets_that_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = settings_path(dir.path());
        fs::write(
            &path,
            r#"{"width":1200,"height":800,"useProxy":true,"httpProxy":"proxy:3128","hideAvatars":true,"thumbSize":-1,"legacy":"x"}"#,
        )
        .expect("write");

        let (config, outcome) = load_with_outcome(&path);
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert!(config.use_proxy);
        assert_eq!(config.http_proxy.as_deref(), Some("proxy:3128"));
        assert!(config.hide_avatars);
        assert_eq!(config.thumb_size(), 0);
        assert_eq!(config.extra.get("legacy"), Some(&Value::from("x")));

        save(&path, &config).expect("save");
        let (reloaded, _) = load_with_outcome(&path);
        assert_eq!(reloaded, config);
    }

    #[test]
    fn wrong_typed_width_keeps_default_width() {
        let config = parse_config(r#"{"width": "wide", "trayicon": false}"#)
            .expect("parse")
            .expect("non-empty");
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert!(!config.tray_icon);
        assert!(!config.extra.contains_key("width"));
    }

    #[test]
    fn save_then_load_keeps_unknown_keys_and_window_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = settings_path(&dir.path().join("nested"));

        let mut config = parse_config(r#"{"legacyFlag": "keep-me"}"#)
            .expect("parse")
            .expect("non-empty");
        config.set_window_bounds(WindowBounds {
            x: 12,
            y: 34,
            width: 900,
            height: 650,
        });
        config.set_maximized(true);
        save(&path, &config).expect("save");

        let (reloaded, outcome) = load_with_outcome(&path);
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(reloaded, config);
        assert_eq!(
            reloaded.extra.get("legacyFlag"),
            Some(&Value::String("keep-me".to_string()))
        );
        assert!(!path.with_file_name("settings.json.tmp").exists());
    }

    #[test]
    fn save_replaces_an_existing_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = settings_path(dir.path());
        save(&path, &ShellConfig::default()).expect("first save");

        let config = ShellConfig {
            hide_previews: true,
            ..ShellConfig::default()
        };
        save(&path, &config).expect("second save");

        let (reloaded, outcome) = load_with_outcome(&path);
        assert_eq!(outcome, LoadOutcome::Loaded);
        assert!(reloaded.hide_previews);
        assert!(!path.with_file_name("settings.json.tmp").exists());
    }

    #[test]
    fn save_omits_unset_proxy_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = settings_path(dir.path());
        save(&path, &ShellConfig::default()).expect("save");

        let raw = fs::read_to_string(&path).expect("read");
        let value: Value = serde_json::from_str(&raw).expect("json");
        let object = value.as_object().expect("object");
        assert!(!object.contains_key("useProxy"));
        assert!(!object.contains_key("httpProxy"));
        assert!(!object.contains_key("customcss"));
        assert_eq!(object.get("trayicon"), Some(&Value::Bool(true)));
        assert_eq!(object.get("width"), Some(&Value::from(DEFAULT_WIDTH)));
    }
}
