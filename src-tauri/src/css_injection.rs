use std::fs;

use tauri::{Runtime, Webview};

use crate::shell_config::ShellConfig;

const HIDE_AVATARS_CSS: &str = ".chat-avatar{display: none}";
const HIDE_PREVIEWS_CSS: &str = ".chat-secondary .chat-status{z-index: -999;}";
const STYLE_ELEMENT_ID: &str = "whatsapp-desktop-shell-css";

fn thumb_size_css(size: u32) -> String {
    format!(
        ".image-thumb {{ width: {size}px !important;height: {size}px !important;}}\
         .image-thumb img.image-thumb-body {{ width: auto !important;height: {size}px !important;}}"
    )
}

pub fn build_injected_css(config: &ShellConfig) -> String {
    let mut css = String::new();
    if config.hide_avatars {
        css.push_str(HIDE_AVATARS_CSS);
    }
    if config.hide_previews {
        css.push_str(HIDE_PREVIEWS_CSS);
    }
    let thumb_size = config.thumb_size();
    if thumb_size > 0 {
        css.push_str(&thumb_size_css(thumb_size));
    }
    css
}

pub fn read_custom_css(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|error| format!("CSS error: {path}: {error}"))
}

pub fn style_injection_script(css: &str) -> String {
    let css_literal = serde_json::to_string(css).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        r#"(function () {{
  var id = "{STYLE_ELEMENT_ID}";
  var style = document.getElementById(id);
  if (!style) {{
    style = document.createElement("style");
    style.id = id;
    (document.head || document.documentElement).appendChild(style);
  }}
  style.textContent = {css_literal};
}})();"#
    )
}

/// Built-in rules followed by the user's CSS file. An unreadable file is
/// logged and skipped.
pub fn collect_page_css(config: &ShellConfig) -> String {
    let mut css = build_injected_css(config);
    if let Some(path) = config.custom_css_path() {
        match read_custom_css(path) {
            Ok(custom) => {
                css.push_str(&custom);
                tracing::info!("Loaded CSS file: {path}");
            }
            Err(error) => tracing::error!("{error}"),
        }
    }
    css
}

pub fn inject_page_css<R: Runtime>(webview: &Webview<R>, config: &ShellConfig) {
    let css = collect_page_css(config);
    if css.is_empty() {
        return;
    }

    if let Err(error) = webview.eval(&style_injection_script(&css)) {
        tracing::error!("failed to inject page CSS: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_injected_css_is_empty_by_default() {
        assert_eq!(build_injected_css(&ShellConfig::default()), "");
    }

    #[test]
    fn build_injected_css_keeps_rule_order() {
        let config = ShellConfig {
            hide_avatars: true,
            hide_previews: true,
            thumb_size: Some(120),
            ..ShellConfig::default()
        };
        let css = build_injected_css(&config);

        let avatars = css.find(HIDE_AVATARS_CSS).expect("avatars rule");
        let previews = css.find(HIDE_PREVIEWS_CSS).expect("previews rule");
        let thumbs = css.find(".image-thumb {").expect("thumb rule");
        assert!(avatars < previews && previews < thumbs);
        assert!(css.contains("width: 120px !important"));
        assert!(css.contains(".image-thumb img.image-thumb-body { width: auto !important;height: 120px !important;}"));
    }

    #[test]
    fn zero_thumb_size_adds_no_rule() {
        let config = ShellConfig {
            thumb_size: Some(0),
            hide_previews: true,
            ..ShellConfig::default()
        };
        assert_eq!(build_injected_css(&config), HIDE_PREVIEWS_CSS);
    }

    #[test]
    fn read_custom_css_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("missing.css");
        let error = read_custom_css(&missing.to_string_lossy()).expect_err("missing file");
        assert!(error.starts_with("CSS error:"));

        let present = dir.path().join("theme.css");
        fs::write(&present, "body{color:red}").expect("write");
        assert_eq!(
            read_custom_css(&present.to_string_lossy()).expect("read"),
            "body{color:red}"
        );
    }

    #[test]
    fn collect_page_css_keeps_builtin_rules_when_custom_file_is_missing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = ShellConfig {
            hide_avatars: true,
            custom_css: Some(dir.path().join("missing.css").to_string_lossy().into_owned()),
            ..ShellConfig::default()
        };
        assert_eq!(collect_page_css(&config), HIDE_AVATARS_CSS);
    }

    #[test]
    fn collect_page_css_appends_custom_file_after_builtin_rules() {
        let dir = tempfile::tempdir().expect("tempdir");
        let theme = dir.path().join("theme.css");
        fs::write(&theme, "body{color:red}").expect("write");
        let config = ShellConfig {
            hide_previews: true,
            custom_css: Some(theme.to_string_lossy().into_owned()),
            ..ShellConfig::default()
        };
        assert_eq!(
            collect_page_css(&config),
            format!("{HIDE_PREVIEWS_CSS}body{{color:red}}")
        );
    }

    #[test]
    fn style_injection_script_escapes_css_as_json_string() {
        let script = style_injection_script("a::after{content:\"</style>\"}");
        assert!(script.contains(r#"style.textContent = "a::after{content:\"</style>\"}";"#));
        assert!(script.contains(STYLE_ELEMENT_ID));
    }
}
