pub const MAIN_WINDOW_LABEL: &str = "main";
pub const SETTINGS_WINDOW_LABEL: &str = "settings";
pub const PHONE_INFO_WINDOW_LABEL: &str = "phoneinfo";
pub const TRAY_ID: &str = "main-tray";
pub const TRAY_TOOLTIP: &str = "WhatsApp Desktop";

pub const WHATSAPP_WEB_URL: &str = "https://web.whatsapp.com";
pub const WHATSAPP_WEB_HOST: &str = "web.whatsapp.com";
pub const MAIN_WINDOW_TITLE: &str = "WhatsApp";
pub const MAIN_WINDOW_MIN_WIDTH: f64 = 600.0;
pub const MAIN_WINDOW_MIN_HEIGHT: f64 = 600.0;

pub const DEFAULT_SHELL_LOCALE: &str = "en-US";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const DESKTOP_LOG_FILE: &str = "whatsapp-desktop.log";
pub const DEBUG_LOG_SWITCH: &str = "--debug-log";

pub const PHONE_INFO_UPDATED_EVENT: &str = "phone-info-updated";
pub const PHONE_INFO_NORMAL: &str = "NORMAL";

/// WhatsApp Web refuses browsers it does not recognize; present a desktop Chrome.
pub const WEBVIEW_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36";
