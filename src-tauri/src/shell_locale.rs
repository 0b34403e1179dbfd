use std::env;

use serde::Serialize;

pub const SUPPORTED_LOCALES: [&str; 2] = ["en-US", "it-IT"];
const LOCALE_ENV_KEYS: [&str; 4] = ["WHATSAPP_DESKTOP_LOCALE", "LC_ALL", "LANG", "LC_MESSAGES"];

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellTexts {
    pub tray_hide: &'static str,
    pub tray_show: &'static str,
    pub tray_quit: &'static str,
    pub menu_settings: &'static str,
    pub menu_phone_info: &'static str,
    pub menu_reload: &'static str,
    pub menu_quit: &'static str,
    pub menu_edit: &'static str,
    pub menu_view: &'static str,
    pub menu_window: &'static str,
    pub menu_toggle_devtools: &'static str,
    pub settings_title: &'static str,
    pub settings_general: &'static str,
    pub settings_autostart: &'static str,
    pub settings_start_minimized: &'static str,
    pub settings_tray_icon: &'static str,
    pub settings_appearance: &'static str,
    pub settings_hide_avatars: &'static str,
    pub settings_hide_previews: &'static str,
    pub settings_thumb_size: &'static str,
    pub settings_custom_css: &'static str,
    pub settings_choose_file: &'static str,
    pub settings_network: &'static str,
    pub settings_use_proxy: &'static str,
    pub settings_http_proxy: &'static str,
    pub settings_https_proxy: &'static str,
    pub settings_proxy_restart_note: &'static str,
    pub settings_save: &'static str,
    pub settings_close: &'static str,
    pub phone_info_title: &'static str,
    pub phone_info_empty: &'static str,
}

pub fn shell_texts_for_locale(locale: &str) -> ShellTexts {
    if locale == "it-IT" {
        return ShellTexts {
            tray_hide: "Nascondi",
            tray_show: "Mostra",
            tray_quit: "Esci",
            menu_settings: "Impostazioni",
            menu_phone_info: "Informazioni telefono",
            menu_reload: "Ricarica",
            menu_quit: "Esci",
            menu_edit: "Modifica",
            menu_view: "Visualizza",
            menu_window: "Finestra",
            menu_toggle_devtools: "Strumenti per sviluppatori",
            settings_title: "Impostazioni",
            settings_general: "Generale",
            settings_autostart: "Avvia all'accesso",
            settings_start_minimized: "Avvia ridotto a icona",
            settings_tray_icon: "Mostra l'icona nell'area di notifica",
            settings_appearance: "Aspetto",
            settings_hide_avatars: "Nascondi avatar",
            settings_hide_previews: "Nascondi anteprime dei messaggi",
            settings_thumb_size: "Dimensione miniature (px)",
            settings_custom_css: "Usa un CSS personalizzato",
            settings_choose_file: "Scegli file",
            settings_network: "Rete",
            settings_use_proxy: "Usa un proxy",
            settings_http_proxy: "Proxy HTTP",
            settings_https_proxy: "Proxy HTTPS",
            settings_proxy_restart_note: "Le modifiche al proxy riavviano l'applicazione.",
            settings_save: "Salva",
            settings_close: "Chiudi",
            phone_info_title: "Informazioni telefono",
            phone_info_empty: "Nessuna informazione ricevuta.",
        };
    }

    ShellTexts {
        tray_hide: "Hide",
        tray_show: "Show",
        tray_quit: "Quit",
        menu_settings: "Settings",
        menu_phone_info: "Phone info",
        menu_reload: "Reload",
        menu_quit: "Quit",
        menu_edit: "Edit",
        menu_view: "View",
        menu_window: "Window",
        menu_toggle_devtools: "Toggle Developer Tools",
        settings_title: "Settings",
        settings_general: "General",
        settings_autostart: "Start at login",
        settings_start_minimized: "Start minimized",
        settings_tray_icon: "Show tray icon",
        settings_appearance: "Appearance",
        settings_hide_avatars: "Hide avatars",
        settings_hide_previews: "Hide message previews",
        settings_thumb_size: "Thumbnail size (px)",
        settings_custom_css: "Use custom CSS",
        settings_choose_file: "Choose file",
        settings_network: "Network",
        settings_use_proxy: "Use a proxy",
        settings_http_proxy: "HTTP proxy",
        settings_https_proxy: "HTTPS proxy",
        settings_proxy_restart_note: "Proxy changes restart the application.",
        settings_save: "Save",
        settings_close: "Close",
        phone_info_title: "Phone info",
        phone_info_empty: "No information received yet.",
    }
}

pub fn resolve_shell_locale(default_shell_locale: &'static str) -> &'static str {
    resolve_shell_locale_with(default_shell_locale, |key| env::var(key).ok())
}

pub(crate) fn resolve_shell_locale_with<F>(
    default_shell_locale: &'static str,
    lookup: F,
) -> &'static str
where
    F: Fn(&str) -> Option<String>,
{
    for env_key in LOCALE_ENV_KEYS {
        if let Some(value) = lookup(env_key) {
            if let Some(locale) = normalize_shell_locale(&value) {
                return locale;
            }
        }
    }

    default_shell_locale
}

/// Accepts POSIX (`it_IT.UTF-8`) and BCP 47 (`en-US`) spellings.
pub(crate) fn normalize_shell_locale(raw: &str) -> Option<&'static str> {
    let raw = raw.trim();
    let language_tag = raw.split(['.', '@']).next().unwrap_or_default();
    if language_tag.is_empty() {
        return None;
    }

    let lowered = language_tag.to_ascii_lowercase();
    SUPPORTED_LOCALES.into_iter().find(|locale| {
        let language = locale.split('-').next().unwrap_or_default();
        lowered.starts_with(&language.to_ascii_lowercase())
    })
}

pub fn current_shell_texts() -> ShellTexts {
    shell_texts_for_locale(resolve_shell_locale(crate::DEFAULT_SHELL_LOCALE))
}

pub fn log_resolved_locale() {
    let resolved = resolve_shell_locale_with("", |key| env::var(key).ok());
    if resolved.is_empty() {
        tracing::warn!(
            "No supported locale found, defaulting to {}",
            crate::DEFAULT_SHELL_LOCALE
        );
    } else {
        tracing::info!("Setting locale {resolved}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn shell_texts_for_locale_returns_italian_copy() {
        let texts = shell_texts_for_locale("it-IT");
        assert_eq!(texts.tray_show, "Mostra");
        assert_eq!(texts.settings_title, "Impostazioni");
    }

    #[test]
    fn shell_texts_for_locale_falls_back_to_english_copy() {
        let texts = shell_texts_for_locale("fr-FR");
        assert_eq!(texts.tray_hide, "Hide");
        assert_eq!(texts.tray_quit, "Quit");
    }

    #[test]
    fn normalize_shell_locale_accepts_posix_and_bcp47_tags() {
        assert_eq!(normalize_shell_locale("it_IT.UTF-8"), Some("it-IT"));
        assert_eq!(normalize_shell_locale("en-GB"), Some("en-US"));
        assert_eq!(normalize_shell_locale("EN_us@euro"), Some("en-US"));
        assert_eq!(normalize_shell_locale("C.UTF-8"), None);
        assert_eq!(normalize_shell_locale("  "), None);
    }

    #[test]
    fn resolve_prefers_explicit_override_then_posix_variables() {
        let lookup = lookup_from(&[
            ("WHATSAPP_DESKTOP_LOCALE", "it"),
            ("LC_ALL", "en_US.UTF-8"),
        ]);
        assert_eq!(resolve_shell_locale_with("en-US", lookup), "it-IT");

        let lookup = lookup_from(&[("LC_ALL", "C"), ("LANG", "it_IT.UTF-8")]);
        assert_eq!(resolve_shell_locale_with("en-US", lookup), "it-IT");

        let lookup = lookup_from(&[("LC_MESSAGES", "it_CH")]);
        assert_eq!(resolve_shell_locale_with("en-US", lookup), "it-IT");
    }

    #[test]
    fn resolve_falls_back_to_default_locale() {
        let lookup = lookup_from(&[("LANG", "de_DE.UTF-8")]);
        assert_eq!(resolve_shell_locale_with("en-US", lookup), "en-US");
    }

    #[test]
    fn every_supported_locale_has_distinct_tray_copy() {
        for locale in SUPPORTED_LOCALES {
            let texts = shell_texts_for_locale(locale);
            assert_ne!(texts.tray_show, texts.tray_hide);
        }
    }
}
