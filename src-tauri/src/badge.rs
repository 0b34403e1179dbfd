//! Unread message badge derived from the WhatsApp Web page title, e.g. `(3) WhatsApp`.

use tauri::{Runtime, WebviewWindow};

/// The first parenthesized run of digits in `title`.
pub fn parse_unread_count(title: &str) -> Option<u32> {
    let mut rest = title;
    while let Some(open) = rest.find('(') {
        let after_open = &rest[open + 1..];
        let digits_len = after_open
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_open.len());
        if digits_len > 0 && after_open[digits_len..].starts_with(')') {
            return after_open[..digits_len].parse().ok();
        }
        rest = after_open;
    }
    None
}

#[cfg_attr(not(windows), allow(dead_code))]
pub fn overlay_badge_index(count: u32) -> u32 {
    if count > 9 {
        0
    } else {
        count
    }
}

fn describe_count(count: Option<u32>) -> String {
    count.map(|value| value.to_string()).unwrap_or_default()
}

pub fn apply_unread_badge<R: Runtime>(window: &WebviewWindow<R>, count: Option<u32>) {
    #[cfg(any(target_os = "macos", target_os = "linux"))]
    {
        let badge = count.filter(|value| *value > 0).map(i64::from);
        if let Err(error) = window.set_badge_count(badge) {
            tracing::warn!("failed to set badge count: {error}");
        }
    }

    #[cfg(windows)]
    apply_overlay_badge(window, count);

    #[cfg(not(any(target_os = "macos", target_os = "linux", windows)))]
    let _ = window;

    tracing::info!("Badge updated: {}", describe_count(count));
}

#[cfg(windows)]
fn overlay_badge_image(index: u32) -> tauri::image::Image<'static> {
    match index {
        1 => tauri::include_image!("./icons/badges/badge-1.png"),
        2 => tauri::include_image!("./icons/badges/badge-2.png"),
        3 => tauri::include_image!("./icons/badges/badge-3.png"),
        4 => tauri::include_image!("./icons/badges/badge-4.png"),
        5 => tauri::include_image!("./icons/badges/badge-5.png"),
        6 => tauri::include_image!("./icons/badges/badge-6.png"),
        7 => tauri::include_image!("./icons/badges/badge-7.png"),
        8 => tauri::include_image!("./icons/badges/badge-8.png"),
        9 => tauri::include_image!("./icons/badges/badge-9.png"),
        _ => tauri::include_image!("./icons/badges/badge-0.png"),
    }
}

#[cfg(windows)]
fn apply_overlay_badge<R: Runtime>(window: &WebviewWindow<R>, count: Option<u32>) {
    match count.filter(|value| *value > 0) {
        Some(count) => {
            if !window.is_focused().unwrap_or(false) {
                if let Err(error) =
                    window.request_user_attention(Some(tauri::UserAttentionType::Informational))
                {
                    tracing::warn!("failed to flash main window: {error}");
                }
            }
            let image = overlay_badge_image(overlay_badge_index(count));
            if let Err(error) = window.set_overlay_icon(Some(image)) {
                tracing::warn!("failed to set overlay badge: {error}");
            }
        }
        None => {
            if let Err(error) = window.set_overlay_icon(None) {
                tracing::warn!("failed to clear overlay badge: {error}");
            }
        }
    }
}
