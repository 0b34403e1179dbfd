use tauri::{menu::MenuItem, AppHandle, Manager};

use crate::{shell_locale, tray_actions, TrayMenuState, MAIN_WINDOW_LABEL};

fn set_menu_text_safe(item: &MenuItem<tauri::Wry>, text: &str, item_name: &str) {
    if let Err(error) = item.set_text(text) {
        tracing::warn!(
            "failed to update tray menu text for {}: {}",
            item_name,
            error
        );
    }
}

pub fn toggle_label(texts: &shell_locale::ShellTexts, window_visible: bool) -> &'static str {
    if window_visible {
        texts.tray_hide
    } else {
        texts.tray_show
    }
}

pub fn update_tray_menu_labels(app_handle: &AppHandle) {
    update_tray_menu_labels_with_visibility(app_handle, None);
}

pub fn update_tray_menu_labels_with_visibility(app_handle: &AppHandle, visible_override: Option<bool>) {
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };
    let Some(items) = tray_state.items() else {
        return;
    };

    let shell_texts = shell_locale::current_shell_texts();
    let effective_visible = if let Some(visible) = visible_override {
        visible
    } else {
        app_handle
            .get_webview_window(MAIN_WINDOW_LABEL)
            .and_then(|window| window.is_visible().ok())
            .unwrap_or(true)
    };

    set_menu_text_safe(
        &items.toggle_item,
        toggle_label(&shell_texts, effective_visible),
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
    );
    set_menu_text_safe(
        &items.quit_item,
        shell_texts.tray_quit,
        tray_actions::TRAY_MENU_QUIT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_offers_the_opposite_of_current_visibility() {
        let texts = shell_locale::shell_texts_for_locale("en-US");
        assert_eq!(toggle_label(&texts, true), "Hide");
        assert_eq!(toggle_label(&texts, false), "Show");
    }
}
