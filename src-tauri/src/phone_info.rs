use tauri::{AppHandle, Emitter, Manager, WebviewUrl, WebviewWindowBuilder};

use crate::{
    secondary_window, tray_setup, PhoneInfo, ShellState, PHONE_INFO_NORMAL,
    PHONE_INFO_UPDATED_EVENT, PHONE_INFO_WINDOW_LABEL,
};

pub(crate) fn is_warning_state(info: &PhoneInfo) -> bool {
    info.info != PHONE_INFO_NORMAL
}

pub(crate) fn record_phone_info(app_handle: &AppHandle, info: PhoneInfo) {
    let warning = is_warning_state(&info);
    tracing::debug!("phone info update: {}", info.info);

    if let Some(state) = app_handle.try_state::<ShellState>() {
        state.set_phone_info(info.clone());
    }
    tray_setup::set_warning_icon(app_handle, warning);

    if let Err(error) = app_handle.emit_to(PHONE_INFO_WINDOW_LABEL, PHONE_INFO_UPDATED_EVENT, &info)
    {
        tracing::warn!("failed to forward phone info update: {error}");
    }
}

pub(crate) fn open_phone_info_window(app_handle: &AppHandle) {
    if secondary_window::focus_existing(app_handle, PHONE_INFO_WINDOW_LABEL) {
        return;
    }

    let texts = crate::shell_locale::current_shell_texts();
    let result = WebviewWindowBuilder::new(
        app_handle,
        PHONE_INFO_WINDOW_LABEL,
        WebviewUrl::App("phoneinfo.html".into()),
    )
    .title(texts.phone_info_title)
    .inner_size(500.0, 500.0)
    .resizable(true)
    .center()
    .decorations(true)
    .build();

    match result {
        Ok(window) => secondary_window::hide_menu_bar(&window),
        Err(error) => tracing::error!("failed to open phone info window: {error}"),
    }
}
