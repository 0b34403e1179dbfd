#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_menu;
mod app_runtime;
mod app_types;
mod badge;
mod close_policy;
mod config_apply;
mod css_injection;
mod exit_events;
mod external_links;
mod logging;
mod main_window;
mod page_bridge;
mod phone_info;
mod proxy_settings;
mod secondary_window;
mod settings_form;
mod settings_window;
mod shell_commands;
mod shell_config;
mod shell_locale;
mod tray_actions;
mod tray_labels;
mod tray_menu_handler;
mod tray_setup;
mod window_actions;

pub(crate) use app_constants::*;
pub(crate) use app_types::{PhoneInfo, ShellCommandResult, ShellState, TrayMenuItems, TrayMenuState};

fn main() {
    app_runtime::run();
}
