const APP_COMMANDS: &[&str] = &[
    "shell_get_settings",
    "shell_save_settings",
    "shell_pick_custom_css",
    "shell_get_texts",
    "shell_get_phone_info",
    "shell_report_phone_info",
    "shell_open_external_url",
];

fn main() {
    tauri_build::try_build(
        tauri_build::Attributes::new()
            .app_manifest(tauri_build::AppManifest::new().commands(APP_COMMANDS)),
    )
    .expect("failed to run tauri-build");
}
