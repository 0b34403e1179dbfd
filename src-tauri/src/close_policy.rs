#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPlatform {
    MacOs,
    Windows,
    Other,
}

impl ShellPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCloseAction {
    AllowClose,
    HideWindow,
    QuitApp,
}

pub fn decide_main_close(
    platform: ShellPlatform,
    tray_present: bool,
    quitting: bool,
) -> MainCloseAction {
    if quitting {
        return MainCloseAction::AllowClose;
    }

    match platform {
        ShellPlatform::MacOs => MainCloseAction::HideWindow,
        ShellPlatform::Windows => MainCloseAction::QuitApp,
        ShellPlatform::Other if tray_present => MainCloseAction::HideWindow,
        ShellPlatform::Other => MainCloseAction::QuitApp,
    }
}
