use std::process::{Command, Stdio};

use url::Url;

use crate::WHATSAPP_WEB_HOST;

pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let candidate = raw_url.trim();
    if candidate.is_empty() {
        return Err("Missing external URL.".to_string());
    }

    let url = Url::parse(candidate).map_err(|error| format!("Invalid URL: {error}"))?;
    if matches!(url.scheme(), "http" | "https") {
        return Ok(url);
    }
    Err(format!(
        "Unsupported URL scheme '{}', only http/https are allowed.",
        url.scheme()
    ))
}

/// WhatsApp Web itself stays in the shell; other web links go to the system browser.
pub(crate) fn should_open_externally(url: &Url) -> bool {
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    url.host_str()
        .map(|host| !host.eq_ignore_ascii_case(WHATSAPP_WEB_HOST))
        .unwrap_or(false)
}

const NO_LEADING_ARGS: &[&str] = &[];
const RUNDLL32_ARGS: &[&str] = &["url.dll,FileProtocolHandler"];

/// Program and leading arguments that hand a URL to the desktop's default browser.
fn system_browser_launcher() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        Some(("open", NO_LEADING_ARGS))
    } else if cfg!(windows) {
        Some(("rundll32", RUNDLL32_ARGS))
    } else if cfg!(unix) {
        Some(("xdg-open", NO_LEADING_ARGS))
    } else {
        None
    }
}

fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    let (program, leading_args) = system_browser_launcher()
        .ok_or_else(|| "Opening external URLs is not supported on this platform.".to_string())?;
    Command::new(program)
        .args(leading_args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run '{program}': {error}"))
}

pub(crate) fn open_external_url(raw_url: &str) -> Result<(), String> {
    let url = parse_openable_url(raw_url)?;
    open_url_with_system_browser(url.as_str())?;
    tracing::info!("opened external url: {url}");
    Ok(())
}
