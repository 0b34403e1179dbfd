use url::Url;

use crate::shell_config::ShellConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRules {
    pub http: String,
    pub https: String,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

impl ProxyRules {
    pub fn from_config(config: &ShellConfig) -> Option<Self> {
        if !config.use_proxy {
            return None;
        }

        let http = non_empty(config.http_proxy.as_deref())?;
        let https = non_empty(config.https_proxy.as_deref()).unwrap_or(http);
        Some(Self {
            http: http.to_string(),
            https: https.to_string(),
        })
    }

    pub fn rules_string(&self) -> String {
        format!("http={};https={}", self.http, self.https)
    }

    /// The system webview takes one proxy endpoint for all traffic, so the
    /// HTTP endpoint is used.
    pub fn webview_proxy_url(&self) -> Result<Url, String> {
        parse_proxy_url(&self.http)
    }
}

pub fn parse_proxy_url(raw: &str) -> Result<Url, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Missing proxy address.".to_string());
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    let parsed =
        Url::parse(&candidate).map_err(|error| format!("Invalid proxy address: {error}"))?;
    match parsed.scheme() {
        "http" | "socks5" => {}
        scheme => {
            return Err(format!(
                "Unsupported proxy scheme '{scheme}', only http/socks5 are allowed."
            ))
        }
    }
    if parsed.host_str().is_none() {
        return Err(format!("Proxy address has no host: {trimmed}"));
    }
    Ok(parsed)
}
