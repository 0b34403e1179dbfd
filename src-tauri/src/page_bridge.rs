//! Initialization script for the WhatsApp Web page: connectivity reports and external links.

const PAGE_BRIDGE_SCRIPT: &str = r#"(function () {
  if (window.__whatsappDesktopBridge) {
    return;
  }
  window.__whatsappDesktopBridge = true;

  function invoke(command, args) {
    var internals = window.__TAURI_INTERNALS__;
    if (!internals || typeof internals.invoke !== "function") {
      return;
    }
    internals.invoke(command, args).catch(function (error) {
      console.warn("[whatsapp-desktop] " + command + " failed", error);
    });
  }

  function reportPhoneInfo() {
    var online = navigator.onLine !== false;
    invoke("shell_report_phone_info", {
      info: {
        info: online ? "__PHONE_INFO_NORMAL__" : "OFFLINE",
        online: online,
        reportedAt: new Date().toISOString()
      }
    });
  }

  function openExternal(url) {
    if (!url) {
      return false;
    }
    var resolved;
    try {
      resolved = new URL(url, window.location.href);
    } catch (error) {
      return false;
    }
    if (resolved.host === window.location.host) {
      return false;
    }
    if (resolved.protocol !== "http:" && resolved.protocol !== "https:") {
      return false;
    }
    invoke("shell_open_external_url", { url: resolved.href });
    return true;
  }

  var nativeOpen = window.open;
  window.open = function (url, target, features) {
    if (openExternal(url)) {
      return null;
    }
    return nativeOpen.call(window, url, target, features);
  };

  document.addEventListener(
    "click",
    function (event) {
      var anchor = event.target && event.target.closest ? event.target.closest("a[href]") : null;
      if (!anchor || anchor.target !== "_blank") {
        return;
      }
      if (openExternal(anchor.href)) {
        event.preventDefault();
      }
    },
    true
  );

  window.addEventListener("online", reportPhoneInfo);
  window.addEventListener("offline", reportPhoneInfo);
  window.addEventListener("load", reportPhoneInfo);
})();"#;

pub fn page_bridge_script() -> String {
    PAGE_BRIDGE_SCRIPT.replace("__PHONE_INFO_NORMAL__", crate::PHONE_INFO_NORMAL)
}
