//! Blocking browser dialogs used by the like/delete flows.

/// Show `message` in a `window.alert`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Ask `message` in a `window.confirm`. Anything but an explicit OK is a no.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
