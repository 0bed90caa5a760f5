//! Telegram Mini App host integration.
//!
//! The host injects `window.Telegram.WebApp` before the app starts. Only
//! `initDataUnsafe.user` is read, once, at startup. Anything missing along
//! that path means the wall was opened outside Telegram and runs read-only.

#[cfg(test)]
#[path = "telegram_test.rs"]
mod telegram_test;

use crate::net::types::CurrentUser;

/// Decode the host's user object from its JSON form.
#[must_use]
pub fn parse_host_user(json: &str) -> Option<CurrentUser> {
    match serde_json::from_str::<CurrentUser>(json) {
        Ok(user) => Some(user),
        Err(e) => {
            leptos::logging::warn!("telegram user payload not understood: {e}");
            None
        }
    }
}

/// Read the current Telegram user from the host page.
#[must_use]
pub fn read_host_user() -> Option<CurrentUser> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        let user = ["Telegram", "WebApp", "initDataUnsafe", "user"]
            .iter()
            .try_fold(wasm_bindgen::JsValue::from(window), |target, key| property(&target, key))?;
        let json = js_sys::JSON::stringify(&user).ok()?.as_string()?;
        parse_host_user(&json)
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Tell the host the app is ready and should take the full height.
pub fn signal_ready() {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(webapp) = property(&window.into(), "Telegram").and_then(|t| property(&t, "WebApp")) else {
            return;
        };
        for method in ["ready", "expand"] {
            let Some(func) = property(&webapp, method).and_then(|f| f.dyn_into::<js_sys::Function>().ok()) else {
                continue;
            };
            if let Err(e) = func.call0(&webapp) {
                leptos::logging::warn!("Telegram.WebApp.{method}() failed: {e:?}");
            }
        }
    }
}

#[cfg(feature = "csr")]
fn property(target: &wasm_bindgen::JsValue, key: &str) -> Option<wasm_bindgen::JsValue> {
    let value = js_sys::Reflect::get(target, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    if value.is_undefined() || value.is_null() { None } else { Some(value) }
}
