use crate::lead::BrowserContext;

/// Log a warning message to the browser console.
pub fn log_warning(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

/// Read the user agent and referrer of the current visit.
///
/// Either value falls back to an empty string when the browser refuses to
/// report it.
pub fn capture_context() -> BrowserContext {
    let Some(window) = web_sys::window() else {
        return BrowserContext::default();
    };
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let referrer = window
        .document()
        .map(|doc| doc.referrer())
        .unwrap_or_default();

    BrowserContext {
        user_agent,
        referrer,
    }
}

/// Blocking `alert()` dialog. Silently skipped outside a browser.
pub fn alert(msg: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(msg);
    }
}

/// Reload the page, used by the error fallback.
pub fn reload() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
