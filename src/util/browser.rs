//! Blocking browser dialogs (`window.prompt` / `window.alert`).
//!
//! TRADE-OFFS
//! ==========
//! Native dialogs are synchronous and unstyled, but they are what the board
//! uses for the email prompt and precondition alerts. Host builds no-op.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Show a prompt; `None` when cancelled or outside the browser.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        window.prompt_with_message(message).ok().flatten()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        None
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
