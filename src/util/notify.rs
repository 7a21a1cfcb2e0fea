//! User-facing notifications.
//!
//! Browser alert dialogs in the client build, no-ops elsewhere. Kept
//! behind one seam so pages and components never touch `web_sys` directly.

/// Show a blocking alert dialog with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}
