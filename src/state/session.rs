//! Session flag storage.
//!
//! The flag lives in `sessionStorage` under a fixed key, so it is scoped to
//! the browser tab and gone after the tab closes. Its presence is the sole
//! authorization check for the board page: set on successful login, removed
//! on logout. Requires a browser environment; outside one the flag reads as
//! absent and mutations are no-ops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "csr")]
const SESSION_KEY: &str = "authenticated";

/// Whether the current tab holds the session flag.
pub fn is_authenticated() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.session_storage() {
            if let Ok(Some(_)) = storage.get_item(SESSION_KEY) {
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Mark the tab as logged in.
pub fn set_authenticated() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.set_item(SESSION_KEY, "true");
            }
        }
    }
}

/// Remove the session flag (logout).
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.session_storage() {
                let _ = storage.remove_item(SESSION_KEY);
            }
        }
    }
}
