//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`board`, `composer`, `session`) so pages and
//! components depend on small focused models, and so the non-DOM logic
//! (retrieve sequencing, counter text, draft trimming) stays unit-testable
//! without a browser.

pub mod board;
pub mod composer;
pub mod session;
