//! Page-level components, one per route.

pub mod board;
pub mod login;
