//! Reusable board-page components.

pub mod composer;
pub mod message_table;
