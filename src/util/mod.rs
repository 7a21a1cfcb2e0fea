//! Small shared utilities: timestamp formatting and user notifications.

pub mod notify;
pub mod timestamp;
