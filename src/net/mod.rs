//! Network layer: wire types and REST request helpers.

pub mod api;
pub mod types;
