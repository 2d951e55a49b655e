//! View components for the NetWrangler application.

pub mod components;
pub mod formatting;
pub mod navigation;
pub mod operations;
pub mod slicing;
pub mod theme;
