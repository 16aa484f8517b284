//! CLI command implementations.

pub mod diff;
pub mod list;
pub mod put;
pub mod route;
pub mod show;
