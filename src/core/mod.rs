//! Core module for university records

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
mod relations;
pub mod storage;

/// Returns the current version of the `UniRecords` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
