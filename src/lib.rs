//! Shared library for `UniRecords`
//! Contains the record model, relationship operations, and text-file storage
//! used by the CLI

pub mod core;

pub use crate::core::{auth, config, error, get_version, models, storage};
