//! Shared foundations: configuration, errors and core geometry types.

pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod error;
