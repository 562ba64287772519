//! Shared core utilities

pub mod error_handling;
