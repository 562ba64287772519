//! Delivery-agnostic failure notification dispatch.
//!
//! Formats an application error into an email-shaped message and hands it to a
//! pluggable delivery backend. A failure anywhere in the notification
//! machinery must never propagate back into the error-handling code that
//! triggered it.

pub mod config;
pub mod context;
pub mod core;
pub mod dispatch;
pub mod event;
pub mod subject;
