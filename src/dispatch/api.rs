//! Public API for notification dispatch
//!
//! This module provides the complete public API for the dispatch system.
//! External modules should import from here rather than directly from
//! internal modules.

// Dispatcher and outcome
pub use crate::dispatch::manager::{DispatchOutcome, NotificationDispatcher};

// Per-call options and callback hooks
pub use crate::dispatch::options::{NotifyOptions, PostCallback, PreCallback};

// Message values and the delivery seam
pub use crate::dispatch::message::{
    DeliveryReceipt, Message, TEMPLATE_BACKGROUND, TEMPLATE_FOREGROUND,
};
pub use crate::dispatch::traits::{DeliveryBackend, LogDeliveryBackend};

// Error handling
pub use crate::dispatch::error::{CallbackError, DeliveryError, DispatchError};
