//! Public API for context extraction
//!
//! This module provides the complete public API for turning an error event
//! and its optional request context into the named sections of a
//! notification body. External modules should import from here rather than
//! directly from internal modules.

// Bundle and extraction entry point
pub use crate::context::bundle::SectionBundle;
pub use crate::context::extractor::{extract, DATA_SECTION};

// Strategy table and trait
pub use crate::context::registry::StrategyRegistry;
pub use crate::context::traits::SectionStrategy;

// Error handling
pub use crate::context::error::{ExtractionError, ExtractionResult};
