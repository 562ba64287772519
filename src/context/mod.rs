// Internal modules - all access should go through api module
pub(crate) mod builtin;
pub(crate) mod bundle;
pub(crate) mod error;
pub(crate) mod extractor;
pub(crate) mod registry;
pub(crate) mod traits;

// Public API module - the only public interface for context extraction
pub mod api;
