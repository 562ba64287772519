// Internal modules - all access should go through api module
pub(crate) mod formatter;

// Public API module - the only public interface for subject formatting
pub mod api;
