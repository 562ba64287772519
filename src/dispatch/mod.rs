// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod manager;
pub(crate) mod message;
pub(crate) mod options;
pub(crate) mod traits;

// Public API module - the only public interface for dispatch
pub mod api;

#[cfg(test)]
mod tests;
