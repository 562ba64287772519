// Internal modules - all access should go through api module
pub(crate) mod error;
pub(crate) mod file;
pub(crate) mod resolver;
pub(crate) mod settings;

// Public API module - the only public interface for the configuration system
pub mod api;

#[cfg(test)]
mod tests;
