//! Section strategy registry
//!
//! Explicit name-to-strategy table. Section names configured without a
//! registered strategy are skipped with a warning by the extractor; nothing
//! is ever dispatched dynamically by name.

use crate::context::builtin;
use crate::context::traits::SectionStrategy;
use std::collections::HashMap;

pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn SectionStrategy>>,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl StrategyRegistry {
    /// An empty registry with no strategies at all.
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// A registry preloaded with the builtin request, session, environment
    /// and backtrace strategies.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("request", Box::new(builtin::request_section));
        registry.register("session", Box::new(builtin::session_section));
        registry.register("environment", Box::new(builtin::environment_section));
        registry.register("backtrace", Box::new(builtin::backtrace_section));
        registry
    }

    /// Register a strategy under a section name.
    pub fn register(&mut self, name: impl Into<String>, strategy: Box<dyn SectionStrategy>) {
        let name = name.into();
        if self.strategies.insert(name.clone(), strategy).is_some() {
            log::warn!("Section strategy '{name}' replaced an existing registration");
        }
    }

    pub fn get(&self, name: &str) -> Option<&dyn SectionStrategy> {
        self.strategies.get(name).map(|s| s.as_ref())
    }

    pub fn has_strategy(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}
