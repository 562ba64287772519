//! Section bundle
//!
//! Ordered name-to-value pairs making up the body of one notification. Built
//! fresh per dispatch and discarded after delivery.

use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionBundle {
    sections: Vec<(String, Value)>,
}

impl SectionBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section. Duplicate names keep the first occurrence.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if self.contains(&name) {
            log::debug!("Section '{name}' already present in bundle, keeping first");
            return;
        }
        self.sections.push((name, value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.sections
            .iter()
            .find(|(section, _)| section == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sections.iter().any(|(section, _)| section == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.sections
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
