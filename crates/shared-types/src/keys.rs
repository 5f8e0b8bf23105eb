//! # Key Layout
//!
//! Each subsystem owns a set of key prefixes. `KeyLayout` collects the
//! prefixes of every subsystem sharing one store and rejects layouts where a
//! prefix is empty or is a prefix of another one (a scan over the shorter
//! prefix would then walk the other entity's records).

use crate::errors::KeyLayoutError;

/// Named prefixes for all entities sharing a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyLayout {
    entries: Vec<(String, Vec<u8>)>,
}

impl KeyLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prefix under an entity name.
    pub fn with(mut self, entity: impl Into<String>, prefix: impl Into<Vec<u8>>) -> Self {
        self.entries.push((entity.into(), prefix.into()));
        self
    }

    /// Append every entry of another layout.
    pub fn merge(mut self, other: KeyLayout) -> Self {
        self.entries.extend(other.entries);
        self
    }

    pub fn entries(&self) -> &[(String, Vec<u8>)] {
        &self.entries
    }

    pub fn validate(&self) -> Result<(), KeyLayoutError> {
        for (entity, prefix) in &self.entries {
            if prefix.is_empty() {
                return Err(KeyLayoutError::EmptyPrefix {
                    entity: entity.clone(),
                });
            }
        }

        for (i, (first, a)) in self.entries.iter().enumerate() {
            for (second, b) in self.entries.iter().skip(i + 1) {
                if a.starts_with(b) || b.starts_with(a) {
                    return Err(KeyLayoutError::Collision {
                        first: first.clone(),
                        second: second.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// `prefix || suffix`.
pub fn prefixed(prefix: &[u8], suffix: &[u8]) -> Vec<u8> {
    let mut key = Vec::with_capacity(prefix.len() + suffix.len());
    key.extend_from_slice(prefix);
    key.extend_from_slice(suffix);
    key
}
