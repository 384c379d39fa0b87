//! Owned entity snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::property::{PropertyAccess, PropertyValue};

/// One decoded entity update: a class name plus its property map.
///
/// This is the form decoder adapters produce. The reducer itself only sees
/// it through [`PropertyAccess`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity class, e.g. `CDOTAGamerulesProxy`.
    #[serde(rename = "class")]
    pub class_name: String,
    /// Property values keyed by dotted path.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl EntitySnapshot {
    /// Create an empty snapshot for `class_name`.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Set a property, replacing any previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.properties.insert(key.into(), value);
    }

    /// Builder form of [`insert`](Self::insert) for a float value.
    #[must_use]
    pub fn with_f32(mut self, key: impl Into<String>, value: f32) -> Self {
        self.insert(key, PropertyValue::Float32(value));
        self
    }

    /// Builder form of [`insert`](Self::insert) for an integer value.
    #[must_use]
    pub fn with_i32(mut self, key: impl Into<String>, value: i32) -> Self {
        self.insert(key, PropertyValue::Int32(value));
        self
    }

    /// Builder form of [`insert`](Self::insert) for an opaque value.
    #[must_use]
    pub fn with_opaque(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, PropertyValue::Opaque(value.into()));
        self
    }
}

impl PropertyAccess for EntitySnapshot {
    fn class_name(&self) -> &str {
        &self.class_name
    }

    fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    fn for_each_property(&self, visit: &mut dyn FnMut(&str, &PropertyValue)) {
        for (key, value) in &self.properties {
            visit(key, value);
        }
    }
}
