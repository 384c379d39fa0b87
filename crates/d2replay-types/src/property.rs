//! Property values and the typed accessor used to read them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single decoded property value.
///
/// The decoder emits many more value kinds than the reducer cares about.
/// Anything that is not a 32-bit float or integer is carried as
/// [`PropertyValue::Opaque`] so it can still be shown by the dump mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// A 32-bit float (times, positions).
    #[serde(rename = "f32")]
    Float32(f32),
    /// A 32-bit signed integer (counters, enums, net worth).
    #[serde(rename = "i32")]
    Int32(i32),
    /// Any other value, kept in its textual form.
    #[serde(rename = "opaque")]
    Opaque(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float32(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Opaque(v) => f.write_str(v),
        }
    }
}

/// Read-only, typed view of one entity update.
///
/// Implementations are only borrowed for the duration of a single dispatch
/// call. Consumers copy out the scalars they need and never hold on to the
/// view itself.
///
/// A key that is present with a different value type is reported as absent:
/// the reducer only performs presence checks.
pub trait PropertyAccess {
    /// The entity class this update belongs to.
    fn class_name(&self) -> &str;

    /// Look up the raw value stored under `key`.
    fn get(&self, key: &str) -> Option<&PropertyValue>;

    /// Visit every property in key order.
    fn for_each_property(&self, visit: &mut dyn FnMut(&str, &PropertyValue));

    /// Fetch a 32-bit float property.
    fn fetch_f32(&self, key: &str) -> Option<f32> {
        match self.get(key) {
            Some(PropertyValue::Float32(v)) => Some(*v),
            _ => None,
        }
    }

    /// Fetch a 32-bit integer property.
    fn fetch_i32(&self, key: &str) -> Option<i32> {
        match self.get(key) {
            Some(PropertyValue::Int32(v)) => Some(*v),
            _ => None,
        }
    }
}
