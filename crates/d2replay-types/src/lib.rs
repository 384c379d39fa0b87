//! Shared type definitions for d2replay.
//!
//! The replay decoder hands the reducer one entity update at a time. This
//! crate defines the shape of such an update and the typed accessor the
//! reducer reads it through, so no consumer ever touches an untyped map.
//!
//! # Modules
//!
//! - [`property`] -- [`PropertyValue`] and the [`PropertyAccess`] trait
//! - [`snapshot`] -- [`EntitySnapshot`], the owned snapshot implementation
//! - [`schema`] -- Entity class names, property keys, and roster size

pub mod property;
pub mod schema;
pub mod snapshot;

pub use property::{PropertyAccess, PropertyValue};
pub use schema::{ClassKind, ROSTER_SIZE};
pub use snapshot::EntitySnapshot;
