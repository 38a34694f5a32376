//! Schema model building
//!
//! The two-pass annotation-extraction engine: pass 1 indexes every entity
//! class (`EntityNameMap`), pass 2 classifies fields and folds them into a
//! `SchemaDocument`. The engine is synchronous and pure; it reads class
//! descriptors and produces a document, nothing else.

mod builder;
mod classify;
mod entity_name;
mod name_map;
mod schema;

pub use builder::build_schema;
pub use classify::{classify_field, FieldKind};
pub use entity_name::{resolve_entity_name, PLACEHOLDER_ENTITY_NAME};
pub use name_map::{EntityNameMap, DEFAULT_KEY_COLUMN};
pub use schema::{Column, ColumnKind, RelationshipRef, SchemaDocument, TableBlock};
