//! Pass 1: the class-name → entity index
//!
//! Relationship targets are referenced by class name but must render by
//! entity name, and a target class may live in a file processed after its
//! referrer. The map is therefore built over the complete class set before
//! any relationship resolves, and is immutable afterwards.

use std::collections::HashMap;

use super::classify::{classify_field, FieldKind};
use super::entity_name::resolve_entity_name;
use crate::parser::ClassDescriptor;
use crate::util::to_snake_case;

/// Target key column used when a relationship target is unknown or has no
/// primary-key field
pub const DEFAULT_KEY_COLUMN: &str = "id";

#[derive(Debug, Clone)]
struct EntityRecord {
    entity_name: String,
    /// Normalized column name of the entity's primary-key field, if any
    key_column: Option<String>,
}

/// Immutable index of every entity class, keyed by declared class name
#[derive(Debug, Clone, Default)]
pub struct EntityNameMap {
    records: HashMap<String, EntityRecord>,
}

impl EntityNameMap {
    /// Index the complete entity-class set. Anonymous classes cannot be
    /// referenced by name and are not indexed.
    pub fn build(classes: &[&ClassDescriptor]) -> Self {
        let mut records = HashMap::with_capacity(classes.len());

        for class in classes {
            let Some(class_name) = &class.class_name else {
                continue;
            };
            records.insert(
                class_name.clone(),
                EntityRecord {
                    entity_name: resolve_entity_name(class),
                    key_column: primary_key_column(class),
                },
            );
        }

        Self { records }
    }

    /// Resolved entity name for a declared class name
    pub fn entity_name(&self, class_name: &str) -> Option<&str> {
        self.records
            .get(class_name)
            .map(|record| record.entity_name.as_str())
    }

    /// Primary-key column of a declared class name, when it has one
    pub fn key_column(&self, class_name: &str) -> Option<&str> {
        self.records
            .get(class_name)
            .and_then(|record| record.key_column.as_deref())
    }
}

fn primary_key_column(class: &ClassDescriptor) -> Option<String> {
    class.fields.iter().find_map(|field| {
        matches!(classify_field(field), FieldKind::PrimaryKey { .. })
            .then(|| to_snake_case(&field.name))
    })
}
