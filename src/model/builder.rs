//! Pass 2: build the schema document from classified fields

use anyhow::Result;

use super::classify::{classify_field, FieldKind};
use super::entity_name::resolve_entity_name;
use super::name_map::{EntityNameMap, DEFAULT_KEY_COLUMN};
use super::schema::{Column, ColumnKind, RelationshipRef, SchemaDocument, TableBlock};
use crate::error::DbmlGenError;
use crate::parser::ClassDescriptor;
use crate::util::to_snake_case;

/// Build a schema document from the parsed class set.
///
/// Pass 1 indexes every entity class; pass 2 walks entities in input order
/// and fields in declaration order. Both passes run over the entire input —
/// relationship resolution is only correct once the index is complete.
///
/// An input set with no entity classes is a hard stop; everything else
/// degrades per field.
pub fn build_schema(classes: &[ClassDescriptor]) -> Result<SchemaDocument> {
    let entities: Vec<&ClassDescriptor> = classes.iter().filter(|c| c.is_entity()).collect();
    if entities.is_empty() {
        return Err(DbmlGenError::NoEntitiesFound.into());
    }

    let names = EntityNameMap::build(&entities);

    let mut tables = Vec::with_capacity(entities.len());
    let mut refs = Vec::new();

    for class in &entities {
        let entity = resolve_entity_name(class);
        let mut columns = Vec::with_capacity(class.fields.len());

        for field in &class.fields {
            match classify_field(field) {
                FieldKind::PrimaryKey { uuid } => {
                    columns.push(Column {
                        name: to_snake_case(&field.name),
                        kind: ColumnKind::PrimaryKey { uuid },
                    });
                }
                FieldKind::Scalar {
                    dbml_type,
                    nullable,
                    default_value,
                } => {
                    columns.push(Column {
                        name: to_snake_case(&field.name),
                        kind: ColumnKind::Scalar {
                            dbml_type,
                            nullable,
                            default_value,
                        },
                    });
                }
                FieldKind::Relationship {
                    target_class,
                    fk_column,
                } => {
                    // Unresolved targets keep the raw class name; the run
                    // never fails on a dangling reference
                    let target_entity = names
                        .entity_name(&target_class)
                        .unwrap_or(target_class.as_str())
                        .to_string();
                    let target_key = names
                        .key_column(&target_class)
                        .unwrap_or(DEFAULT_KEY_COLUMN)
                        .to_string();
                    refs.push(RelationshipRef {
                        source_entity: entity.clone(),
                        fk_column,
                        target_entity,
                        target_key,
                    });
                }
                FieldKind::Ignored => {}
            }
        }

        tables.push(TableBlock { entity, columns });
    }

    Ok(SchemaDocument { tables, refs })
}
