//! Schema document representation

/// The complete extracted schema: table blocks in entity order, followed by
/// the relationship references in field-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    pub tables: Vec<TableBlock>,
    pub refs: Vec<RelationshipRef>,
}

/// One table block; columns keep the field declaration order of the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBlock {
    pub entity: String,
    pub columns: Vec<Column>,
}

/// A single column of a table block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// How a column renders: primary keys carry their generation strategy,
/// scalar columns carry their resolved type and modifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnKind {
    PrimaryKey {
        /// True for the `'uuid'` generation strategy
        uuid: bool,
    },
    Scalar {
        dbml_type: String,
        nullable: bool,
        default_value: Option<String>,
    },
}

/// A foreign-key reference between two entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipRef {
    pub source_entity: String,
    pub fk_column: String,
    pub target_entity: String,
    pub target_key: String,
}
