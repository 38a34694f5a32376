//! Schema document rendering
//!
//! The output format is consumed byte-for-byte by downstream visualization
//! tools: table blocks with two-space-indented column lines, blank-line
//! separated, then one `Ref:` line per relationship, and the whole document
//! trimmed.

use crate::model::{ColumnKind, RelationshipRef, SchemaDocument, TableBlock};
use crate::util::is_bare_identifier;

/// Render the complete document.
pub fn render_document(doc: &SchemaDocument) -> String {
    let mut out = String::new();

    for (i, table) in doc.tables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_table(&mut out, table);
    }

    if !doc.refs.is_empty() {
        out.push('\n');
        for r in &doc.refs {
            write_ref(&mut out, r);
        }
    }

    out.trim().to_string()
}

fn write_table(out: &mut String, table: &TableBlock) {
    out.push_str(&format!("Table {} {{\n", quote_name(&table.entity)));
    for column in &table.columns {
        out.push_str(&format!(
            "  {} {}\n",
            quote_name(&column.name),
            render_column_kind(&column.kind)
        ));
    }
    out.push_str("}\n");
}

fn render_column_kind(kind: &ColumnKind) -> String {
    match kind {
        ColumnKind::PrimaryKey { uuid: true } => "varchar [pk]".to_string(),
        ColumnKind::PrimaryKey { uuid: false } => "integer [pk, increment]".to_string(),
        ColumnKind::Scalar {
            dbml_type,
            nullable,
            default_value,
        } => {
            let mut modifiers = Vec::new();
            if *nullable {
                modifiers.push("null".to_string());
            }
            if let Some(value) = default_value {
                modifiers.push(format!("default: '{}'", value));
            }
            if modifiers.is_empty() {
                dbml_type.clone()
            } else {
                format!("{} [{}]", dbml_type, modifiers.join(", "))
            }
        }
    }
}

fn write_ref(out: &mut String, r: &RelationshipRef) {
    out.push_str(&format!(
        "Ref: {}.{} > {}.{}\n",
        quote_name(&r.source_entity),
        quote_name(&r.fk_column),
        quote_name(&r.target_entity),
        quote_name(&r.target_key)
    ));
}

/// Names that are not bare identifiers must be double-quoted in DBML.
fn quote_name(name: &str) -> String {
    if is_bare_identifier(name) {
        name.to_string()
    } else {
        format!("\"{}\"", name)
    }
}
