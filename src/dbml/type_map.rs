//! Source-type → DBML-type mapping

/// Map a primitive source type name to a DBML column type.
///
/// Total: anything outside the fixed table maps to `varchar`.
pub fn map_type_to_dbml(source_type: &str) -> &'static str {
    match source_type {
        "string" => "varchar",
        "number" => "integer",
        "boolean" => "boolean",
        "Date" => "timestamp",
        "any" => "text",
        _ => "varchar",
    }
}
