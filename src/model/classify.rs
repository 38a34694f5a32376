//! Field classification
//!
//! Every field classifies into exactly one kind. The precedence is a fixed
//! rule of this module: a primary-key marker wins over a column marker, which
//! wins over a relationship marker; a field carrying more than one marker
//! classifies by the first match, silently. Unrecognized fields are ignored.

use crate::dbml::map_type_to_dbml;
use crate::parser::{Decorator, DecoratorArg, FieldDescriptor, LiteralValue};
use crate::util::to_snake_case;

/// The classification of one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    PrimaryKey {
        uuid: bool,
    },
    Scalar {
        dbml_type: String,
        nullable: bool,
        default_value: Option<String>,
    },
    Relationship {
        /// Declared class name of the target, resolved against the name map later
        target_class: String,
        fk_column: String,
    },
    Ignored,
}

/// Classify a field by its annotation markers.
///
/// Total: malformed or missing decorator arguments degrade to the safe
/// default for the feature they configure, never to an error.
pub fn classify_field(field: &FieldDescriptor) -> FieldKind {
    if let Some(decorator) = field.decorator("PrimaryGeneratedColumn") {
        return FieldKind::PrimaryKey {
            uuid: has_uuid_strategy(decorator),
        };
    }
    if let Some(decorator) = field.decorator("Column") {
        return classify_scalar(field, decorator);
    }
    if let Some(decorator) = field.decorator("ManyToOne") {
        return classify_relationship(field, decorator);
    }
    FieldKind::Ignored
}

fn has_uuid_strategy(decorator: &Decorator) -> bool {
    matches!(decorator.arg0(), Some(DecoratorArg::StringLiteral(s)) if s == "uuid")
}

/// A scalar column: type from the explicit `type` option when present,
/// otherwise mapped from the declared source type; `nullable` only on a
/// literal `true`; `default` kept as its raw option text.
fn classify_scalar(field: &FieldDescriptor, decorator: &Decorator) -> FieldKind {
    let options = decorator.arg0();

    let dbml_type = options
        .and_then(|arg| arg.object_field("type"))
        .and_then(|value| match value {
            LiteralValue::Str(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        })
        .unwrap_or_else(|| {
            map_type_to_dbml(field.declared_type.as_deref().unwrap_or_default()).to_string()
        });

    let nullable = options
        .and_then(|arg| arg.object_field("nullable"))
        .is_some_and(|value| value.text() == "true");

    let default_value = options
        .and_then(|arg| arg.object_field("default"))
        .map(|value| value.text().to_string())
        .filter(|text| !text.is_empty());

    FieldKind::Scalar {
        dbml_type,
        nullable,
        default_value,
    }
}

/// A many-to-one relationship: the target class comes from the factory
/// argument's identifier path (last segment, so namespaced references work);
/// the FK column is the join-column override or `<snake field>_id`.
fn classify_relationship(field: &FieldDescriptor, decorator: &Decorator) -> FieldKind {
    let Some(DecoratorArg::ArrowFactory(path)) = decorator.arg0() else {
        return FieldKind::Ignored;
    };
    let Some(target_class) = path.rsplit('.').next().filter(|s| !s.is_empty()) else {
        return FieldKind::Ignored;
    };

    let fk_column = join_column_name(field)
        .unwrap_or_else(|| format!("{}_id", to_snake_case(&field.name)));

    FieldKind::Relationship {
        target_class: target_class.to_string(),
        fk_column,
    }
}

fn join_column_name(field: &FieldDescriptor) -> Option<String> {
    match field.decorator("JoinColumn")?.arg0()?.object_field("name")? {
        LiteralValue::Str(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
