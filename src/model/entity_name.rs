//! Entity (table) name resolution

use crate::parser::{ClassDescriptor, Decorator, DecoratorArg, LiteralValue};
use crate::util::to_snake_case;

/// Name used for anonymous entity classes, which have nothing better to offer
pub const PLACEHOLDER_ENTITY_NAME: &str = "UnknownEntity";

/// Resolve the table name for a class.
///
/// Precedence: an explicit string argument on the entity decorator, then a
/// `name` entry of an options-object argument, then the snake_case form of
/// the class name. Total: an anonymous class without an explicit name gets
/// the placeholder name.
pub fn resolve_entity_name(class: &ClassDescriptor) -> String {
    if let Some(name) = class.decorator("Entity").and_then(explicit_name) {
        return name;
    }

    match &class.class_name {
        Some(name) => to_snake_case(name),
        None => PLACEHOLDER_ENTITY_NAME.to_string(),
    }
}

fn explicit_name(decorator: &Decorator) -> Option<String> {
    match decorator.arg0()? {
        DecoratorArg::StringLiteral(s) if !s.is_empty() => Some(s.clone()),
        arg @ DecoratorArg::ObjectLiteral(_) => match arg.object_field("name") {
            Some(LiteralValue::Str(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        },
        _ => None,
    }
}
