//! TypeScript entity-file parsing
//!
//! A tolerant, token-level parser for the declaration subset that matters for
//! schema generation: decorated classes and their decorated fields. It is not
//! a TypeScript compiler; anything it does not understand is skipped.

mod class_parser;
mod decorator;
mod lexer;

pub use class_parser::{
    parse_entity_file, parse_entity_files, parse_entity_source, ClassDescriptor, Decorator,
    FieldDescriptor,
};
pub use decorator::{DecoratorArg, LiteralValue, ObjectField};
