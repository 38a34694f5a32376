//! Class and field extraction from entity source files

use std::path::{Path, PathBuf};

use anyhow::Result;
use encoding_rs::WINDOWS_1252;
use rayon::prelude::*;

use super::decorator::DecoratorArg;
use super::lexer::{join_tokens, tokenize, Token};
use crate::error::DbmlGenError;

/// A decorator attached to a class or field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decorator {
    pub name: String,
    pub args: Vec<DecoratorArg>,
}

impl Decorator {
    /// First argument, where all recognized configuration lives
    pub fn arg0(&self) -> Option<&DecoratorArg> {
        self.args.first()
    }
}

/// A field of a class declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    /// Declared type annotation text, if the field has one
    pub declared_type: Option<String>,
    pub decorators: Vec<Decorator>,
}

impl FieldDescriptor {
    pub fn decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.name == name)
    }
}

/// A class declaration with its decorators and fields, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// None for anonymous `export default class` declarations
    pub class_name: Option<String>,
    pub decorators: Vec<Decorator>,
    pub fields: Vec<FieldDescriptor>,
}

impl ClassDescriptor {
    pub fn decorator(&self, name: &str) -> Option<&Decorator> {
        self.decorators.iter().find(|d| d.name == name)
    }

    /// Whether the class carries the entity marker and maps to a table
    pub fn is_entity(&self) -> bool {
        self.decorator("Entity").is_some()
    }
}

/// Minimum number of files to benefit from parallel processing.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

/// Parse multiple entity files, using parallel processing for larger file sets.
/// Class order follows file order, then declaration order within each file.
pub fn parse_entity_files(files: &[PathBuf]) -> Result<Vec<ClassDescriptor>> {
    let mut all_classes = Vec::with_capacity(files.len());

    if files.len() >= PARALLEL_THRESHOLD {
        let results: Vec<Result<Vec<ClassDescriptor>>> =
            files.par_iter().map(|file| parse_entity_file(file)).collect();

        for result in results {
            all_classes.extend(result?);
        }
    } else {
        for file in files {
            all_classes.extend(parse_entity_file(file)?);
        }
    }

    Ok(all_classes)
}

/// Parse a single entity file
pub fn parse_entity_file(path: &Path) -> Result<Vec<ClassDescriptor>> {
    let content = read_source_file(path)?;
    Ok(parse_entity_source(&content))
}

/// Read a file as a string, trying UTF-8 first, then Windows-1252 as fallback
fn read_source_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| DbmlGenError::SourceReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(err.as_bytes());
            if had_errors {
                return Err(DbmlGenError::SourceReadError {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        "file contains invalid characters",
                    ),
                }
                .into());
            }
            decoded.into_owned()
        }
    };

    // Strip UTF-8 BOM if present
    Ok(match content.strip_prefix('\u{FEFF}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

/// Extract all class declarations from one source text.
pub fn parse_entity_source(source: &str) -> Vec<ClassDescriptor> {
    let tokens = tokenize(source);
    let mut classes = Vec::new();
    let mut pending_decorators: Vec<Decorator> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        match &tokens[i] {
            Token::Punct('@') => {
                let (decorator, next) = parse_decorator(&tokens, i);
                if let Some(d) = decorator {
                    pending_decorators.push(d);
                }
                i = next;
            }
            Token::Ident(word) if word == "class" => {
                let (class, next) =
                    parse_class(&tokens, i + 1, std::mem::take(&mut pending_decorators));
                classes.push(class);
                i = next;
            }
            // Modifiers may sit between a class decorator and the keyword
            Token::Ident(word)
                if matches!(word.as_str(), "export" | "default" | "abstract" | "declare") =>
            {
                i += 1;
            }
            _ => {
                pending_decorators.clear();
                i += 1;
            }
        }
    }

    classes
}

/// Parse one `@Name` or `@Name(args)` starting at the `@` token.
fn parse_decorator(tokens: &[Token], at: usize) -> (Option<Decorator>, usize) {
    let mut i = at + 1;
    let Some(Token::Ident(name)) = tokens.get(i) else {
        return (None, i);
    };
    let name = name.clone();
    i += 1;

    let mut args = Vec::new();
    if tokens.get(i).is_some_and(|t| t.is_punct('(')) {
        let close = matching_close(tokens, i);
        for slice in split_args(&tokens[i + 1..close]) {
            args.push(DecoratorArg::from_tokens(slice));
        }
        i = (close + 1).min(tokens.len());
    }

    (Some(Decorator { name, args }), i)
}

/// Parse a class declaration; `i` points just past the `class` keyword.
fn parse_class(
    tokens: &[Token],
    mut i: usize,
    decorators: Vec<Decorator>,
) -> (ClassDescriptor, usize) {
    let class_name = match tokens.get(i) {
        Some(Token::Ident(name)) if name != "extends" && name != "implements" => {
            i += 1;
            Some(name.clone())
        }
        _ => None,
    };

    // Skip heritage clauses up to the class body
    while i < tokens.len() && !tokens[i].is_punct('{') {
        i += 1;
    }
    if i >= tokens.len() {
        return (
            ClassDescriptor {
                class_name,
                decorators,
                fields: Vec::new(),
            },
            i,
        );
    }

    let body_end = matching_close(tokens, i);
    let fields = parse_class_body(&tokens[i + 1..body_end]);

    (
        ClassDescriptor {
            class_name,
            decorators,
            fields,
        },
        (body_end + 1).min(tokens.len()),
    )
}

/// Member keywords that can precede a field or method name
const MEMBER_MODIFIERS: &[&str] = &[
    "public", "private", "protected", "readonly", "static", "abstract", "declare", "override",
    "get", "set", "async",
];

/// Walk the members of a class body, collecting fields in declaration order.
/// Methods, constructors, and accessors are skipped entirely, bodies included.
fn parse_class_body(tokens: &[Token]) -> Vec<FieldDescriptor> {
    let mut fields = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        // Member decorators; stray separators are tolerated
        let mut decorators = Vec::new();
        loop {
            match tokens.get(i) {
                Some(t) if t.is_punct('@') => {
                    let (decorator, next) = parse_decorator(tokens, i);
                    if let Some(d) = decorator {
                        decorators.push(d);
                    }
                    i = next;
                }
                Some(t) if t.is_punct(';') || t.is_punct(',') => i += 1,
                _ => break,
            }
        }

        // A keyword only counts as a modifier when a member name follows it,
        // so fields actually named `get` or `static` still parse
        while let Some(Token::Ident(word)) = tokens.get(i) {
            let is_modifier = MEMBER_MODIFIERS.contains(&word.as_str())
                && matches!(tokens.get(i + 1), Some(Token::Ident(_) | Token::Str(_)));
            if !is_modifier {
                break;
            }
            i += 1;
        }

        let name = match tokens.get(i) {
            Some(Token::Ident(s) | Token::Str(s)) => s.clone(),
            Some(_) => {
                i += 1;
                continue;
            }
            None => break,
        };
        i += 1;

        // Optional `?` / `!` marker
        if tokens.get(i).is_some_and(|t| t.is_punct('?') || t.is_punct('!')) {
            i += 1;
        }

        // Methods and constructors contribute no columns
        if name == "constructor"
            || tokens.get(i).is_some_and(|t| t.is_punct('(') || t.is_punct('<'))
        {
            i = skip_method(tokens, i);
            continue;
        }

        let mut declared_type = None;
        if tokens.get(i).is_some_and(|t| t.is_punct(':')) {
            i += 1;
            let start = i;
            let mut depth = 0usize;
            while i < tokens.len() {
                let t = &tokens[i];
                if depth == 0
                    && (t.is_punct(';') || t.is_punct(',') || t.is_punct('=') || t.is_punct('@'))
                {
                    break;
                }
                if let Token::Punct(c) = t {
                    match c {
                        '(' | '{' | '[' | '<' => depth += 1,
                        ')' | '}' | ']' | '>' => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                }
                i += 1;
            }
            let text = join_tokens(&tokens[start..i]);
            if !text.is_empty() {
                declared_type = Some(text);
            }
        }

        // Skip any initializer expression
        if tokens.get(i).is_some_and(|t| t.is_punct('=')) {
            i += 1;
            let mut depth = 0usize;
            while i < tokens.len() {
                let t = &tokens[i];
                if depth == 0 && (t.is_punct(';') || t.is_punct('@')) {
                    break;
                }
                if let Token::Punct(c) = t {
                    match c {
                        '(' | '{' | '[' => depth += 1,
                        ')' | '}' | ']' => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                }
                i += 1;
            }
        }

        if tokens.get(i).is_some_and(|t| t.is_punct(';')) {
            i += 1;
        }

        fields.push(FieldDescriptor {
            name,
            declared_type,
            decorators,
        });
    }

    fields
}

/// Skip a method member starting at its generic list or parameter list;
/// consumes through the body (or the terminating `;` for abstract members).
fn skip_method(tokens: &[Token], mut i: usize) -> usize {
    if tokens.get(i).is_some_and(|t| t.is_punct('<')) {
        i = skip_angle(tokens, i);
    }
    if tokens.get(i).is_some_and(|t| t.is_punct('(')) {
        i = matching_close(tokens, i) + 1;
    }
    while i < tokens.len() {
        if tokens[i].is_punct('{') {
            return matching_close(tokens, i) + 1;
        }
        if tokens[i].is_punct(';') {
            return i + 1;
        }
        i += 1;
    }
    i
}

fn skip_angle(tokens: &[Token], mut i: usize) -> usize {
    let mut depth = 0usize;
    while i < tokens.len() {
        match &tokens[i] {
            Token::Punct('<') => depth += 1,
            Token::Punct('>') => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    i
}

/// Index of the bracket closing the one opened at `open`, or `tokens.len()`
/// when the input is unterminated.
fn matching_close(tokens: &[Token], open: usize) -> usize {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(open) {
        if let Token::Punct(c) = token {
            match c {
                '(' | '{' | '[' => depth += 1,
                ')' | '}' | ']' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return i;
                    }
                }
                _ => {}
            }
        }
    }
    tokens.len()
}

/// Split an argument-list token slice on top-level commas.
fn split_args(tokens: &[Token]) -> Vec<&[Token]> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, token) in tokens.iter().enumerate() {
        if let Token::Punct(c) = token {
            match c {
                '(' | '{' | '[' => depth += 1,
                ')' | '}' | ']' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    if i > start {
                        parts.push(&tokens[start..i]);
                    }
                    start = i + 1;
                }
                _ => {}
            }
        }
    }
    if start < tokens.len() {
        parts.push(&tokens[start..]);
    }

    parts
}
