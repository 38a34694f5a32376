//! Decorator-argument inspection
//!
//! Arguments are classified into a small tagged-variant type so that the
//! engine never pattern-matches raw argument text. Shapes that fall outside
//! the recognized variants are preserved as `Other` rather than rejected.

use super::lexer::{join_tokens, Token};

/// A parsed decorator argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoratorArg {
    /// `@Entity('users')`
    StringLiteral(String),
    /// `@Column({ type: 'varchar', nullable: true })`
    ObjectLiteral(Vec<ObjectField>),
    /// `@ManyToOne(() => entities.User)` — the identifier path after the arrow
    ArrowFactory(String),
    /// Unrecognized argument shape, kept as raw text
    Other(String),
}

/// One `name: value` entry of an object-literal argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectField {
    pub name: String,
    pub value: LiteralValue,
}

/// The value side of an object-literal entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LiteralValue {
    /// A string literal, quotes stripped
    Str(String),
    /// Raw token text for everything else (`true`, `[]`, `UiTheme.SYSTEM`)
    Raw(String),
}

impl LiteralValue {
    pub fn text(&self) -> &str {
        match self {
            LiteralValue::Str(s) | LiteralValue::Raw(s) => s,
        }
    }
}

impl DecoratorArg {
    /// Classify one argument's token slice.
    pub fn from_tokens(tokens: &[Token]) -> DecoratorArg {
        if let [Token::Str(s)] = tokens {
            return DecoratorArg::StringLiteral(s.clone());
        }
        if tokens.first().is_some_and(|t| t.is_punct('{')) {
            return DecoratorArg::ObjectLiteral(parse_object_literal(tokens));
        }
        if let Some(path) = arrow_target_path(tokens) {
            return DecoratorArg::ArrowFactory(path);
        }
        DecoratorArg::Other(join_tokens(tokens))
    }

    /// The `name` entry of an object-literal argument, if this is one.
    pub fn object_field(&self, name: &str) -> Option<&LiteralValue> {
        match self {
            DecoratorArg::ObjectLiteral(fields) => fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| &field.value),
            _ => None,
        }
    }
}

/// Extract the identifier path after the first `=>`, e.g. `entities.User`
/// from `() => entities.User`. Trailing tokens after the path are ignored,
/// and an argument with no arrow (or no identifier after it) yields None.
fn arrow_target_path(tokens: &[Token]) -> Option<String> {
    let arrow = tokens.iter().position(|t| matches!(t, Token::Arrow))?;
    let mut path = String::new();
    let mut rest = tokens[arrow + 1..].iter();

    match rest.next() {
        Some(Token::Ident(s)) => path.push_str(s),
        _ => return None,
    }
    while let Some(token) = rest.next() {
        if !token.is_punct('.') {
            break;
        }
        match rest.next() {
            Some(Token::Ident(s)) => {
                path.push('.');
                path.push_str(s);
            }
            _ => break,
        }
    }
    Some(path)
}

/// Parse `{ key: value, ... }` entries. Keys are identifiers or string
/// literals; values are captured with balanced-bracket scanning. Shorthand
/// entries (`{ name }`) keep the key text as their value. Malformed entries
/// are skipped, never fatal.
fn parse_object_literal(tokens: &[Token]) -> Vec<ObjectField> {
    let mut fields = Vec::new();
    let mut i = 1; // past the '{'

    while i < tokens.len() && !tokens[i].is_punct('}') {
        let name = match &tokens[i] {
            Token::Ident(s) | Token::Str(s) => s.clone(),
            _ => {
                i += 1;
                continue;
            }
        };
        i += 1;

        if tokens.get(i).is_some_and(|t| t.is_punct(':')) {
            i += 1;
            let start = i;
            let mut depth = 0usize;
            while i < tokens.len() {
                if depth == 0 && (tokens[i].is_punct(',') || tokens[i].is_punct('}')) {
                    break;
                }
                if let Token::Punct(c) = &tokens[i] {
                    match c {
                        '{' | '(' | '[' => depth += 1,
                        '}' | ')' | ']' => depth = depth.saturating_sub(1),
                        _ => {}
                    }
                }
                i += 1;
            }
            let value = match &tokens[start..i] {
                [Token::Str(s)] => LiteralValue::Str(s.clone()),
                slice => LiteralValue::Raw(join_tokens(slice)),
            };
            fields.push(ObjectField { name, value });
        } else {
            fields.push(ObjectField {
                name: name.clone(),
                value: LiteralValue::Raw(name),
            });
        }

        if tokens.get(i).is_some_and(|t| t.is_punct(',')) {
            i += 1;
        }
    }

    fields
}
