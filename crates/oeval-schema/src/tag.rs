//! # Tag Grammar
//!
//! A schema descriptor string may open with a bracketed tag:
//!
//! ```text
//! [int or float] score assigned to the output
//! [list[str]] ISO 639-1 language codes
//! [auto] unique item identifier
//! [str or dict, optional] answer options
//! ```
//!
//! The tag body runs from the leading `[` to the first `"] "`, or to the
//! last `]` when no `"] "` exists, and is split on commas into trimmed
//! tokens. `auto` and `optional` are modifier tokens wherever they appear.
//! The first token, when it is not a modifier, names the base type.
//!
//! Tags are parsed once, when the schema is loaded. Every consumer reads
//! the parsed [`Tag`] instead of re-scanning the string.

use std::fmt;

use oeval_core::JsonKind;
use serde_json::Value;

const AUTO: &str = "auto";
const OPTIONAL: &str = "optional";
const ANY: &str = "any";
const LIST_PREFIX: &str = "list[";
const ALTERNATIVE: &str = " or ";

/// A value type nameable in a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Str,
    Dict,
    Int,
    Float,
    Bool,
}

impl ValueType {
    /// Parse a single type token. Unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "str" => Some(Self::Str),
            "dict" => Some(Self::Dict),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }

    /// The token as written in a tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Dict => "dict",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// True for the three types a numeric slot may name.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Bool)
    }

    /// Whether `value` satisfies this type.
    ///
    /// `int` never accepts booleans or fractional numbers. `float` accepts
    /// any number, whole or not. The asymmetry is intentional: a float slot
    /// can hold a whole number, an int slot cannot hold `3.5`.
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Str => value.is_string(),
            Self::Dict => value.is_object(),
            Self::Int => JsonKind::of(value) == JsonKind::Integer,
            Self::Float => value.is_number(),
            Self::Bool => value.is_boolean(),
        }
    }
}

/// An `or`-joined set of [`ValueType`]s, in the order first written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    types: Vec<ValueType>,
}

impl TypeSet {
    /// Read an expression such as `"str or dict"`. Unknown names are
    /// dropped, so the result may be empty.
    pub fn parse(expr: &str) -> Self {
        let mut types = Vec::new();
        for ty in expr.split(ALTERNATIVE).filter_map(|t| ValueType::from_token(t.trim())) {
            if !types.contains(&ty) {
                types.push(ty);
            }
        }
        Self { types }
    }

    /// Read an expression that must consist only of numeric type names
    /// (`int`, `float`, `bool`). Returns `None` if any part is anything else.
    fn parse_numeric(expr: &str) -> Option<Self> {
        let all_numeric = expr
            .split(ALTERNATIVE)
            .all(|t| ValueType::from_token(t.trim()).is_some_and(|ty| ty.is_numeric()));
        all_numeric.then(|| Self::parse(expr))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn contains(&self, ty: ValueType) -> bool {
        self.types.contains(&ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = ValueType> + '_ {
        self.types.iter().copied()
    }

    /// True if any member type accepts `value`.
    pub fn accepts(&self, value: &Value) -> bool {
        self.types.iter().any(|ty| ty.accepts(value))
    }
}

impl fmt::Display for TypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                f.write_str(ALTERNATIVE)?;
            }
            f.write_str(ty.as_str())?;
        }
        Ok(())
    }
}

/// What the first tag token says about the field's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseType {
    /// `list[...]`. The element set is empty when the inner name is unknown.
    List(TypeSet),
    /// `any`.
    Any,
    /// Only `int`, `float`, `bool` joined by `or`.
    Numeric(TypeSet),
    /// Anything else, including an empty first token.
    Text,
}

/// A parsed descriptor tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    tokens: Vec<String>,
    auto: bool,
    optional: bool,
    base: BaseType,
    first_types: TypeSet,
}

impl Tag {
    /// Parse the tag at the start of `text`.
    ///
    /// Returns `None` when `text` does not start with `[` or has no `]`
    /// after it.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('[')?;
        let close = rest.find("] ").or_else(|| rest.rfind(']'))?;
        let tokens: Vec<String> = rest[..close]
            .split(',')
            .map(|t| t.trim().to_string())
            .collect();

        let has = |modifier: &str| tokens.iter().any(|t| t.eq_ignore_ascii_case(modifier));
        let auto = has(AUTO);
        let optional = has(OPTIONAL);

        // `split` always yields at least one item.
        let first = tokens.first().map(String::as_str).unwrap_or_default();
        let base = if let Some(inner) = first.strip_prefix(LIST_PREFIX) {
            BaseType::List(TypeSet::parse(inner.strip_suffix(']').unwrap_or(inner)))
        } else if first == ANY {
            BaseType::Any
        } else if let Some(set) = TypeSet::parse_numeric(first) {
            BaseType::Numeric(set)
        } else {
            BaseType::Text
        };
        let first_types = TypeSet::parse(first);

        Some(Self {
            tokens,
            auto,
            optional,
            base,
            first_types,
        })
    }

    /// All tag tokens, trimmed, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The first token (empty for `[]`).
    pub fn first_token(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or_default()
    }

    /// The field is system-generated.
    pub fn is_auto(&self) -> bool {
        self.auto
    }

    /// The field may be absent.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Either modifier is present.
    pub fn is_skippable(&self) -> bool {
        self.auto || self.optional
    }

    pub fn base(&self) -> &BaseType {
        &self.base
    }

    /// The first token read as an `or`-joined type set, e.g. `str or dict`.
    /// Used for the elements of a list template.
    pub fn type_set(&self) -> &TypeSet {
        &self.first_types
    }
}
