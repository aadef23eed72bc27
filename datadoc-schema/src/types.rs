//! Type mapping and field classification.
//!
//! This module holds the fixed table mapping semantic primitive names to
//! their C# spellings, and the closed classifications used by the
//! generator: [`FieldType`] distinguishes primitive from user-defined
//! element types, [`FieldCount`] classifies a field's element count
//! token. Classifying once up front keeps the generators from re-parsing
//! the same tokens at every use site.

use thiserror::Error;

/// Semantic primitive types with a C# spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// Signed 64-bit integer.
    Int64,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 8-bit integer.
    Int8,
    /// Unsigned 64-bit integer.
    Uint64,
    /// Unsigned 32-bit integer.
    Uint32,
    /// Unsigned 16-bit integer.
    Uint16,
    /// Unsigned 8-bit integer.
    Uint8,
    /// Boolean.
    Bool,
    /// Character string.
    String,
    /// 128-bit decimal.
    Decimal,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Single character.
    Char,
}

impl PrimitiveType {
    /// Returns the C# type name for this primitive.
    #[must_use]
    pub const fn cs_type(&self) -> &'static str {
        match self {
            Self::Int64 => "Int64",
            Self::Int32 => "Int32",
            Self::Int16 => "Int16",
            Self::Int8 => "SByte",
            Self::Uint64 => "UInt64",
            Self::Uint32 => "UInt32",
            Self::Uint16 => "UInt16",
            Self::Uint8 => "Byte",
            Self::Bool => "Boolean",
            Self::String => "String",
            Self::Decimal => "Decimal",
            Self::Float => "Single",
            Self::Double => "Double",
            Self::Char => "Char",
        }
    }

    /// Returns the document-level name of this primitive.
    #[must_use]
    pub const fn doc_name(&self) -> &'static str {
        match self {
            Self::Int64 => "int64",
            Self::Int32 => "int32",
            Self::Int16 => "int16",
            Self::Int8 => "int8",
            Self::Uint64 => "uint64",
            Self::Uint32 => "uint32",
            Self::Uint16 => "uint16",
            Self::Uint8 => "uint8",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Double => "double",
            Self::Char => "char",
        }
    }

    /// Parses a primitive type from its document-level name.
    #[must_use]
    pub fn from_doc_name(name: &str) -> Option<Self> {
        match name {
            "int64" => Some(Self::Int64),
            "int32" => Some(Self::Int32),
            "int16" => Some(Self::Int16),
            "int8" => Some(Self::Int8),
            "uint64" => Some(Self::Uint64),
            "uint32" => Some(Self::Uint32),
            "uint16" => Some(Self::Uint16),
            "uint8" => Some(Self::Uint8),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::String),
            "decimal" => Some(Self::Decimal),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "char" => Some(Self::Char),
            _ => None,
        }
    }
}

/// Classification of a field's element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// A primitive with a built-in C# representation.
    Primitive(PrimitiveType),
    /// A user-defined (class) type, kept verbatim.
    UserDefined(String),
}

impl FieldType {
    /// Classifies a semantic type name.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match PrimitiveType::from_doc_name(name) {
            Some(primitive) => Self::Primitive(primitive),
            None => Self::UserDefined(name.to_string()),
        }
    }

    /// Returns the C# spelling of the type.
    #[must_use]
    pub fn cs_name(&self) -> &str {
        match self {
            Self::Primitive(primitive) => primitive.cs_type(),
            Self::UserDefined(name) => name,
        }
    }

    /// Returns true if this is a primitive type.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// Returns true if this is the `string` primitive.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::Primitive(PrimitiveType::String))
    }
}

/// Maps a semantic type name to its C# spelling.
///
/// Names absent from the primitive table are returned unchanged; a type
/// is primitive iff this function changes its spelling.
#[must_use]
pub fn map_type(name: &str) -> String {
    FieldType::parse(name).cs_name().to_string()
}

/// Error raised for an element count token with no legal meaning.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid element count '{token}'")]
pub struct CountError {
    /// The offending count token.
    pub token: String,
}

/// Classification of a field's element count token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCount {
    /// Exactly one value (`"1"`).
    Scalar,
    /// Dynamically sized list (`"-1"`).
    DynamicList,
    /// Fixed-size indexed container of the given size (numeric `n >= 2`).
    Fixed(u64),
    /// Indexed container sized by an expression resolved at the target
    /// language's runtime (any non-numeric token, kept verbatim).
    Expr(String),
}

impl FieldCount {
    /// Classifies a count token.
    ///
    /// # Errors
    /// Returns [`CountError`] when the token is numeric and equals `0`
    /// or is `-2` or lower.
    pub fn from_token(token: &str) -> Result<Self, CountError> {
        match token.parse::<i64>() {
            Ok(1) => Ok(Self::Scalar),
            Ok(-1) => Ok(Self::DynamicList),
            Ok(n) if n >= 2 => Ok(Self::Fixed(n as u64)),
            Ok(_) => Err(CountError {
                token: token.to_string(),
            }),
            Err(_) => Ok(Self::Expr(token.to_string())),
        }
    }

    /// Returns true if the field is an indexed container (fixed-size or
    /// expression-sized).
    #[must_use]
    pub const fn is_indexed(&self) -> bool {
        matches!(self, Self::Fixed(_) | Self::Expr(_))
    }
}
