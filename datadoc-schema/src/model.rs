//! Document model definitions.
//!
//! This module contains the data structures representing a parsed data
//! document: enum and struct definitions, their elements, and the
//! attribute annotations attached to them. The model is built bottom-up
//! by an external parser and is read-only for the lifetime of a
//! generation pass.

/// Well-known attribute keys.
///
/// Attributes carry cross-cutting metadata on definitions and fields.
/// Unknown keys are preserved as [`AttributeKey::Custom`] and ignored by
/// all consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKey {
    /// `attr_namespace` - target namespace, repeatable for nesting.
    Namespace,
    /// `attr_type` - explicit underlying type of an enum.
    Type,
    /// `attr_name` - doc-comment text, repeatable.
    Name,
    /// Any other key.
    Custom(String),
}

impl AttributeKey {
    /// Parses an attribute key from its document spelling.
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key {
            "attr_namespace" => Self::Namespace,
            "attr_type" => Self::Type,
            "attr_name" => Self::Name,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Returns the document spelling of the key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Namespace => "attr_namespace",
            Self::Type => "attr_type",
            Self::Name => "attr_name",
            Self::Custom(key) => key,
        }
    }
}

/// A key/value annotation attached to a definition or field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute key.
    pub key: AttributeKey,
    /// Literal value token, possibly a quoted string literal.
    pub value: String,
}

impl Attribute {
    /// Creates an attribute from a raw key and value token.
    #[must_use]
    pub fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: AttributeKey::parse(key),
            value: value.into(),
        }
    }

    /// Returns the value with one pair of surrounding double quotes
    /// removed, or verbatim when the value is a bare token.
    #[must_use]
    pub fn unquoted(&self) -> &str {
        self.value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(&self.value)
    }
}

/// Collects the unquoted values of all attributes with the given key,
/// in attribute order.
#[must_use]
pub(crate) fn collect_values(attributes: &[Attribute], key: &AttributeKey) -> Vec<String> {
    attributes
        .iter()
        .filter(|a| a.key == *key)
        .map(|a| a.unquoted().to_string())
        .collect()
}

/// A single member of an enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumElement {
    /// Member name.
    pub name: String,
    /// Attribute annotations.
    pub attributes: Vec<Attribute>,
    /// Constant expression text assigned to the member.
    pub value: String,
}

impl EnumElement {
    /// Creates an enum member.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            value: value.into(),
        }
    }
}

/// An enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumData {
    /// Enum name.
    pub name: String,
    /// Attribute annotations.
    pub attributes: Vec<Attribute>,
    /// Members in declaration order.
    pub elements: Vec<EnumElement>,
}

impl EnumData {
    /// Creates an enum definition with the given members.
    #[must_use]
    pub fn new(name: impl Into<String>, elements: Vec<EnumElement>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            elements,
        }
    }

    /// Collects the unquoted values of all attributes with the given key.
    #[must_use]
    pub fn attribute_values(&self, key: &AttributeKey) -> Vec<String> {
        collect_values(&self.attributes, key)
    }
}

/// A single field of a struct definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructElement {
    /// Field name.
    pub name: String,
    /// Attribute annotations.
    pub attributes: Vec<Attribute>,
    /// Semantic type name (`int32`, `string`, or a user-defined type).
    pub data_type: String,
    /// Range conditions of the form `"min..max"`, in declaration order.
    pub conditions: Vec<String>,
    /// Element count token: `"1"` scalar, `"-1"` dynamic list, a numeric
    /// literal for a fixed-size container, or a bare identifier resolved
    /// at the target language's runtime.
    pub count: String,
    /// Default value expression text.
    pub default_value: Option<String>,
}

impl StructElement {
    /// Creates a scalar field with no conditions and no default.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            data_type: data_type.into(),
            conditions: Vec::new(),
            count: count.into(),
            default_value: None,
        }
    }

    /// Collects the unquoted values of all attributes with the given key.
    #[must_use]
    pub fn attribute_values(&self, key: &AttributeKey) -> Vec<String> {
        collect_values(&self.attributes, key)
    }
}

/// A struct definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructData {
    /// Struct name.
    pub name: String,
    /// Attribute annotations.
    pub attributes: Vec<Attribute>,
    /// Base type clause, if any.
    pub base_type: Option<String>,
    /// Fields in declaration order.
    pub elements: Vec<StructElement>,
}

impl StructData {
    /// Creates a struct definition with the given fields.
    #[must_use]
    pub fn new(name: impl Into<String>, elements: Vec<StructElement>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            base_type: None,
            elements,
        }
    }

    /// Collects the unquoted values of all attributes with the given key.
    #[must_use]
    pub fn attribute_values(&self, key: &AttributeKey) -> Vec<String> {
        collect_values(&self.attributes, key)
    }
}

/// The full parsed document handed to the generator.
///
/// Insertion order is preserved and is the emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Enum definitions in document order.
    pub enums: Vec<EnumData>,
    /// Struct definitions in document order.
    pub structs: Vec<StructData>,
}

impl ParseResult {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an enum definition.
    pub fn add_enum(&mut self, definition: EnumData) {
        self.enums.push(definition);
    }

    /// Appends a struct definition.
    pub fn add_struct(&mut self, definition: StructData) {
        self.structs.push(definition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_key_parse() {
        assert_eq!(AttributeKey::parse("attr_namespace"), AttributeKey::Namespace);
        assert_eq!(AttributeKey::parse("attr_type"), AttributeKey::Type);
        assert_eq!(AttributeKey::parse("attr_name"), AttributeKey::Name);
        assert_eq!(
            AttributeKey::parse("attr_dummy"),
            AttributeKey::Custom("attr_dummy".to_string())
        );
    }

    #[test]
    fn test_attribute_key_round_trip() {
        for key in ["attr_namespace", "attr_type", "attr_name", "attr_other"] {
            assert_eq!(AttributeKey::parse(key).as_str(), key);
        }
    }

    #[test]
    fn test_attribute_unquoted() {
        assert_eq!(Attribute::new("attr_namespace", "\"Hoge\"").unquoted(), "Hoge");
        assert_eq!(Attribute::new("attr_type", "int16").unquoted(), "int16");
        assert_eq!(Attribute::new("attr_name", "\"\"").unquoted(), "");
    }

    #[test]
    fn test_attribute_values_filters_by_key() {
        let mut definition = EnumData::new("Enum", vec![EnumElement::new("First", "1")]);
        definition.attributes = vec![
            Attribute::new("attr_namespace", "\"Hoge\""),
            Attribute::new("attr_name", "\"doc\""),
            Attribute::new("attr_namespace", "\"Huga\""),
        ];

        assert_eq!(
            definition.attribute_values(&AttributeKey::Namespace),
            vec!["Hoge", "Huga"]
        );
        assert_eq!(definition.attribute_values(&AttributeKey::Name), vec!["doc"]);
        assert!(definition.attribute_values(&AttributeKey::Type).is_empty());
    }

    #[test]
    fn test_parse_result_preserves_order() {
        let mut doc = ParseResult::new();
        doc.add_enum(EnumData::new("B", Vec::new()));
        doc.add_enum(EnumData::new("A", Vec::new()));
        doc.add_struct(StructData::new("S", Vec::new()));

        assert_eq!(doc.enums[0].name, "B");
        assert_eq!(doc.enums[1].name, "A");
        assert_eq!(doc.structs[0].name, "S");
    }
}
