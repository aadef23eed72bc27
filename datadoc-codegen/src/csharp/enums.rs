//! Enum definition generation.

use crate::error::CodegenError;
use crate::writer::CodeWriter;
use datadoc_schema::{AttributeKey, EnumData, map_type};
use std::fmt;

use super::{namespaces_or_default, write_summary};

/// Generator for one enum definition.
#[derive(Debug)]
pub struct EnumGenerator<'a> {
    definition: &'a EnumData,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a generator over the given enum definition.
    #[must_use]
    pub fn new(definition: &'a EnumData) -> Self {
        Self { definition }
    }

    /// Writes the full enum definition, including its namespace nesting.
    ///
    /// # Errors
    /// Returns [`CodegenError::EnumTypeConflict`] when the enum carries
    /// more than one `attr_type` attribute. Nothing is written in that
    /// case.
    pub fn write<W: fmt::Write>(&self, writer: &mut CodeWriter<W>) -> Result<(), CodegenError> {
        let types = self.definition.attribute_values(&AttributeKey::Type);
        if types.len() > 1 {
            return Err(CodegenError::EnumTypeConflict {
                enum_name: self.definition.name.clone(),
            });
        }

        let namespaces =
            namespaces_or_default(self.definition.attribute_values(&AttributeKey::Namespace));
        for namespace in &namespaces {
            writer.puts(&format!("namespace {namespace}"))?;
            writer.puts("{")?;
        }

        write_summary(writer, &self.definition.attributes)?;
        let underlying = types
            .first()
            .map(|t| format!(" : {}", map_type(t)))
            .unwrap_or_default();
        writer.puts(&format!("public enum {}{}", self.definition.name, underlying))?;
        writer.puts("{")?;
        for element in &self.definition.elements {
            write_summary(writer, &element.attributes)?;
            writer.puts(&format!("{} = {},", element.name, element.value))?;
        }
        writer.puts("}")?;

        for _ in &namespaces {
            writer.puts("}")?;
        }
        writer.puts("")?;
        Ok(())
    }
}
