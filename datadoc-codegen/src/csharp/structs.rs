//! Struct definition generation.

use crate::error::CodegenError;
use crate::writer::CodeWriter;
use datadoc_schema::{AttributeKey, StructData};
use std::fmt;

use super::accessors::write_accessor;
use super::fields::FieldPlan;
use super::{namespaces_or_default, write_summary};

/// Generator for one struct definition.
#[derive(Debug)]
pub struct StructGenerator<'a> {
    definition: &'a StructData,
}

impl<'a> StructGenerator<'a> {
    /// Creates a generator over the given struct definition.
    #[must_use]
    pub fn new(definition: &'a StructData) -> Self {
        Self { definition }
    }

    /// Writes the full struct definition: field declarations, accessors,
    /// constructor, and the namespace nesting around them.
    ///
    /// # Errors
    /// Returns [`CodegenError::IllegalElementCount`] when a field's
    /// count token is illegal. All fields are classified before any
    /// output is written, so a failing struct emits nothing.
    pub fn write<W: fmt::Write>(&self, writer: &mut CodeWriter<W>) -> Result<(), CodegenError> {
        let plans = self
            .definition
            .elements
            .iter()
            .map(FieldPlan::analyze)
            .collect::<Result<Vec<_>, _>>()?;

        let namespaces =
            namespaces_or_default(self.definition.attribute_values(&AttributeKey::Namespace));
        for namespace in &namespaces {
            writer.puts(&format!("namespace {namespace}"))?;
            writer.puts("{")?;
        }

        write_summary(writer, &self.definition.attributes)?;
        let base = self
            .definition
            .base_type
            .as_ref()
            .map(|b| format!(" : {b}"))
            .unwrap_or_default();
        writer.puts(&format!("public class {}{}", self.definition.name, base))?;
        writer.puts("{")?;

        for plan in &plans {
            writer.puts(&plan.declaration())?;
        }
        writer.puts("")?;
        for plan in &plans {
            write_accessor(writer, plan)?;
        }
        self.write_constructor(writer, &plans)?;
        writer.puts("}")?;

        for _ in &namespaces {
            writer.puts("}")?;
        }
        writer.puts("")?;
        Ok(())
    }

    fn write_constructor<W: fmt::Write>(
        &self,
        writer: &mut CodeWriter<W>,
        plans: &[FieldPlan<'_>],
    ) -> fmt::Result {
        writer.puts("/// <summary>")?;
        writer.puts("/// Constructor")?;
        writer.puts("/// </summary>")?;
        writer.puts(&format!("public {}()", self.definition.name))?;
        writer.puts("{")?;
        for plan in plans {
            plan.write_constructor_init(writer)?;
        }
        writer.puts("}")
    }
}
