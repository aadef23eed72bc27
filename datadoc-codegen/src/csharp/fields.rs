//! Field materialization.
//!
//! For each struct field this module decides the backing storage type,
//! the declaration initializer, and the constructor-time initialization
//! statements, switching exhaustively on the field's count and type
//! classification.

use crate::error::CodegenError;
use crate::writer::CodeWriter;
use datadoc_schema::{FieldCount, FieldType, PrimitiveType, StructElement};
use std::fmt;

use super::{validation_type, write_conditions_array};

/// A struct field with its count and type classification resolved.
#[derive(Debug)]
pub struct FieldPlan<'a> {
    /// The field being materialized.
    pub element: &'a StructElement,
    /// Classified element count.
    pub count: FieldCount,
    /// Classified element type.
    pub field_type: FieldType,
}

impl<'a> FieldPlan<'a> {
    /// Classifies a field, rejecting illegal element counts.
    ///
    /// # Errors
    /// Returns [`CodegenError::IllegalElementCount`] when the count
    /// token is numeric and equals 0 or is -2 or lower.
    pub fn analyze(element: &'a StructElement) -> Result<Self, CodegenError> {
        let count = FieldCount::from_token(&element.count)
            .map_err(|e| CodegenError::illegal_count(&element.name, e))?;
        Ok(Self {
            element,
            count,
            field_type: FieldType::parse(&element.data_type),
        })
    }

    /// Returns the backing field name.
    #[must_use]
    pub fn variable_name(&self) -> String {
        format!("_{}", self.element.name)
    }

    /// Returns the declared storage type.
    #[must_use]
    pub fn storage_type(&self) -> String {
        let cs_name = self.field_type.cs_name();
        match &self.count {
            FieldCount::Scalar => cs_name.to_string(),
            FieldCount::DynamicList => format!("List<{cs_name}>"),
            FieldCount::Fixed(_) | FieldCount::Expr(_) => {
                if self.field_type.is_primitive() {
                    format!("DataDocument.Indexer<{cs_name}>")
                } else {
                    format!("DataDocument.ClassIndexer<{cs_name}>")
                }
            }
        }
    }

    /// Returns the full field declaration line.
    #[must_use]
    pub fn declaration(&self) -> String {
        format!(
            "private {} {}{};",
            self.storage_type(),
            self.variable_name(),
            self.initializer()
        )
    }

    /// Returns the declaration initializer, including the leading
    /// ` = `, or an empty string when the field relies on the language
    /// default.
    fn initializer(&self) -> String {
        match &self.count {
            FieldCount::Scalar => match (&self.field_type, &self.element.default_value) {
                (FieldType::Primitive(PrimitiveType::String), None) => {
                    " = String.Empty".to_string()
                }
                (FieldType::Primitive(_), Some(default)) => format!(" = {default}"),
                (FieldType::Primitive(_), None) => String::new(),
                (FieldType::UserDefined(name), _) => format!(" = new {name}()"),
            },
            FieldCount::DynamicList => format!(" = new {}()", self.storage_type()),
            // The count token is used verbatim, even when non-numeric.
            FieldCount::Fixed(_) | FieldCount::Expr(_) => {
                format!(" = new {}({})", self.storage_type(), self.element.count)
            }
        }
    }

    /// Returns true if the declaration initializer already carries the
    /// field's default value.
    fn default_folded_into_declaration(&self) -> bool {
        self.count == FieldCount::Scalar && self.field_type.is_primitive()
    }

    /// Writes the field's constructor-time initialization statements,
    /// if any.
    ///
    /// # Errors
    /// Propagates failures of the underlying sink.
    pub fn write_constructor_init<W: fmt::Write>(
        &self,
        writer: &mut CodeWriter<W>,
    ) -> fmt::Result {
        let variable = self.variable_name();
        if let FieldCount::Fixed(_) = self.count {
            match (&self.field_type, &self.element.default_value) {
                (FieldType::Primitive(_), Some(default)) => {
                    writer.puts(&format!("// {}", self.element.name))?;
                    if !self.element.conditions.is_empty() {
                        let vt = validation_type(&self.field_type);
                        let conditions_var = format!("conditions{}", self.element.name);
                        write_conditions_array(
                            writer,
                            &conditions_var,
                            &self.element.conditions,
                            vt,
                        )?;
                        writer.puts(&format!(
                            "{variable}.Validator = new DataDocument.RangeValidator<{vt}>({conditions_var});"
                        ))?;
                    }
                    self.write_fill_loop(writer, &format!("{variable}[i] = {default};"))?;
                }
                (FieldType::UserDefined(name), _) => {
                    writer.puts(&format!("// {}", self.element.name))?;
                    self.write_fill_loop(writer, &format!("{variable}[i] = new {name}();"))?;
                }
                (FieldType::Primitive(_), None) => {}
            }
            return Ok(());
        }

        if let Some(default) = &self.element.default_value {
            if !self.default_folded_into_declaration() {
                writer.puts(&format!("// {}", self.element.name))?;
                writer.puts(&format!("{variable} = {default};"))?;
            }
        }
        Ok(())
    }

    fn write_fill_loop<W: fmt::Write>(
        &self,
        writer: &mut CodeWriter<W>,
        body: &str,
    ) -> fmt::Result {
        writer.puts(&format!(
            "for (Int32 i = 0; i < {}; ++i)",
            self.element.count
        ))?;
        writer.puts("{")?;
        writer.puts(body)?;
        writer.puts("}")
    }
}
