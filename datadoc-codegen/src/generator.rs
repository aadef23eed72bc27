//! Generation orchestration.
//!
//! The [`Generator`] walks a parsed document in document order: enums,
//! then structs, each wrapped in its namespace nesting, with the static
//! prelude before and the runtime support types after. The three phases
//! are public so a host generating several documents into one sink can
//! emit the prelude and support blocks exactly once.

use crate::csharp::{EnumGenerator, StructGenerator, runtime};
use crate::error::CodegenError;
use crate::writer::CodeWriter;
use datadoc_schema::ParseResult;
use std::fmt;
use tracing::{debug, trace};

/// Generator producing C# source for one parsed document.
#[derive(Debug)]
pub struct Generator<'a> {
    document: &'a ParseResult,
}

impl<'a> Generator<'a> {
    /// Creates a generator over the given document.
    #[must_use]
    pub fn new(document: &'a ParseResult) -> Self {
        Self { document }
    }

    /// Generates the complete compilation unit as a string.
    ///
    /// Generating the same document twice yields byte-identical output.
    ///
    /// # Errors
    /// Returns the first definition error encountered; the partial
    /// buffer is discarded.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut writer = CodeWriter::new(String::new());
        self.write_prelude(&mut writer)?;
        self.write_definitions(&mut writer)?;
        self.write_support(&mut writer)?;
        Ok(writer.into_inner())
    }

    /// Writes the using-directive header.
    ///
    /// # Errors
    /// Propagates failures of the underlying sink.
    pub fn write_prelude<W: fmt::Write>(
        &self,
        writer: &mut CodeWriter<W>,
    ) -> Result<(), CodegenError> {
        writer.puts(runtime::USING_DIRECTIVES)?;
        writer.puts("")?;
        Ok(())
    }

    /// Writes all enum and struct definitions in document order.
    ///
    /// # Errors
    /// Propagates the first definition error; generation of the
    /// remaining definitions does not proceed.
    pub fn write_definitions<W: fmt::Write>(
        &self,
        writer: &mut CodeWriter<W>,
    ) -> Result<(), CodegenError> {
        debug!(
            enums = self.document.enums.len(),
            structs = self.document.structs.len(),
            "generating definitions"
        );
        for definition in &self.document.enums {
            trace!(name = %definition.name, "generating enum");
            EnumGenerator::new(definition).write(writer)?;
        }
        for definition in &self.document.structs {
            trace!(name = %definition.name, "generating struct");
            StructGenerator::new(definition).write(writer)?;
        }
        Ok(())
    }

    /// Writes the runtime support type definitions.
    ///
    /// # Errors
    /// Propagates failures of the underlying sink.
    pub fn write_support<W: fmt::Write>(
        &self,
        writer: &mut CodeWriter<W>,
    ) -> Result<(), CodegenError> {
        writer.puts(runtime::RANGE_VALIDATOR)?;
        writer.puts("")?;
        writer.puts(runtime::INDEXERS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datadoc_schema::{Attribute, EnumData, EnumElement, StructData, StructElement};

    fn sample_document() -> ParseResult {
        let mut doc = ParseResult::new();
        doc.add_enum(EnumData::new(
            "Color",
            vec![EnumElement::new("Red", "1"), EnumElement::new("Green", "2")],
        ));
        let mut field = StructElement::new("Name", "string", "1");
        field.conditions = vec!["0..32".to_string()];
        doc.add_struct(StructData::new("Person", vec![field]));
        doc
    }

    #[test]
    fn test_generates_prelude_definitions_and_support() {
        let doc = sample_document();
        let output = Generator::new(&doc).generate().unwrap();

        let using = output.find("using System;").unwrap();
        let enum_def = output.find("public enum Color").unwrap();
        let struct_def = output.find("public class Person").unwrap();
        let validator = output.find("internal class RangeValidator<T>").unwrap();
        let indexer = output.find("public class Indexer<T>").unwrap();
        let class_indexer = output.find("public class ClassIndexer<T>").unwrap();

        assert!(using < enum_def);
        assert!(enum_def < struct_def);
        assert!(struct_def < validator);
        assert!(validator < indexer);
        assert!(indexer < class_indexer);
    }

    #[test]
    fn test_enums_precede_structs_in_document_order() {
        let mut doc = ParseResult::new();
        doc.add_struct(StructData::new("S1", Vec::new()));
        doc.add_enum(EnumData::new("E1", Vec::new()));
        doc.add_enum(EnumData::new("E2", Vec::new()));
        let output = Generator::new(&doc).generate().unwrap();

        let e1 = output.find("public enum E1").unwrap();
        let e2 = output.find("public enum E2").unwrap();
        let s1 = output.find("public class S1").unwrap();
        assert!(e1 < e2);
        assert!(e2 < s1);
    }

    #[test]
    fn test_generation_is_idempotent() {
        let doc = sample_document();
        let first = Generator::new(&doc).generate().unwrap();
        let second = Generator::new(&doc).generate().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_definition_error_propagates() {
        let mut doc = ParseResult::new();
        let mut definition = EnumData::new("Enum", vec![EnumElement::new("First", "1")]);
        definition.attributes = vec![
            Attribute::new("attr_type", "int16"),
            Attribute::new("attr_type", "int32"),
        ];
        doc.add_enum(definition);

        assert!(matches!(
            Generator::new(&doc).generate(),
            Err(CodegenError::EnumTypeConflict { .. })
        ));
    }

    #[test]
    fn test_phases_allow_single_support_emission_across_documents() {
        let doc_a = sample_document();
        let mut doc_b = ParseResult::new();
        doc_b.add_enum(EnumData::new("Extra", vec![EnumElement::new("One", "1")]));

        let mut writer = CodeWriter::new(String::new());
        Generator::new(&doc_a).write_prelude(&mut writer).unwrap();
        Generator::new(&doc_a).write_definitions(&mut writer).unwrap();
        Generator::new(&doc_b).write_definitions(&mut writer).unwrap();
        Generator::new(&doc_a).write_support(&mut writer).unwrap();
        let output = writer.into_inner();

        assert_eq!(output.matches("using System;").count(), 1);
        assert_eq!(
            output.matches("internal class RangeValidator<T>").count(),
            1
        );
        assert!(output.find("public enum Color").unwrap() < output.find("public enum Extra").unwrap());
    }
}
