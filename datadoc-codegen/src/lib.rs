//! # Datadoc Codegen
//!
//! C# code generation from datadoc document models.
//!
//! This crate provides:
//! - A block-aware, indentation-tracking text writer
//! - Field materialization and accessor synthesis for struct definitions
//! - Enum and struct definition generation with namespace nesting
//! - The static runtime support blocks referenced by emitted code
//!
//! The upstream parser is out of scope: generation starts from an
//! in-memory [`ParseResult`](datadoc_schema::ParseResult).

pub mod csharp;
pub mod error;
pub mod generator;
pub mod writer;

pub use error::CodegenError;
pub use generator::Generator;
pub use writer::CodeWriter;

use datadoc_schema::ParseResult;

/// Generates C# source for a parsed document.
///
/// # Arguments
/// * `document` - The parsed document model
///
/// # Returns
/// The generated compilation unit as a string.
///
/// # Errors
/// Returns `CodegenError` if a definition fails generation.
pub fn generate(document: &ParseResult) -> Result<String, CodegenError> {
    Generator::new(document).generate()
}

/// Generates C# source for a parsed document and writes it to a file.
///
/// # Arguments
/// * `document` - The parsed document model
/// * `path` - Destination file path
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_file(
    document: &ParseResult,
    path: &std::path::Path,
) -> Result<(), CodegenError> {
    let source = generate(document)?;
    std::fs::write(path, source)?;
    Ok(())
}
