//! # Datadoc Schema
//!
//! Document model and type classification for the datadoc code generator.
//!
//! This crate provides:
//! - Immutable model types for a parsed data document (enums, structs,
//!   fields, attributes)
//! - The primitive type-mapping table shared by all generators
//! - Closed classifications for field element types and element counts

pub mod model;
pub mod types;

pub use model::{
    Attribute, AttributeKey, EnumData, EnumElement, ParseResult, StructData, StructElement,
};
pub use types::{CountError, FieldCount, FieldType, PrimitiveType, map_type};
