//! C# code generation modules.

pub mod accessors;
pub mod enums;
pub mod fields;
pub mod runtime;
pub mod structs;

pub use enums::EnumGenerator;
pub use fields::FieldPlan;
pub use structs::StructGenerator;

use crate::writer::CodeWriter;
use datadoc_schema::{Attribute, AttributeKey, FieldType};
use std::fmt;

/// Namespace used when a definition carries no `attr_namespace`.
pub const DEFAULT_NAMESPACE: &str = "DataDocument";

/// Returns the namespace list for a definition, falling back to
/// [`DEFAULT_NAMESPACE`] when none was given.
#[must_use]
pub(crate) fn namespaces_or_default(values: Vec<String>) -> Vec<String> {
    if values.is_empty() {
        vec![DEFAULT_NAMESPACE.to_string()]
    } else {
        values
    }
}

/// Writes the `<summary>` doc-comment block built from `attr_name`
/// attribute values, joined with a single space. Omitted when none.
pub(crate) fn write_summary<W: fmt::Write>(
    writer: &mut CodeWriter<W>,
    attributes: &[Attribute],
) -> fmt::Result {
    let names: Vec<&str> = attributes
        .iter()
        .filter(|a| a.key == AttributeKey::Name)
        .map(Attribute::unquoted)
        .collect();
    if names.is_empty() {
        return Ok(());
    }
    writer.puts("/// <summary>")?;
    writer.puts(&format!("/// {}", names.join(" ")))?;
    writer.puts("/// </summary>")
}

/// Returns the C# type the range validator compares against: `Int32`
/// for `string` fields (the length is validated), the mapped element
/// type otherwise.
#[must_use]
pub(crate) fn validation_type(field_type: &FieldType) -> &str {
    if field_type.is_string() {
        "Int32"
    } else {
        field_type.cs_name()
    }
}

/// Resolves one `"min..max"` condition into its two bound expressions,
/// substituting the `Min`/`Max` sentinels with the validation type's
/// extreme constants. Other tokens pass through verbatim.
#[must_use]
pub(crate) fn range_bounds(condition: &str, validation_type: &str) -> (String, String) {
    let (min, max) = condition.split_once("..").unwrap_or((condition, ""));
    (
        resolve_bound(min, validation_type),
        resolve_bound(max, validation_type),
    )
}

fn resolve_bound(token: &str, validation_type: &str) -> String {
    match token {
        "Min" => format!("{validation_type}.MinValue"),
        "Max" => format!("{validation_type}.MaxValue"),
        other => other.to_string(),
    }
}

/// Writes a `Tuple<T, T>[]` array named `var_name` holding one pair per
/// condition, for consumption by a `RangeValidator<T>`.
pub(crate) fn write_conditions_array<W: fmt::Write>(
    writer: &mut CodeWriter<W>,
    var_name: &str,
    conditions: &[String],
    validation_type: &str,
) -> fmt::Result {
    writer.puts(&format!(
        "Tuple<{validation_type}, {validation_type}>[] {var_name} = new Tuple<{validation_type}, {validation_type}>[] {{"
    ))?;
    for condition in conditions {
        let (min, max) = range_bounds(condition, validation_type);
        writer.puts(&format!(
            "new Tuple<{validation_type}, {validation_type}>({min}, {max}),"
        ))?;
    }
    writer.puts("};")
}

#[cfg(test)]
mod tests {
    use super::*;
    use datadoc_schema::PrimitiveType;

    #[test]
    fn test_range_bounds_substitutes_sentinels() {
        assert_eq!(
            range_bounds("Min..Max", "Int32"),
            ("Int32.MinValue".to_string(), "Int32.MaxValue".to_string())
        );
        assert_eq!(
            range_bounds("0..10", "Int32"),
            ("0".to_string(), "10".to_string())
        );
        assert_eq!(
            range_bounds("Max..Min", "Int16"),
            ("Int16.MaxValue".to_string(), "Int16.MinValue".to_string())
        );
    }

    #[test]
    fn test_range_bounds_passes_other_tokens_through() {
        assert_eq!(
            range_bounds("Lower..Upper", "Int32"),
            ("Lower".to_string(), "Upper".to_string())
        );
    }

    #[test]
    fn test_validation_type_for_strings_is_length_type() {
        assert_eq!(
            validation_type(&FieldType::Primitive(PrimitiveType::String)),
            "Int32"
        );
        assert_eq!(
            validation_type(&FieldType::Primitive(PrimitiveType::Int16)),
            "Int16"
        );
        assert_eq!(
            validation_type(&FieldType::UserDefined("Hoge".to_string())),
            "Hoge"
        );
    }

    #[test]
    fn test_namespaces_or_default() {
        assert_eq!(namespaces_or_default(Vec::new()), vec!["DataDocument"]);
        assert_eq!(
            namespaces_or_default(vec!["Hoge".to_string()]),
            vec!["Hoge"]
        );
    }
}
