//! Accessor synthesis.
//!
//! Emits a property-style get/set pair per field. The setter wraps the
//! assignment with a range validation when the field carries conditions
//! and is scalar; indexed fields validate per-slot through the
//! container's validator instead (attached in the constructor).

use crate::writer::CodeWriter;
use datadoc_schema::FieldCount;
use std::fmt;

use super::fields::FieldPlan;
use super::{validation_type, write_conditions_array, write_summary};

/// Writes the get/set property for one field.
///
/// # Errors
/// Propagates failures of the underlying sink.
pub(crate) fn write_accessor<W: fmt::Write>(
    writer: &mut CodeWriter<W>,
    plan: &FieldPlan<'_>,
) -> fmt::Result {
    let element = plan.element;
    let variable = plan.variable_name();

    write_summary(writer, &element.attributes)?;
    writer.puts(&format!("public {} {}", plan.storage_type(), element.name))?;
    writer.puts("{")?;
    writer.puts("[DebuggerStepThrough]")?;
    if element.conditions.is_empty() || plan.count != FieldCount::Scalar {
        writer.puts(&format!("set {{ {variable} = value; }}"))?;
    } else {
        let vt = validation_type(&plan.field_type);
        let value_getter = if plan.field_type.is_string() {
            "() => value.Length"
        } else {
            "() => value"
        };
        writer.puts("set {")?;
        write_conditions_array(writer, "conditions", &element.conditions, vt)?;
        writer.puts(&format!(
            "new DataDocument.RangeValidator<{vt}>(conditions).Validate({value_getter});"
        ))?;
        writer.puts(&format!("{variable} = value;"))?;
        writer.puts("}")?;
    }
    writer.puts("[DebuggerStepThrough]")?;
    writer.puts(&format!("get {{ return {variable}; }}"))?;
    writer.puts("}")?;
    writer.puts("")
}
