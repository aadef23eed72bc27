//! Static runtime support blocks.
//!
//! These are fixed text, not derived from the model: the using header
//! required by emitted code, and the definitions of the support types it
//! references (`RangeValidator<T>` plus the two indexed-container
//! variants). The writer re-indents them like any other chunk.

/// Using directives required by generated code.
pub const USING_DIRECTIVES: &str = "\
using System;
using System.Collections.Generic;
using System.Diagnostics;
using System.IO;";

/// The range validator consumed by validated setters and indexers.
pub const RANGE_VALIDATOR: &str = "\
namespace DataDocument
{
internal class RangeValidator<T>
where T : IComparable
{
private IEnumerable<Tuple<T, T>> _ranges;
public RangeValidator(IEnumerable<Tuple<T, T>> ranges)
{
_ranges = ranges;
}
public void Validate(Func<T> valueGetter)
{
T value = valueGetter();
foreach (var range in _ranges)
{
if ((range.Item1.CompareTo(value) <= 0) && (value.CompareTo(range.Item2) <= 0))
{
return;
}
}
throw new ArgumentException();
}
}
}";

/// The two indexed-container variants: the validating container for
/// comparable element types and the non-null-enforcing container for
/// reference types.
pub const INDEXERS: &str = "\
namespace DataDocument
{
public class Indexer<T>
where T : IComparable
{
private T[] _array;
public DataDocument.RangeValidator<T> Validator { set; get; }
public T this[int i]
{
set
{
if (Validator != null) Validator.Validate(() => value);
_array[i] = value;
}
get { return _array[i]; }
}
public Indexer(int count)
{
_array = new T[count];
}
}
}

namespace DataDocument
{
public class ClassIndexer<T>
where T : class
{
private T[] _array;
public T this[int i]
{
set
{
if (value == null) throw new ArgumentNullException();
_array[i] = value;
}
get { return _array[i]; }
}
public ClassIndexer(int count)
{
_array = new T[count];
}
}
}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::CodeWriter;

    fn brace_balance(text: &str) -> i64 {
        text.chars().fold(0, |level, c| match c {
            '{' => level + 1,
            '}' => level - 1,
            _ => level,
        })
    }

    #[test]
    fn test_support_blocks_are_brace_balanced() {
        assert_eq!(brace_balance(RANGE_VALIDATOR), 0);
        assert_eq!(brace_balance(INDEXERS), 0);
        assert_eq!(brace_balance(USING_DIRECTIVES), 0);
    }

    #[test]
    fn test_support_blocks_leave_writer_level_unchanged() {
        let mut writer = CodeWriter::new(String::new());
        writer.puts(RANGE_VALIDATOR).unwrap();
        assert_eq!(writer.level(), 0);
        writer.puts(INDEXERS).unwrap();
        assert_eq!(writer.level(), 0);
    }

    #[test]
    fn test_validator_block_is_reindented() {
        let mut writer = CodeWriter::new(String::new());
        writer.puts(RANGE_VALIDATOR).unwrap();
        let output = writer.into_inner();
        assert!(output.contains("\n    internal class RangeValidator<T>\n"));
        assert!(output.contains("\n            T value = valueGetter();\n"));
    }
}
