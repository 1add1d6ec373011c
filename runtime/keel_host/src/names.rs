//! Host naming conventions.
//!
//! The host type system encodes two conventions in type names:
//! - A qualified name is `namespace` + `.` + declared name, and is what the
//!   [`TypeResolver`](crate::TypeResolver) seam accepts.
//! - A generic declaration carries an arity marker: a backtick followed by
//!   the parameter count (`` List`1 ``, `` Dictionary`2 ``). Erasing the
//!   marker yields the friendly base name shared by every arity variant of
//!   the same family.

/// Separator between namespace and declared name in a qualified name.
pub const NAMESPACE_SEPARATOR: char = '.';

/// Marker separating a base name from its generic parameter count.
pub const ARITY_MARKER: char = '`';

/// Combine a namespace and a declared name into a qualified name.
pub fn qualify(namespace: &str, name: &str) -> String {
    let mut qualified = String::with_capacity(namespace.len() + name.len() + 1);
    qualified.push_str(namespace);
    qualified.push(NAMESPACE_SEPARATOR);
    qualified.push_str(name);
    qualified
}

/// Strip the arity marker (and everything after it) from a declared name.
///
/// Names without a marker pass through unchanged, so erasure is idempotent:
/// erasing an already-erased name is a no-op.
pub fn erase_arity(name: &str) -> &str {
    match name.find(ARITY_MARKER) {
        Some(tick) => &name[..tick],
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn qualify_joins_with_separator() {
        assert_eq!(qualify("System", "String"), "System.String");
        assert_eq!(
            qualify("System.Collections.Generic", "List`1"),
            "System.Collections.Generic.List`1"
        );
    }

    #[test]
    fn erase_strips_marker_and_suffix() {
        assert_eq!(erase_arity("List`1"), "List");
        assert_eq!(erase_arity("Dictionary`2"), "Dictionary");
    }

    #[test]
    fn erase_without_marker_is_identity() {
        assert_eq!(erase_arity("String"), "String");
        assert_eq!(erase_arity(""), "");
    }

    #[test]
    fn erase_is_idempotent() {
        let once = erase_arity("Tuple`8");
        assert_eq!(erase_arity(once), once);
    }

    #[test]
    fn erase_truncates_at_first_marker() {
        assert_eq!(erase_arity("Odd`1`2"), "Odd");
    }
}
