//! # Conformance Checking
//!
//! The single runtime question the type language exists to answer:
//! does this value match that declared type? The check is total — it
//! returns a boolean and never errors; callers decide how a mismatch
//! is reported.

use crate::typeexpr::TypeExpr;
use crate::value::Value;

/// Check whether `value` conforms to the declared `expr`.
///
/// - `Null` conforms iff `allow_null` is set.
/// - `list[X]` requires a list whose every element conforms to `X`;
///   the null policy is applied per element as well.
/// - Any other declaration requires exact tag equality. An integer is
///   never accepted where a float is declared, nor the reverse.
pub fn conforms(value: &Value, expr: &TypeExpr, allow_null: bool) -> bool {
    if value.is_null() {
        return allow_null;
    }

    match expr.element() {
        Some(element) => match value {
            Value::List(items) => {
                let element_expr = TypeExpr::bare(element);
                items
                    .iter()
                    .all(|item| conforms(item, &element_expr, allow_null))
            }
            _ => false,
        },
        None => value.kind() == Some(expr.base()),
    }
}
