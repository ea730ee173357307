//! Maps a value to its semantic type name.

use crate::options::Options;
use crate::value::Value;

/// Classifies a value into the type name that drives style and handler
/// selection.
///
/// Primitive kinds (and the null sentinel) map directly; structural rules
/// never see them. Composites run every registered rule in order and the
/// last match wins, so later, more specific registrations override earlier
/// catch-alls. A composite matching no rule at all falls back to `"object"`.
pub fn classify(value: &Value, options: &Options) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
        Value::Function { .. } => "function".to_string(),
        composite => {
            let mut matched = None;
            for rule in &options.types {
                if (rule.predicate)(composite) {
                    matched = Some(rule.name.as_str());
                }
            }
            matched.unwrap_or("object").to_string()
        }
    }
}
