//! Per-type rendering: the built-in handlers and their dispatch.
//!
//! The built-ins form a closed set dispatched through one exhaustive match.
//! User-registered handlers in the options are the open extension point and
//! are consulted first, so a registration under a built-in name replaces it.

use crate::error::InspectError;
use crate::escape::escape;
use crate::filter::filter;
use crate::inspector::stringify;
use crate::layout::enclose;
use crate::options::Options;
use crate::style::styled;
use crate::value::Value;

/// Renders a value through the handler bound to its classified type name.
///
/// A name with neither a user handler nor a built-in is a configuration
/// error and fails with [`InspectError::MissingHandler`].
pub(crate) fn dispatch(
    value: &Value,
    type_name: &str,
    depth: usize,
    options: &Options,
) -> Result<String, InspectError> {
    if let Some(handler) = options.handlers.get(type_name) {
        return handler(value, type_name, depth, options);
    }
    match Builtin::for_name(type_name) {
        Some(builtin) => builtin.render(value, type_name, depth, options),
        None => Err(InspectError::MissingHandler(type_name.to_string())),
    }
}

/// The closed set of built-in render behaviors.
enum Builtin {
    /// Raw scalar text styled by type: numbers and booleans.
    Scalar,
    /// Bracketed type marker: null and undefined.
    Marker,
    Function,
    Text,
    Date,
    Regexp,
    Array,
    Object,
}

impl Builtin {
    fn for_name(name: &str) -> Option<Builtin> {
        match name {
            "number" | "boolean" => Some(Builtin::Scalar),
            "null" | "undefined" => Some(Builtin::Marker),
            "function" => Some(Builtin::Function),
            "string" => Some(Builtin::Text),
            "date" => Some(Builtin::Date),
            "regexp" => Some(Builtin::Regexp),
            "array" => Some(Builtin::Array),
            "object" => Some(Builtin::Object),
            _ => None,
        }
    }

    fn render(
        &self,
        value: &Value,
        type_name: &str,
        depth: usize,
        options: &Options,
    ) -> Result<String, InspectError> {
        let text = match (self, value) {
            (Builtin::Scalar, Value::Number(n)) => styled(&n.to_string(), type_name, options),
            (Builtin::Scalar, Value::Bool(b)) => styled(&b.to_string(), type_name, options),
            (Builtin::Marker, _) => styled(&format!("[{type_name}]"), type_name, options),
            (Builtin::Function, Value::Function { name, arity }) => {
                let text = if name.is_empty() {
                    format!("[function (lambda)({arity})]")
                } else {
                    format!("[function {name}({arity})]")
                };
                styled(&text, type_name, options)
            }
            (Builtin::Text, Value::String(s)) => {
                styled(&format!("'{}'", escape(s)), type_name, options)
            }
            (Builtin::Date, Value::Date(when)) => styled(&when.to_rfc2822(), type_name, options),
            (Builtin::Regexp, Value::Regexp(source)) => {
                styled(&format!("/{source}/"), type_name, options)
            }
            (Builtin::Array, Value::Array(items)) => {
                return render_array(items, type_name, depth, options)
            }
            (Builtin::Object, Value::Object(object)) => {
                return render_object(object, type_name, depth, options)
            }
            // A value routed to the wrong built-in by a user classification
            // rule renders as its bare marker.
            _ => styled(&format!("[{type_name}]"), type_name, options),
        };
        Ok(text)
    }
}

fn render_array(
    items: &[Value],
    type_name: &str,
    depth: usize,
    options: &Options,
) -> Result<String, InspectError> {
    if items.is_empty() {
        return Ok(styled("[]", "symbol", options));
    }
    if depth >= options.max_depth {
        return Ok(styled("[nested array]", type_name, options));
    }
    let mut children = Vec::with_capacity(items.len());
    for item in items {
        children.push(stringify(item, depth + 1, options)?);
    }
    Ok(enclose("[", "]", &children, depth, options))
}

fn render_object(
    object: &crate::value::Object,
    type_name: &str,
    depth: usize,
    options: &Options,
) -> Result<String, InspectError> {
    let pairs = filter(object, options);
    if pairs.is_empty() {
        return Ok(styled("{}", "symbol", options));
    }
    if depth >= options.max_depth {
        return Ok(styled("[nested object]", type_name, options));
    }
    let mut children = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        let rendered = stringify(value, depth + 1, options)?;
        children.push(format!("{} : {}", styled(key, "key", options), rendered));
    }
    Ok(enclose("{", "}", &children, depth, options))
}
