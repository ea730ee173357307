//! Configuration: effective options, partial overrides, and merging.
//!
//! An [`Options`] value is the fully merged configuration governing one
//! inspection. The process-wide defaults are built once behind a `Lazy` and
//! never mutated; every call layers [`Overrides`] on top of a fresh copy.
//!
//! Merging is key-wise for the four sub-maps (styles, hide, types, handlers):
//! an override replaces matching keys and leaves the rest alone. Every other
//! field replaces wholesale.
//!
//! # Example
//!
//! ```rust
//! use lookout::{Options, Overrides};
//!
//! let overrides = Overrides::new()
//!     .style("string", ["red"])
//!     .max_depth(3)
//!     .no_sink();
//!
//! let options = Options::defaults().merged([&overrides]);
//! assert_eq!(options.max_depth, 3);
//! assert_eq!(options.styles["string"], vec!["red".to_string()]);
//! // Non-overridden style keys persist from the defaults.
//! assert_eq!(options.styles["number"], vec!["yellow".to_string()]);
//! ```
//!
//! Overrides can also be loaded from YAML, for the plain-data subset of the
//! configuration (styles, hide, skip, layout controls):
//!
//! ```rust
//! use lookout::Overrides;
//!
//! let overrides = Overrides::from_yaml(r#"
//! pretty_print: false
//! max_depth: 2
//! skip: ["secret", "/^_/"]
//! styles:
//!   string: [red]
//! "#).unwrap();
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::InspectError;
use crate::value::Value;

/// A structural test distinguishing composite value subtypes.
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A rendering function bound to one semantic type name.
///
/// Receives the value, its classified type name, the current render depth,
/// and the effective options. Custom handlers can recurse with
/// [`stringify`](crate::stringify) and style text with
/// [`styled`](crate::styled).
pub type Handler =
    Arc<dyn Fn(&Value, &str, usize, &Options) -> Result<String, InspectError> + Send + Sync>;

/// One named structural classification rule.
///
/// Rules are evaluated in registration order; the last matching rule wins,
/// so later registrations override earlier, more general ones.
#[derive(Clone)]
pub struct TypeRule {
    pub name: String,
    pub predicate: Predicate,
}

impl TypeRule {
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }
}

/// A rule for dropping object members by key name.
#[derive(Clone, Debug)]
pub enum SkipRule {
    /// Exact key-name match.
    Name(String),
    /// Pattern match against the key name.
    Pattern(Regex),
}

impl SkipRule {
    pub fn matches(&self, key: &str) -> bool {
        match self {
            SkipRule::Name(name) => name == key,
            SkipRule::Pattern(pattern) => pattern.is_match(key),
        }
    }
}

/// Which members and member types are omitted from object output.
#[derive(Clone, Debug)]
pub struct HideRules {
    /// Include non-enumerable members, appended after the enumerable ones.
    pub hidden: bool,
    /// Type names whose members are omitted entirely.
    pub types: HashSet<String>,
}

/// Where rendered text is written.
///
/// With no sink configured, [`Inspector::inspect`](crate::Inspector::inspect)
/// returns the text instead. Writes are fire-and-forget: I/O errors are the
/// sink's problem, not the formatter's.
#[derive(Clone, Debug)]
pub enum Sink {
    Stdout,
    Stderr,
    /// Appends to a shared buffer. Useful in tests and for capturing output.
    Buffer(Arc<Mutex<String>>),
}

impl Sink {
    /// Creates a buffer sink along with a handle for reading it back.
    pub fn buffer() -> (Sink, Arc<Mutex<String>>) {
        let shared = Arc::new(Mutex::new(String::new()));
        (Sink::Buffer(shared.clone()), shared)
    }

    pub(crate) fn write(&self, text: &str) {
        match self {
            Sink::Stdout => {
                let _ = io::stdout().write_all(text.as_bytes());
            }
            Sink::Stderr => {
                let _ = io::stderr().write_all(text.as_bytes());
            }
            Sink::Buffer(shared) => {
                if let Ok(mut buffer) = shared.lock() {
                    buffer.push_str(text);
                }
            }
        }
    }
}

/// The effective configuration for one inspection call.
#[derive(Clone)]
pub struct Options {
    /// Style name → ordered list of modifier names, applied left to right.
    pub styles: HashMap<String, Vec<String>>,
    pub hide: HideRules,
    /// Skip rules matched against member key names.
    pub skip: Vec<SkipRule>,
    /// Ordered structural classification rules; last match wins.
    pub types: Vec<TypeRule>,
    /// User-registered handlers, consulted before the built-ins.
    pub handlers: HashMap<String, Handler>,
    pub pretty_print: bool,
    /// Printable-length threshold before a composite explodes to multi-line.
    pub max_item_len: usize,
    pub max_depth: usize,
    /// Indent unit, repeated once per nesting level.
    pub indent: String,
    /// Line terminator used for exploded layout and after sink writes.
    pub newline: String,
    pub sink: Option<Sink>,
}

static DEFAULTS: Lazy<Options> = Lazy::new(Options::base);

impl Options {
    /// The process-wide default configuration. Built once, never mutated.
    pub fn defaults() -> &'static Options {
        &DEFAULTS
    }

    fn base() -> Options {
        Options {
            styles: default_styles(),
            hide: HideRules {
                hidden: true,
                types: ["function", "undefined", "null"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
            skip: Vec::new(),
            types: default_type_rules(),
            handlers: HashMap::new(),
            pretty_print: true,
            max_item_len: 40,
            max_depth: 5,
            indent: "   ".to_string(),
            newline: "\n".to_string(),
            sink: Some(Sink::Stdout),
        }
    }

    /// Applies zero or more overrides, left to right, later taking precedence.
    ///
    /// The four sub-maps (styles, hide, types, handlers) merge key-wise;
    /// everything else replaces wholesale. A same-named type rule is replaced
    /// in place so its position in the evaluation order is preserved; new
    /// names are appended. Inputs are never mutated.
    pub fn merged<'a, I>(&self, overrides: I) -> Options
    where
        I: IntoIterator<Item = &'a Overrides>,
    {
        let mut merged = self.clone();
        for layer in overrides {
            for (name, modifiers) in &layer.styles {
                merged.styles.insert(name.clone(), modifiers.clone());
            }
            if let Some(hidden) = layer.hidden {
                merged.hide.hidden = hidden;
            }
            if let Some(types) = &layer.hide_types {
                merged.hide.types = types.clone();
            }
            for rule in &layer.types {
                match merged.types.iter_mut().find(|r| r.name == rule.name) {
                    Some(existing) => existing.predicate = rule.predicate.clone(),
                    None => merged.types.push(rule.clone()),
                }
            }
            for (name, handler) in &layer.handlers {
                merged.handlers.insert(name.clone(), handler.clone());
            }
            if let Some(skip) = &layer.skip {
                merged.skip = skip.clone();
            }
            if let Some(pretty_print) = layer.pretty_print {
                merged.pretty_print = pretty_print;
            }
            if let Some(max_item_len) = layer.max_item_len {
                merged.max_item_len = max_item_len;
            }
            if let Some(max_depth) = layer.max_depth {
                merged.max_depth = max_depth;
            }
            if let Some(indent) = &layer.indent {
                merged.indent = indent.clone();
            }
            if let Some(newline) = &layer.newline {
                merged.newline = newline.clone();
            }
            if let Some(sink) = &layer.sink {
                merged.sink = sink.clone();
            }
        }
        merged
    }
}

/// A partial configuration, layered over a base by [`Options::merged`].
///
/// Absent fields leave the base untouched. Built with chained methods:
///
/// ```rust
/// use lookout::Overrides;
/// use regex::Regex;
///
/// let overrides = Overrides::new()
///     .pretty_print(false)
///     .skip_key("secret")
///     .skip_pattern(Regex::new("^_").unwrap())
///     .hide_types(["function"])
///     .style("key", ["bold", "cyan"]);
/// ```
#[derive(Clone, Default)]
pub struct Overrides {
    styles: HashMap<String, Vec<String>>,
    hidden: Option<bool>,
    hide_types: Option<HashSet<String>>,
    skip: Option<Vec<SkipRule>>,
    types: Vec<TypeRule>,
    handlers: HashMap<String, Handler>,
    pretty_print: Option<bool>,
    max_item_len: Option<usize>,
    max_depth: Option<usize>,
    indent: Option<String>,
    newline: Option<String>,
    sink: Option<Option<Sink>>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an ordered modifier list to a style name.
    pub fn style<I, S>(mut self, name: impl Into<String>, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles.insert(
            name.into(),
            modifiers.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Whether non-enumerable members are included in object output.
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.hidden = Some(include);
        self
    }

    /// Replaces the set of type names omitted from object output.
    pub fn hide_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hide_types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    /// Appends an exact-name skip rule.
    pub fn skip_key(mut self, key: impl Into<String>) -> Self {
        self.skip
            .get_or_insert_with(Vec::new)
            .push(SkipRule::Name(key.into()));
        self
    }

    /// Appends a pattern skip rule.
    pub fn skip_pattern(mut self, pattern: Regex) -> Self {
        self.skip
            .get_or_insert_with(Vec::new)
            .push(SkipRule::Pattern(pattern));
        self
    }

    /// Registers a structural classification rule.
    ///
    /// A rule whose name already exists in the base replaces that rule in
    /// place; a new name is appended, and therefore wins over every earlier
    /// rule that also matches.
    pub fn register_type<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.types.push(TypeRule::new(name, predicate));
        self
    }

    /// Registers (or replaces) the handler for a type name.
    pub fn handler<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&Value, &str, usize, &Options) -> Result<String, InspectError>
            + Send
            + Sync
            + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    pub fn pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = Some(pretty_print);
        self
    }

    pub fn max_item_len(mut self, max_item_len: usize) -> Self {
        self.max_item_len = Some(max_item_len);
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = Some(newline.into());
        self
    }

    /// Routes rendered text to the given sink.
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(Some(sink));
        self
    }

    /// Removes the sink, so inspection returns the rendered text instead.
    pub fn no_sink(mut self) -> Self {
        self.sink = Some(None);
        self
    }

    /// Parses overrides from a YAML document.
    ///
    /// Covers the plain-data subset of the configuration: styles, hide,
    /// skip, and the layout controls. Skip entries written `/…/` compile to
    /// patterns; anything else is an exact key name.
    pub fn from_yaml(source: &str) -> Result<Overrides, InspectError> {
        let raw: RawOverrides = serde_yaml::from_str(source)
            .map_err(|e| InspectError::InvalidOverride(e.to_string()))?;

        let mut overrides = Overrides::new();
        if let Some(styles) = raw.styles {
            overrides.styles = styles;
        }
        if let Some(hide) = raw.hide {
            overrides.hidden = hide.hidden;
            overrides.hide_types = hide.types.map(|t| t.into_iter().collect());
        }
        if let Some(entries) = raw.skip {
            let mut skip = Vec::with_capacity(entries.len());
            for entry in entries {
                skip.push(parse_skip_entry(&entry)?);
            }
            overrides.skip = Some(skip);
        }
        overrides.pretty_print = raw.pretty_print;
        overrides.max_item_len = raw.max_item_len;
        overrides.max_depth = raw.max_depth;
        overrides.indent = raw.indent;
        overrides.newline = raw.newline;
        Ok(overrides)
    }

    /// Loads overrides from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Overrides, InspectError> {
        let source = fs::read_to_string(path)?;
        Self::from_yaml(&source)
    }
}

fn parse_skip_entry(entry: &str) -> Result<SkipRule, InspectError> {
    match entry.strip_prefix('/').and_then(|e| e.strip_suffix('/')) {
        Some(pattern) if !pattern.is_empty() => Regex::new(pattern)
            .map(SkipRule::Pattern)
            .map_err(|e| InspectError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }),
        _ => Ok(SkipRule::Name(entry.to_string())),
    }
}

#[derive(Deserialize)]
struct RawOverrides {
    styles: Option<HashMap<String, Vec<String>>>,
    hide: Option<RawHide>,
    skip: Option<Vec<String>>,
    pretty_print: Option<bool>,
    max_item_len: Option<usize>,
    max_depth: Option<usize>,
    indent: Option<String>,
    newline: Option<String>,
}

#[derive(Deserialize)]
struct RawHide {
    hidden: Option<bool>,
    types: Option<Vec<String>>,
}

/// The thirteen default style assignments.
fn default_styles() -> HashMap<String, Vec<String>> {
    let assignments: [(&str, &[&str]); 13] = [
        ("label", &["bold"]),
        ("key", &["bold"]),
        ("symbol", &["bold", "blue"]),
        ("object", &["blue"]),
        ("array", &["blue"]),
        ("function", &["cyan"]),
        ("string", &["green"]),
        ("number", &["yellow"]),
        ("boolean", &["yellow"]),
        ("regexp", &["red"]),
        ("date", &["magenta"]),
        ("null", &["grey"]),
        ("undefined", &["grey"]),
    ];
    assignments
        .iter()
        .map(|(name, modifiers)| {
            (
                name.to_string(),
                modifiers.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect()
}

/// Default structural rules, most general first. The specific names are
/// registered after the catch-all so they win on the last-match rule.
fn default_type_rules() -> Vec<TypeRule> {
    vec![
        TypeRule::new("object", |_| true),
        TypeRule::new("array", |v| matches!(v, Value::Array(_))),
        TypeRule::new("regexp", |v| matches!(v, Value::Regexp(_))),
        TypeRule::new("date", |v| matches!(v, Value::Date(_))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::defaults();
        assert!(options.pretty_print);
        assert_eq!(options.max_item_len, 40);
        assert_eq!(options.max_depth, 5);
        assert_eq!(options.indent, "   ");
        assert_eq!(options.newline, "\n");
        assert!(options.skip.is_empty());
        assert!(options.handlers.is_empty());
        assert!(options.hide.hidden);
        assert!(options.hide.types.contains("function"));
        assert!(options.hide.types.contains("undefined"));
        assert!(options.hide.types.contains("null"));
        assert_eq!(options.styles.len(), 13);
        assert_eq!(options.types.len(), 4);
    }

    #[test]
    fn test_styles_merge_keywise() {
        let overrides = Overrides::new().style("string", ["red"]);
        let options = Options::defaults().merged([&overrides]);
        assert_eq!(options.styles["string"], vec!["red".to_string()]);
        // Untouched keys persist.
        assert_eq!(options.styles["symbol"], vec!["bold".to_string(), "blue".to_string()]);
    }

    #[test]
    fn test_hide_merges_fieldwise() {
        let overrides = Overrides::new().hide_types(["function"]);
        let options = Options::defaults().merged([&overrides]);
        // `hidden` persists, `types` is replaced wholesale.
        assert!(options.hide.hidden);
        assert_eq!(options.hide.types.len(), 1);
        assert!(options.hide.types.contains("function"));
    }

    #[test]
    fn test_skip_replaces_wholesale() {
        let first = Overrides::new().skip_key("a").skip_key("b");
        let second = Overrides::new().skip_key("c");
        let options = Options::defaults().merged([&first, &second]);
        assert_eq!(options.skip.len(), 1);
        assert!(options.skip[0].matches("c"));
    }

    #[test]
    fn test_type_rule_replaced_in_place() {
        let overrides = Overrides::new()
            .register_type("array", |_| false)
            .register_type("point", |v| matches!(v, Value::Object(_)));
        let options = Options::defaults().merged([&overrides]);
        let names: Vec<&str> = options.types.iter().map(|r| r.name.as_str()).collect();
        // "array" keeps its position, "point" is appended.
        assert_eq!(names, vec!["object", "array", "regexp", "date", "point"]);
        assert!(!(options.types[1].predicate)(&Value::Array(Vec::new())));
    }

    #[test]
    fn test_later_override_wins() {
        let first = Overrides::new().max_depth(2);
        let second = Overrides::new().max_depth(7);
        let options = Options::defaults().merged([&first, &second]);
        assert_eq!(options.max_depth, 7);
    }

    #[test]
    fn test_from_yaml() {
        let overrides = Overrides::from_yaml(
            r#"
pretty_print: false
max_item_len: 60
skip: ["secret", "/^_/"]
hide:
  types: [function]
styles:
  string: [red]
  key: [bold, cyan]
"#,
        )
        .unwrap();
        let options = Options::defaults().merged([&overrides]);
        assert!(!options.pretty_print);
        assert_eq!(options.max_item_len, 60);
        assert_eq!(options.skip.len(), 2);
        assert!(options.skip[0].matches("secret"));
        assert!(options.skip[1].matches("_private"));
        assert!(!options.skip[1].matches("public"));
        assert!(options.hide.hidden);
        assert_eq!(options.hide.types.len(), 1);
        assert_eq!(options.styles["string"], vec!["red".to_string()]);
    }

    #[test]
    fn test_from_yaml_bad_pattern() {
        let result = Overrides::from_yaml(r#"skip: ["/(/"]"#);
        assert!(matches!(
            result,
            Err(InspectError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_from_yaml_malformed_document() {
        let result = Overrides::from_yaml("max_depth: [not a number]");
        assert!(matches!(result, Err(InspectError::InvalidOverride(_))));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let base = Options::defaults();
        let overrides = Overrides::new().style("string", ["red"]).max_depth(1);
        let _ = base.merged([&overrides]);
        assert_eq!(base.max_depth, 5);
        assert_eq!(base.styles["string"], vec!["green".to_string()]);
    }

    #[test]
    fn test_buffer_sink() {
        let (sink, shared) = Sink::buffer();
        sink.write("hello");
        sink.write(" world");
        assert_eq!(shared.lock().unwrap().as_str(), "hello world");
    }
}
