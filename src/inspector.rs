//! The orchestrator: recursive stringification and the public entry points.

use crate::classify::classify;
use crate::error::InspectError;
use crate::handlers::dispatch;
use crate::options::{Options, Overrides};
use crate::style::styled;
use crate::value::Value;

/// Renders a value at the given depth under the given options.
///
/// Classifies the value, invokes the matching handler, and returns its
/// result unmodified. Public so custom handlers can recurse into children
/// (at `depth + 1`).
pub fn stringify(value: &Value, depth: usize, options: &Options) -> Result<String, InspectError> {
    let type_name = classify(value, options);
    dispatch(value, &type_name, depth, options)
}

/// Per-call arguments for [`Inspector::inspect_opts`].
///
/// Both fields are optional and named, so a call site reads as what it does
/// rather than as an argument-count puzzle.
#[derive(Clone, Default)]
pub struct InspectOpts {
    /// Rendered as `LABEL: ` (styled `"label"`) before the value. Never
    /// escaped. An empty label is the same as none.
    pub label: Option<String>,
    /// Merged over the inspector's options for this call only.
    pub overrides: Option<Overrides>,
}

impl InspectOpts {
    /// Arguments carrying only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            overrides: None,
        }
    }

    /// Adds per-call overrides.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// A reusable inspection instance with its own merged options.
///
/// # Example
///
/// ```rust
/// use lookout::{InspectOpts, Inspector, Overrides, Value};
/// use serde_json::json;
///
/// let inspector = Inspector::with_overrides(Overrides::new().no_sink());
/// let value = Value::from(json!({ "greeting": "moto" }));
///
/// let text = inspector
///     .inspect_opts(&value, InspectOpts::labeled("hello"))
///     .unwrap()
///     .expect("no sink configured, so the text comes back");
/// assert_eq!(
///     console::strip_ansi_codes(&text),
///     "hello: {greeting : 'moto'}"
/// );
/// ```
#[derive(Clone)]
pub struct Inspector {
    options: Options,
}

impl Inspector {
    /// An inspector using the process defaults.
    pub fn new() -> Self {
        Self {
            options: Options::defaults().clone(),
        }
    }

    /// An inspector with overrides merged over the process defaults.
    pub fn with_overrides(overrides: Overrides) -> Self {
        Self {
            options: Options::defaults().merged([&overrides]),
        }
    }

    /// The effective options this inspector renders with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Inspects a value.
    ///
    /// When the effective configuration names a sink, the rendered text plus
    /// the configured line terminator is written there (fire and forget) and
    /// `Ok(None)` comes back; with no sink, the text is returned.
    pub fn inspect(&self, value: &Value) -> Result<Option<String>, InspectError> {
        self.emit(value, None, &self.options)
    }

    /// Inspects a value with a label and/or per-call overrides.
    pub fn inspect_opts(
        &self,
        value: &Value,
        opts: InspectOpts,
    ) -> Result<Option<String>, InspectError> {
        match opts.overrides {
            Some(overrides) => {
                let merged = self.options.merged([&overrides]);
                self.emit(value, opts.label.as_deref(), &merged)
            }
            None => self.emit(value, opts.label.as_deref(), &self.options),
        }
    }

    fn emit(
        &self,
        value: &Value,
        label: Option<&str>,
        options: &Options,
    ) -> Result<Option<String>, InspectError> {
        let text = analyze(value, label, options)?;
        match &options.sink {
            Some(sink) => {
                sink.write(&format!("{text}{}", options.newline));
                Ok(None)
            }
            None => Ok(Some(text)),
        }
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

fn analyze(value: &Value, label: Option<&str>, options: &Options) -> Result<String, InspectError> {
    let prefix = match label {
        Some(label) if !label.is_empty() => styled(&format!("{label}: "), "label", options),
        _ => String::new(),
    };
    Ok(format!("{prefix}{}", stringify(value, 0, options)?))
}

/// Inspects a value with the process defaults.
///
/// The default sink is standard output, so this writes the rendered text and
/// returns `Ok(None)`; configure [`Overrides::no_sink`] via an [`Inspector`]
/// to get the text back instead.
pub fn inspect(value: &Value) -> Result<Option<String>, InspectError> {
    Inspector::new().inspect(value)
}

/// Inspects a value with a label, using the process defaults.
pub fn inspect_labeled(value: &Value, label: &str) -> Result<Option<String>, InspectError> {
    Inspector::new().inspect_opts(value, InspectOpts::labeled(label))
}
