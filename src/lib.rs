//! # Lookout - Styled Value Inspection
//!
//! `lookout` renders an in-memory value tree as human-readable, optionally
//! colored text, for interactive debugging and logging. It classifies each
//! value into a semantic type, renders it through a per-type handler, and
//! decides per composite whether the children fit on one line or explode
//! across indented lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use lookout::{Inspector, Overrides, Value};
//! use serde_json::json;
//!
//! let inspector = Inspector::with_overrides(Overrides::new().no_sink());
//! let value = Value::from(json!({ "name": "lookout", "port": 8080 }));
//!
//! let text = inspector.inspect(&value).unwrap().unwrap();
//! assert_eq!(
//!     console::strip_ansi_codes(&text),
//!     "{name : 'lookout', port : 8080}"
//! );
//! ```
//!
//! With the default configuration there is no text to collect: rendered
//! output goes to standard output, the way a debugging tool wants it.
//!
//! ```rust,no_run
//! use lookout::{inspect_labeled, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({ "retries": 3 }));
//! inspect_labeled(&value, "config").unwrap();
//! ```
//!
//! ## Configuration
//!
//! Every knob lives on [`Overrides`], layered over immutable process
//! defaults: visual styles per type, which member types are hidden, skip
//! rules for member names, the layout threshold and indent, recursion depth,
//! and the output sink. See [`Options::merged`] for the merge rules.
//!
//! ## Extension
//!
//! New semantic types plug in as a structural predicate plus a handler:
//!
//! ```rust
//! use lookout::{stringify, styled, Inspector, Overrides, Value};
//! use serde_json::json;
//!
//! let overrides = Overrides::new()
//!     .no_sink()
//!     .register_type("pair", |v| {
//!         matches!(v, Value::Array(items) if items.len() == 2)
//!     })
//!     .handler("pair", |value, _, depth, options| {
//!         let Value::Array(items) = value else { unreachable!() };
//!         let left = stringify(&items[0], depth + 1, options)?;
//!         let right = stringify(&items[1], depth + 1, options)?;
//!         Ok(format!("{left} => {right}"))
//!     });
//!
//! let inspector = Inspector::with_overrides(overrides);
//! let text = inspector.inspect(&Value::from(json!([1, 2]))).unwrap().unwrap();
//! assert_eq!(console::strip_ansi_codes(&text), "1 => 2");
//! ```
//!
//! Classification rules run in registration order and the *last* match
//! wins, so a later, more specific rule (like `pair`) overrides the earlier
//! catch-alls (`object`, `array`).

mod classify;
mod error;
mod escape;
mod filter;
mod handlers;
mod inspector;
mod layout;
mod options;
mod style;
mod value;

pub use classify::classify;
pub use error::InspectError;
pub use escape::escape;
pub use filter::filter;
pub use inspector::{inspect, inspect_labeled, stringify, InspectOpts, Inspector};
pub use layout::enclose;
pub use options::{
    Handler, HideRules, Options, Overrides, Predicate, Sink, SkipRule, TypeRule,
};
pub use style::styled;
pub use value::{Object, Value};
