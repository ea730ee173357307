//! Selects which members of an object are eligible for rendering.

use crate::classify::classify;
use crate::options::Options;
use crate::value::{Object, Value};

/// Returns the ordered member pairs surviving the hide and skip rules.
///
/// Enumerable members come first, in insertion order. When the hide
/// configuration includes non-enumerable members, hidden entries not already
/// present by key are appended in their stored order. A pair is then dropped
/// if its value classifies to a hidden type, or if its key matches any skip
/// rule.
pub fn filter<'a>(object: &'a Object, options: &Options) -> Vec<(&'a str, &'a Value)> {
    let mut pairs: Vec<(&str, &Value)> = object.entries().collect();
    if options.hide.hidden {
        for (key, value) in object.hidden_entries() {
            if !pairs.iter().any(|(present, _)| *present == key) {
                pairs.push((key, value));
            }
        }
    }
    pairs.retain(|(key, value)| {
        if options.hide.types.contains(&classify(value, options)) {
            return false;
        }
        !options.skip.iter().any(|rule| rule.matches(key))
    });
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Overrides;
    use regex::Regex;

    fn sample() -> Object {
        Object::new()
            .entry("name", "thing")
            .entry("count", 3)
            .entry("callback", Value::function("go", 1))
            .entry("missing", Value::Undefined)
            .hidden_entry("internal", true)
    }

    #[test]
    fn test_hidden_types_dropped_by_default() {
        let object = sample();
        let options = Options::defaults();
        let keys: Vec<&str> = filter(&object, options).iter().map(|(k, _)| *k).collect();
        // function and undefined members are hidden; the non-enumerable
        // member is appended after the enumerable ones.
        assert_eq!(keys, vec!["name", "count", "internal"]);
    }

    #[test]
    fn test_hidden_members_excluded_when_disabled() {
        let object = sample();
        let options = Options::defaults().merged([&Overrides::new().include_hidden(false)]);
        let keys: Vec<&str> = filter(&object, &options).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["name", "count"]);
    }

    #[test]
    fn test_hidden_member_does_not_shadow_enumerable() {
        let object = Object::new().entry("a", 1).hidden_entry("a", 2);
        let options = Options::defaults();
        let pairs = filter(&object, options);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, &Value::from(1));
    }

    #[test]
    fn test_skip_by_name_and_pattern() {
        let object = Object::new()
            .entry("secret", "x")
            .entry("_private", "y")
            .entry("user", "z");
        let options = Options::defaults().merged([&Overrides::new()
            .skip_key("secret")
            .skip_pattern(Regex::new("^_").unwrap())]);
        let keys: Vec<&str> = filter(&object, &options).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["user"]);
    }

    #[test]
    fn test_hide_types_overridden() {
        let object = Object::new().entry("nil", Value::Null);
        let options = Options::defaults().merged([&Overrides::new().hide_types(["function"])]);
        let keys: Vec<&str> = filter(&object, &options).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["nil"]);
    }
}
