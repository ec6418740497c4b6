//! Deep merge of caller options over defaults.
//!
//! # Rules
//! - A key the caller supplied keeps the caller's value
//! - A key the caller omitted is copied from the defaults
//! - When both sides hold a table, the tables are merged key by key
//! - Arrays and scalars are leaves: the caller's value replaces the default whole

use serde_json::{Map, Value};

use crate::config::schema::DocsOptions;

/// Fill every key of `defaults` that `target` is missing, recursing into
/// tables present on both sides.
pub fn merge_defaults(target: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    for (key, default) in defaults {
        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), default.clone());
            }
            Some(Value::Object(nested)) => {
                if let Value::Object(nested_default) = default {
                    merge_defaults(nested, nested_default);
                }
            }
            Some(_) => {}
        }
    }
}

impl DocsOptions {
    /// Consume the caller options and return them merged over `defaults`.
    pub fn merged_over(mut self, defaults: &DocsOptions) -> DocsOptions {
        merge_defaults(self.as_map_mut(), defaults.as_map());
        self
    }
}
