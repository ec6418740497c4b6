//! Helpers registered on the page template.
//!
//! | Name       | Kind   | Behavior                                          |
//! |------------|--------|---------------------------------------------------|
//! | `json`     | filter | value → JSON text, not HTML-escaped               |
//! | `verbatim` | filter | value passed through as-is, not HTML-escaped      |
//! | `isset`    | tester | picks the present or absent branch of an `if`     |

use std::collections::HashMap;

use tera::{Filter, Tera, Test, Value};

/// Which side of a conditional block to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Present,
    Absent,
}

impl Branch {
    /// Missing, `null`, `false`, `0` and `""` are absent. Every other value,
    /// including empty arrays and tables, is present.
    pub fn of(value: Option<&Value>) -> Self {
        let present = match value {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(text)) => !text.is_empty(),
            Some(Value::Array(_)) | Some(Value::Object(_)) => true,
        };

        if present {
            Branch::Present
        } else {
            Branch::Absent
        }
    }
}

/// Serializes its input to JSON for inline `<script>` literals.
pub struct JsonFilter;

impl Filter for JsonFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        serde_json::to_string(value)
            .map(Value::String)
            .map_err(tera::Error::json)
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// Emits a value unchanged, e.g. JavaScript function source.
pub struct VerbatimFilter;

impl Filter for VerbatimFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        Ok(value.clone())
    }

    fn is_safe(&self) -> bool {
        true
    }
}

/// `{% if x is isset %}` … `{% else %}` … `{% endif %}`
pub struct IsSetTest;

impl Test for IsSetTest {
    fn test(&self, value: Option<&Value>, _args: &[Value]) -> tera::Result<bool> {
        Ok(Branch::of(value) == Branch::Present)
    }
}

pub fn register(tera: &mut Tera) {
    tera.register_filter("json", JsonFilter);
    tera.register_filter("verbatim", VerbatimFilter);
    tera.register_tester("isset", IsSetTest);
}
