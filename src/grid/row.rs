//! Row record accessors
//!
//! Rows belong to the caller. The clipboard engine only reads and writes
//! fields by column key through this trait.

use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashMap;

/// JSON object row, the record type used by table files
pub type Record = serde_json::Map<String, Value>;

pub trait GridRow {
    /// Raw field value, copied as-is between cells
    type Value: Clone;

    fn field(&self, key: &str) -> Option<&Self::Value>;

    fn set_field(&mut self, key: &str, value: Self::Value);

    fn remove_field(&mut self, key: &str);

    /// Store pasted text. The row decides how (and whether) to coerce it.
    fn set_text(&mut self, key: &str, text: String);

    /// Field rendered as clipboard text; absent fields render empty
    fn field_text(&self, key: &str) -> Cow<'_, str>;
}

/// Text form of a JSON value: strings unquoted, null empty, everything
/// else in its JSON notation.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

impl GridRow for Record {
    type Value = Value;

    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn set_field(&mut self, key: &str, value: Value) {
        self.insert(key.to_string(), value);
    }

    fn remove_field(&mut self, key: &str) {
        self.remove(key);
    }

    fn set_text(&mut self, key: &str, text: String) {
        self.insert(key.to_string(), Value::String(text));
    }

    fn field_text(&self, key: &str) -> Cow<'_, str> {
        self.get(key).map(value_text).unwrap_or(Cow::Borrowed(""))
    }
}

impl GridRow for HashMap<String, String> {
    type Value = String;

    fn field(&self, key: &str) -> Option<&String> {
        self.get(key)
    }

    fn set_field(&mut self, key: &str, value: String) {
        self.insert(key.to_string(), value);
    }

    fn remove_field(&mut self, key: &str) {
        self.remove(key);
    }

    fn set_text(&mut self, key: &str, text: String) {
        self.insert(key.to_string(), text);
    }

    fn field_text(&self, key: &str) -> Cow<'_, str> {
        self.get(key)
            .map(|s| Cow::Borrowed(s.as_str()))
            .unwrap_or(Cow::Borrowed(""))
    }
}
