//! Tolerant accessors over a section's untyped data payload.
//!
//! Absent and `null` fields fall back to defaults. A field that is present
//! with the wrong structural type (a list field holding a string, say) is a
//! [`RenderError::InvalidField`].

use serde_json::Value;

use crate::registry::{RenderError, Result};

/// View over a section payload (or one item inside it).
#[derive(Debug, Clone, Copy)]
pub struct Data<'a> {
    section: &'a str,
    value: &'a Value,
}

impl<'a> Data<'a> {
    /// Wrap a payload. `section` names the section type for error messages.
    #[must_use]
    pub fn new(section: &'a str, value: &'a Value) -> Self {
        Self { section, value }
    }

    /// Section type this payload belongs to.
    #[must_use]
    pub fn section(&self) -> &'a str {
        self.section
    }

    #[must_use]
    pub fn raw(&self) -> &'a Value {
        self.value
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.value
            .as_object()
            .and_then(|map| map.get(key))
            .filter(|v| !v.is_null())
    }

    fn invalid(&self, key: &str, expected: &'static str) -> RenderError {
        RenderError::InvalidField {
            section: self.section.to_string(),
            field: key.to_string(),
            expected,
        }
    }

    /// Text field. Numbers are coerced; empty strings count as absent.
    pub fn text(&self, key: &str) -> Result<Option<String>> {
        match self.field(key) {
            None => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(_) => Err(self.invalid(key, "text")),
        }
    }

    /// Text field with a fallback.
    pub fn text_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.text(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Finite number field. Anything else reads as absent.
    #[must_use]
    pub fn number(&self, key: &str) -> Option<f64> {
        self.field(key)
            .and_then(Value::as_f64)
            .filter(|n| n.is_finite())
    }

    /// List field; absent reads as empty.
    pub fn list(&self, key: &str) -> Result<&'a [Value]> {
        match self.field(key) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items.as_slice()),
            Some(_) => Err(self.invalid(key, "list")),
        }
    }

    /// List field that falls back to empty when it holds anything else.
    #[must_use]
    pub fn list_or_empty(&self, key: &str) -> &'a [Value] {
        match self.field(key) {
            Some(Value::Array(items)) => items.as_slice(),
            Some(other) => {
                tracing::debug!(
                    section = self.section,
                    field = key,
                    found = value_kind(other),
                    "ignoring non-list field"
                );
                &[]
            }
            None => &[],
        }
    }

    /// List field viewed item by item.
    pub fn items(&self, key: &str) -> Result<Vec<Data<'a>>> {
        let section = self.section;
        Ok(self
            .list(key)?
            .iter()
            .map(|item| Data::new(section, item))
            .collect())
    }

    /// List of text entries; non-text entries are skipped.
    pub fn strings(&self, key: &str) -> Result<Vec<String>> {
        Ok(self.list(key)?.iter().filter_map(value_text).collect())
    }

    /// Nested object field, or `None` when absent or not an object.
    #[must_use]
    pub fn object(&self, key: &str) -> Option<Data<'a>> {
        self.field(key)
            .filter(|v| v.is_object())
            .map(|v| Data::new(self.section, v))
    }

    /// This value as text, when it is a string or number.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        value_text(self.value)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_text_defaults() {
        let value = json!({ "h1": "Title", "empty": "", "count": 3, "none": null });
        let d = Data::new("hero.v1", &value);

        assert_eq!(d.text("h1").unwrap().as_deref(), Some("Title"));
        assert_eq!(d.text("count").unwrap().as_deref(), Some("3"));
        assert_eq!(d.text("empty").unwrap(), None);
        assert_eq!(d.text("none").unwrap(), None);
        assert_eq!(d.text_or("missing", "fallback").unwrap(), "fallback");
        assert_eq!(d.text_or("empty", "fallback").unwrap(), "fallback");
    }

    #[test]
    fn test_text_rejects_structures() {
        let value = json!({ "h1": ["a"] });
        let err = Data::new("hero.v1", &value).text("h1").unwrap_err();
        assert!(err.to_string().contains("hero.v1"));
        assert!(err.to_string().contains("h1"));
    }

    #[test]
    fn test_list_access() {
        let value = json!({ "items": [1, "two", {"t": 3}], "bad": "oops" });
        let d = Data::new("faqAccordion.v1", &value);

        assert_eq!(d.list("items").unwrap().len(), 3);
        assert!(d.list("missing").unwrap().is_empty());
        assert_eq!(d.strings("items").unwrap(), vec!["1", "two"]);
        assert_eq!(d.items("items").unwrap()[2].text("t").unwrap().as_deref(), Some("3"));

        let err = d.list("bad").unwrap_err();
        assert!(matches!(err, RenderError::InvalidField { expected: "list", .. }));
    }

    #[test]
    fn test_list_or_empty_tolerates_wrong_shape() {
        let value = json!({ "items": ["a", "b"], "bad": "a, b", "obj": { "k": 1 } });
        let d = Data::new("providersGrid.v1", &value);

        assert_eq!(d.list_or_empty("items").len(), 2);
        assert!(d.list_or_empty("bad").is_empty());
        assert!(d.list_or_empty("obj").is_empty());
        assert!(d.list_or_empty("missing").is_empty());
    }

    #[test]
    fn test_non_object_payload_reads_as_empty() {
        let value = json!("just a string");
        let d = Data::new("hero.v1", &value);
        assert_eq!(d.text("h1").unwrap(), None);
        assert!(d.list("cta").unwrap().is_empty());
        assert!(d.object("button").is_none());
        assert_eq!(d.as_text().as_deref(), Some("just a string"));
    }

    #[test]
    fn test_number_must_be_finite() {
        let value = json!({ "n": 12, "f": 2.5, "s": "12" });
        let d = Data::new("providersGrid.v1", &value);
        assert_eq!(d.number("n"), Some(12.0));
        assert_eq!(d.number("f"), Some(2.5));
        assert_eq!(d.number("s"), None);
        assert_eq!(d.number("missing"), None);
    }
}
