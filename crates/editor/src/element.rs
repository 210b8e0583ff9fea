//! Field fragment generators.
//!
//! Each generator renders one labeled form control for a named field of a
//! content object, reading the current value from
//! [`Editable::editor_values`]. Attributes are emitted in sorted order, so the
//! same inputs always give the same bytes.

use quire_core::{EditorError, Editable};
use serde_json::Value;
use std::collections::BTreeMap;

/// HTML attributes for a generated control.
///
/// The `label` key is consumed as the control's label and never emitted as
/// an attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs(BTreeMap<String, String>);

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn label(&self) -> Option<&str> {
        self.get("label").filter(|l| !l.is_empty())
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.0.iter().filter(|(k, _)| k.as_str() != "label") {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape(value));
            out.push('"');
        }
        out
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A labeled single-line `<input>`.
pub fn input(name: &str, content: &dyn Editable, attrs: &Attrs) -> Result<Vec<u8>, EditorError> {
    let value = scalar_value(name, content)?;
    Ok(self_closing("input", name, &value, attrs))
}

/// A labeled `<input>` carrying a unix-millisecond timestamp. Zero renders empty.
pub fn timestamp(
    name: &str,
    content: &dyn Editable,
    attrs: &Attrs,
) -> Result<Vec<u8>, EditorError> {
    let mut value = scalar_value(name, content)?;
    if value == "0" {
        value.clear();
    }
    Ok(self_closing("input", name, &value, attrs))
}

/// A labeled multi-line `<textarea>`.
pub fn textarea(name: &str, content: &dyn Editable, attrs: &Attrs) -> Result<Vec<u8>, EditorError> {
    let value = scalar_value(name, content)?;
    let mut out = open_wrapper(attrs);
    out.push_str(&format!(
        "<textarea{} name=\"{}\">{}</textarea>",
        attrs.render(),
        escape(name),
        escape(&value)
    ));
    out.push_str("</div>");
    Ok(out.into_bytes())
}

/// A labeled `<select>` with `options` as `(value, label)` pairs, in order.
/// The option matching the current value is marked selected.
pub fn select(
    name: &str,
    content: &dyn Editable,
    attrs: &Attrs,
    options: &[(&str, &str)],
) -> Result<Vec<u8>, EditorError> {
    let current = scalar_value(name, content)?;
    let mut out = open_wrapper(attrs);
    out.push_str(&format!("<select{} name=\"{}\">", attrs.render(), escape(name)));
    for (value, label) in options {
        let selected = if *value == current { " selected" } else { "" };
        out.push_str(&format!(
            "<option value=\"{}\"{selected}>{}</option>",
            escape(value),
            escape(label)
        ));
    }
    out.push_str("</select></div>");
    Ok(out.into_bytes())
}

/// A labeled group of checkboxes named `name.0`, `name.1`, …
///
/// The field must hold an array (or nothing); an option is checked when its
/// value appears in the array.
pub fn checkbox(
    name: &str,
    content: &dyn Editable,
    attrs: &Attrs,
    options: &[(&str, &str)],
) -> Result<Vec<u8>, EditorError> {
    let checked: Vec<String> = match field_value(name, content)? {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(value_text).collect(),
        other => {
            return Err(EditorError::Render {
                field: name.to_string(),
                reason: format!("checkbox field must hold an array, got {other}"),
            });
        }
    };

    let mut out = open_wrapper(attrs);
    for (i, (value, label)) in options.iter().enumerate() {
        let id = format!("{}-{i}", escape(name));
        let is_checked = if checked.iter().any(|c| c == value) {
            " checked"
        } else {
            ""
        };
        out.push_str(&format!(
            "<p class=\"col s6\"><input type=\"checkbox\"{} value=\"{}\" name=\"{}.{i}\" id=\"{id}\"{is_checked} /><label for=\"{id}\">{}</label></p>",
            attrs.render(),
            escape(value),
            escape(name),
            escape(label)
        ));
    }
    out.push_str("</div>");
    Ok(out.into_bytes())
}

fn self_closing(tag: &str, name: &str, value: &str, attrs: &Attrs) -> Vec<u8> {
    let mut out = open_wrapper(attrs);
    out.push_str(&format!(
        "<{tag} value=\"{}\"{} name=\"{}\" />",
        escape(value),
        attrs.render(),
        escape(name)
    ));
    out.push_str("</div>");
    out.into_bytes()
}

fn open_wrapper(attrs: &Attrs) -> String {
    let mut out = String::from(r#"<div class="input-field col s12">"#);
    if let Some(label) = attrs.label() {
        out.push_str(&format!(
            "<label class=\"active\" for=\"{}\">{}</label>",
            escape(&label.split(' ').collect::<Vec<_>>().join("-")),
            escape(label)
        ));
    }
    out
}

fn field_value(name: &str, content: &dyn Editable) -> Result<Value, EditorError> {
    let values = content.editor_values().map_err(|e| EditorError::Render {
        field: name.to_string(),
        reason: e.to_string(),
    })?;

    match values {
        Value::Object(mut map) => Ok(map.remove(name).unwrap_or(Value::Null)),
        other => Err(EditorError::Render {
            field: name.to_string(),
            reason: format!("content must serialize to an object, got {other}"),
        }),
    }
}

fn scalar_value(name: &str, content: &dyn Editable) -> Result<String, EditorError> {
    field_value(name, content).map(|v| value_text(&v))
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
