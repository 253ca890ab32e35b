//! Attribute shorthand parsing and class merging.
//!
//! The leading arguments of an element may carry attribute shorthand:
//!
//! - `@name` — identity attribute (`id="name"`)
//! - `.name` — class attribute (`class="name"`, repeatable)
//! - `:name` — generic attribute; takes the next argument as its value when
//!   that argument resolves to text or a number, otherwise it is boolean
//!
//! The first argument that is not shorthand-shaped ends the attribute prefix;
//! it and everything after it are children.

use std::fmt;

use trellis_tree::{Value, format_number};

use crate::error::RenderError;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String value.
    Text(String),
    /// Numeric value, formatted as text on output.
    Number(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

/// One parsed attribute.
///
/// `value` is `None` for boolean attributes, which render as a bare key.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    /// Attribute key.
    pub key: String,
    /// Attribute value, or `None` for a boolean attribute.
    pub value: Option<AttrValue>,
}

impl Attr {
    /// Create a valued attribute.
    #[must_use]
    pub fn new(key: impl Into<String>, value: AttrValue) -> Self {
        Self {
            key: key.into(),
            value: Some(value),
        }
    }

    /// Create a boolean attribute.
    #[must_use]
    pub fn boolean(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// Extract the attribute-shorthand prefix of an evaluated argument list.
///
/// Returns how many leading items were consumed and the raw (pre-merge)
/// attribute list. The caller splits children off at the consumed count.
///
/// Shorthand is recognized on symbol tokens only; text content that begins
/// with a sigil character stays a child.
///
/// A `:name` token followed by a text or number value consumes both items;
/// followed by anything else it becomes a boolean attribute and consumes only
/// itself. That peek at the next item's resolved type is the only
/// disambiguation between a boolean attribute and a valued one.
#[must_use]
pub fn parse_attributes(values: &[Value]) -> (usize, Vec<Attr>) {
    let mut attrs = Vec::new();
    let mut pos = 0;

    while pos < values.len() {
        let Some((sigil, name)) = shorthand(&values[pos]) else {
            break;
        };
        match sigil {
            b'@' => {
                attrs.push(Attr::new("id", AttrValue::Text(name.to_owned())));
                pos += 1;
            }
            b'.' => {
                attrs.push(Attr::new("class", AttrValue::Text(name.to_owned())));
                pos += 1;
            }
            _ => match values.get(pos + 1) {
                Some(Value::Text(text)) => {
                    attrs.push(Attr::new(name, AttrValue::Text(text.clone())));
                    pos += 2;
                }
                Some(Value::Number(n)) => {
                    attrs.push(Attr::new(name, AttrValue::Number(*n)));
                    pos += 2;
                }
                _ => {
                    attrs.push(Attr::boolean(name));
                    pos += 1;
                }
            },
        }
    }
    (pos, attrs)
}

/// Split a value into shorthand sigil and name, if it is shorthand-shaped.
///
/// Only symbol tokens qualify; quoted text is always a child, even when it
/// happens to begin with a sigil character.
fn shorthand(value: &Value) -> Option<(u8, &str)> {
    let token = match value {
        Value::Sym(s) => s.as_str(),
        _ => return None,
    };
    match token.as_bytes().first() {
        Some(sigil @ (b'@' | b'.' | b':')) => Some((*sigil, &token[1..])),
        _ => None,
    }
}

/// Combine repeated `class` attributes into one.
///
/// The merged value is the space-joined concatenation of every class value in
/// original order, stored at the first `class` position; later `class`
/// entries are dropped. Other attributes keep their relative order. Lists
/// with at most one `class` key pass through unchanged.
#[must_use]
pub fn merge_classes(attrs: Vec<Attr>) -> Vec<Attr> {
    let class_count = attrs.iter().filter(|a| a.key == "class").count();
    if class_count <= 1 {
        return attrs;
    }

    let mut joined = String::new();
    for attr in attrs.iter().filter(|a| a.key == "class") {
        if let Some(value) = &attr.value {
            if !joined.is_empty() {
                joined.push(' ');
            }
            joined.push_str(&value.to_string());
        }
    }

    let mut merged = Vec::with_capacity(attrs.len() + 1 - class_count);
    let mut placed = false;
    for attr in attrs {
        if attr.key == "class" {
            if !placed {
                merged.push(Attr::new("class", AttrValue::Text(joined.clone())));
                placed = true;
            }
        } else {
            merged.push(attr);
        }
    }
    merged
}

/// Build an attribute list from a flat key/value-interleaved sequence.
///
/// Key slots take their text form; value slots resolve like shorthand values
/// (text and numbers are valued, anything else marks a boolean attribute).
/// An odd-length list is rejected rather than silently misaligning the pairs
/// that follow the gap.
pub fn attrs_from_flat(values: &[Value]) -> Result<Vec<Attr>, RenderError> {
    if values.len() % 2 != 0 {
        return Err(RenderError::MalformedAttributeList { len: values.len() });
    }

    let mut attrs = Vec::with_capacity(values.len() / 2);
    for pair in values.chunks_exact(2) {
        let key = match &pair[0] {
            Value::Text(s) | Value::Sym(s) => s.clone(),
            Value::Number(n) => format_number(*n),
            Value::Nested(_) => {
                return Err(RenderError::MalformedAttributeList { len: values.len() });
            }
        };
        let value = match &pair[1] {
            Value::Text(s) => Some(AttrValue::Text(s.clone())),
            Value::Number(n) => Some(AttrValue::Number(*n)),
            _ => None,
        };
        attrs.push(Attr { key, value });
    }
    Ok(attrs)
}
