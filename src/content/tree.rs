//! The immutable content tree and dotted-path traversal.

use serde_json::Value;
use smallvec::SmallVec;

use super::diagnostics::MissKind;
use super::error::ContentError;

/// Nested dictionary of site text, rooted at a JSON object.
///
/// Built once and never mutated; a different tree means a different value.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTree {
    root: Value,
}

impl ContentTree {
    /// Parse a dictionary. `origin` only labels errors.
    pub fn from_json(origin: &str, text: &str) -> Result<Self, ContentError> {
        let root: Value =
            serde_json::from_str(text).map_err(|err| ContentError::Json(origin.to_owned(), err))?;
        Self::from_value(origin, root)
    }

    pub fn from_value(origin: &str, root: Value) -> Result<Self, ContentError> {
        if !root.is_object() {
            return Err(ContentError::NotAnObject {
                origin: origin.to_owned(),
                found: kind_of(&root),
            });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Walk `path` one segment at a time.
    ///
    /// Objects are entered by key and arrays by numeric index. Reaching a
    /// scalar before the last segment stops the walk.
    pub fn walk(&self, path: &str) -> Result<&Value, MissKind> {
        if path.is_empty() {
            return Err(MissKind::EmptyPath);
        }

        let segments: SmallVec<[&str; 8]> = path.split('.').collect();
        let mut current = &self.root;

        for (depth, key) in segments.iter().enumerate() {
            let next = match current {
                Value::Object(map) => map.get(*key),
                Value::Array(items) => parse_index(key).and_then(|i| items.get(i)),
                other => {
                    return Err(MissKind::NotTraversable {
                        at: segments[..depth].join("."),
                        found: kind_of(other),
                    });
                }
            };

            current = next.ok_or_else(|| MissKind::MissingKey {
                at: display_prefix(&segments[..depth]),
                key: (*key).to_owned(),
            })?;
        }

        Ok(current)
    }
}

/// Human name of a JSON value's kind, for diagnostics.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A list index written the canonical way: ASCII digits, no sign, no
/// leading zero except `"0"` itself. `"01"` and `"+1"` are keys, not indices.
fn parse_index(segment: &str) -> Option<usize> {
    let canonical = !segment.is_empty()
        && segment.bytes().all(|b| b.is_ascii_digit())
        && (segment == "0" || !segment.starts_with('0'));
    if canonical { segment.parse().ok() } else { None }
}

fn display_prefix(segments: &[&str]) -> String {
    if segments.is_empty() {
        "<root>".to_owned()
    } else {
        segments.join(".")
    }
}
