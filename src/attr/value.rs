//! Attribute values and insertion-ordered attribute maps

use std::collections::BTreeSet;

/// A single attribute value.
///
/// The variants are the complete set of value shapes the formatter accepts;
/// anything else (raw bytes in particular) cannot be expressed, so the
/// unsupported-type failure mode is caught at compile time rather than at
/// the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    /// An unordered token set, rendered space-joined (the natural shape for
    /// `class`)
    Tokens(BTreeSet<String>),
}

impl AttrValue {
    /// Truthiness, used by boolean-attribute rendering and flag handlers:
    /// empty strings, `false`, zero and empty token sets are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Str(s) => !s.is_empty(),
            AttrValue::Bool(b) => *b,
            AttrValue::Int(n) => *n != 0,
            AttrValue::Float(n) => *n != 0.0,
            AttrValue::Tokens(t) => !t.is_empty(),
        }
    }

    /// Render the value as unescaped attribute text
    pub fn display_text(&self) -> String {
        match self {
            AttrValue::Str(s) => s.clone(),
            AttrValue::Bool(true) => "true".to_string(),
            AttrValue::Bool(false) => "false".to_string(),
            AttrValue::Int(n) => n.to_string(),
            AttrValue::Float(n) => n.to_string(),
            AttrValue::Tokens(tokens) => {
                tokens.iter().cloned().collect::<Vec<_>>().join(" ")
            }
        }
    }

    /// View the value as a set of whitespace-separated tokens
    pub fn token_set(&self) -> BTreeSet<String> {
        match self {
            AttrValue::Str(s) => s.split_whitespace().map(str::to_string).collect(),
            AttrValue::Tokens(tokens) => tokens.clone(),
            other => {
                let mut set = BTreeSet::new();
                set.insert(other.display_text());
                set
            }
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Bool(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Int(n as i64)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Float(n)
    }
}

impl From<BTreeSet<String>> for AttrValue {
    fn from(tokens: BTreeSet<String>) -> Self {
        AttrValue::Tokens(tokens)
    }
}

impl From<&[&str]> for AttrValue {
    fn from(tokens: &[&str]) -> Self {
        AttrValue::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

/// Merge handler for `class`: union of the whitespace-token sets of both
/// values, so stacked template layers accumulate classes instead of
/// overwriting each other.
pub fn merge_class_tokens(old: &AttrValue, new: &AttrValue) -> AttrValue {
    let mut tokens = old.token_set();
    tokens.extend(new.token_set());
    AttrValue::Tokens(tokens)
}

/// Attribute mapping that preserves insertion order.
///
/// Attribute counts are small, so entries live in a Vec and lookups scan.
/// Re-inserting an existing name replaces the value but keeps the original
/// position, which keeps rendered attribute order stable across merges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttrMap {
    entries: Vec<(String, AttrValue)>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace, keeping first-insertion order
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<AttrValue>> FromIterator<(N, V)> for AttrMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = AttrMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}
