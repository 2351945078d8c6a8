//! Per-flavor attribute configuration: rename rules, merge handlers,
//! boolean attributes, and the void / require-end tag sets
//!
//! A `MergeConfig` is built once per document flavor and shared read-only by
//! every writer of that flavor. It can be assembled in code with the
//! builder methods or loaded from TOML, so a custom markup dialect is a
//! config file away.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::value::{merge_class_tokens, AttrMap, AttrValue};

/// Errors that can occur when loading or parsing attribute configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read attribute config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse attribute config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Key for tag-scoped attribute lookups; `tag: None` matches any tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrKey {
    pub tag: Option<String>,
    pub name: String,
}

impl AttrKey {
    pub fn new(tag: Option<&str>, name: &str) -> Self {
        Self {
            tag: tag.map(str::to_string),
            name: name.to_string(),
        }
    }
}

/// Merge handler signature: combine an existing value with a later one
pub type MergeFn = fn(&AttrValue, &AttrValue) -> AttrValue;

/// One attribute-name rewrite, applied in declaration order.
///
/// The corpus this library grew from rewrites names in exactly two shapes:
/// an exact swap (`class_` -> `class`, for callers whose language reserves
/// the bare word) and a prefix-underscore to prefix-separator rewrite
/// (`xml_lang` -> `xml:lang`, `data_id` -> `data-id`, `aria_hidden` ->
/// `aria-hidden`).
#[derive(Debug, Clone, PartialEq)]
pub enum RenameRule {
    Exact {
        from: String,
        to: String,
    },
    PrefixSeparator {
        prefixes: Vec<String>,
        separator: String,
    },
}

impl RenameRule {
    /// Apply the rule to a name, returning the (possibly unchanged) result
    pub fn apply(&self, name: &str) -> String {
        match self {
            RenameRule::Exact { from, to } => {
                if name == from {
                    to.clone()
                } else {
                    name.to_string()
                }
            }
            RenameRule::PrefixSeparator {
                prefixes,
                separator,
            } => {
                for prefix in prefixes {
                    if let Some(rest) = name.strip_prefix(prefix.as_str()) {
                        if let Some(rest) = rest.strip_prefix('_') {
                            if !rest.is_empty() {
                                return format!("{}{}{}", prefix, separator, rest);
                            }
                        }
                    }
                }
                name.to_string()
            }
        }
    }
}

/// Immutable attribute-pipeline configuration for one document flavor
#[derive(Debug, Clone, Default)]
pub struct MergeConfig {
    rename_rules: Vec<RenameRule>,
    merge_handlers: HashMap<AttrKey, MergeFn>,
    boolean_attributes: HashSet<AttrKey>,
    void_tags: HashSet<String>,
    require_end_tags: HashSet<String>,
}

/// TOML structure for deserializing attribute configs
#[derive(Deserialize)]
struct TomlConfig {
    tags: Option<TomlTags>,
    attributes: Option<TomlAttributes>,
    rename: Option<Vec<TomlRename>>,
}

#[derive(Deserialize)]
struct TomlTags {
    #[serde(default)]
    void: Vec<String>,
    #[serde(default)]
    require_end: Vec<String>,
}

#[derive(Deserialize)]
struct TomlAttributes {
    /// `["tag", "attr"]` pairs; tag `"*"` applies to every tag
    #[serde(default)]
    boolean: Vec<Vec<String>>,
    /// Attribute names merged as whitespace-token unions
    #[serde(default)]
    class_union: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlRename {
    Exact { from: String, to: String },
    Prefix { prefixes: Vec<String>, separator: String },
}

impl MergeConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = MergeConfig::new();

        for rule in parsed.rename.unwrap_or_default() {
            config.rename_rules.push(match rule {
                TomlRename::Exact { from, to } => RenameRule::Exact { from, to },
                TomlRename::Prefix {
                    prefixes,
                    separator,
                } => RenameRule::PrefixSeparator {
                    prefixes,
                    separator,
                },
            });
        }

        if let Some(tags) = parsed.tags {
            config.void_tags.extend(tags.void);
            config.require_end_tags.extend(tags.require_end);
        }

        if let Some(attributes) = parsed.attributes {
            for pair in attributes.boolean {
                if let [tag, name] = pair.as_slice() {
                    let tag = if tag == "*" { None } else { Some(tag.as_str()) };
                    config
                        .boolean_attributes
                        .insert(AttrKey::new(tag, name));
                }
            }
            for name in attributes.class_union {
                config
                    .merge_handlers
                    .insert(AttrKey::new(None, &name), merge_class_tokens);
            }
        }

        Ok(config)
    }

    /// Append a rename rule (rules run in insertion order)
    pub fn with_rename_rule(mut self, rule: RenameRule) -> Self {
        self.rename_rules.push(rule);
        self
    }

    /// Register a merge handler for an attribute, optionally tag-scoped
    pub fn with_merge_handler(mut self, tag: Option<&str>, name: &str, handler: MergeFn) -> Self {
        self.merge_handlers.insert(AttrKey::new(tag, name), handler);
        self
    }

    /// Mark an attribute boolean, optionally tag-scoped
    pub fn with_boolean_attribute(mut self, tag: Option<&str>, name: &str) -> Self {
        self.boolean_attributes.insert(AttrKey::new(tag, name));
        self
    }

    /// Add tags that never take an end tag
    pub fn with_void_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.void_tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Add tags that must always get an explicit end tag
    pub fn with_require_end_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.require_end_tags
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Drop every void tag (the XHTML dialect: everything may self-close)
    pub fn clear_void_tags(mut self) -> Self {
        self.void_tags.clear();
        self
    }

    pub fn is_void(&self, tag: &str) -> bool {
        self.void_tags.contains(tag)
    }

    pub fn requires_end(&self, tag: &str) -> bool {
        self.require_end_tags.contains(tag)
    }

    pub fn is_boolean(&self, tag: &str, name: &str) -> bool {
        self.boolean_attributes
            .contains(&AttrKey::new(Some(tag), name))
            || self.boolean_attributes.contains(&AttrKey::new(None, name))
    }

    fn merge_handler(&self, tag: &str, name: &str) -> Option<MergeFn> {
        self.merge_handlers
            .get(&AttrKey::new(Some(tag), name))
            .or_else(|| self.merge_handlers.get(&AttrKey::new(None, name)))
            .copied()
    }

    /// Apply every rename rule, in order, to an attribute name
    pub fn rename(&self, name: &str) -> String {
        let mut name = name.to_string();
        for rule in &self.rename_rules {
            name = rule.apply(&name);
        }
        name
    }

    /// Merge attribute sets for a tag. Later sets win on conflict unless a
    /// merge handler is registered for the attribute; replaced values keep
    /// their original position.
    pub fn merge(&self, tag: &str, sets: &[&AttrMap]) -> AttrMap {
        let mut result = AttrMap::new();

        for set in sets {
            for (name, value) in set.iter() {
                let name = self.rename(name);
                let merged = match (result.get(&name), self.merge_handler(tag, &name)) {
                    (Some(old), Some(handler)) => handler(old, value),
                    _ => value.clone(),
                };
                result.insert(name, merged);
            }
        }

        result
    }

    /// Format one attribute for embedding in a start tag.
    ///
    /// Boolean attributes render as the bare name when truthy and disappear
    /// entirely otherwise. Everything else renders as `name="value"` with
    /// the value quote-escaped.
    pub fn format_attribute(&self, tag: &str, name: &str, value: &AttrValue) -> Option<String> {
        if self.is_boolean(tag, name) {
            return value.is_truthy().then(|| name.to_string());
        }
        Some(format!("{}={}", name, quote_attribute(&value.display_text())))
    }

    /// Render a start tag WITHOUT its terminating `>`.
    ///
    /// The writer owns the terminator: whether the tag ends in `>`, `/>` or
    /// `></tag>` is only known once its content (or lack of it) is known.
    pub fn start_tag(&self, tag: &str, attributes: &AttrMap) -> String {
        let merged = self.merge(tag, &[attributes]);
        let mut result = format!("<{}", tag);
        for (name, value) in merged.iter() {
            if let Some(s) = self.format_attribute(tag, name, value) {
                result.push(' ');
                result.push_str(&s);
            }
        }
        result
    }
}

/// Escape a value and wrap it in quotes, preferring double quotes and
/// switching to single quotes when the value itself contains `"`.
fn quote_attribute(value: &str) -> String {
    let escaped = value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    if escaped.contains('"') {
        if escaped.contains('\'') {
            format!("\"{}\"", escaped.replace('"', "&quot;"))
        } else {
            format!("'{}'", escaped)
        }
    } else {
        format!("\"{}\"", escaped)
    }
}
