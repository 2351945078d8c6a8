//! Attribute-handler registry for template directives
//!
//! Composite templates never receive caller attributes directly: an element
//! opts in by carrying a `template-<handler>` attribute whose value
//! parameterizes a named handler. The handler maps the caller's attributes
//! to the attributes that element actually takes.

use std::collections::{BTreeSet, HashMap};

use crate::attr::{AttrMap, AttrValue};

/// A directive handler: `(directive argument, caller attributes) ->
/// attributes to merge into the element`
pub type AttributeHandler = fn(&str, &AttrMap) -> AttrMap;

/// Named handlers keyed by directive suffix (`template-attribute-filter`
/// dispatches to `attribute-filter`). Extensible with [`register`].
///
/// [`register`]: HandlerRegistry::register
#[derive(Debug, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<String, AttributeHandler>,
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        let mut registry = Self {
            handlers: HashMap::new(),
        };
        registry.register("attribute-filter", filter_attributes);
        registry.register("attribute-class-from-flag", class_from_flag);
        registry
    }
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, handler: AttributeHandler) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn get(&self, name: &str) -> Option<AttributeHandler> {
        self.handlers.get(name).copied()
    }
}

/// `attribute-filter`: select which caller attributes pass through.
///
/// The argument is a comma-separated (or, without commas, whitespace-
/// separated) list of case-insensitive glob patterns; a `-` prefix makes a
/// pattern an exclusion. An attribute passes when it matches an include
/// pattern and no exclude pattern — exclusion wins.
pub fn filter_attributes(patterns: &str, input: &AttrMap) -> AttrMap {
    let parts: Vec<&str> = if patterns.contains(',') {
        patterns.split(',').collect()
    } else {
        patterns.split_whitespace().collect()
    };

    let mut includes = Vec::new();
    let mut excludes = Vec::new();
    for part in parts {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if let Some(rest) = part.strip_prefix('-') {
            excludes.push(rest);
        } else {
            includes.push(part);
        }
    }

    let mut result = AttrMap::new();
    for (name, value) in input.iter() {
        if excludes.iter().any(|p| glob_match(p, name)) {
            continue;
        }
        if includes.iter().any(|p| glob_match(p, name)) {
            result.insert(name.to_string(), value.clone());
        }
    }
    result
}

/// `attribute-class-from-flag`: map truthy caller attributes to class
/// tokens.
///
/// The argument is a comma-separated list of `name` or `name as alias`
/// entries ("active, disabled as btn-disabled"). Each caller attribute that
/// is present and truthy contributes its alias to a `class` token set.
pub fn class_from_flag(patterns: &str, input: &AttrMap) -> AttrMap {
    let mut classes = BTreeSet::new();

    for entry in patterns.split(',') {
        let words: Vec<&str> = entry.split_whitespace().collect();
        let (name, alias) = match words.as_slice() {
            [name, "as", alias] => (*name, *alias),
            [name] => (*name, *name),
            _ => continue,
        };
        if input.get(name).is_some_and(AttrValue::is_truthy) {
            classes.insert(alias.to_string());
        }
    }

    if classes.is_empty() {
        AttrMap::new()
    } else {
        AttrMap::new().with("class", AttrValue::Tokens(classes))
    }
}

/// Case-insensitive wildcard match supporting `*` and `?`
fn glob_match(pattern: &str, text: &str) -> bool {
    let p: Vec<char> = pattern.chars().map(|c| c.to_ascii_lowercase()).collect();
    let t: Vec<char> = text.chars().map(|c| c.to_ascii_lowercase()).collect();

    let (mut pi, mut ti) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut mark = 0usize;

    while ti < t.len() {
        if pi < p.len() && (p[pi] == '?' || p[pi] == t[ti]) {
            pi += 1;
            ti += 1;
        } else if pi < p.len() && p[pi] == '*' {
            star = Some(pi);
            mark = ti;
            pi += 1;
        } else if let Some(s) = star {
            pi = s + 1;
            mark += 1;
            ti = mark;
        } else {
            return false;
        }
    }
    while pi < p.len() && p[pi] == '*' {
        pi += 1;
    }
    pi == p.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glob_match() {
        assert!(glob_match("*", "anything"));
        assert!(glob_match("data-*", "data-id"));
        assert!(!glob_match("data-*", "aria-hidden"));
        assert!(glob_match("?d", "id"));
        assert!(glob_match("HREF", "href"));
        assert!(!glob_match("", "x"));
        assert!(glob_match("", ""));
    }

    #[test]
    fn test_filter_include_all() {
        let input = AttrMap::new().with("href", "#").with("tabindex", -1);
        let result = filter_attributes("*", &input);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_excludes_win() {
        let input = AttrMap::new()
            .with("href", "#")
            .with("active", true)
            .with("disabled", true);
        let result = filter_attributes("*, -active, -disabled", &input);
        assert_eq!(result.len(), 1);
        assert!(result.contains("href"));
    }

    #[test]
    fn test_filter_whitespace_separated() {
        let input = AttrMap::new().with("data-id", "7").with("href", "#");
        let result = filter_attributes("data-* href", &input);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_filter_only_excludes_passes_nothing() {
        let input = AttrMap::new().with("href", "#");
        let result = filter_attributes("-active", &input);
        assert!(result.is_empty());
    }

    #[test]
    fn test_class_from_flag_plain() {
        let input = AttrMap::new().with("active", true);
        let result = class_from_flag("active, disabled", &input);
        let tokens = result.get("class").unwrap().token_set();
        assert!(tokens.contains("active"));
        assert!(!tokens.contains("disabled"));
    }

    #[test]
    fn test_class_from_flag_alias() {
        let input = AttrMap::new().with("disabled", true);
        let result = class_from_flag("active, disabled as btn-disabled", &input);
        let tokens = result.get("class").unwrap().token_set();
        assert!(tokens.contains("btn-disabled"));
    }

    #[test]
    fn test_class_from_flag_falsy_ignored() {
        let input = AttrMap::new().with("active", false);
        let result = class_from_flag("active", &input);
        assert!(result.is_empty());
    }

    #[test]
    fn test_registry_defaults_and_extension() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.get("attribute-filter").is_some());
        assert!(registry.get("attribute-class-from-flag").is_some());
        assert!(registry.get("unknown").is_none());

        fn passthrough(_arg: &str, input: &AttrMap) -> AttrMap {
            input.clone()
        }
        registry.register("passthrough", passthrough);
        assert!(registry.get("passthrough").is_some());
    }
}
