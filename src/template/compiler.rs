//! Compile a parsed template into tag-builder definitions
//!
//! Compilation runs once per flavor. Every direct child of the template
//! root becomes one builder: childless elements compile to a shallow
//! builder (one tag, default attributes and default content), elements with
//! children compile to a composite builder whose subtree is walked at call
//! time. All failure modes here are programmer errors in the template and
//! surface before any writer exists.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::attr::{AttrMap, AttrValue};
use crate::template::ast::TemplateNode;
use crate::template::handlers::{AttributeHandler, HandlerRegistry};
use crate::ParseError;

/// Name prefix marking template control tags and directive attributes
pub const TEMPLATE_PREFIX: &str = "template-";

/// Control tag consuming caller-supplied text (or its own default text)
pub const CONTENT_TAG: &str = "template-content";

/// Control tag where the caller's nested scope is spliced in
pub const YIELD_TAG: &str = "template-yield";

/// Errors raised while compiling a template
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("template parse errors: {}", format_parse_errors(.0))]
    Parse(Vec<ParseError>),

    #[error("unknown attribute handler directive: {name}")]
    UnknownHandler { name: String },

    #[error("unsupported template control tag: <{tag}>")]
    UnsupportedControlTag { tag: String },

    #[error("directive attribute {directive} on childless element <{tag}>")]
    UnexpectedDirective { directive: String, tag: String },

    #[error("builder {name} has more than one yield point")]
    DuplicateYield { name: String },

    #[error("builder {name} has more than one content placeholder")]
    DuplicateContent { name: String },

    #[error("duplicate builder name: {name}")]
    DuplicateBuilder { name: String },
}

impl From<Vec<ParseError>> for CompileError {
    fn from(errors: Vec<ParseError>) -> Self {
        CompileError::Parse(errors)
    }
}

fn format_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A directive attribute resolved to its handler at compile time
#[derive(Debug, Clone)]
pub struct Directive {
    pub name: String,
    pub argument: String,
    handler: AttributeHandler,
}

impl Directive {
    /// Run the handler against the caller's attributes
    pub fn apply(&self, caller: &AttrMap) -> AttrMap {
        (self.handler)(&self.argument, caller)
    }
}

/// One node of a compiled composite template
#[derive(Debug, Clone)]
pub enum CompiledNode {
    Element {
        tag: String,
        attributes: AttrMap,
        directives: Vec<Directive>,
        text: Option<String>,
        tail: Option<String>,
        children: Vec<CompiledNode>,
    },
    Content {
        default_text: Option<String>,
        tail: Option<String>,
    },
    Yield {
        tail: Option<String>,
    },
}

/// A compiled tag builder
#[derive(Debug, Clone)]
pub enum BuilderDefinition {
    /// One real tag with optional default attributes and default content
    Shallow {
        tag: String,
        default_attributes: AttrMap,
        default_content: Option<String>,
    },
    /// A subtree with at most one content placeholder and one yield point
    Composite { root: CompiledNode },
}

impl BuilderDefinition {
    /// The tag this builder opens first
    pub fn tag(&self) -> &str {
        match self {
            BuilderDefinition::Shallow { tag, .. } => tag,
            BuilderDefinition::Composite {
                root: CompiledNode::Element { tag, .. },
            } => tag,
            // compile_template only ever stores an Element at the root
            BuilderDefinition::Composite { .. } => unreachable!("composite root is an element"),
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, BuilderDefinition::Composite { .. })
    }
}

/// Compiled builders keyed by derived name
#[derive(Debug, Clone, Default)]
pub struct BuilderTable {
    builders: HashMap<String, Arc<BuilderDefinition>>,
}

impl BuilderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Arc<BuilderDefinition>> {
        self.builders.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    pub fn insert(&mut self, name: String, definition: Arc<BuilderDefinition>) {
        self.builders.insert(name, definition);
    }

    /// Absorb another table; its entries shadow same-named existing ones,
    /// which is how a derived catalog overrides its base
    pub fn extend(&mut self, other: BuilderTable) {
        self.builders.extend(other.builders);
    }

    /// Builder names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.builders.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<BuilderDefinition>)> {
        self.builders.iter().map(|(n, d)| (n.as_str(), d))
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

/// Compile template source into a builder table.
///
/// The template root may carry a `prefix` attribute prepended to every
/// derived name. Tails of the root's direct children are discarded: the
/// character data between catalog entries is narration, not output.
pub fn compile_template(
    source: &str,
    handlers: &HandlerRegistry,
) -> Result<BuilderTable, CompileError> {
    compile_template_with_prefix(source, None, handlers)
}

/// Compile with an explicit name prefix, overriding the template root's
/// `prefix` attribute
pub fn compile_template_with_prefix(
    source: &str,
    prefix: Option<&str>,
    handlers: &HandlerRegistry,
) -> Result<BuilderTable, CompileError> {
    let root = crate::template::parse(source)?;
    let prefix = match prefix {
        Some(p) => p.to_string(),
        None => root.attribute("prefix").unwrap_or("").to_string(),
    };

    let mut table = BuilderTable::new();

    for child in &root.children {
        if child.tag.starts_with(TEMPLATE_PREFIX) {
            return Err(CompileError::UnsupportedControlTag {
                tag: child.tag.clone(),
            });
        }

        let mut child = child.clone();
        child.tail = None;
        let name = derive_name(&prefix, &mut child);

        let definition = if child.children.is_empty() {
            shallow_definition(&child)?
        } else {
            let compiled = compile_node(&child, handlers)?;
            validate_control_tags(&name, &compiled)?;
            BuilderDefinition::Composite { root: compiled }
        };

        if table.contains(&name) {
            return Err(CompileError::DuplicateBuilder { name });
        }
        table.insert(name, Arc::new(definition));
    }

    log::debug!("compiled {} tag builders", table.len());
    Ok(table)
}

fn shallow_definition(node: &TemplateNode) -> Result<BuilderDefinition, CompileError> {
    if let Some((name, _)) = node
        .attributes
        .iter()
        .find(|(n, _)| n.starts_with(TEMPLATE_PREFIX))
    {
        return Err(CompileError::UnexpectedDirective {
            directive: name.clone(),
            tag: node.tag.clone(),
        });
    }
    Ok(BuilderDefinition::Shallow {
        tag: node.tag.clone(),
        default_attributes: literal_attributes(node),
        default_content: node.text.clone(),
    })
}

fn literal_attributes(node: &TemplateNode) -> AttrMap {
    node.attributes
        .iter()
        .map(|(n, v)| (n.clone(), AttrValue::Str(v.clone())))
        .collect()
}

fn compile_node(
    node: &TemplateNode,
    handlers: &HandlerRegistry,
) -> Result<CompiledNode, CompileError> {
    if node.tag == CONTENT_TAG {
        return Ok(CompiledNode::Content {
            default_text: node.text.clone(),
            tail: node.tail.clone(),
        });
    }
    if node.tag == YIELD_TAG {
        return Ok(CompiledNode::Yield {
            tail: node.tail.clone(),
        });
    }
    if node.tag.starts_with(TEMPLATE_PREFIX) {
        return Err(CompileError::UnsupportedControlTag {
            tag: node.tag.clone(),
        });
    }

    let mut attributes = AttrMap::new();
    let mut directives = Vec::new();
    for (name, value) in &node.attributes {
        if let Some(suffix) = name.strip_prefix(TEMPLATE_PREFIX) {
            let handler = handlers
                .get(suffix)
                .ok_or_else(|| CompileError::UnknownHandler {
                    name: suffix.to_string(),
                })?;
            directives.push(Directive {
                name: suffix.to_string(),
                argument: value.clone(),
                handler,
            });
        } else {
            attributes.insert(name.clone(), AttrValue::Str(value.clone()));
        }
    }

    let children = node
        .children
        .iter()
        .map(|c| compile_node(c, handlers))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledNode::Element {
        tag: node.tag.clone(),
        attributes,
        directives,
        text: node.text.clone(),
        tail: node.tail.clone(),
        children,
    })
}

/// Every composite walk visits the whole subtree, so more than one yield
/// point (or content placeholder) anywhere in it would fire twice in one
/// invocation
fn validate_control_tags(name: &str, root: &CompiledNode) -> Result<(), CompileError> {
    fn count(node: &CompiledNode, yields: &mut usize, contents: &mut usize) {
        match node {
            CompiledNode::Yield { .. } => *yields += 1,
            CompiledNode::Content { .. } => *contents += 1,
            CompiledNode::Element { children, .. } => {
                for child in children {
                    count(child, yields, contents);
                }
            }
        }
    }

    let (mut yields, mut contents) = (0, 0);
    count(root, &mut yields, &mut contents);

    if yields > 1 {
        return Err(CompileError::DuplicateYield {
            name: name.to_string(),
        });
    }
    if contents > 1 {
        return Err(CompileError::DuplicateContent {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Derive a builder name from a catalog entry: its `id` attribute (consumed
/// when present), else the common character prefix of its class tokens,
/// else the tag itself; normalized and prefixed.
fn derive_name(prefix: &str, node: &mut TemplateNode) -> String {
    let raw = if let Some(id) = node.take_attribute("id") {
        id
    } else {
        let common = node
            .attribute("class")
            .map(common_token_prefix)
            .unwrap_or_default();
        if common.is_empty() {
            node.tag.clone()
        } else {
            common
        }
    };

    let mut name = format!("{}{}", prefix, normalize_name(&raw));
    if RUST_KEYWORDS.contains(&name.as_str()) {
        log::warn!("builder name '{}' collides with a keyword, renamed to '{}_'", name, name);
        name.push('_');
    }
    name
}

/// Lowercase and collapse every run of non-word characters to `_`
fn normalize_name(raw: &str) -> String {
    let mut out = String::new();
    let mut in_run = false;
    for c in raw.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == '_' {
            if in_run {
                out.push('_');
                in_run = false;
            }
            out.push(c);
        } else {
            in_run = true;
        }
    }
    if in_run {
        out.push('_');
    }
    out
}

/// Longest common character prefix of the whitespace-separated tokens
fn common_token_prefix(class: &str) -> String {
    let mut tokens = class.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };
    let mut prefix = first.to_string();
    for token in tokens {
        let common = prefix
            .chars()
            .zip(token.chars())
            .take_while(|(a, b)| a == b)
            .map(|(a, _)| a)
            .collect::<String>();
        prefix = common;
    }
    prefix
}

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while", "yield",
];
