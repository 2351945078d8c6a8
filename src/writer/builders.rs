//! Invoking compiled tag builders
//!
//! Shallow builders collapse to an ordinary pending tag at call time.
//! Composite builders defer their whole subtree: on commit or scope entry
//! the compiled tree is walked, opening elements and emitting template
//! text, and the caller's closure is spliced in at the template's yield
//! point (or, when the template has none, at the end of the root element's
//! children). The walk recurses on the native call stack — nesting depth is
//! caller-driven, exactly like hand-written scopes.

use serde_json::Value;

use crate::attr::{AttrMap, AttrValue};
use crate::template::{BuilderDefinition, CompiledNode};

use super::{Pending, ScopeToken, TagArgs, WriteError, Writer};

/// Caller body spliced into a composite walk
pub(crate) type ScopeBody<'a> = Box<dyn FnOnce(&mut Writer) -> Result<(), WriteError> + 'a>;

impl Writer {
    /// Call a compiled builder by derived name.
    ///
    /// Same contract as [`Writer::tag_with`]: the previously pending tag is
    /// committed, the builder becomes pending, and the returned token can
    /// be dropped (one-shot write) or entered with [`Writer::scoped`].
    pub fn invoke(&mut self, name: &str, args: TagArgs) -> Result<ScopeToken, WriteError> {
        let definition =
            self.flavor
                .builder(name)
                .ok_or_else(|| WriteError::UnknownBuilder {
                    name: name.to_string(),
                })?;
        self.flush_pending()?;
        let serial = self.next_serial();

        match definition.as_ref() {
            BuilderDefinition::Shallow {
                tag,
                default_attributes,
                default_content,
            } => {
                let attributes = self
                    .flavor
                    .config()
                    .merge(tag, &[default_attributes, &args.attributes]);
                let content = args.text.or_else(|| default_content.clone());
                self.pending = Some(Pending::Tag {
                    serial,
                    tag: tag.clone(),
                    attributes,
                    content,
                });
            }
            BuilderDefinition::Composite { .. } => {
                self.pending = Some(Pending::Builder {
                    serial,
                    definition: definition.clone(),
                    text: args.text,
                    attributes: args.attributes,
                });
            }
        }
        Ok(ScopeToken { serial })
    }

    /// Walk a composite definition, splicing `body` in at the yield point
    pub(crate) fn run_composite(
        &mut self,
        definition: &BuilderDefinition,
        text: &Option<String>,
        caller: &AttrMap,
        body: &mut Option<ScopeBody<'_>>,
    ) -> Result<(), WriteError> {
        let BuilderDefinition::Composite { root } = definition else {
            unreachable!("shallow builders never become composite pendings");
        };
        self.walk_node(root, text, caller, body, true)
    }

    fn walk_node(
        &mut self,
        node: &CompiledNode,
        text: &Option<String>,
        caller: &AttrMap,
        body: &mut Option<ScopeBody<'_>>,
        is_root: bool,
    ) -> Result<(), WriteError> {
        match node {
            CompiledNode::Content { default_text, tail } => {
                match text {
                    Some(t) => self.write_escaped(t)?,
                    None => {
                        if let Some(default) = default_text {
                            self.write_raw(default)?;
                        }
                    }
                }
                if let Some(tail) = tail {
                    self.write_raw(tail)?;
                }
                Ok(())
            }
            CompiledNode::Yield { tail } => {
                // Absent on one-shot commits; a second yield is caught at
                // compile time
                if let Some(run) = body.take() {
                    run(self)?;
                }
                if let Some(tail) = tail {
                    self.write_raw(tail)?;
                }
                Ok(())
            }
            CompiledNode::Element {
                tag,
                attributes,
                directives,
                text: pre_text,
                tail,
                children,
            } => {
                // Caller attributes reach an element only through its
                // directives; each handler's output merges over what came
                // before it
                let mut merged = self.flavor.config().merge(tag, &[attributes]);
                for directive in directives {
                    let produced = directive.apply(caller);
                    merged = self.flavor.config().merge(tag, &[&merged, &produced]);
                }

                self.flush_pending()?;
                let open = self.open_element(tag, &merged);
                if let Some(pre_text) = pre_text {
                    self.write_raw(pre_text)?;
                }
                for child in children {
                    self.walk_node(child, text, caller, body, false)?;
                }
                if is_root {
                    if let Some(run) = body.take() {
                        run(self)?;
                    }
                }
                self.close_element(open)?;
                if let Some(tail) = tail {
                    self.write_raw(tail)?;
                }
                Ok(())
            }
        }
    }

    /// Write or enter a `<span class="glyphicon glyphicon-NAME"
    /// aria_hidden="true"/>` icon element
    pub fn glyphicon(&mut self, name: &str, attributes: AttrMap) -> Result<ScopeToken, WriteError> {
        let mut tokens = std::collections::BTreeSet::new();
        tokens.insert("glyphicon".to_string());
        tokens.insert(format!("glyphicon-{}", name));
        let base = AttrMap::new()
            .with("class", AttrValue::Tokens(tokens))
            .with("aria_hidden", true);
        let merged = self.flavor.config().merge("span", &[&base, &attributes]);
        self.tag_with("span", TagArgs::new().with_attributes(merged))
    }

    /// Write `<script>name1 = value1,name2 = value2</script>` with the
    /// values serialized as JSON. Angle brackets inside the JSON are
    /// escaped as `\x3c`/`\x3e` so the payload can never terminate the
    /// script element early.
    pub fn script_data(&mut self, variables: &[(&str, Value)]) -> Result<ScopeToken, WriteError> {
        let content = variables
            .iter()
            .map(|(name, value)| {
                let json = serde_json::to_string(value)
                    .expect("serde_json::Value always serializes")
                    .replace('<', "\\x3c")
                    .replace('>', "\\x3e");
                format!("{} = {}", name, json)
            })
            .collect::<Vec<_>>()
            .join(",");
        self.tag_with("script", TagArgs::text(content))
    }
}
