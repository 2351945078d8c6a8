//! Document flavors: attribute configuration, builder catalog and root
//! metadata for one markup dialect
//!
//! The dialect family (XML, HTML 4.01, XHTML, HTML5, Bootstrap) is built
//! by composition: every flavor owns a [`MergeConfig`] and a compiled
//! [`BuilderTable`], and a derived dialect starts from its base's parts
//! and extends them. Flavors are immutable once built and meant to be
//! shared across writers behind an `Arc`.

mod bootstrap;
mod catalogs;
pub mod doctypes;

pub use bootstrap::BOOTSTRAP_TEMPLATE;
pub use catalogs::{HTML5_TEMPLATE, HTML_CONFIG, HTML_TEMPLATE};

use std::sync::Arc;

use crate::attr::{MergeConfig, RenameRule};
use crate::template::{
    compile_template, BuilderDefinition, BuilderTable, CompileError, HandlerRegistry,
};

/// One markup dialect: attribute rules plus a compiled tag catalog.
#[derive(Debug, Clone)]
pub struct Flavor {
    name: String,
    default_root: String,
    config: MergeConfig,
    builders: BuilderTable,
    doctype: Option<String>,
    declaration: Option<String>,
}

impl Flavor {
    /// Create a flavor with an empty builder catalog
    pub fn new(
        name: impl Into<String>,
        default_root: impl Into<String>,
        config: MergeConfig,
    ) -> Self {
        Self {
            name: name.into(),
            default_root: default_root.into(),
            config,
            builders: BuilderTable::new(),
            doctype: None,
            declaration: None,
        }
    }

    /// Compile a template and absorb its builders into the catalog.
    /// Same-named builders from an earlier template are shadowed, which is
    /// how a derived catalog overrides its base.
    pub fn with_template(
        mut self,
        source: &str,
        handlers: &HandlerRegistry,
    ) -> Result<Self, CompileError> {
        let table = compile_template(source, handlers)?;
        self.builders.extend(table);
        Ok(self)
    }

    /// Set the default doctype line written by `get_value`
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Self {
        self.doctype = Some(doctype.into());
        self
    }

    /// Set the default declaration line written by `get_value`
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Wrap the flavor for sharing across writers
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_root(&self) -> &str {
        &self.default_root
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn builders(&self) -> &BuilderTable {
        &self.builders
    }

    /// Look up a compiled builder by derived name
    pub fn builder(&self, name: &str) -> Option<Arc<BuilderDefinition>> {
        self.builders.get(name).cloned()
    }

    pub fn doctype(&self) -> Option<&str> {
        self.doctype.as_deref()
    }

    pub fn declaration(&self) -> Option<&str> {
        self.declaration.as_deref()
    }

    /// Plain XML: namespace attribute renames, no catalog, every empty
    /// element may self-close
    pub fn xml() -> Self {
        let config = MergeConfig::new().with_rename_rule(RenameRule::PrefixSeparator {
            prefixes: vec!["xml".to_string(), "xmlns".to_string()],
            separator: ":".to_string(),
        });
        Flavor::new("xml", "xml", config)
    }

    /// HTML 4.01: full tag catalog, void and require-end tag sets, class
    /// token merging
    pub fn html() -> Self {
        Flavor::new("html", "html", html_config())
            .with_template(HTML_TEMPLATE, &HandlerRegistry::default())
            .expect("embedded HTML catalog compiles")
    }

    /// XHTML 1.0: the HTML catalog, but no tag is void so every empty
    /// element self-closes
    pub fn xhtml() -> Self {
        Flavor::new("xhtml", "html", html_config().clear_void_tags())
            .with_template(HTML_TEMPLATE, &HandlerRegistry::default())
            .expect("embedded HTML catalog compiles")
    }

    /// HTML5: updated catalog, `data_`/`aria_` attribute renames and the
    /// short doctype
    pub fn html5() -> Self {
        let config = html_config().with_rename_rule(RenameRule::PrefixSeparator {
            prefixes: vec!["data".to_string(), "aria".to_string()],
            separator: "-".to_string(),
        });
        Flavor::new("html5", "html", config)
            .with_template(HTML5_TEMPLATE, &HandlerRegistry::default())
            .expect("embedded HTML5 catalog compiles")
            .with_doctype(doctypes::HTML5)
    }

    /// HTML5 plus the Bootstrap 3 component catalog (`bs_` builders)
    pub fn bootstrap() -> Self {
        let mut flavor = Flavor::html5();
        flavor.name = "bootstrap".to_string();
        flavor
            .with_template(BOOTSTRAP_TEMPLATE, &HandlerRegistry::default())
            .expect("embedded Bootstrap catalog compiles")
    }
}

fn html_config() -> MergeConfig {
    MergeConfig::from_toml_str(HTML_CONFIG).expect("embedded HTML config parses")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_flavor_catalog_and_config() {
        let flavor = Flavor::html();
        assert!(flavor.builder("a").is_some());
        assert!(flavor.builder("blockquote").is_some());
        assert!(flavor.builder("article").is_none());
        assert!(flavor.config().is_void("br"));
        assert!(flavor.config().requires_end("span"));
        assert!(flavor.doctype().is_none());
    }

    #[test]
    fn test_xhtml_has_no_void_tags() {
        let flavor = Flavor::xhtml();
        assert!(!flavor.config().is_void("br"));
        assert!(!flavor.config().is_void("img"));
        assert!(flavor.config().requires_end("span"));
    }

    #[test]
    fn test_html5_flavor() {
        let flavor = Flavor::html5();
        assert_eq!(flavor.doctype(), Some("<!DOCTYPE html>"));
        assert!(flavor.builder("article").is_some());
        assert!(flavor.builder("acronym").is_none());
        assert_eq!(flavor.config().rename("data_toggle"), "data-toggle");
        assert_eq!(flavor.config().rename("aria_hidden"), "aria-hidden");
    }

    #[test]
    fn test_bootstrap_extends_html5() {
        let flavor = Flavor::bootstrap();
        assert_eq!(flavor.name(), "bootstrap");
        assert!(flavor.builder("div").is_some());
        assert!(flavor.builder("bs_container").is_some());
        assert!(flavor.builder("bs_checkbox").is_some());
        assert!(flavor
            .builder("bs_checkbox")
            .is_some_and(|b| b.is_composite()));
        assert_eq!(flavor.doctype(), Some("<!DOCTYPE html>"));
    }

    #[test]
    fn test_xml_flavor_renames_namespaces() {
        let flavor = Flavor::xml();
        assert_eq!(flavor.config().rename("xmlns_xlink"), "xmlns:xlink");
        assert!(flavor.builders().is_empty());
    }
}
