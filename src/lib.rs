//! tagwright - a template-driven HTML/XML writer with scoped tag builders
//!
//! This library compiles a small XML tag-catalog template into callable tag
//! builders, pipes attributes through rename/merge/format rules and renders
//! correctly ordered, correctly escaped markup through a deferred-commit
//! scoped writer.
//!
//! # Example
//!
//! ```rust
//! use tagwright::{Flavor, TagArgs, Writer};
//!
//! let mut doc = Writer::document(Flavor::html5().shared());
//! let body = doc.tag("body").unwrap();
//! doc.scoped(body, |w| {
//!     w.tag_with("p", TagArgs::text("hello")).map(|_| ())
//! })
//! .unwrap();
//!
//! let html = doc.get_value().unwrap();
//! assert_eq!(html, "<!DOCTYPE html>\n<html><body><p>hello</p></body></html>");
//! ```
//!
//! The same builder call works one-shot or as a scope opener: dropping the
//! returned token commits the tag complete on the next write, entering it
//! with [`Writer::scoped`] keeps the tag open around the closure's writes.

pub mod attr;
pub mod error;
pub mod flavor;
pub mod template;
pub mod writer;

pub use attr::{AttrMap, AttrValue, MergeConfig, RenameRule};
pub use error::ParseError;
pub use flavor::Flavor;
pub use template::{
    compile_template, compile_template_with_prefix, BuilderDefinition, BuilderTable, CompileError,
    HandlerRegistry,
};
pub use writer::{ScopeToken, SerializeOptions, TagArgs, WriteError, Writer};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_uses_flavor_root() {
        let mut doc = Writer::document(Flavor::html5().shared());
        assert_eq!(doc.root_tag(), "html");
        assert_eq!(
            doc.get_value().unwrap(),
            "<!DOCTYPE html>\n<html></html>"
        );
    }

    #[test]
    fn test_builder_call_one_shot_and_scoped() {
        let flavor = Flavor::bootstrap().shared();
        let mut doc = Writer::document(flavor);
        doc.invoke("bs_row", TagArgs::new()).unwrap();
        let row = doc.invoke("bs_row", TagArgs::new()).unwrap();
        doc.scoped(row, |w| {
            w.invoke("bs_lead", TagArgs::text("hi")).map(|_| ())
        })
        .unwrap();
        let html = doc
            .get_value_with(&SerializeOptions::new().without_root_tag())
            .unwrap();
        assert_eq!(
            html,
            r#"<div class="row"></div><div class="row"><p class="lead">hi</p></div>"#
        );
    }
}
