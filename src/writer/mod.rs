//! Scoped markup writer with deferred tag commits
//!
//! Calling a tag or builder never writes immediately. The call flushes
//! whatever tag was pending before it, installs itself as the new pending
//! tag and returns a [`ScopeToken`]. The token decides the tag's fate:
//! dropped, the tag is committed complete (self-closed when empty) by the
//! next write; passed to [`Writer::scoped`], the tag opens for real and the
//! closure's writes become its content. Either way tags land in the buffer
//! in exactly the order they were called.
//!
//! The start-tag terminator is withheld until the close decision is known,
//! so `>` vs `/>` vs `></tag>` is a single append and the buffer is never
//! rewritten.

mod builders;
mod serialize;

use std::sync::Arc;

use thiserror::Error;

use crate::attr::{AttrMap, AttrValue};
use crate::flavor::Flavor;
use crate::template::BuilderDefinition;

pub use serialize::{HeaderMode, SerializeOptions};

/// Errors raised by writer calls. The buffer keeps whatever state it had
/// before the failing call; a writer that errored should be inspected or
/// discarded, not blindly continued.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("\"{tag}\" tag cannot contain content")]
    VoidContent { tag: String },

    #[error("comment text contains the \"-->\" terminator")]
    CommentTerminator,

    #[error("CDATA text contains the \"]]>\" terminator")]
    CdataTerminator,

    #[error("unknown tag builder: {name}")]
    UnknownBuilder { name: String },

    #[error("doctype must match \"<!DOCTYPE ...>\", got: {value}")]
    InvalidDoctype { value: String },
}

/// Arguments to a tag or builder call: optional content text plus
/// attributes
#[derive(Debug, Clone, Default)]
pub struct TagArgs {
    pub(crate) text: Option<String>,
    pub(crate) attributes: AttrMap,
}

impl TagArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a call that only supplies content text
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            attributes: AttrMap::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    pub fn with_attributes(mut self, attributes: AttrMap) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Handle for an uncommitted tag call.
///
/// Consumed by [`Writer::scoped`]; simply dropping it leaves the tag
/// pending for the next write to commit. Tokens are not clonable, so a
/// scope cannot be entered twice.
#[derive(Debug)]
pub struct ScopeToken {
    serial: u64,
}

/// The single uncommitted tag call
#[derive(Debug)]
enum Pending {
    Tag {
        serial: u64,
        tag: String,
        attributes: AttrMap,
        content: Option<String>,
    },
    Builder {
        serial: u64,
        definition: Arc<BuilderDefinition>,
        text: Option<String>,
        attributes: AttrMap,
    },
}

impl Pending {
    fn serial(&self) -> u64 {
        match self {
            Pending::Tag { serial, .. } | Pending::Builder { serial, .. } => *serial,
        }
    }
}

/// Bookkeeping for one open element between start tag and close decision
struct OpenElement {
    tag: String,
}

/// A markup document being written.
///
/// Owns the output buffer, the pending-commit slot and the root metadata.
/// One writer is single-threaded state; share the [`Flavor`], not the
/// writer.
pub struct Writer {
    flavor: Arc<Flavor>,
    buf: String,
    pending: Option<Pending>,
    /// The most recent start tag has not received its terminator yet
    open_angle: bool,
    serial: u64,
    root_tag: String,
    root_attributes: AttrMap,
    doctype: Option<String>,
    declaration: Option<String>,
}

impl Writer {
    /// Create a writer for a flavor with an explicit root tag. The
    /// flavor's default doctype and declaration carry over.
    pub fn new(flavor: Arc<Flavor>, root_tag: impl Into<String>) -> Self {
        let doctype = flavor.doctype().map(str::to_string);
        let declaration = flavor.declaration().map(str::to_string);
        Self {
            flavor,
            buf: String::new(),
            pending: None,
            open_angle: false,
            serial: 0,
            root_tag: root_tag.into(),
            root_attributes: AttrMap::new(),
            doctype,
            declaration,
        }
    }

    /// Create a writer rooted at the flavor's default root tag
    pub fn document(flavor: Arc<Flavor>) -> Self {
        let root_tag = flavor.default_root().to_string();
        Self::new(flavor, root_tag)
    }

    /// Override the doctype; must look like `<!DOCTYPE ...>`
    pub fn with_doctype(mut self, doctype: impl Into<String>) -> Result<Self, WriteError> {
        let doctype = doctype.into();
        if !is_doctype(&doctype) {
            return Err(WriteError::InvalidDoctype { value: doctype });
        }
        self.doctype = Some(doctype);
        Ok(self)
    }

    /// Override the XML declaration line
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Add an attribute to the root tag
    pub fn with_root_attribute(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Self {
        self.root_attributes.insert(name, value);
        self
    }

    pub fn flavor(&self) -> &Arc<Flavor> {
        &self.flavor
    }

    pub fn root_tag(&self) -> &str {
        &self.root_tag
    }

    /// Call a tag with no text or attributes
    pub fn tag(&mut self, tag: &str) -> Result<ScopeToken, WriteError> {
        self.tag_with(tag, TagArgs::new())
    }

    /// Call a tag. Commits the previously pending tag, installs this one as
    /// pending and returns its scope token.
    pub fn tag_with(&mut self, tag: &str, args: TagArgs) -> Result<ScopeToken, WriteError> {
        self.flush_pending()?;
        let serial = self.next_serial();
        self.pending = Some(Pending::Tag {
            serial,
            tag: tag.to_string(),
            attributes: args.attributes,
            content: args.text,
        });
        Ok(ScopeToken { serial })
    }

    /// Enter a pending tag as a scope: the closure's writes become the
    /// tag's content and the close decision runs at closure exit.
    ///
    /// Panics if the token is stale — its tag was already committed by an
    /// intervening write — or if nothing is pending at all. Both are
    /// internal-ordering violations, not recoverable call errors.
    pub fn scoped<F>(&mut self, token: ScopeToken, f: F) -> Result<(), WriteError>
    where
        F: FnOnce(&mut Writer) -> Result<(), WriteError>,
    {
        let pending = self
            .pending
            .take()
            .unwrap_or_else(|| panic!("scope token entered but no scope is pending"));
        assert_eq!(
            pending.serial(),
            token.serial,
            "stale scope token: the scope was already committed"
        );

        match pending {
            Pending::Tag {
                tag,
                attributes,
                content,
                ..
            } => {
                let open = self.open_element(&tag, &attributes);
                if let Some(text) = content.as_deref().filter(|t| !t.is_empty()) {
                    self.emit(&escape_text(text));
                }
                f(self)?;
                self.close_element(open)
            }
            Pending::Builder {
                definition,
                text,
                attributes,
                ..
            } => {
                let mut body: Option<builders::ScopeBody<'_>> = Some(Box::new(f));
                self.run_composite(&definition, &text, &attributes, &mut body)
            }
        }
    }

    /// Write text with no escaping
    pub fn write_raw(&mut self, text: &str) -> Result<(), WriteError> {
        self.flush_pending()?;
        self.emit(text);
        Ok(())
    }

    /// Write text escaping `<` and `>`
    pub fn write_escaped(&mut self, text: &str) -> Result<(), WriteError> {
        self.flush_pending()?;
        let escaped = escape_text(text);
        self.emit(&escaped);
        Ok(())
    }

    /// Write a comment; the text must not contain `-->`
    pub fn write_comment(&mut self, text: &str) -> Result<(), WriteError> {
        if text.contains("-->") {
            return Err(WriteError::CommentTerminator);
        }
        self.flush_pending()?;
        self.emit(&format!("<!--{}-->", text));
        Ok(())
    }

    /// Write a CDATA section; the text must not contain `]]>`
    pub fn write_cdata(&mut self, text: &str) -> Result<(), WriteError> {
        if text.contains("]]>") {
            return Err(WriteError::CdataTerminator);
        }
        self.flush_pending()?;
        self.emit(&format!("<![CDATA[{}]]>", text));
        Ok(())
    }

    /// Commit the pending tag, if any, as a complete element
    pub(crate) fn flush_pending(&mut self) -> Result<(), WriteError> {
        let Some(pending) = self.pending.take() else {
            return Ok(());
        };
        match pending {
            Pending::Tag {
                tag,
                attributes,
                content,
                ..
            } => {
                let open = self.open_element(&tag, &attributes);
                if let Some(text) = content.as_deref().filter(|t| !t.is_empty()) {
                    self.emit(&escape_text(text));
                }
                self.close_element(open)
            }
            Pending::Builder {
                definition,
                text,
                attributes,
                ..
            } => self.run_composite(&definition, &text, &attributes, &mut None),
        }
    }

    /// Write a start tag, leaving its terminator undecided
    fn open_element(&mut self, tag: &str, attributes: &AttrMap) -> OpenElement {
        let start = self.flavor.config().start_tag(tag, attributes);
        self.emit(&start);
        self.open_angle = true;
        OpenElement {
            tag: tag.to_string(),
        }
    }

    /// Close an element. If nothing was written since its start tag the
    /// element is empty: require-end tags get `></tag>`, void tags are
    /// sealed bare, anything else self-closes. With content, void tags are
    /// a contract violation and everything else gets an explicit end tag.
    fn close_element(&mut self, open: OpenElement) -> Result<(), WriteError> {
        self.flush_pending()?;

        let is_void = self.flavor.config().is_void(&open.tag);
        if self.open_angle {
            self.open_angle = false;
            if self.flavor.config().requires_end(&open.tag) {
                self.buf.push_str("></");
                self.buf.push_str(&open.tag);
                self.buf.push('>');
            } else if is_void {
                self.buf.push('>');
            } else {
                self.buf.push_str("/>");
            }
            Ok(())
        } else {
            if is_void {
                return Err(WriteError::VoidContent { tag: open.tag });
            }
            self.emit(&format!("</{}>", open.tag));
            Ok(())
        }
    }

    /// Append to the buffer, sealing an undecided start tag first.
    /// Zero-length appends are dropped so they neither seal the tag nor
    /// count as content.
    fn emit(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.open_angle {
            self.buf.push('>');
            self.open_angle = false;
        }
        self.buf.push_str(s);
    }

    fn next_serial(&mut self) -> u64 {
        self.serial += 1;
        self.serial
    }
}

/// Escape `<` and `>` for text content. `&` passes through: templates and
/// callers are allowed to write entity references.
fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}

fn is_doctype(s: &str) -> bool {
    s.starts_with("<!DOCTYPE ") && s.ends_with('>')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::MergeConfig;

    fn test_flavor() -> Arc<Flavor> {
        let config = MergeConfig::new()
            .with_void_tags(["br", "input"])
            .with_require_end_tags(["span", "script"]);
        Flavor::new("test", "root", config).shared()
    }

    fn test_writer() -> Writer {
        Writer::new(test_flavor(), "root")
    }

    fn contents(writer: &mut Writer) -> String {
        writer
            .get_value_with(&SerializeOptions::new().without_root_tag())
            .unwrap()
    }

    #[test]
    fn test_fire_and_forget_self_closes() {
        let mut writer = test_writer();
        writer.tag("hr").unwrap();
        assert_eq!(contents(&mut writer), "<hr/>");
    }

    #[test]
    fn test_fire_and_forget_order() {
        let mut writer = test_writer();
        writer.tag_with("p", TagArgs::text("x")).unwrap();
        writer.tag_with("p", TagArgs::text("y")).unwrap();
        assert_eq!(contents(&mut writer), "<p>x</p><p>y</p>");
    }

    #[test]
    fn test_void_tag_sealed_bare() {
        let mut writer = test_writer();
        writer.tag("br").unwrap();
        assert_eq!(contents(&mut writer), "<br>");
    }

    #[test]
    fn test_require_end_tag_never_self_closes() {
        let mut writer = test_writer();
        let span = writer.tag("span").unwrap();
        writer.scoped(span, |_| Ok(())).unwrap();
        assert_eq!(contents(&mut writer), "<span></span>");
    }

    #[test]
    fn test_scoped_nesting() {
        let mut writer = test_writer();
        let body = writer.tag("body").unwrap();
        writer
            .scoped(body, |w| {
                w.tag_with("p", TagArgs::text("hello")).map(|_| ())
            })
            .unwrap();
        assert_eq!(contents(&mut writer), "<body><p>hello</p></body>");
    }

    #[test]
    fn test_scoped_empty_self_closes() {
        let mut writer = test_writer();
        let div = writer.tag("div").unwrap();
        writer.scoped(div, |_| Ok(())).unwrap();
        assert_eq!(contents(&mut writer), "<div/>");
    }

    #[test]
    fn test_content_forces_end_tag() {
        let mut writer = test_writer();
        writer.tag_with("p", TagArgs::text("x")).unwrap();
        assert_eq!(contents(&mut writer), "<p>x</p>");
    }

    #[test]
    fn test_empty_content_still_self_closes() {
        let mut writer = test_writer();
        writer.tag_with("p", TagArgs::text("")).unwrap();
        assert_eq!(contents(&mut writer), "<p/>");
    }

    #[test]
    fn test_zero_length_write_keeps_self_close() {
        let mut writer = test_writer();
        let div = writer.tag("div").unwrap();
        writer
            .scoped(div, |w| {
                w.write_raw("")?;
                w.write_escaped("")
            })
            .unwrap();
        assert_eq!(contents(&mut writer), "<div/>");
    }

    #[test]
    fn test_escaped_write() {
        let mut writer = test_writer();
        writer.write_escaped("a<b>c").unwrap();
        assert_eq!(contents(&mut writer), "a&lt;b&gt;c");
    }

    #[test]
    fn test_raw_write_unchanged() {
        let mut writer = test_writer();
        writer.write_raw("a<b>c").unwrap();
        assert_eq!(contents(&mut writer), "a<b>c");
    }

    #[test]
    fn test_escaped_leaves_ampersand() {
        let mut writer = test_writer();
        writer.write_escaped("a&amp;b").unwrap();
        assert_eq!(contents(&mut writer), "a&amp;b");
    }

    #[test]
    fn test_comment() {
        let mut writer = test_writer();
        writer.write_comment(" note ").unwrap();
        assert_eq!(contents(&mut writer), "<!-- note -->");
    }

    #[test]
    fn test_comment_terminator_rejected() {
        let mut writer = test_writer();
        let err = writer.write_comment("bad --> bad").unwrap_err();
        assert!(matches!(err, WriteError::CommentTerminator));
        // Buffer untouched by the failing call
        assert_eq!(contents(&mut writer), "");
    }

    #[test]
    fn test_cdata() {
        let mut writer = test_writer();
        writer.write_cdata("if (a < b) {}").unwrap();
        assert_eq!(contents(&mut writer), "<![CDATA[if (a < b) {}]]>");
    }

    #[test]
    fn test_cdata_terminator_rejected() {
        let mut writer = test_writer();
        assert!(matches!(
            writer.write_cdata("bad ]]> bad"),
            Err(WriteError::CdataTerminator)
        ));
    }

    #[test]
    fn test_void_content_fails() {
        let mut writer = test_writer();
        let br = writer.tag("br").unwrap();
        let err = writer
            .scoped(br, |w| w.write_raw("content"))
            .unwrap_err();
        assert!(matches!(err, WriteError::VoidContent { .. }));
    }

    #[test]
    fn test_void_content_via_pending_fails() {
        let mut writer = test_writer();
        let br = writer.tag("br").unwrap();
        writer
            .scoped(br, |w| w.tag("p").map(|_| ()))
            .unwrap_err();
    }

    #[test]
    fn test_comment_terminator_leaves_pending_intact() {
        let mut writer = test_writer();
        writer.tag("hr").unwrap();
        assert!(writer.write_comment("x --> y").is_err());
        // The pending tag survives the failed call and commits later
        assert_eq!(contents(&mut writer), "<hr/>");
    }

    #[test]
    fn test_attributes_render_in_order() {
        let mut writer = test_writer();
        writer
            .tag_with("a", TagArgs::new().attr("href", "#").attr("rel", "next"))
            .unwrap();
        assert_eq!(contents(&mut writer), r#"<a href="#" rel="next"/>"#);
    }

    #[test]
    #[should_panic(expected = "no scope is pending")]
    fn test_token_after_flush_panics() {
        let mut writer = test_writer();
        let token = writer.tag("p").unwrap();
        writer.write_raw("x").unwrap();
        let _ = writer.scoped(token, |_| Ok(()));
    }

    #[test]
    #[should_panic(expected = "stale scope token")]
    fn test_mismatched_token_panics() {
        let mut writer = test_writer();
        let first = writer.tag("p").unwrap();
        let _second = writer.tag("p").unwrap();
        let _ = writer.scoped(first, |_| Ok(()));
    }

    #[test]
    fn test_deeply_nested_scopes() {
        let mut writer = test_writer();
        let a = writer.tag("a").unwrap();
        writer
            .scoped(a, |w| {
                let b = w.tag("b")?;
                w.scoped(b, |w| {
                    let c = w.tag("c")?;
                    w.scoped(c, |w| w.write_escaped("deep"))
                })
            })
            .unwrap();
        assert_eq!(contents(&mut writer), "<a><b><c>deep</c></b></a>");
    }

    #[test]
    fn test_doctype_validation() {
        let writer = test_writer().with_doctype("<!DOCTYPE html>");
        assert!(writer.is_ok());
        let writer = test_writer().with_doctype("html");
        assert!(matches!(
            writer,
            Err(WriteError::InvalidDoctype { .. })
        ));
    }
}
