//! Final document assembly

use super::{WriteError, Writer};

/// How to render one header line (declaration or doctype)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HeaderMode {
    /// Use the writer's configured value, if any
    #[default]
    Default,
    /// Leave the line out
    Omit,
    /// Use this literal instead of the configured value
    Literal(String),
}

/// Options for [`Writer::get_value_with`]
#[derive(Debug, Clone, PartialEq)]
pub struct SerializeOptions {
    declaration: HeaderMode,
    doctype: HeaderMode,
    root_tag: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            declaration: HeaderMode::Default,
            doctype: HeaderMode::Default,
            root_tag: true,
        }
    }
}

impl SerializeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_declaration(mut self) -> Self {
        self.declaration = HeaderMode::Omit;
        self
    }

    pub fn with_declaration(mut self, literal: impl Into<String>) -> Self {
        self.declaration = HeaderMode::Literal(literal.into());
        self
    }

    pub fn without_doctype(mut self) -> Self {
        self.doctype = HeaderMode::Omit;
        self
    }

    pub fn with_doctype(mut self, literal: impl Into<String>) -> Self {
        self.doctype = HeaderMode::Literal(literal.into());
        self
    }

    /// Return only the buffered content, without header lines or the root
    /// tag wrapper
    pub fn without_root_tag(mut self) -> Self {
        self.root_tag = false;
        self
    }
}

impl Writer {
    /// Serialize the document with default options: declaration and
    /// doctype when configured, content wrapped in the root tag.
    ///
    /// Any pending tag is committed first, so calling this mid-build is
    /// always safe; the writer stays usable and can be serialized again.
    pub fn get_value(&mut self) -> Result<String, WriteError> {
        self.get_value_with(&SerializeOptions::default())
    }

    /// Serialize the document with explicit options
    pub fn get_value_with(&mut self, options: &SerializeOptions) -> Result<String, WriteError> {
        self.flush_pending()?;

        if !options.root_tag {
            return Ok(self.buf.clone());
        }

        let mut result = String::new();
        match &options.declaration {
            HeaderMode::Literal(line) => {
                result.push_str(line);
                result.push('\n');
            }
            HeaderMode::Default => {
                if let Some(line) = &self.declaration {
                    result.push_str(line);
                    result.push('\n');
                }
            }
            HeaderMode::Omit => {}
        }
        match &options.doctype {
            HeaderMode::Literal(line) => {
                result.push_str(line);
                result.push('\n');
            }
            HeaderMode::Default => {
                if let Some(line) = &self.doctype {
                    result.push_str(line);
                    result.push('\n');
                }
            }
            HeaderMode::Omit => {}
        }

        let config = self.flavor.config();
        result.push_str(&config.start_tag(&self.root_tag, &self.root_attributes));
        result.push('>');
        result.push_str(&self.buf);
        result.push_str("</");
        result.push_str(&self.root_tag);
        result.push('>');
        Ok(result)
    }
}
