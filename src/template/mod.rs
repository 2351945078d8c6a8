//! Tag-catalog templates: parsing and builder compilation

pub mod ast;
pub mod compiler;
mod grammar;
pub mod handlers;
pub mod lexer;

pub use ast::TemplateNode;
pub use compiler::{
    compile_template, compile_template_with_prefix, BuilderDefinition, BuilderTable, CompileError,
    CompiledNode, Directive, CONTENT_TAG, TEMPLATE_PREFIX, YIELD_TAG,
};
pub use grammar::parse;
pub use handlers::{AttributeHandler, HandlerRegistry};
