//! Template parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::template::ast::TemplateNode;
use crate::template::lexer::{lex, Token};

/// Child item collected while parsing an element body
#[derive(Debug, Clone)]
enum Item {
    Text(String),
    Node(TemplateNode),
}

/// Parse template source into its root element.
///
/// The source must be a single well-formed XML element (normally
/// `<template>...</template>`); character data before or after the root is
/// ignored.
pub fn parse(input: &str) -> Result<TemplateNode, Vec<crate::ParseError>> {
    let len = input.len();

    let token_iter = lex(input).into_iter().map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    template_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

fn template_parser<'a, I>() -> impl Parser<'a, I, TemplateNode, extra::Err<Rich<'a, Token>>>
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let name = select! {
        Token::Name(s) => s,
    };

    let value = select! {
        Token::Str(s) => s,
    };

    let text = select! {
        Token::Text(s) => s,
    };

    let element = recursive(|element| {
        let attribute = name.clone().then_ignore(just(Token::Eq)).then(value);

        let item = choice((
            text.clone().map(Item::Text),
            element.map(Item::Node),
        ));

        // `/>` or `>` children `</name>`
        let body = choice((
            just(Token::SlashGt).to(None),
            just(Token::Gt)
                .ignore_then(item.repeated().collect::<Vec<_>>())
                .then_ignore(just(Token::LtSlash))
                .then(name.clone())
                .then_ignore(just(Token::Gt))
                .map(Some),
        ));

        just(Token::Lt)
            .ignore_then(name.clone())
            .then(attribute.repeated().collect::<Vec<_>>())
            .then(body)
            .try_map(|((tag, attributes), body), span: SimpleSpan| {
                let mut node = TemplateNode::new(tag, attributes, span.into_range());
                match body {
                    None => Ok(node),
                    Some((items, close)) => {
                        if close != node.tag {
                            return Err(Rich::custom(
                                span,
                                format!(
                                    "mismatched closing tag: expected </{}>, found </{}>",
                                    node.tag, close
                                ),
                            ));
                        }
                        attach_children(&mut node, items);
                        Ok(node)
                    }
                }
            })
    });

    text.clone()
        .repeated()
        .collect::<Vec<_>>()
        .ignore_then(element)
        .then_ignore(text.repeated().collect::<Vec<_>>())
        .then_ignore(end())
}

/// Distribute parsed items into the tree: leading character data becomes the
/// parent's `text`, data after a child becomes that child's `tail`.
/// Adjacent runs (split around dropped comments) are concatenated.
fn attach_children(node: &mut TemplateNode, items: Vec<Item>) {
    for item in items {
        match item {
            Item::Text(t) => {
                if let Some(last) = node.children.last_mut() {
                    push_text(&mut last.tail, t);
                } else {
                    push_text(&mut node.text, t);
                }
            }
            Item::Node(child) => node.children.push(child),
        }
    }
}

fn push_text(slot: &mut Option<String>, t: String) {
    match slot {
        Some(existing) => existing.push_str(&t),
        None => *slot = Some(t),
    }
}
