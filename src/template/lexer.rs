//! Lexer for tag-catalog templates using logos
//!
//! XML cannot be tokenized with a single lexer mode: between tags any run
//! of characters short of `<` is data, while inside a tag the same bytes
//! split into names, `=` and quoted values. Two logos token sets cover the
//! two modes and [`lex`] drives them, switching with `Lexer::morph` on the
//! tag delimiters and flattening everything into one [`Token`] stream.
//!
//! Entity references (`&amp;`, `&times;`, ...) are left in character data
//! untouched; templates pass them through verbatim to the output.

use logos::Logos;

/// Byte range in template source text
pub type Span = std::ops::Range<usize>;

/// Unified token stream fed to the template grammar
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// `<` opening a start tag
    Lt,
    /// `</` opening an end tag
    LtSlash,
    /// `>` closing a tag
    Gt,
    /// `/>` closing an empty-element tag
    SlashGt,
    /// `=` between attribute name and value
    Eq,
    /// Tag or attribute name
    Name(String),
    /// Quoted attribute value, quotes stripped
    Str(String),
    /// Character data between tags
    Text(String),
}

/// Tokens recognized between tags
#[derive(Logos, Debug, Clone, PartialEq)]
enum DataPart {
    #[token("</")]
    LtSlash,

    #[token("<")]
    Lt,

    // Comments are dropped at the lexer level
    #[regex(r"<!--([^-]|-[^-])*-->", logos::skip)]
    Comment,

    #[regex(r"[^<]+", |lex| lex.slice().to_string())]
    Text(String),
}

/// Tokens recognized inside a tag
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum MarkupPart {
    #[token("/>")]
    SlashGt,

    #[token(">")]
    Gt,

    #[token("=")]
    Eq,

    #[regex(r"[A-Za-z_][A-Za-z0-9_.:-]*", |lex| lex.slice().to_string())]
    Name(String),

    #[regex(r#""[^"]*""#, strip_quotes)]
    #[regex(r"'[^']*'", strip_quotes)]
    Str(String),
}

fn strip_quotes(lex: &mut logos::Lexer<MarkupPart>) -> String {
    let s = lex.slice();
    s[1..s.len() - 1].to_string()
}

/// Lex template source into tokens with spans.
///
/// Unrecognized bytes are skipped, matching how the illustration lexers in
/// this codebase's lineage behave; the grammar reports the resulting
/// structural errors with spans.
pub fn lex(input: &str) -> Vec<(Token, Span)> {
    let mut tokens = Vec::new();
    let mut data = DataPart::lexer(input);

    loop {
        // Character-data mode: collect text until a tag delimiter
        let mut entered_tag = false;
        while let Some(part) = data.next() {
            let span = data.span();
            match part {
                Ok(DataPart::Text(s)) => tokens.push((Token::Text(s), span)),
                Ok(DataPart::Comment) => {}
                Ok(DataPart::Lt) => {
                    tokens.push((Token::Lt, span));
                    entered_tag = true;
                    break;
                }
                Ok(DataPart::LtSlash) => {
                    tokens.push((Token::LtSlash, span));
                    entered_tag = true;
                    break;
                }
                Err(()) => {}
            }
        }
        if !entered_tag {
            break;
        }

        // Markup mode: names, `=`, quoted values, until the tag closes
        let mut markup = data.morph::<MarkupPart>();
        let mut left_tag = false;
        while let Some(part) = markup.next() {
            let span = markup.span();
            match part {
                Ok(MarkupPart::Gt) => {
                    tokens.push((Token::Gt, span));
                    left_tag = true;
                    break;
                }
                Ok(MarkupPart::SlashGt) => {
                    tokens.push((Token::SlashGt, span));
                    left_tag = true;
                    break;
                }
                Ok(MarkupPart::Eq) => tokens.push((Token::Eq, span)),
                Ok(MarkupPart::Name(s)) => tokens.push((Token::Name(s), span)),
                Ok(MarkupPart::Str(s)) => tokens.push((Token::Str(s), span)),
                Err(()) => {}
            }
        }
        data = markup.morph::<DataPart>();
        if !left_tag {
            break;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<Token> {
        lex(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(
            kinds("<br/>"),
            vec![
                Token::Lt,
                Token::Name("br".to_string()),
                Token::SlashGt,
            ]
        );
    }

    #[test]
    fn test_element_with_attributes() {
        assert_eq!(
            kinds(r#"<a href="#" role='menuitem'/>"#),
            vec![
                Token::Lt,
                Token::Name("a".to_string()),
                Token::Name("href".to_string()),
                Token::Eq,
                Token::Str("#".to_string()),
                Token::Name("role".to_string()),
                Token::Eq,
                Token::Str("menuitem".to_string()),
                Token::SlashGt,
            ]
        );
    }

    #[test]
    fn test_text_and_end_tag() {
        assert_eq!(
            kinds("<p>hello</p>"),
            vec![
                Token::Lt,
                Token::Name("p".to_string()),
                Token::Gt,
                Token::Text("hello".to_string()),
                Token::LtSlash,
                Token::Name("p".to_string()),
                Token::Gt,
            ]
        );
    }

    #[test]
    fn test_entities_pass_through_as_text() {
        assert_eq!(
            kinds("<span>&times;</span>"),
            vec![
                Token::Lt,
                Token::Name("span".to_string()),
                Token::Gt,
                Token::Text("&times;".to_string()),
                Token::LtSlash,
                Token::Name("span".to_string()),
                Token::Gt,
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        assert_eq!(
            kinds("<t><!-- note --><u/></t>"),
            vec![
                Token::Lt,
                Token::Name("t".to_string()),
                Token::Gt,
                Token::Lt,
                Token::Name("u".to_string()),
                Token::SlashGt,
                Token::LtSlash,
                Token::Name("t".to_string()),
                Token::Gt,
            ]
        );
    }

    #[test]
    fn test_dashed_names() {
        let tokens = kinds(r#"<li template-attribute-class-from-flag="active"/>"#);
        assert!(tokens.contains(&Token::Name("template-attribute-class-from-flag".to_string())));
    }

    #[test]
    fn test_whitespace_text_preserved() {
        let tokens = kinds("<t>\n  <u/></t>");
        assert_eq!(tokens[3], Token::Text("\n  ".to_string()));
    }
}
