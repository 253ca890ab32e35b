//! Tree-literal parser.
//!
//! Normalizes the textual tree form into [`Node`]s:
//!
//! ```text
//! (div @main .wide :lang "en"
//!   (h1 "Title")
//!   "body text"
//!   42)
//! ```
//!
//! An element is a parenthesized list whose first item is a symbol (the tag);
//! the remaining items are attribute-shorthand tokens, strings, numbers and
//! nested elements. Strings are double-quoted with `\\ \" \n \r \t` escapes.

use crate::node::Node;

/// Tree-literal parse error.
///
/// Offsets are byte positions into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input contained no element.
    #[error("empty input")]
    Empty,

    /// Input ended inside an element.
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof {
        /// Byte offset of the end of input.
        offset: usize,
    },

    /// A character that cannot start a node.
    #[error("unexpected character `{found}` at byte {offset}")]
    Unexpected {
        /// The offending character.
        found: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// A string literal without a closing quote.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// An element whose first item is not a symbol.
    #[error("element is missing a tag name at byte {offset}")]
    MissingTag {
        /// Byte offset where the tag was expected.
        offset: usize,
    },

    /// Extra content after the top-level element.
    #[error("trailing content at byte {offset}")]
    TrailingContent {
        /// Byte offset of the first extra character.
        offset: usize,
    },
}

/// Parse a tree literal into its canonical node form.
///
/// The input must contain exactly one top-level element.
pub fn parse_tree(input: &str) -> Result<Node, ParseError> {
    let mut parser = Parser {
        input,
        bytes: input.as_bytes(),
        pos: 0,
    };

    parser.skip_ws();
    if parser.at_end() {
        return Err(ParseError::Empty);
    }
    if parser.peek() != b'(' {
        return Err(ParseError::Unexpected {
            found: parser.peek_char(),
            offset: parser.pos,
        });
    }

    let root = parser.element()?;

    parser.skip_ws();
    if !parser.at_end() {
        return Err(ParseError::TrailingContent { offset: parser.pos });
    }
    Ok(root)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn peek(&self) -> u8 {
        self.bytes[self.pos]
    }

    fn peek_char(&self) -> char {
        self.input[self.pos..].chars().next().unwrap_or('\0')
    }

    fn skip_ws(&mut self) {
        while !self.at_end() && self.peek().is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    /// Parse one element, with the cursor on its opening parenthesis.
    fn element(&mut self) -> Result<Node, ParseError> {
        self.pos += 1; // consume '('
        self.skip_ws();

        let tag_offset = self.pos;
        let tag = match self.node()? {
            Node::Sym(tag) => tag,
            _ => return Err(ParseError::MissingTag { offset: tag_offset }),
        };

        let mut args = Vec::new();
        loop {
            self.skip_ws();
            if self.at_end() {
                return Err(ParseError::UnexpectedEof { offset: self.pos });
            }
            if self.peek() == b')' {
                self.pos += 1;
                return Ok(Node::element(tag, args));
            }
            args.push(self.node()?);
        }
    }

    /// Parse one node: element, string, number or symbol.
    fn node(&mut self) -> Result<Node, ParseError> {
        match self.peek() {
            b'(' => self.element(),
            b')' => Err(ParseError::Unexpected {
                found: ')',
                offset: self.pos,
            }),
            b'"' => self.string(),
            _ => Ok(self.atom()),
        }
    }

    fn string(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        self.pos += 1; // consume opening quote
        let mut text = String::new();

        while !self.at_end() {
            match self.peek() {
                b'"' => {
                    self.pos += 1;
                    return Ok(Node::Text(text));
                }
                b'\\' => {
                    self.pos += 1;
                    if self.at_end() {
                        break;
                    }
                    match self.peek() {
                        b'n' => {
                            text.push('\n');
                            self.pos += 1;
                        }
                        b'r' => {
                            text.push('\r');
                            self.pos += 1;
                        }
                        b't' => {
                            text.push('\t');
                            self.pos += 1;
                        }
                        // Any other escaped character stands for itself;
                        // consume the whole codepoint.
                        _ => {
                            let ch = self.peek_char();
                            text.push(ch);
                            self.pos += ch.len_utf8();
                        }
                    }
                }
                _ => {
                    let ch = self.peek_char();
                    text.push(ch);
                    self.pos += ch.len_utf8();
                }
            }
        }
        Err(ParseError::UnterminatedString { offset: start })
    }

    /// Parse a bare token; numeric-looking tokens become numbers.
    fn atom(&mut self) -> Node {
        let start = self.pos;
        while !self.at_end() {
            match self.peek() {
                b'(' | b')' | b'"' => break,
                b if b.is_ascii_whitespace() => break,
                _ => self.pos += self.peek_char().len_utf8(),
            }
        }
        let token = &self.input[start..self.pos];

        if looks_numeric(token) {
            if let Ok(n) = token.parse::<f64>() {
                return Node::Number(n);
            }
        }
        Node::Sym(token.to_owned())
    }
}

/// Whether a bare token should be read as a number.
///
/// Requires a leading digit, optionally after a sign or decimal point, so
/// symbols like `-`, `.class` and `:x` are never treated as numbers.
fn looks_numeric(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    let unsigned = unsigned.strip_prefix('.').unwrap_or(unsigned);
    unsigned.starts_with(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_element() {
        let tree = parse_tree(r#"(div "hello")"#).unwrap();
        assert_eq!(
            tree,
            Node::element("div", vec![Node::text("hello")])
        );
    }

    #[test]
    fn test_shorthand_symbols() {
        let tree = parse_tree(r#"(div @main .a .b :lang "en")"#).unwrap();
        assert_eq!(
            tree,
            Node::element(
                "div",
                vec![
                    Node::sym("@main"),
                    Node::sym(".a"),
                    Node::sym(".b"),
                    Node::sym(":lang"),
                    Node::text("en"),
                ]
            )
        );
    }

    #[test]
    fn test_nested_elements() {
        let tree = parse_tree(r#"(ul (li "a") (li "b"))"#).unwrap();
        assert_eq!(
            tree,
            Node::element(
                "ul",
                vec![
                    Node::element("li", vec![Node::text("a")]),
                    Node::element("li", vec![Node::text("b")]),
                ]
            )
        );
    }

    #[test]
    fn test_numbers() {
        let tree = parse_tree("(td 42 -1.5 +3)").unwrap();
        assert_eq!(
            tree,
            Node::element(
                "td",
                vec![Node::number(42.0), Node::number(-1.5), Node::number(3.0)]
            )
        );
    }

    #[test]
    fn test_sigil_tokens_are_not_numbers() {
        let tree = parse_tree("(div .5col :x -)").unwrap();
        // `.5col` fails to parse as f64 and falls back to a symbol.
        assert_eq!(
            tree,
            Node::element(
                "div",
                vec![Node::sym(".5col"), Node::sym(":x"), Node::sym("-")]
            )
        );
    }

    #[test]
    fn test_string_escapes() {
        let tree = parse_tree(r#"(pre "a\"b\\c\nd")"#).unwrap();
        assert_eq!(tree, Node::element("pre", vec![Node::text("a\"b\\c\nd")]));
    }

    #[test]
    fn test_escaped_multibyte_character() {
        let tree = parse_tree(r#"(div "\é")"#).unwrap();
        assert_eq!(tree, Node::element("div", vec![Node::text("é")]));

        let tree = parse_tree(r#"(pre "a\€b")"#).unwrap();
        assert_eq!(tree, Node::element("pre", vec![Node::text("a€b")]));
    }

    #[test]
    fn test_multiline_input() {
        let tree = parse_tree("(div\n  (span \"x\")\n  \"tail\")\n").unwrap();
        assert_eq!(
            tree,
            Node::element(
                "div",
                vec![
                    Node::element("span", vec![Node::text("x")]),
                    Node::text("tail"),
                ]
            )
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_tree(""), Err(ParseError::Empty));
        assert_eq!(parse_tree("  \n "), Err(ParseError::Empty));
    }

    #[test]
    fn test_top_level_atom_rejected() {
        assert_eq!(
            parse_tree("div"),
            Err(ParseError::Unexpected {
                found: 'd',
                offset: 0
            })
        );
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(
            parse_tree("(div (span)"),
            Err(ParseError::UnexpectedEof { offset: 11 })
        );
    }

    #[test]
    fn test_stray_close() {
        assert_eq!(
            parse_tree("(div ))"),
            Err(ParseError::TrailingContent { offset: 6 })
        );
    }

    #[test]
    fn test_unterminated_string() {
        assert_eq!(
            parse_tree(r#"(div "abc)"#),
            Err(ParseError::UnterminatedString { offset: 5 })
        );
    }

    #[test]
    fn test_missing_tag() {
        assert_eq!(
            parse_tree(r#"("div" "x")"#),
            Err(ParseError::MissingTag { offset: 1 })
        );
        assert_eq!(
            parse_tree("((div))"),
            Err(ParseError::MissingTag { offset: 1 })
        );
    }

    #[test]
    fn test_trailing_content() {
        assert_eq!(
            parse_tree("(br) (br)"),
            Err(ParseError::TrailingContent { offset: 5 })
        );
    }
}
