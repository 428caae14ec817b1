//! Tokenizer: classifies scanned lexemes into the token queue

use std::collections::VecDeque;

use crate::error::{FilterError, Result};
use crate::filter::scanner::Scanner;

/// Token kinds produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Grouping or logical punctuation: `(` `)` `|` `,`
    Group,
    /// Comparison operator, e.g. `=` or `>=`
    Operator,
    /// Quoted value, delimiters still attached
    StringLiteral,
    /// Bare field name
    Identifier,
}

/// A classified lexeme with the position it started at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: usize,
}

/// Two-character operators, checked before any one-character prefix
const TWO_CHAR_OPERATORS: [&str; 5] = ["!=", "!@", "!%", ">=", "<="];
const ONE_CHAR_OPERATORS: [char; 5] = ['=', '@', '%', '>', '<'];
const GROUP_CHARS: [char; 4] = ['(', ')', '|', ','];

pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split a filter expression into an ordered token queue
///
/// Classification priority per lexeme: two-character operators, then
/// one-character punctuation and operators, then quoted literals, then
/// identifier runs. Anything else is a scan error at the cursor position.
pub fn tokenize(text: &str) -> Result<VecDeque<Token>> {
    let mut scanner = Scanner::new(text);
    let mut tokens = VecDeque::new();

    loop {
        scanner.skip_spaces();
        if scanner.is_end() {
            break;
        }
        let position = scanner.position();

        if let Some(pair) = scanner.peek(2) {
            if TWO_CHAR_OPERATORS.contains(&pair.as_str()) {
                scanner.read(2);
                tokens.push_back(Token {
                    kind: TokenKind::Operator,
                    lexeme: pair,
                    position,
                });
                continue;
            }
        }

        let c = match scanner.peek_char() {
            Some(c) => c,
            None => break,
        };

        if GROUP_CHARS.contains(&c) || ONE_CHAR_OPERATORS.contains(&c) {
            scanner.read(1);
            let kind = if GROUP_CHARS.contains(&c) {
                TokenKind::Group
            } else {
                TokenKind::Operator
            };
            tokens.push_back(Token {
                kind,
                lexeme: c.to_string(),
                position,
            });
            continue;
        }

        if c == '"' || c == '\'' {
            match scanner.read_quoted() {
                Some(lexeme) => tokens.push_back(Token {
                    kind: TokenKind::StringLiteral,
                    lexeme,
                    position,
                }),
                None => {
                    return Err(FilterError::Scan {
                        message: "unterminated string literal".to_string(),
                        position,
                    })
                }
            }
            continue;
        }

        let run = scanner.read_while(is_identifier_char);
        if run.is_empty() {
            // Covers a bare `!` too: no two-character completion, and `!`
            // alone is not an operator.
            return Err(FilterError::Scan {
                message: format!("character not allowed: '{}'", c),
                position,
            });
        }
        tokens.push_back(Token {
            kind: TokenKind::Identifier,
            lexeme: run,
            position,
        });
    }

    Ok(tokens)
}
