//! Recursive-descent parser for filter expressions
//!
//! Grammar, precedence low to high (OR, AND, grouping):
//!
//! ```text
//! Expr       := AndExpr ( '|' AndExpr )*
//! AndExpr    := Term ( ',' Term )*
//! Term       := '(' Expr ')' | Comparison
//! Comparison := Identifier Operator StringLiteral
//! ```
//!
//! Both separators fold left-associatively, so `a,b|c,d` reads as
//! `(a AND b) OR (c AND d)`. Each grammar rule keeps its fold state in a
//! local, never shared with nested group parses.

use std::collections::VecDeque;

use crate::error::{FilterError, Result};
use crate::filter::ast::{AstNode, CompareOp, Comparison};
use crate::filter::tokenizer::{tokenize, Token, TokenKind};

/// Maximum parenthesis nesting depth before parsing is refused
pub const MAX_GROUP_DEPTH: usize = 64;

/// Parse a filter expression into an AST
pub fn parse(text: &str) -> Result<AstNode> {
    let tokens = tokenize(text)?;
    let mut parser = Parser {
        tokens,
        depth: 0,
        end_position: text.chars().count(),
    };
    let node = parser.expr()?;
    // A complete Expr must consume everything; a leftover token here is a
    // stray `)` or similar.
    if let Some(token) = parser.tokens.front() {
        return Err(unexpected("end of input", token));
    }
    Ok(node)
}

struct Parser {
    tokens: VecDeque<Token>,
    depth: usize,
    end_position: usize,
}

impl Parser {
    /// Expr := AndExpr ( '|' AndExpr )*
    fn expr(&mut self) -> Result<AstNode> {
        let mut node = self.and_expr()?;
        while self.eat_group("|") {
            let right = self.and_expr()?;
            node = AstNode::Or(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    /// AndExpr := Term ( ',' Term )*
    fn and_expr(&mut self) -> Result<AstNode> {
        let mut node = self.term()?;
        while self.eat_group(",") {
            let right = self.term()?;
            node = AstNode::And(Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    /// Term := '(' Expr ')' | Comparison
    fn term(&mut self) -> Result<AstNode> {
        if let Some(open) = self.peek_group("(") {
            if self.depth >= MAX_GROUP_DEPTH {
                return Err(FilterError::TooDeep {
                    limit: MAX_GROUP_DEPTH,
                    position: open,
                });
            }
            self.tokens.pop_front();
            self.depth += 1;
            let node = self.expr()?;
            self.depth -= 1;
            match self.tokens.pop_front() {
                Some(t) if t.kind == TokenKind::Group && t.lexeme == ")" => Ok(node),
                Some(t) => Err(unexpected("')'", &t)),
                None => Err(self.end_of_input("')'")),
            }
        } else {
            self.comparison()
        }
    }

    /// Comparison := Identifier Operator StringLiteral
    fn comparison(&mut self) -> Result<AstNode> {
        let field = self.expect(TokenKind::Identifier, "a field name")?;
        let op_token = self.expect(TokenKind::Operator, "a comparison operator")?;
        let op = CompareOp::from_lexeme(&op_token.lexeme)
            .ok_or_else(|| unexpected("a comparison operator", &op_token))?;
        let value = self.expect(TokenKind::StringLiteral, "a quoted value")?;
        Ok(AstNode::Compare(Comparison {
            field: field.lexeme,
            op,
            value: value.lexeme,
        }))
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token> {
        match self.tokens.pop_front() {
            Some(t) if t.kind == kind => Ok(t),
            Some(t) => Err(unexpected(expected, &t)),
            None => Err(self.end_of_input(expected)),
        }
    }

    /// Consume the front token if it is group punctuation with this lexeme
    fn eat_group(&mut self, lexeme: &str) -> bool {
        if self.peek_group(lexeme).is_some() {
            self.tokens.pop_front();
            true
        } else {
            false
        }
    }

    fn peek_group(&self, lexeme: &str) -> Option<usize> {
        match self.tokens.front() {
            Some(t) if t.kind == TokenKind::Group && t.lexeme == lexeme => Some(t.position),
            _ => None,
        }
    }

    fn end_of_input(&self, expected: &str) -> FilterError {
        FilterError::Parse {
            expected: expected.to_string(),
            found: "end of input".to_string(),
            position: self.end_position,
        }
    }
}

fn unexpected(expected: &str, token: &Token) -> FilterError {
    FilterError::Parse {
        expected: expected.to_string(),
        found: format!("'{}'", token.lexeme),
        position: token.position,
    }
}
