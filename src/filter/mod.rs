//! Filter-expression engine
//!
//! Turns compact filter expressions like `name="bob",age>"18"|status="vip"`
//! into backend-neutral condition trees. Pipeline: raw string → scanner →
//! tokenizer → token queue → parser → AST → normalizer → condition tree.

mod ast;
pub mod cache;
mod condition;
pub mod parser;
pub mod scanner;
mod tokenizer;


pub use ast::{AstNode, CompareOp, Comparison};
pub use cache::ConditionCache;
pub use condition::{normalize, ConditionBranch, ConditionLeaf, ConditionTree, LogicalOp};
pub use scanner::Scanner;
pub use tokenizer::{tokenize, Token, TokenKind};

use crate::error::Result;

/// Parse a filter expression into a normalized condition tree
///
/// This is the entire boundary a REST dispatch layer calls; either error
/// kind maps to a client-facing bad request.
pub fn parse(text: &str) -> Result<ConditionTree> {
    let ast = parser::parse(text)?;
    Ok(condition::normalize(&ast))
}
