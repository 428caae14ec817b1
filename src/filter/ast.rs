//! Abstract syntax tree for filter expressions

use serde::{Deserialize, Serialize};

/// AST node for a parsed filter expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AstNode {
    /// Single comparison like `name="bob"`
    Compare(Comparison),
    /// AND combination
    And(Box<AstNode>, Box<AstNode>),
    /// OR combination
    Or(Box<AstNode>, Box<AstNode>),
}

/// A single field comparison
///
/// `value` is the raw string literal, quote delimiters still attached; they
/// are stripped during normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub field: String,
    pub op: CompareOp,
    pub value: String,
}

/// Comparison operators
///
/// Serialized as their expression symbol, which doubles as the `opt` key of
/// a normalized leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    /// Equal (=)
    #[serde(rename = "=")]
    Equal,
    /// Not equal (!=)
    #[serde(rename = "!=")]
    NotEqual,
    /// Between (@) — reserved, no two-bound syntax exists yet
    #[serde(rename = "@")]
    Between,
    /// Not between (!@) — reserved
    #[serde(rename = "!@")]
    NotBetween,
    /// Contains, case-insensitive (%)
    #[serde(rename = "%")]
    Contains,
    /// Not contains, case-insensitive (!%)
    #[serde(rename = "!%")]
    NotContains,
    /// Greater than (>)
    #[serde(rename = ">")]
    Greater,
    /// Less than (<)
    #[serde(rename = "<")]
    Less,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    GreaterEqual,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    LessEqual,
}

impl CompareOp {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "=" => Some(CompareOp::Equal),
            "!=" => Some(CompareOp::NotEqual),
            "@" => Some(CompareOp::Between),
            "!@" => Some(CompareOp::NotBetween),
            "%" => Some(CompareOp::Contains),
            "!%" => Some(CompareOp::NotContains),
            ">" => Some(CompareOp::Greater),
            "<" => Some(CompareOp::Less),
            ">=" => Some(CompareOp::GreaterEqual),
            "<=" => Some(CompareOp::LessEqual),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
            CompareOp::Between => "@",
            CompareOp::NotBetween => "!@",
            CompareOp::Contains => "%",
            CompareOp::NotContains => "!%",
            CompareOp::Greater => ">",
            CompareOp::Less => "<",
            CompareOp::GreaterEqual => ">=",
            CompareOp::LessEqual => "<=",
        }
    }
}
