//! Normalized condition trees
//!
//! The backend-neutral output form of the engine: a nested record structure
//! with only the string keys `opt`, `field`, `value`, `left`, `right`, so it
//! serializes straight to JSON for logging, caching, or transport.

use serde::{Deserialize, Serialize};

use crate::filter::ast::{AstNode, CompareOp};

/// Logical combinators for branch nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOp {
    And,
    Or,
}

/// Backend-neutral condition tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionTree {
    Compare(ConditionLeaf),
    Logical(ConditionBranch),
}

/// Leaf condition: `{opt, field, value}`, value unquoted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionLeaf {
    pub opt: CompareOp,
    pub field: String,
    pub value: String,
}

/// Internal node: `{opt: "and"|"or", left, right}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionBranch {
    pub opt: LogicalOp,
    pub left: Box<ConditionTree>,
    pub right: Box<ConditionTree>,
}

/// Normalize an AST into a condition tree
///
/// Pure and total: the parser has already rejected every malformed shape.
/// The literal loses exactly its two delimiter characters; inner whitespace
/// stays verbatim.
pub fn normalize(node: &AstNode) -> ConditionTree {
    match node {
        AstNode::Compare(cmp) => ConditionTree::Compare(ConditionLeaf {
            opt: cmp.op,
            field: cmp.field.clone(),
            value: strip_delimiters(&cmp.value),
        }),
        AstNode::And(left, right) => branch(LogicalOp::And, left, right),
        AstNode::Or(left, right) => branch(LogicalOp::Or, left, right),
    }
}

fn branch(opt: LogicalOp, left: &AstNode, right: &AstNode) -> ConditionTree {
    ConditionTree::Logical(ConditionBranch {
        opt,
        left: Box::new(normalize(left)),
        right: Box::new(normalize(right)),
    })
}

fn strip_delimiters(quoted: &str) -> String {
    // The scanner guarantees a matching ASCII quote at each end, so byte
    // slicing is char-safe here.
    quoted[1..quoted.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::parser::parse;
    use serde_json::json;

    fn normalized(text: &str) -> ConditionTree {
        normalize(&parse(text).unwrap())
    }

    #[test]
    fn test_leaf_is_unquoted() {
        let tree = normalized("name=\"bob\"");
        assert_eq!(
            tree,
            ConditionTree::Compare(ConditionLeaf {
                opt: CompareOp::Equal,
                field: "name".to_string(),
                value: "bob".to_string(),
            })
        );
    }

    #[test]
    fn test_both_quote_styles_normalize_identically() {
        assert_eq!(normalized("a='x'"), normalized("a=\"x\""));
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        let tree = normalized("a=' padded '");
        match tree {
            ConditionTree::Compare(leaf) => assert_eq!(leaf.value, " padded "),
            other => panic!("expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_literal() {
        let tree = normalized("a=''");
        match tree {
            ConditionTree::Compare(leaf) => assert_eq!(leaf.value, ""),
            other => panic!("expected leaf, got {:?}", other),
        }
    }

    #[test]
    fn test_json_shape() {
        let tree = normalized("a=\"1\",b>\"2\"|c%\"3\"");
        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            json!({
                "opt": "or",
                "left": {
                    "opt": "and",
                    "left": {"opt": "=", "field": "a", "value": "1"},
                    "right": {"opt": ">", "field": "b", "value": "2"},
                },
                "right": {"opt": "%", "field": "c", "value": "3"},
            })
        );
    }

    #[test]
    fn test_json_round_trip() {
        let tree = normalized("(a=\"1\"|b!='2'),c<=\"3\"");
        let text = serde_json::to_string(&tree).unwrap();
        let back: ConditionTree = serde_json::from_str(&text).unwrap();
        assert_eq!(back, tree);
    }
}
