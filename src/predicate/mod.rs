//! Predicate builder contract
//!
//! The engine stops at the condition tree; turning that tree into an
//! executable filter is backend work. A backend implements
//! [`PredicateBuilder`] and [`build`] drives it: leaves become backend
//! comparisons with the field name already translated by the field-name
//! mapper, branches become conjunctions and disjunctions of their
//! sub-predicates.

use crate::error::{FilterError, Result};
use crate::filter::{CompareOp, ConditionTree, LogicalOp};

/// Backend hooks for predicate construction
///
/// `@`/`!@` reach `comparison` like any other operator but only ever carry
/// a single value; backends reject them until a two-bound syntax exists.
pub trait PredicateBuilder {
    type Predicate;

    /// Build a leaf predicate. `field` is the storage-layer name, already
    /// through the field-name mapper.
    fn comparison(&mut self, field: &str, op: CompareOp, value: &str) -> Result<Self::Predicate>;

    fn and(&mut self, left: Self::Predicate, right: Self::Predicate) -> Self::Predicate;

    fn or(&mut self, left: Self::Predicate, right: Self::Predicate) -> Self::Predicate;
}

/// Build a backend predicate from a condition tree
///
/// `map_field` translates the logical field name used in the expression to
/// a storage-layer column or attribute name; returning `None` fails the
/// build with [`FilterError::UnknownField`].
pub fn build<B, F>(tree: &ConditionTree, builder: &mut B, map_field: &F) -> Result<B::Predicate>
where
    B: PredicateBuilder,
    F: Fn(&str) -> Option<String>,
{
    match tree {
        ConditionTree::Compare(leaf) => {
            let field = map_field(&leaf.field).ok_or_else(|| FilterError::UnknownField {
                field: leaf.field.clone(),
            })?;
            builder.comparison(&field, leaf.opt, &leaf.value)
        }
        ConditionTree::Logical(branch) => {
            let left = build(&branch.left, builder, map_field)?;
            let right = build(&branch.right, builder, map_field)?;
            Ok(match branch.opt {
                LogicalOp::And => builder.and(left, right),
                LogicalOp::Or => builder.or(left, right),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::parse;

    /// Toy backend rendering predicates as SQL-ish strings
    struct SqlBuilder;

    impl PredicateBuilder for SqlBuilder {
        type Predicate = String;

        fn comparison(&mut self, field: &str, op: CompareOp, value: &str) -> Result<String> {
            let clause = match op {
                CompareOp::Equal => format!("{} = '{}'", field, value),
                CompareOp::NotEqual => format!("{} <> '{}'", field, value),
                CompareOp::Contains => format!("{} ILIKE '%{}%'", field, value),
                CompareOp::NotContains => format!("{} NOT ILIKE '%{}%'", field, value),
                CompareOp::Greater => format!("{} > '{}'", field, value),
                CompareOp::Less => format!("{} < '{}'", field, value),
                CompareOp::GreaterEqual => format!("{} >= '{}'", field, value),
                CompareOp::LessEqual => format!("{} <= '{}'", field, value),
                CompareOp::Between | CompareOp::NotBetween => {
                    return Err(FilterError::Predicate(format!(
                        "operator {} needs two bounds",
                        op.symbol()
                    )))
                }
            };
            Ok(clause)
        }

        fn and(&mut self, left: String, right: String) -> String {
            format!("({} AND {})", left, right)
        }

        fn or(&mut self, left: String, right: String) -> String {
            format!("({} OR {})", left, right)
        }
    }

    fn map_field(field: &str) -> Option<String> {
        match field {
            "name" => Some("user_name".to_string()),
            "age" => Some("user_age".to_string()),
            "status" => Some("account_status".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_leaf_uses_mapped_field_name() {
        let tree = parse("name=\"bob\"").unwrap();
        let sql = build(&tree, &mut SqlBuilder, &map_field).unwrap();
        assert_eq!(sql, "user_name = 'bob'");
    }

    #[test]
    fn test_branches_nest_in_tree_order() {
        let tree = parse("name=\"bob\",age>\"18\"|status=\"vip\"").unwrap();
        let sql = build(&tree, &mut SqlBuilder, &map_field).unwrap();
        assert_eq!(
            sql,
            "((user_name = 'bob' AND user_age > '18') OR account_status = 'vip')"
        );
    }

    #[test]
    fn test_unknown_field() {
        let tree = parse("nickname=\"bob\"").unwrap();
        assert_eq!(
            build(&tree, &mut SqlBuilder, &map_field).unwrap_err(),
            FilterError::UnknownField {
                field: "nickname".to_string(),
            }
        );
    }

    #[test]
    fn test_backend_may_reject_between() {
        let tree = parse("age@\"18\"").unwrap();
        assert!(matches!(
            build(&tree, &mut SqlBuilder, &map_field).unwrap_err(),
            FilterError::Predicate(_)
        ));
    }
}
