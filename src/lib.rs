//! rest-filter-core — filter-expression engine for REST list endpoints
//!
//! Compiles compact textual filters from a URL query parameter, e.g.
//! `name="bob",age>"18"|status="vip"`, into a serializable, backend-neutral
//! condition tree. `,` is AND, `|` is OR, AND binds tighter, parentheses
//! group. The engine never touches a storage schema; a backend consumes the
//! tree through the [`predicate::PredicateBuilder`] contract.
//!
//! ```
//! use rest_filter_core::parse;
//!
//! let tree = parse(r#"name="bob",age>"18"|status="vip""#).unwrap();
//! let json = serde_json::to_string(&tree).unwrap();
//! assert!(json.contains("\"opt\":\"or\""));
//! ```

pub mod error;
pub mod filter;
pub mod predicate;

pub use error::{FilterError, Result};
pub use filter::{parse, CompareOp, ConditionCache, ConditionTree};
pub use predicate::{build, PredicateBuilder};
