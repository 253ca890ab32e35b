//! Symbolic document tree model for the trellis markup compiler.
//!
//! This crate provides:
//! - [`Node`]: the canonical tree form a document is described in
//! - [`parse_tree`]: the normalizer that reads a tree literal into [`Node`]
//! - [`Evaluator`]: the seam through which embedded dynamic expressions are
//!   resolved to primitive [`Value`]s before rendering
//!
//! Rendering itself lives in the `trellis-render` crate.
//!
//! # Example
//!
//! ```
//! use trellis_tree::{parse_tree, Node};
//!
//! let tree = parse_tree(r#"(div @main .wide "hello")"#).unwrap();
//! assert_eq!(tree.tag(), Some("div"));
//! ```

mod eval;
mod node;
mod parse;

pub use eval::{EvalError, Evaluator, LiteralEvaluator};
pub use node::{Node, Value, format_number};
pub use parse::{ParseError, parse_tree};
