//! Symbolic tree to markup compiler.
//!
//! Converts the canonical document tree from `trellis-tree` into well-formed
//! HTML or XML text with structural line breaks.
//!
//! # Architecture
//!
//! - [`parse_attributes`] / [`merge_classes`]: split an element's leading
//!   attribute shorthand from its children and collapse repeated classes
//! - rendering: validates tags against the fixed registry and emits
//!   tag-delimited markup, recursing into nested elements
//! - layout: chooses line breaks from tree shape (block vs leaf) during the
//!   walk, per output dialect
//! - [`compile`]: the full pipeline, configured by [`RenderConfig`]
//!
//! # Example
//!
//! ```
//! use trellis_render::{RenderConfig, compile};
//! use trellis_tree::parse_tree;
//!
//! let tree = parse_tree(r#"(div @main .wide "hello")"#).unwrap();
//! let markup = compile(&tree, &RenderConfig::html()).unwrap();
//! assert_eq!(markup, r#"<div id="main" class="wide">hello</div>"#);
//! ```

mod attrs;
mod compile;
mod config;
mod error;
mod layout;
mod render;
mod tags;

pub use attrs::{Attr, AttrValue, attrs_from_flat, merge_classes, parse_attributes};
pub use compile::{compile, compile_with, render_fragment, render_fragment_with};
pub use config::{Mode, RenderConfig, XML_HEADER};
pub use error::RenderError;
pub use tags::{is_standard_tag, is_void_tag};
