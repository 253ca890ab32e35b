//! Structural line layout.
//!
//! Decides where line breaks go while walking the node tree, instead of
//! re-scanning the rendered text. The rules, per element:
//!
//! - an element with child elements puts its opening tag, each child group
//!   and its closing tag on separate lines;
//! - a leaf element (text or number content only) occupies a single line;
//! - a non-empty run of text between or after child elements gets its own
//!   line;
//! - a doctype prefix occupies its own line.
//!
//! Mode differences (HTML void elements, XML childless collapse, doctype)
//! come from the shared element shape rules, so both dialects lay out
//! through the same walk.

use trellis_tree::{Evaluator, Node, Value};

use crate::error::RenderError;
use crate::render::{MarkupWriter, Shape};

impl<E: Evaluator> MarkupWriter<'_, E> {
    /// Render a node as line-structured markup.
    ///
    /// Every emitted line is terminated with a newline; the compile entry
    /// point trims the final one.
    pub(crate) fn layout_node(&mut self, node: &Node) -> Result<(), RenderError> {
        if let Node::Element { tag, args } = node {
            return self.layout_element(tag, args);
        }
        let value = self.evaluator().eval(node)?;
        if let Value::Nested(nested) = &value {
            if nested.is_element() {
                return self.layout_node(nested);
            }
        }
        let before = self.written();
        self.render_value(&value)?;
        if self.written() > before {
            self.newline();
        }
        Ok(())
    }

    fn layout_element(&mut self, tag: &str, args: &[Node]) -> Result<(), RenderError> {
        let (attrs, children) = self.parse_args(tag, args)?;
        let shape = self.shape(tag, !children.is_empty());

        if shape == Shape::SelfClosing {
            self.open_tag(tag, &attrs, true);
            self.newline();
            return Ok(());
        }
        if shape == Shape::DoctypePaired {
            self.doctype();
            self.newline();
        }

        if children.iter().any(Value::is_element) {
            self.open_tag(tag, &attrs, false);
            self.newline();
            self.layout_children(&children)?;
            self.close_tag(tag);
            self.newline();
        } else {
            // Leaf: the whole element on one line.
            self.open_tag(tag, &attrs, false);
            for child in &children {
                self.render_value(child)?;
            }
            self.close_tag(tag);
            self.newline();
        }
        Ok(())
    }

    /// Lay out the children of a block element: nested elements recurse,
    /// consecutive text-like values accumulate into one line.
    fn layout_children(&mut self, children: &[Value]) -> Result<(), RenderError> {
        let mut run_start = self.written();
        for child in children {
            if let Value::Nested(node) = child {
                if node.is_element() {
                    if self.written() > run_start {
                        self.newline();
                    }
                    self.layout_node(node)?;
                    run_start = self.written();
                    continue;
                }
            }
            self.render_value(child)?;
        }
        if self.written() > run_start {
            self.newline();
        }
        Ok(())
    }
}
