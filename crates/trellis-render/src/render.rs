//! Element rendering.
//!
//! Walks the symbolic tree and appends tag-delimited markup to a per-call
//! buffer. The writer owns its buffer for the duration of one compile; it is
//! dropped on every exit path, so independent compiles never share state.

use std::fmt::Write;

use trellis_tree::{Evaluator, Node, Value, format_number};

use crate::attrs::{Attr, merge_classes, parse_attributes};
use crate::config::{Mode, RenderConfig};
use crate::error::RenderError;
use crate::tags;

/// Skeleton an element renders with, decided by mode and tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    /// `<tag/>`, no interior. Children are ignored.
    SelfClosing,
    /// `<tag>...</tag>`.
    Paired,
    /// `<!DOCTYPE ...>` prefix followed by a paired skeleton.
    DoctypePaired,
}

/// Markup writer for one compile call.
pub(crate) struct MarkupWriter<'a, E: Evaluator> {
    out: String,
    config: &'a RenderConfig,
    evaluator: &'a E,
}

impl<'a, E: Evaluator> MarkupWriter<'a, E> {
    pub(crate) fn new(config: &'a RenderConfig, evaluator: &'a E) -> Self {
        Self {
            out: String::with_capacity(1024),
            config,
            evaluator,
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn evaluator(&self) -> &'a E {
        self.evaluator
    }

    pub(crate) fn newline(&mut self) {
        self.out.push('\n');
    }

    pub(crate) fn written(&self) -> usize {
        self.out.len()
    }

    /// Render a node as flat markup, without line structure.
    pub(crate) fn render_node(&mut self, node: &Node) -> Result<(), RenderError> {
        if let Node::Element { tag, args } = node {
            return self.render_element(tag, args);
        }
        let value = self.evaluator.eval(node)?;
        self.render_value(&value)
    }

    /// Render one element and leave the cursor after its closing segment, so
    /// a parent can continue appending siblings.
    fn render_element(&mut self, tag: &str, args: &[Node]) -> Result<(), RenderError> {
        let (attrs, children) = self.parse_args(tag, args)?;
        match self.shape(tag, !children.is_empty()) {
            Shape::SelfClosing => self.open_tag(tag, &attrs, true),
            Shape::Paired => self.render_paired(tag, &attrs, &children)?,
            Shape::DoctypePaired => {
                self.doctype();
                self.render_paired(tag, &attrs, &children)?;
            }
        }
        Ok(())
    }

    fn render_paired(
        &mut self,
        tag: &str,
        attrs: &[Attr],
        children: &[Value],
    ) -> Result<(), RenderError> {
        self.open_tag(tag, attrs, false);
        for child in children {
            self.render_value(child)?;
        }
        self.close_tag(tag);
        Ok(())
    }

    /// Append a resolved value: nested elements render recursively, numbers
    /// take their text form, everything else is appended verbatim.
    pub(crate) fn render_value(&mut self, value: &Value) -> Result<(), RenderError> {
        match value {
            Value::Nested(node) => self.render_node(node),
            Value::Number(n) => {
                self.out.push_str(&format_number(*n));
                Ok(())
            }
            Value::Text(s) | Value::Sym(s) => {
                self.out.push_str(s);
                Ok(())
            }
        }
    }

    /// Validate the tag, resolve every argument and split the attribute
    /// prefix (classes merged) from the children.
    pub(crate) fn parse_args(
        &self,
        tag: &str,
        args: &[Node],
    ) -> Result<(Vec<Attr>, Vec<Value>), RenderError> {
        if !self.config.is_allowed_tag(tag) {
            return Err(RenderError::InvalidTag {
                tag: tag.to_owned(),
            });
        }
        let mut values = args
            .iter()
            .map(|arg| self.evaluator.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;
        let (consumed, attrs) = parse_attributes(&values);
        let children = values.split_off(consumed);
        Ok((merge_classes(attrs), children))
    }

    pub(crate) fn shape(&self, tag: &str, has_children: bool) -> Shape {
        match self.config.mode {
            Mode::Xml if has_children => Shape::Paired,
            Mode::Xml => Shape::SelfClosing,
            Mode::Html if tag == "html" => Shape::DoctypePaired,
            Mode::Html if tags::is_void_tag(tag) => Shape::SelfClosing,
            Mode::Html => Shape::Paired,
        }
    }

    pub(crate) fn doctype(&mut self) {
        write!(self.out, "<!DOCTYPE {}>", self.config.doctype.join(" ")).unwrap();
    }

    pub(crate) fn open_tag(&mut self, tag: &str, attrs: &[Attr], self_closing: bool) {
        self.out.push('<');
        self.out.push_str(tag);
        for attr in attrs {
            match &attr.value {
                Some(value) => write!(self.out, r#" {}="{value}""#, attr.key).unwrap(),
                None => write!(self.out, " {}", attr.key).unwrap(),
            }
        }
        if self_closing {
            self.out.push('/');
        }
        self.out.push('>');
    }

    pub(crate) fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use trellis_tree::LiteralEvaluator;

    use super::*;

    fn render(node: &Node, config: &RenderConfig) -> Result<String, RenderError> {
        let mut writer = MarkupWriter::new(config, &LiteralEvaluator);
        writer.render_node(node)?;
        Ok(writer.finish())
    }

    fn html(node: &Node) -> String {
        render(node, &RenderConfig::html()).unwrap()
    }

    #[test]
    fn test_text_content() {
        let node = Node::element("div", vec![Node::text("hello")]);
        assert_eq!(html(&node), "<div>hello</div>");
    }

    #[test]
    fn test_void_element() {
        assert_eq!(html(&Node::element("br", vec![])), "<br/>");
    }

    #[test]
    fn test_void_element_ignores_children() {
        let node = Node::element("br", vec![Node::text("x")]);
        assert_eq!(html(&node), "<br/>");
    }

    #[test]
    fn test_empty_paired_element() {
        assert_eq!(html(&Node::element("div", vec![])), "<div></div>");
    }

    #[test]
    fn test_attribute_splicing() {
        let node = Node::element(
            "a",
            vec![
                Node::sym("@home"),
                Node::sym(":href"),
                Node::text("/"),
                Node::text("Home"),
            ],
        );
        assert_eq!(html(&node), r#"<a id="home" href="/">Home</a>"#);
    }

    #[test]
    fn test_boolean_attribute_splicing() {
        let node = Node::element("input", vec![Node::sym(":disabled")]);
        assert_eq!(html(&node), "<input disabled/>");
    }

    #[test]
    fn test_class_merge_in_output() {
        let node = Node::element(
            "div",
            vec![Node::sym(".a"), Node::sym(".b"), Node::text("t")],
        );
        assert_eq!(html(&node), r#"<div class="a b">t</div>"#);
    }

    #[test]
    fn test_number_child_formatted() {
        let node = Node::element("td", vec![Node::number(42.0)]);
        assert_eq!(html(&node), "<td>42</td>");
    }

    #[test]
    fn test_nested_elements_inline() {
        let node = Node::element(
            "ul",
            vec![
                Node::element("li", vec![Node::text("a")]),
                Node::element("li", vec![Node::text("b")]),
            ],
        );
        assert_eq!(html(&node), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn test_doctype_for_html_tag() {
        let node = Node::element("html", vec![Node::element("body", vec![])]);
        assert_eq!(html(&node), "<!DOCTYPE html><html><body></body></html>");
    }

    #[test]
    fn test_custom_doctype_words() {
        let config = RenderConfig::html().with_doctype(["html", "SYSTEM"]);
        let node = Node::element("html", vec![]);
        assert_eq!(
            render(&node, &config).unwrap(),
            "<!DOCTYPE html SYSTEM><html></html>"
        );
    }

    #[test]
    fn test_xml_childless_collapses() {
        let config = RenderConfig::xml();
        assert_eq!(render(&Node::element("br", vec![]), &config).unwrap(), "<br/>");
        assert_eq!(
            render(&Node::element("div", vec![]), &config).unwrap(),
            "<div/>"
        );
    }

    #[test]
    fn test_xml_no_doctype() {
        let config = RenderConfig::xml();
        let node = Node::element("html", vec![Node::element("body", vec![])]);
        assert_eq!(
            render(&node, &config).unwrap(),
            "<html><body/></html>"
        );
    }

    #[test]
    fn test_invalid_tag() {
        let err = render(&Node::element("not-a-real-tag", vec![]), &RenderConfig::html())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::InvalidTag {
                tag: "not-a-real-tag".to_owned()
            }
        );
    }

    #[test]
    fn test_invalid_nested_tag_aborts() {
        let node = Node::element("div", vec![Node::element("bogus", vec![])]);
        assert!(render(&node, &RenderConfig::html()).is_err());
    }

    #[test]
    fn test_extension_tag_allowed() {
        let config = RenderConfig::xml().with_extension_tags(["feed"]);
        let node = Node::element("feed", vec![Node::text("x")]);
        assert_eq!(render(&node, &config).unwrap(), "<feed>x</feed>");
    }

    #[test]
    fn test_non_element_root_renders_as_text() {
        assert_eq!(html(&Node::text("plain")), "plain");
        assert_eq!(html(&Node::number(7.0)), "7");
    }
}
