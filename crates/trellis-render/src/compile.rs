//! Compile entry points.

use trellis_tree::{Evaluator, LiteralEvaluator, Node};

use crate::config::{Mode, RenderConfig};
use crate::error::RenderError;
use crate::render::MarkupWriter;

/// Compile a tree into line-structured markup.
///
/// Renders with structural line breaks, then prepends the XML declaration
/// line in XML mode. Dynamic expressions fail; use [`compile_with`] to supply
/// an evaluator for them.
pub fn compile(root: &Node, config: &RenderConfig) -> Result<String, RenderError> {
    compile_with(root, config, &LiteralEvaluator)
}

/// Compile a tree into line-structured markup with a custom evaluator.
pub fn compile_with<E: Evaluator>(
    root: &Node,
    config: &RenderConfig,
    evaluator: &E,
) -> Result<String, RenderError> {
    let mut writer = MarkupWriter::new(config, evaluator);
    writer.layout_node(root)?;
    let mut text = writer.finish();
    if text.ends_with('\n') {
        text.pop();
    }

    if config.mode == Mode::Xml {
        let mut headed =
            String::with_capacity(config.xml_header.len() + 1 + text.len());
        headed.push_str(&config.xml_header);
        headed.push('\n');
        headed.push_str(&text);
        text = headed;
    }
    Ok(text)
}

/// Render a tree as a flat markup fragment, without line structure or the
/// XML declaration line.
pub fn render_fragment(root: &Node, config: &RenderConfig) -> Result<String, RenderError> {
    render_fragment_with(root, config, &LiteralEvaluator)
}

/// Render a flat markup fragment with a custom evaluator.
pub fn render_fragment_with<E: Evaluator>(
    root: &Node,
    config: &RenderConfig,
    evaluator: &E,
) -> Result<String, RenderError> {
    let mut writer = MarkupWriter::new(config, evaluator);
    writer.render_node(root)?;
    Ok(writer.finish())
}
