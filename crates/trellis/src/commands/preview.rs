//! `trellis preview` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use trellis_render::compile;
use trellis_tree::parse_tree;

use crate::commands::{build_config, read_source};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the preview command.
#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// Input file containing a tree literal (`-` for stdin).
    file: PathBuf,

    /// Emit XML instead of HTML.
    #[arg(long)]
    xml: bool,

    /// Doctype word for HTML output (repeatable; default: html).
    #[arg(long = "doctype", value_name = "WORD")]
    doctype: Vec<String>,

    /// Additional allowed tag name (repeatable).
    #[arg(long = "extend-tag", value_name = "TAG")]
    extend_tags: Vec<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl PreviewArgs {
    /// Execute the preview command.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let source = read_source(&self.file)?;
        let tree = parse_tree(&source)?;
        let config = build_config(self.xml, self.doctype, self.extend_tags);
        let markup = compile(&tree, &config)?;

        output.heading(&format!(
            "{} preview",
            if self.xml { "XML" } else { "HTML" }
        ));
        output.separator();

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(indent_lines(&markup).as_bytes())?;
        drop(stdout);

        output.separator();
        output.info(&format!("{} lines", markup.lines().count()));
        Ok(())
    }
}

/// Indent line-structured markup by nesting depth, two spaces per level.
///
/// Depth changes are read off the line shape: a line that is a lone opening
/// tag descends, a lone closing tag ascends. Leaf lines, self-closing lines
/// and declaration lines keep the current depth.
fn indent_lines(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() + 64);
    let mut depth = 0usize;

    for line in markup.lines() {
        let closing = line.starts_with("</");
        if closing {
            depth = depth.saturating_sub(1);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(line);
        out.push('\n');

        let opening = line.starts_with('<')
            && !closing
            && !line.starts_with("<!")
            && !line.starts_with("<?")
            && !line.ends_with("/>")
            && !line.contains("</");
        if opening {
            depth += 1;
        }
    }
    out
}
