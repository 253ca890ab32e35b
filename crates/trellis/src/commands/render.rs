//! `trellis render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;
use trellis_render::compile;
use trellis_tree::parse_tree;

use crate::commands::{build_config, read_source};
use crate::error::CliError;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
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

impl RenderArgs {
    /// Execute the render command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let source = read_source(&self.file)?;
        debug!(bytes = source.len(), "read tree literal");

        let tree = parse_tree(&source)?;
        let config = build_config(self.xml, self.doctype, self.extend_tags);
        let markup = compile(&tree, &config)?;
        debug!(lines = markup.lines().count(), "compiled markup");

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(markup.as_bytes())?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
