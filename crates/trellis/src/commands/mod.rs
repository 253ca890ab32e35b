//! CLI command implementations.

pub(crate) mod preview;
pub(crate) mod render;

use std::io::Read;
use std::path::Path;

use trellis_render::RenderConfig;

use crate::error::CliError;

pub(crate) use preview::PreviewArgs;
pub(crate) use render::RenderArgs;

/// Read a tree literal from a file, or from stdin when the path is `-`.
pub(crate) fn read_source(path: &Path) -> Result<String, CliError> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Build a render configuration from the shared command-line flags.
pub(crate) fn build_config(
    xml: bool,
    doctype: Vec<String>,
    extend_tags: Vec<String>,
) -> RenderConfig {
    let mut config = if xml {
        RenderConfig::xml()
    } else {
        RenderConfig::html()
    };
    if !doctype.is_empty() {
        config = config.with_doctype(doctype);
    }
    config.with_extension_tags(extend_tags)
}

#[cfg(test)]
mod tests {
    use trellis_render::Mode;

    use super::*;

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(false, vec![], vec![]);
        assert_eq!(config.mode, Mode::Html);
        assert_eq!(config.doctype, vec!["html".to_owned()]);
    }

    #[test]
    fn test_build_config_xml_with_extensions() {
        let config = build_config(true, vec![], vec!["feed".to_owned()]);
        assert_eq!(config.mode, Mode::Xml);
        assert!(config.is_allowed_tag("feed"));
    }

    #[test]
    fn test_build_config_custom_doctype() {
        let config = build_config(false, vec!["html".to_owned(), "SYSTEM".to_owned()], vec![]);
        assert_eq!(config.doctype.len(), 2);
    }
}
