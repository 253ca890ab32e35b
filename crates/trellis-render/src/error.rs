//! Render error types.

use trellis_tree::EvalError;

/// Render error.
///
/// Every failure aborts the whole compile; there is no partial output.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Tag is neither a standard HTML5 tag nor in the extension allow-list.
    #[error("unknown tag `{tag}`")]
    InvalidTag {
        /// The rejected tag name.
        tag: String,
    },

    /// An embedded expression could not be resolved.
    #[error("{0}")]
    Eval(#[from] EvalError),

    /// A flat attribute list with a key missing its value slot.
    #[error("attribute list of length {len} is not key/value interleaved")]
    MalformedAttributeList {
        /// Length of the rejected list.
        len: usize,
    },
}
