use thiserror::Error;

use crate::core::TargetType;

#[derive(Debug, Error)]
pub enum MenuError {
    /// The clicked element lacks data its target type requires.
    #[error("{target} element is missing its `{attribute}` attribute")]
    InvalidTargetData {
        target: TargetType,
        attribute: &'static str,
    },

    #[error("unknown menu entry id `{0}`")]
    UnknownEntryId(String),
}
