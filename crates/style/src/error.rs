use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl StyleError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString, reason: &'static str) -> Self {
        StyleError::InvalidFieldValue {
            field,
            value: value.to_string(),
            reason,
        }
    }
}
