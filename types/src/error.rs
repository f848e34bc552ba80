//! Parse errors for the textual forms of protocol types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),
}
