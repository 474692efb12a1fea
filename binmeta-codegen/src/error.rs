//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] binmeta_schema::ParseError),

    /// Schema resolution error.
    #[error("schema error: {0}")]
    Schema(#[from] binmeta_schema::SchemaError),

    /// Name dictionary error.
    #[error("name dictionary error: {0}")]
    Names(#[from] binmeta_core::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
