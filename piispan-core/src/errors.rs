//! errors.rs - Custom error types for the piispan-core library.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Label-table validation errors.
///
/// The extraction path itself never fails. File and YAML errors from config
/// loading are reported through `anyhow` with context.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PiispanError {
    #[error("Label configuration is invalid: {0}")]
    InvalidLabelConfig(String),

    #[error("Duplicate label '{0}' at ids {1} and {2}")]
    DuplicateLabel(String, usize, usize),
}
