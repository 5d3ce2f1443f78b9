use thiserror::Error;

/// Errors raised at construction boundaries. Once a value object has been
/// built, the generation pipeline never surfaces an error; numeric edge
/// cases degrade to documented fallbacks instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A textual color could not be parsed in any accepted form.
    #[error("invalid color input: {0}")]
    InvalidColorInput(String),

    /// A configuration value is out of range or structurally malformed
    /// (step count outside [2,100], wrong anchor count, non-finite range).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
