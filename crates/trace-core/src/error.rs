use std::num::ParseFloatError;
use std::path::PathBuf;

use crate::color::ParseColorError;

/// Errors raised while turning sample files into a figure. Every variant aborts
/// the whole pass; a missing file is not an error.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `line` is 1-based, `position` is the token's index within the line.
    #[error("{}:{line}: token {position} ({token:?}) is not a number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        position: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("category `{category}` has no color but {} exists", path.display())]
    UnmappedColor { category: String, path: PathBuf },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading or validating a [`crate::config::TraceConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("color for category `{category}`: {source}")]
    InvalidColor {
        category: String,
        #[source]
        source: ParseColorError,
    },

    #[error("`{0}` must be greater than zero")]
    Zero(&'static str),

    #[error("`{name}` must lie in [0, 1], got {value}")]
    AlphaOutOfRange { name: &'static str, value: f32 },
}
