pub mod config;
pub use config::{Config, DisplayConfig, HookConfig, LoggingConfig, OutputConfig, RenderConfig};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormplotError {
    #[error("Invalid sample: {0}")]
    InvalidSample(String),
    #[error("Degenerate distribution: {0}")]
    DegenerateDistribution(String),
    #[error("Could not parse {token:?} (value #{}) as a number", .position + 1)]
    Parse { token: String, position: usize },
    #[error("Output error at {}: {source}", .path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

impl NormplotError {
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::OutputIo { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, NormplotError>;
