use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PivotError {
    #[error("link target already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PivotError>;
