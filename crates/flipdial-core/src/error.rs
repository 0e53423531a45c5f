use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipdialError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No file path given")]
    EmptyPath,

    #[error("No image loaded")]
    NoImage,

    #[error("Cannot infer image format from {0}")]
    UnknownFormat(PathBuf),

    #[error("Invalid settings: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, FlipdialError>;
