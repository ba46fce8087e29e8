use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("scan target does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("scan target is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to fingerprint {}: {message}", .path.display())]
    Fingerprint { path: PathBuf, message: String },

    #[error("failed to delete {}: {source}", .path.display())]
    Deletion {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
