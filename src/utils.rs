use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot access '{}': {source}", path.display())]
    Access { path: PathBuf, source: io::Error },
    #[error("unknown template: '{0}'")]
    UnknownTemplate(String),
    #[error("template source is not a directory: '{}'", .0.display())]
    TemplateMissing(PathBuf),
    #[error("destination already exists: '{}'", path.display())]
    CopyConflict { path: PathBuf },
    #[error("failed to copy into '{}': {source}", path.display())]
    Copy { path: PathBuf, source: io::Error },
    #[error("Edit app.json failed. app.json does not exist: '{}'", path.display())]
    ConfigMissing { path: PathBuf, source: io::Error },
    #[error("Edit app.json failed. '{}' is not valid JSON: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Edit app.json failed. {what} of app.json must be a JSON object")]
    ConfigShape { what: &'static str },
    #[error("{key} already exists in usingComponents of app.json")]
    ConfigKeyConflict { key: String },
    #[error("prompt aborted: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Advice printed after the error itself, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::CopyConflict { .. } | Error::Copy { .. } => {
                Some("Copy failed. Please check whether the destination already exists.")
            }
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails unless `path` exists and can be stat'ed.
pub fn check_access(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::metadata(path).map_err(|source| Error::Access {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Lexically normalizes `path`: drops `.` and folds `..` into its parent.
/// Symlinks are not resolved.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
