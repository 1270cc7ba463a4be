use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create project directory: '{}'", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write generated file: '{}'", .path.display())]
    FileWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("'{command}' is not installed")]
    MissingCommand { command: String },
    #[error("failed to execute {what} command")]
    Subprocess {
        what: &'static str,
        source: std::io::Error,
    },
    #[error("{what} command exited with {status}")]
    SubprocessFailed {
        what: &'static str,
        status: std::process::ExitStatus,
    },
    #[error(transparent)]
    MiniJinja(#[from] minijinja::Error),
    #[error(transparent)]
    SerializeManifest(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
