use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::request::ScaffoldRequest;

/// Directory under the project root that holds the generated frontend
/// when the layout is nested.
pub const FRONTEND_DIR: &str = "client";

/// Where the externally generated frontend lives relative to the
/// project root: nested under its own subdirectory, or colocated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Nested,
    Flat,
}

/// Resolved on-disk shape of one scaffold, derived deterministically
/// from the request, the working directory and the layout switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub frontend_subdir: Option<PathBuf>,
}

impl ProjectLayout {
    pub fn resolve(request: &ScaffoldRequest, cwd: impl AsRef<Path>, layout: Layout) -> Self {
        let cwd = cwd.as_ref();
        let root = if request.targets_current_dir() {
            cwd.to_path_buf()
        } else {
            cwd.join(&request.project_name)
        };
        let frontend_subdir = match layout {
            Layout::Nested => Some(PathBuf::from(FRONTEND_DIR)),
            Layout::Flat => None,
        };
        Self {
            root,
            frontend_subdir,
        }
    }

    /// Name used for the manifest and the database connection string.
    /// Falls back to the root directory's basename when the operator
    /// targeted the current directory.
    pub fn package_name(&self, request: &ScaffoldRequest) -> String {
        if request.targets_current_dir() {
            self.root
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| String::from(crate::request::DEFAULT_PROJECT_NAME))
        } else {
            request.project_name.clone()
        }
    }

    /// Argument handed to the external scaffolder: the frontend
    /// subdirectory, or the current directory marker when colocated.
    pub fn frontend_target(&self) -> String {
        match &self.frontend_subdir {
            Some(subdir) => subdir.to_string_lossy().into_owned(),
            None => String::from(crate::request::CURRENT_DIR),
        }
    }

    /// Creates the project root if it does not exist yet. The current
    /// directory sentinel resolves to an existing directory, so this
    /// creates nothing in that case.
    pub fn materialize(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|source| Error::DirectoryCreationFailed {
                path: self.root.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
