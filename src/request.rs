/// Placeholder used when the operator leaves the project name blank.
pub const DEFAULT_PROJECT_NAME: &str = "my-app";

/// Project name meaning "scaffold into the current directory".
pub const CURRENT_DIR: &str = ".";

/// Operator input collected once at startup, immutable afterwards.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub project_name: String,
    pub use_styling: bool,
}

impl ScaffoldRequest {
    pub fn new(project_name: impl Into<String>, use_styling: bool) -> Self {
        let project_name = project_name.into();
        let project_name = if project_name.is_empty() {
            String::from(DEFAULT_PROJECT_NAME)
        } else {
            project_name
        };
        Self {
            project_name,
            use_styling,
        }
    }

    pub fn targets_current_dir(&self) -> bool {
        self.project_name == CURRENT_DIR
    }
}
