use std::path::Path;

use crate::error::{Error, Result};
use crate::layout::{Layout, ProjectLayout};
use crate::npm;
use crate::request::ScaffoldRequest;
use crate::template::{self, GeneratedFile, Templates};

/// Runs every step after prompting: resolve and create the project
/// root, generate the frontend, emit the template files, install
/// dependencies. Steps run strictly in order; the first failure aborts
/// the rest and leaves earlier output in place for inspection.
pub fn run(
    request: &ScaffoldRequest,
    cwd: impl AsRef<Path>,
    layout: Layout,
    package_manager: &str,
) -> Result<Vec<GeneratedFile>> {
    let project = ProjectLayout::resolve(request, cwd, layout);
    project.materialize()?;

    for command in [package_manager, npm::GENERATOR_RUNNER] {
        if !npm::check_installed(command)? {
            return Err(Error::MissingCommand {
                command: String::from(command),
            });
        }
    }

    npm::create_frontend(&project, request.use_styling)?;

    let templates = Templates::load()?;
    let files = templates.render(request, &project)?;
    template::write_all(&project.root, &files)?;

    npm::install_runtime_dependencies(&project.root, package_manager)?;
    if request.use_styling {
        npm::install_styling_toolchain(&project.root, package_manager)?;
    }

    Ok(files)
}
