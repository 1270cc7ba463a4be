use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::layout::ProjectLayout;
use crate::manifest::{RUNTIME_DEPENDENCIES, STYLING_DEV_DEPENDENCIES};

/// Command that runs the external frontend generator. Installs honor
/// the configured package manager; the generator always goes through
/// this runner.
pub const GENERATOR_RUNNER: &str = "npx";

/// Probes a command with `--version`. A missing executable reports as
/// unavailable rather than as a spawn failure.
pub fn check_installed(command: &str) -> Result<bool> {
    let check = Command::new(command)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    match check {
        Ok(status) => Ok(status.success()),
        Err(source) if source.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::Subprocess {
            what: "availability probe",
            source,
        }),
    }
}

fn run(command: &mut Command, what: &'static str) -> Result<()> {
    let status = command
        .status()
        .map_err(|source| Error::Subprocess { what, source })?;
    println!();
    if !status.success() {
        return Err(Error::SubprocessFailed { what, status });
    }
    Ok(())
}

/// Runs the external frontend generator. Its output subtree is entirely
/// its own; this tool never inspects or validates it.
pub fn create_frontend(layout: &ProjectLayout, use_styling: bool) -> Result<()> {
    let styling_flag = if use_styling {
        "--tailwind"
    } else {
        "--no-tailwind"
    };
    run(
        Command::new(GENERATOR_RUNNER)
            .arg("create-next-app@latest")
            .arg(layout.frontend_target())
            .arg(styling_flag)
            .current_dir(&layout.root),
        "frontend generator",
    )
}

pub fn install_runtime_dependencies(root: &Path, package_manager: &str) -> Result<()> {
    let mut command = Command::new(package_manager);
    command.arg("install");
    for (name, version) in RUNTIME_DEPENDENCIES {
        command.arg(format!("{name}@{version}"));
    }
    run(command.current_dir(root), "dependency install")
}

pub fn install_styling_toolchain(root: &Path, package_manager: &str) -> Result<()> {
    let mut command = Command::new(package_manager);
    command.arg("install").arg("--save-dev");
    for (name, version) in STYLING_DEV_DEPENDENCIES {
        command.arg(format!("{name}@{version}"));
    }
    run(command.current_dir(root), "styling toolchain install")
}
