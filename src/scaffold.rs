use std::env;
use std::sync::OnceLock;

use anyhow::{bail, Context as _, Result};
use regex::Regex;

use create_next_xpres::layout::ProjectLayout;
use create_next_xpres::pipeline;
use create_next_xpres::request::{ScaffoldRequest, DEFAULT_PROJECT_NAME};
use create_next_xpres::template::GeneratedFile;

use crate::prompt;
use crate::App;

impl App {
    pub(crate) fn scaffold(&self) -> Result<()> {
        let request = collect_request().context("prompt aborted, no files were written")?;
        let cwd = env::current_dir().context("failed to locate current directory")?;

        let layout = ProjectLayout::resolve(&request, &cwd, self.config.layout);
        let package_name = layout.package_name(&request);
        println!(
            "Scaffolding '{}' in {}...",
            package_name,
            layout.root.display()
        );
        println!();

        let files = pipeline::run(&request, &cwd, self.config.layout, &self.config.package_manager)
            .context("scaffolding failed, the project is incomplete")?;
        inspect_files(&files);

        println!("Successfully scaffolded '{package_name}'!");
        if request.targets_current_dir() {
            println!("Run `npm run dev` to get started.");
        } else {
            println!(
                "Run `cd {}` and `npm run dev` to get started.",
                request.project_name
            );
        }

        Ok(())
    }
}

fn collect_request() -> dialoguer::Result<ScaffoldRequest> {
    static NAME_PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern =
        NAME_PATTERN.get_or_init(|| Regex::new(r"^(\.|[a-z0-9][a-z0-9._-]*)$").unwrap());

    let name: String = prompt::input(
        "Project name ('.' scaffolds into the current directory)",
        Some(String::from(DEFAULT_PROJECT_NAME)),
        Some(|input: &String| {
            if !pattern.is_match(input) {
                bail!("invalid project name: '{input}'")
            }
            Ok(())
        }),
    )?;
    let use_styling = prompt::confirm("Use Tailwind CSS for styling?", Some(false))?;

    Ok(ScaffoldRequest::new(name, use_styling))
}

fn inspect_files(files: &[GeneratedFile]) {
    for file in files {
        println!("│ {}", file.relative_path.display());
    }
    println!();
}
