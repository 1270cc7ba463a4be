use std::fs;
use std::path::{Path, PathBuf};

use minijinja::Environment;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::layout::ProjectLayout;
use crate::manifest::Manifest;
use crate::request::ScaffoldRequest;

const SERVER_JS: &str = include_str!("../templates/server.js.j2");
const CONNECTION_JS: &str = include_str!("../templates/connection.js.j2");
const ENV: &str = include_str!("../templates/env.j2");
const README: &str = include_str!("../templates/readme.md.j2");
const GITIGNORE: &str = include_str!("../templates/gitignore.j2");
const TAILWIND_CONFIG: &str = include_str!("../templates/tailwind.config.js.j2");

/// One file to be written under the project root. Writes always
/// overwrite, there is no merging with existing content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub relative_path: PathBuf,
    pub content: String,
}

#[derive(Serialize)]
struct Context {
    project_name: String,
    database_name: String,
    styling: bool,
    frontend_dir: Option<String>,
    static_dir: String,
    content_root: String,
}

impl Context {
    fn new(request: &ScaffoldRequest, layout: &ProjectLayout) -> Self {
        let package_name = layout.package_name(request);
        let frontend_dir = layout
            .frontend_subdir
            .as_ref()
            .map(|subdir| subdir.to_string_lossy().into_owned());
        let static_dir = match &frontend_dir {
            Some(dir) => format!("{dir}/.next/static"),
            None => String::from(".next/static"),
        };
        let content_root = match &frontend_dir {
            Some(dir) => format!("{dir}/"),
            None => String::new(),
        };
        Self {
            database_name: package_name.clone(),
            project_name: package_name,
            styling: request.use_styling,
            frontend_dir,
            static_dir,
            content_root,
        }
    }
}

pub struct Templates {
    environment: Environment<'static>,
}

impl Templates {
    pub fn load() -> Result<Self> {
        let mut environment = Environment::new();
        environment.add_template("server.js", SERVER_JS)?;
        environment.add_template("connection.js", CONNECTION_JS)?;
        environment.add_template(".env", ENV)?;
        environment.add_template("README.md", README)?;
        environment.add_template(".gitignore", GITIGNORE)?;
        environment.add_template("tailwind.config.js", TAILWIND_CONFIG)?;
        Ok(Self { environment })
    }

    fn render_one(&self, name: &str, context: &Context) -> Result<GeneratedFile> {
        let template = self.environment.get_template(name)?;
        let content = template.render(context)?;
        Ok(GeneratedFile {
            relative_path: PathBuf::from(name),
            content,
        })
    }

    /// Renders the full set of generated files for one scaffold. Pure
    /// with respect to its inputs: identical (request, layout) pairs
    /// yield byte-identical output.
    pub fn render(
        &self,
        request: &ScaffoldRequest,
        layout: &ProjectLayout,
    ) -> Result<Vec<GeneratedFile>> {
        let context = Context::new(request, layout);

        let mut files = vec![
            self.render_one("server.js", &context)?,
            self.render_one("connection.js", &context)?,
            self.render_one(".env", &context)?,
            self.render_one("README.md", &context)?,
            self.render_one(".gitignore", &context)?,
        ];

        let manifest = Manifest::new(request, &context.project_name);
        files.push(GeneratedFile {
            relative_path: PathBuf::from("package.json"),
            content: manifest.to_json()?,
        });

        if request.use_styling {
            files.push(self.render_one("tailwind.config.js", &context)?);
        }

        Ok(files)
    }
}

/// Writes every generated file under the project root, overwriting any
/// file already present at the same path.
pub fn write_all(root: impl AsRef<Path>, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = root.as_ref().join(&file.relative_path);
        fs::write(&path, &file.content).map_err(|source| Error::FileWriteFailed { path, source })?;
    }
    Ok(())
}
