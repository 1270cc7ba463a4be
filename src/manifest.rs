use indexmap::IndexMap;
use serde::Serialize;

use crate::error::Result;
use crate::request::ScaffoldRequest;

/// Entry point of the generated Express server, referenced by the
/// manifest's "main" field and script aliases.
pub const SERVER_ENTRY: &str = "server.js";

/// Runtime dependencies installed into every scaffold.
pub const RUNTIME_DEPENDENCIES: [(&str, &str); 5] = [
    ("express", "^4.19.2"),
    ("cors", "^2.8.5"),
    ("dotenv", "^16.4.5"),
    ("mongoose", "^8.5.1"),
    ("next", "^14.2.5"),
];

/// Dev dependencies added only when the operator opted into styling.
pub const STYLING_DEV_DEPENDENCIES: [(&str, &str); 3] = [
    ("tailwindcss", "^3.4.7"),
    ("postcss", "^8.4.40"),
    ("autoprefixer", "^10.4.19"),
];

const NODEMON: (&str, &str) = ("nodemon", "^3.1.4");

/// Root package.json of the generated project.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub main: String,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
}

impl Manifest {
    pub fn new(request: &ScaffoldRequest, package_name: &str) -> Self {
        let mut scripts = IndexMap::new();
        scripts.insert(String::from("start"), format!("node {SERVER_ENTRY}"));
        scripts.insert(String::from("dev"), format!("nodemon {SERVER_ENTRY}"));

        let mut dependencies = IndexMap::new();
        for (name, version) in RUNTIME_DEPENDENCIES {
            dependencies.insert(String::from(name), String::from(version));
        }

        let mut dev_dependencies = IndexMap::new();
        let (name, version) = NODEMON;
        dev_dependencies.insert(String::from(name), String::from(version));
        if request.use_styling {
            for (name, version) in STYLING_DEV_DEPENDENCIES {
                dev_dependencies.insert(String::from(name), String::from(version));
            }
        }

        Self {
            name: String::from(package_name),
            version: String::from("0.1.0"),
            private: true,
            main: String::from(SERVER_ENTRY),
            scripts,
            dependencies,
            dev_dependencies,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let mut contents = serde_json::to_string_pretty(self)?;
        contents.push('\n');
        Ok(contents)
    }
}
