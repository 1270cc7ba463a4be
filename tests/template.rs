use std::fs;
use std::path::Path;

use create_next_xpres::layout::{Layout, ProjectLayout};
use create_next_xpres::manifest::SERVER_ENTRY;
use create_next_xpres::request::ScaffoldRequest;
use create_next_xpres::template::{self, GeneratedFile, Templates};

fn render(name: &str, styling: bool, mode: Layout) -> Vec<GeneratedFile> {
    let request = ScaffoldRequest::new(name, styling);
    let layout = ProjectLayout::resolve(&request, Path::new("/work"), mode);
    let templates = Templates::load().unwrap();
    templates.render(&request, &layout).unwrap()
}

fn find<'a>(files: &'a [GeneratedFile], path: &str) -> &'a GeneratedFile {
    files
        .iter()
        .find(|file| file.relative_path == Path::new(path))
        .unwrap_or_else(|| panic!("missing generated file: {path}"))
}

#[test]
fn rendering_is_deterministic() {
    assert_eq!(
        render("demo", true, Layout::Nested),
        render("demo", true, Layout::Nested)
    );
    assert_eq!(
        render("demo", false, Layout::Flat),
        render("demo", false, Layout::Flat)
    );
}

#[test]
fn base_file_set_without_styling() {
    let files = render("demo", false, Layout::Nested);
    let mut names = files
        .iter()
        .map(|file| file.relative_path.to_string_lossy().into_owned())
        .collect::<Vec<String>>();
    names.sort();
    assert_eq!(
        names,
        [
            ".env",
            ".gitignore",
            "README.md",
            "connection.js",
            "package.json",
            "server.js",
        ]
    );
}

#[test]
fn styling_adds_exactly_one_config_file() {
    let files = render("demo", true, Layout::Nested);
    let configs = files
        .iter()
        .filter(|file| file.relative_path == Path::new("tailwind.config.js"))
        .count();
    assert_eq!(configs, 1);
    assert_eq!(files.len(), 7);
}

#[test]
fn env_file_references_project_database() {
    let files = render("demo", false, Layout::Nested);
    let env = find(&files, ".env");
    assert!(env
        .content
        .lines()
        .any(|line| line == "MONGO_URI=mongodb://localhost:27017/demo"));
    assert!(env.content.lines().any(|line| line == "NODE_ENV=development"));
}

#[test]
fn current_dir_scaffold_derives_names_from_cwd() {
    let request = ScaffoldRequest::new(".", false);
    let layout = ProjectLayout::resolve(&request, Path::new("/work/site"), Layout::Nested);
    let files = Templates::load()
        .unwrap()
        .render(&request, &layout)
        .unwrap();

    let env = find(&files, ".env");
    assert!(env
        .content
        .contains("MONGO_URI=mongodb://localhost:27017/site"));

    let manifest: serde_json::Value = serde_json::from_str(&find(&files, "package.json").content).unwrap();
    assert_eq!(manifest["name"], "site");
}

#[test]
fn manifest_scripts_reference_server_entry() {
    let files = render("demo", false, Layout::Nested);
    let manifest: serde_json::Value =
        serde_json::from_str(&find(&files, "package.json").content).unwrap();

    assert_eq!(manifest["name"], "demo");
    assert_eq!(manifest["main"], SERVER_ENTRY);
    assert_eq!(manifest["scripts"]["start"], format!("node {SERVER_ENTRY}"));
    assert_eq!(manifest["scripts"]["dev"], format!("nodemon {SERVER_ENTRY}"));
    for dependency in ["express", "cors", "dotenv", "mongoose", "next"] {
        assert!(
            manifest["dependencies"][dependency].is_string(),
            "missing runtime dependency: {dependency}"
        );
    }
    // the dev script depends on nodemon even without styling
    assert!(manifest["devDependencies"]["nodemon"].is_string());
    assert!(manifest["devDependencies"]["tailwindcss"].is_null());
}

#[test]
fn styled_manifest_carries_toolchain_dev_dependencies() {
    let files = render("demo", true, Layout::Nested);
    let manifest: serde_json::Value =
        serde_json::from_str(&find(&files, "package.json").content).unwrap();
    for dependency in ["tailwindcss", "postcss", "autoprefixer"] {
        assert!(
            manifest["devDependencies"][dependency].is_string(),
            "missing dev dependency: {dependency}"
        );
    }
}

#[test]
fn server_points_at_nested_frontend() {
    let files = render("demo", false, Layout::Nested);
    let server = find(&files, "server.js");
    assert!(server.content.contains("dir: 'client'"));
    assert!(server.content.contains("express.static('client/.next/static')"));
}

#[test]
fn server_colocates_with_flat_frontend() {
    let files = render("demo", false, Layout::Flat);
    let server = find(&files, "server.js");
    assert!(!server.content.contains("dir: 'client'"));
    assert!(server.content.contains("express.static('.next/static')"));
}

#[test]
fn tailwind_config_globs_follow_layout() {
    let nested = render("demo", true, Layout::Nested);
    let config = find(&nested, "tailwind.config.js");
    assert!(config.content.contains("./client/app/**/*"));

    let flat = render("demo", true, Layout::Flat);
    let config = find(&flat, "tailwind.config.js");
    assert!(config.content.contains("\"./app/**/*"));
}

#[test]
fn readme_names_the_project() {
    let files = render("demo", true, Layout::Nested);
    let readme = find(&files, "README.md");
    assert!(readme.content.starts_with("# demo"));
    assert!(readme.content.contains("Tailwind CSS"));

    let files = render("demo", false, Layout::Nested);
    let readme = find(&files, "README.md");
    assert!(!readme.content.contains("## Tailwind CSS"));
}

#[test]
fn write_all_emits_every_file() {
    let tmp = tempfile::tempdir().unwrap();
    let files = render("demo", true, Layout::Nested);

    template::write_all(tmp.path(), &files).unwrap();

    for file in &files {
        let on_disk = fs::read_to_string(tmp.path().join(&file.relative_path)).unwrap();
        assert_eq!(on_disk, file.content);
    }
}

#[test]
fn write_all_overwrites_existing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let files = render("demo", false, Layout::Nested);

    fs::write(tmp.path().join("server.js"), "stale contents").unwrap();
    template::write_all(tmp.path(), &files).unwrap();

    let server = fs::read_to_string(tmp.path().join("server.js")).unwrap();
    assert_eq!(server, find(&files, "server.js").content);
}
