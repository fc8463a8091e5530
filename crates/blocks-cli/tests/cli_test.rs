/// End-to-end tests for the building-blocks CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

const FORM_PARTS: &[&str] = &["formrenderer", "select", "multiselect", "input", "datepicker"];

/// Temp workspace with a template tree and an empty project directory
struct Workspace {
    _tmp: TempDir,
    templates: PathBuf,
    project: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let templates = tmp.path().join("templates");
        let project = tmp.path().join("project");
        fs::create_dir_all(&project).unwrap();

        for dir in FORM_PARTS.iter().chain(&["button", "card"]) {
            let component = templates.join("components").join(dir);
            fs::create_dir_all(&component).unwrap();
            fs::write(component.join("index.tsx"), format!("// {dir}")).unwrap();
        }
        fs::write(templates.join("utils.ts"), "export {};").unwrap();
        fs::write(templates.join("globalStyle.ts"), "export {};").unwrap();
        fs::create_dir_all(templates.join("icon")).unwrap();
        fs::write(templates.join("icon/Icon.tsx"), "icon").unwrap();

        Self {
            _tmp: tmp,
            templates,
            project,
        }
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = cargo_bin_cmd!("building-blocks");
        cmd.current_dir(&self.project)
            .env_remove("BUILDING_BLOCKS_TEMPLATE_DIR")
            .arg("--template-dir")
            .arg(&self.templates);
        cmd
    }

    fn lib(&self) -> PathBuf {
        self.project.join("component-lib")
    }
}

fn file_count(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}

#[test]
fn test_list_prints_catalog_with_dependencies() {
    let ws = Workspace::new();
    ws.cmd()
        .arg("--list")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Available components:"))
        .stdout(predicate::str::contains(
            "- FormRenderer (requires: Select, MultiSelect, Input, DatePicker)",
        ))
        .stdout(predicate::str::contains("- Button\n"));

    assert!(!ws.lib().exists());
}

#[test]
fn test_no_flags_exits_with_usage_hint() {
    let ws = Workspace::new();
    ws.cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--add"))
        .stderr(predicate::str::contains(
            "Run 'building-blocks --list' to see available Building Blocks components.",
        ));
}

#[test]
fn test_unknown_component_lists_catalog() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["--add", "DoesNotExist"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid component: DoesNotExist"))
        .stdout(predicate::str::contains("- DataGrid"));

    assert!(!ws.lib().exists());
}

#[test]
fn test_component_names_are_case_sensitive() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["-a", "button"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid component: button"));
}

#[test]
fn test_form_renderer_install_then_rerun() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["--add", "FormRenderer"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("utils.ts copied successfully"))
        .stdout(predicate::str::contains(
            "Component FormRenderer installed successfully",
        ))
        .stdout(predicate::str::contains("Installed dependencies for FormRenderer:"))
        .stdout(predicate::str::contains("- DatePicker"))
        .stdout(predicate::str::contains("For documentation visit:"));

    for dir in FORM_PARTS {
        assert!(ws.lib().join(dir).join("index.tsx").is_file(), "{dir}");
    }
    let files_after_first = file_count(&ws.lib());

    ws.cmd()
        .args(["--add", "FormRenderer"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "FormRenderer and all its dependencies are already installed.",
        ))
        .stdout(predicate::str::contains("copied successfully").not())
        .stdout(predicate::str::contains("installed successfully").not());

    assert_eq!(file_count(&ws.lib()), files_after_first);
}

#[test]
fn test_button_has_no_dependency_section() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["-a", "Button"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Component Button installed successfully"))
        .stdout(predicate::str::contains("Installed dependencies").not());

    assert!(ws.lib().join("button/index.tsx").is_file());
    assert!(ws.lib().join("globalStyle.ts").is_file());
}

#[test]
fn test_missing_template_fails_with_exit_one() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["--add", "Modal"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error installing component Modal"));

    assert!(!ws.lib().join("modal").exists());
}

#[test]
fn test_missing_shared_file_reports_and_writes_nothing() {
    let ws = Workspace::new();
    fs::remove_file(ws.templates.join("globalStyle.ts")).unwrap();

    ws.cmd()
        .args(["-a", "Button"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error copying shared file globalStyle.ts:",
        ))
        .stderr(predicate::str::contains(
            "globalStyle.ts not found in source directory",
        ))
        .stdout(predicate::str::contains("copied successfully").not());

    assert!(!ws.lib().join("utils.ts").exists());
    assert!(!ws.lib().join("button").exists());

    fs::write(ws.templates.join("globalStyle.ts"), "export {};").unwrap();
    ws.cmd().args(["-a", "Button"]).assert().code(0);
    assert!(ws.lib().join("utils.ts").is_file());
    assert!(ws.lib().join("globalStyle.ts").is_file());
}

#[test]
fn test_catalog_manifest_overrides_builtin() {
    let ws = Workspace::new();
    fs::write(
        ws.templates.join("catalog.yaml"),
        "docs_url: https://docs.example.com\n\
         components:\n  - name: Card\n  - name: Button\n    requires: [Card]\n    notice: Button v1 is deprecated.\n",
    )
    .unwrap();

    ws.cmd()
        .args(["-a", "Button"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Button v1 is deprecated."))
        .stdout(predicate::str::contains("Component Card installed successfully"))
        .stdout(predicate::str::contains(
            "For documentation visit: https://docs.example.com",
        ));

    ws.cmd()
        .args(["-a", "FormRenderer"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid component: FormRenderer"));
}

#[test]
fn test_broken_catalog_manifest_is_fatal() {
    let ws = Workspace::new();
    fs::write(
        ws.templates.join("catalog.yaml"),
        "components:\n  - name: Button\n    requires: [Ghost]\n",
    )
    .unwrap();

    ws.cmd()
        .arg("--list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Ghost"));
}

#[test]
fn test_invalid_option_is_usage_error() {
    cargo_bin_cmd!("building-blocks")
        .arg("--invalid-option")
        .assert()
        .code(2);
}

#[test]
fn test_help_succeeds() {
    cargo_bin_cmd!("building-blocks")
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("--add"))
        .stdout(predicate::str::contains(
            "CLI for copying Building Blocks components into your project",
        ));
}
