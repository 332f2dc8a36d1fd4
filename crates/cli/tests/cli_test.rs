#![cfg(unix)]
#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn bazel_lens(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bazel-lens").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        // `sh query ...` runs the fake `query` script at the workspace root
        .env("BAZEL_LENS_BAZEL", "sh");
    cmd
}

/// Workspace at the temp dir root with a `pkg/BUILD` file and a fake query script
fn workspace_with_query(script: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("WORKSPACE"), "").unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg").join("BUILD"), "").unwrap();
    fs::write(dir.path().join("query"), script).unwrap();
    dir
}

const TWO_RULES: &str = r#"[ "$1" = "kind(rule, //pkg:all)" ] || { echo "unexpected expression $1" >&2; exit 9; }
printf '{"type":"RULE","rule":{"name":"//pkg:mylib","ruleClass":"go_library","location":"%s/pkg/BUILD:1:1"}}\n' "$PWD"
printf '{"type":"RULE","rule":{"name":"//pkg:mylib_test","ruleClass":"go_test","location":"%s/pkg/BUILD:6:1"}}\n' "$PWD"
"#;

// ---------------------------------------------------------------------------
// bazel-lens root / label
// ---------------------------------------------------------------------------

#[test]
fn root_prints_workspace_directory() {
    let dir = workspace_with_query("");
    bazel_lens(dir.path())
        .args(["root", "pkg/BUILD"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().canonicalize().unwrap().to_string_lossy().into_owned(),
        ));
}

#[test]
fn label_prints_package_label() {
    let dir = workspace_with_query("");
    bazel_lens(dir.path())
        .args(["label", "pkg/BUILD"])
        .assert()
        .success()
        .stdout("//pkg\n");

    bazel_lens(dir.path())
        .args(["label", "WORKSPACE"])
        .assert()
        .success()
        .stdout("//\n");
}

#[test]
fn parent_dir_path_is_not_assigned_to_a_sibling_workspace() {
    // <tmp>/a is a workspace; <tmp>/c is not inside it
    let dir = TempDir::new().unwrap();
    let cwd = dir.path().join("a").join("b");
    fs::create_dir_all(&cwd).unwrap();
    fs::write(dir.path().join("a").join("WORKSPACE"), "").unwrap();
    fs::create_dir_all(dir.path().join("c")).unwrap();
    fs::write(dir.path().join("c").join("BUILD"), "").unwrap();

    bazel_lens(&cwd)
        .args(["label", "../../c/BUILD"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not in a Bazel workspace"));

    bazel_lens(&cwd)
        .args(["root", "../../c/BUILD"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("not in a Bazel workspace"));
}

#[test]
fn parent_dir_path_inside_workspace_gets_its_real_label() {
    let dir = workspace_with_query("");
    fs::create_dir_all(dir.path().join("other")).unwrap();

    bazel_lens(&dir.path().join("other"))
        .args(["label", "../pkg/BUILD"])
        .assert()
        .success()
        .stdout("//pkg\n");
}

#[test]
fn root_outside_workspace_fails_with_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("BUILD"), "").unwrap();

    bazel_lens(dir.path())
        .args(["root", "BUILD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in a Bazel workspace"));
}

// ---------------------------------------------------------------------------
// bazel-lens lens
// ---------------------------------------------------------------------------

#[test]
fn lens_json_lists_actions_in_query_order() {
    let dir = workspace_with_query(TWO_RULES);
    let output = bazel_lens(dir.path())
        .args(["lens", "pkg/BUILD", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let actions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let actions = actions.as_array().unwrap();
    assert_eq!(actions.len(), 2);

    assert_eq!(actions[0]["title"], "Build //pkg:mylib");
    assert_eq!(actions[0]["actionKind"], "Build");
    assert_eq!(actions[0]["command"], "bazel.buildTarget");
    assert_eq!(actions[0]["arguments"]["options"], serde_json::json!(["//pkg:mylib"]));

    assert_eq!(actions[1]["title"], "Test //pkg:mylib_test");
    assert_eq!(actions[1]["actionKind"], "Test");
    assert_eq!(actions[1]["command"], "bazel.testTarget");
    assert_eq!(actions[1]["anchor"]["line"], 6);

    let root = actions[0]["arguments"]["workingDirectory"].as_str().unwrap();
    assert_eq!(Path::new(root), dir.path().canonicalize().unwrap());
}

#[test]
fn lens_prints_formatted_actions() {
    let dir = workspace_with_query(TWO_RULES);
    bazel_lens(dir.path())
        .args(["lens", "pkg/BUILD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🔨 Build //pkg:mylib (line 1, column 1)"))
        .stdout(predicate::str::contains("🧪 Test //pkg:mylib_test (line 6, column 1)"))
        .stdout(predicate::str::contains("✅ 2 action(s)"));
}

#[test]
fn lens_outside_workspace_is_empty_with_warning() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("BUILD"), "").unwrap();

    bazel_lens(dir.path())
        .args(["lens", "BUILD", "--json"])
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains(
            "Bazel BUILD CodeLens unavailable as currently opened file is not in a Bazel workspace",
        ));
}

#[test]
fn lens_query_failure_is_reported_as_warning() {
    let dir = workspace_with_query("echo 'ERROR: no such package' >&2\nexit 2\n");

    bazel_lens(dir.path())
        .args(["lens", "pkg/BUILD", "--json"])
        .assert()
        .success()
        .stdout("[]\n")
        .stderr(predicate::str::contains("Bazel query failed"))
        .stderr(predicate::str::contains("ERROR: no such package"));
}

#[test]
fn lens_missing_file_fails_without_querying() {
    let dir = workspace_with_query("touch query-ran\n");

    bazel_lens(dir.path())
        .args(["lens", "pkg/BUILD.typo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    assert!(!dir.path().join("query-ran").exists());
}

#[test]
fn lens_rejects_invalid_settings() {
    let dir = workspace_with_query(TWO_RULES);
    fs::write(dir.path().join(".bazel-lens.json"), "{ broken").unwrap();

    bazel_lens(dir.path())
        .args(["lens", "pkg/BUILD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load bazel-lens settings"));
}

#[test]
fn lens_honors_configured_query_options() {
    let dir = workspace_with_query(
        r#"[ "$3" = "--keep_going" ] || { echo "missing option" >&2; exit 4; }
printf '{"type":"RULE","rule":{"name":"//pkg:bin","ruleClass":"sh_binary","location":"BUILD:2:1"}}\n'
"#,
    );
    fs::write(
        dir.path().join(".bazel-lens.json"),
        r#"{ "query_options": ["--keep_going"] }"#,
    )
    .unwrap();

    bazel_lens(dir.path())
        .args(["lens", "pkg/BUILD", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Build //pkg:bin"));
}
