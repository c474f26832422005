use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const DOC: &str = "# Title\n\nIntro line\n\n| A | B |\n|---|---|\n| 1 | 2 |\n";

/// A command isolated from the user's own config file.
fn m2d(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "[output]\njson_indent = 0\n").unwrap();
    }
    let mut cmd = Command::cargo_bin("m2d").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn convert_prints_compact_element_list() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);

    m2d(&dir)
        .arg("convert")
        .arg(&md)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"[{"header":{"level":1,"title":"Title"}},{"paragraph":"Intro line"}"#,
        ));
}

#[test]
fn convert_dict_nests_under_headers() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);

    m2d(&dir)
        .args(["convert", "--format", "dict"])
        .arg(&md)
        .assert()
        .success()
        .stdout(r#"{"Title":{"paragraph":"Intro line","table":{"A":["1"],"B":["2"]}}}"#.to_owned() + "\n");
}

#[test]
fn md_renders_json_from_stdin() {
    let dir = TempDir::new().unwrap();

    m2d(&dir)
        .args(["md", "--spacer", "0", "--exclude", "paragraph"])
        .write_stdin(r#"[{"header":{"level":2,"title":"T"}},{"paragraph":"p"},{"separator":"---"}]"#)
        .assert()
        .success()
        .stdout("## T\n---\n");
}

#[test]
fn md_rejects_negative_spacer() {
    let dir = TempDir::new().unwrap();

    m2d(&dir)
        .args(["md", "--spacer", "-1"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("spacer"));
}

#[test]
fn md_reports_malformed_element() {
    let dir = TempDir::new().unwrap();

    m2d(&dir)
        .arg("md")
        .write_stdin(r#"[{"header":{"level":9,"title":"T"}}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed header element at index 0"));
}

#[test]
fn extract_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);

    m2d(&dir)
        .args(["extract", "--kinds", "tables"])
        .arg(&md)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown element kind: tables"));
}

#[test]
fn extract_selects_kinds() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);

    m2d(&dir)
        .args(["extract", "--kinds", "table,h1"])
        .arg(&md)
        .assert()
        .success()
        .stdout(
            r#"[{"header":{"level":1,"title":"Title"}},{"table":{"A":["1"],"B":["2"]}}]"#
                .to_owned()
                + "\n",
        );
}

#[test]
fn info_counts_kinds() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);

    m2d(&dir)
        .arg("info")
        .arg(&md)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""table":{"count":1,"positions":[2]"#));
}

#[test]
fn tree_prints_outline() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);

    m2d(&dir)
        .arg("tree")
        .arg(&md)
        .assert()
        .success()
        .stdout("# Title\n  paragraph\n  table\n");
}

#[test]
fn output_flag_writes_file() {
    let dir = TempDir::new().unwrap();
    let md = write(&dir, "doc.md", DOC);
    let out = dir.path().join("out/doc.json");

    m2d(&dir)
        .args(["convert", "--compact", "-o"])
        .arg(&out)
        .arg(&md)
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(out).unwrap();
    assert!(written.starts_with(r#"[{"header""#));
    assert!(written.ends_with("]\n"));
}

#[test]
fn missing_config_file_is_an_error() {
    let mut cmd = Command::cargo_bin("m2d").unwrap();
    cmd.args(["--config", "/nonexistent/m2d.toml", "info"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
