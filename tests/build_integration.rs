//! Integration tests for `mdsite build`, `render`, `check` and `init`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn mdsite_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_mdsite"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("mdsite-build-test").join(name);
    // Clean up from previous runs
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// Build the fixture site `site_name` into `work/docs`, running from `work`.
fn build_fixture(site_name: &str, work: &Path, extra: &[&str]) -> Output {
    let site = fixture(site_name);
    let mut args = vec![
        "build".to_string(),
        "--quiet".to_string(),
        "--content".to_string(),
        site.join("content").display().to_string(),
        "--static".to_string(),
        site.join("static").display().to_string(),
        "--template".to_string(),
        site.join("template.html").display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));

    Command::new(mdsite_bin())
        .args(&args)
        .current_dir(work)
        .output()
        .expect("failed to run mdsite build")
}

#[test]
fn build_produces_page_tree() {
    let work = temp_dir("page-tree");
    let output = build_fixture("site", &work, &[]);
    assert!(output.status.success(), "mdsite build should succeed: {output:?}");

    let out = work.join("docs");
    assert!(out.join("index.html").exists(), "index.html should exist");
    assert!(
        out.join("blog/glorfindel/index.html").exists(),
        "nested page should exist"
    );
    assert!(
        !out.join("blog/glorfindel/notes.html").exists(),
        "only index.md becomes a page"
    );

    assert!(out.join("index.css").exists(), "static css should be copied");
    assert!(out.join("images/tolkien.png").exists(), "static images should be copied");

    let _ = fs::remove_dir_all(&work);
}

#[test]
fn build_fills_template() {
    let work = temp_dir("template");
    let output = build_fixture("site", &work, &[]);
    assert!(output.status.success());

    let html = fs::read_to_string(work.join("docs/index.html")).unwrap();
    assert!(html.contains("<title>Tolkien Fan Club</title>"));
    assert!(html.contains("<article><div><h1>Tolkien Fan Club</h1>"));
    assert!(!html.contains("{{ Content }}"));
    assert!(!html.contains("{{ Title }}"));

    let post = fs::read_to_string(work.join("docs/blog/glorfindel/index.html")).unwrap();
    assert!(post.contains("<title>Why Glorfindel is More Impressive than Legolas</title>"));
    assert!(post.contains("<b>heroism</b>"));

    let _ = fs::remove_dir_all(&work);
}

#[test]
fn build_rewrites_basepath() {
    let work = temp_dir("basepath");
    let output = build_fixture("site", &work, &["--basepath", "/fanclub"]);
    assert!(output.status.success());

    let html = fs::read_to_string(work.join("docs/index.html")).unwrap();
    assert!(html.contains("href=\"/fanclub/index.css\""));
    assert!(html.contains("src=\"/fanclub/images/tolkien.png\""));
    assert!(html.contains("href=\"/fanclub/blog/glorfindel\""));
    assert!(!html.contains("href=\"/index.css\""));

    let _ = fs::remove_dir_all(&work);
}

#[test]
fn build_reads_config_file() {
    let work = temp_dir("config-file");
    fs::write(
        work.join("mdsite.json"),
        r#"{ "outDir": "public", "basepath": "/cfg/" }"#,
    )
    .unwrap();

    let output = build_fixture("site", &work, &[]);
    assert!(output.status.success());
    let html = fs::read_to_string(work.join("public/index.html")).unwrap();
    assert!(html.contains("href=\"/cfg/index.css\""));

    // Flags beat the config file
    let output = build_fixture("site", &work, &["--out", "flagged"]);
    assert!(output.status.success());
    assert!(work.join("flagged/index.html").exists());

    let _ = fs::remove_dir_all(&work);
}

#[test]
fn build_cleans_output_unless_told_not_to() {
    let work = temp_dir("clean");
    let stale = work.join("docs/stale.html");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();

    fs::write(&stale, "old").unwrap();
    assert!(build_fixture("site", &work, &["--no-clean"]).status.success());
    assert!(stale.exists(), "--no-clean should keep existing files");

    assert!(build_fixture("site", &work, &[]).status.success());
    assert!(!stale.exists(), "default build should clean the output directory");

    let _ = fs::remove_dir_all(&work);
}

#[test]
fn build_fails_on_bad_markdown() {
    let work = temp_dir("broken");
    let site = fixture("broken");
    let output = Command::new(mdsite_bin())
        .args([
            "build",
            "--quiet",
            "--content",
            site.join("content").to_str().unwrap(),
            "--template",
            site.join("template.html").to_str().unwrap(),
        ])
        .current_dir(&work)
        .output()
        .expect("failed to run mdsite build");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("index.md"), "error should name the source: {stderr}");
    assert!(stderr.contains("Unterminated delimiter"), "got: {stderr}");

    let _ = fs::remove_dir_all(&work);
}

#[test]
fn render_html_to_stdout() {
    let output = Command::new(mdsite_bin())
        .args(["render", fixture("site/content/blog/glorfindel/index.md").to_str().unwrap()])
        .output()
        .expect("failed to run mdsite render");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("<div><h1>Why Glorfindel is More Impressive than Legolas</h1>"));
}

#[test]
fn render_json_ast() {
    let output = Command::new(mdsite_bin())
        .args([
            "render",
            fixture("site/content/index.md").to_str().unwrap(),
            "--format",
            "json",
        ])
        .output()
        .expect("failed to run mdsite render");

    assert!(output.status.success());
    let blocks: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(blocks[0]["block_type"], "heading");
    assert_eq!(blocks[0]["level"], 1);
    assert_eq!(blocks.as_array().map(Vec::len), Some(9));
}

#[test]
fn check_reports_failures() {
    let output = Command::new(mdsite_bin())
        .args([
            "check",
            fixture("site/content/index.md").to_str().unwrap(),
            fixture("untitled.md").to_str().unwrap(),
        ])
        .output()
        .expect("failed to run mdsite check");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("OK"));
    assert!(stdout.contains("No H1 heading"));
}

#[test]
fn init_then_build() {
    let work = temp_dir("init");
    let site = work.join("garden");

    let status = Command::new(mdsite_bin())
        .args(["init", site.to_str().unwrap(), "--quiet"])
        .status()
        .expect("failed to run mdsite init");
    assert!(status.success());
    assert!(site.join("mdsite.json").exists());

    let status = Command::new(mdsite_bin())
        .args(["build", "--quiet"])
        .current_dir(&site)
        .status()
        .expect("failed to run mdsite build");
    assert!(status.success());

    let html = fs::read_to_string(site.join("docs/index.html")).unwrap();
    assert!(html.contains("<title>garden</title>"));
    assert!(site.join("docs/index.css").exists());

    let _ = fs::remove_dir_all(&work);
}
