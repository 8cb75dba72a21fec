pub mod assets;
pub mod pages;

use anyhow::{Context, Result};
use colored::Colorize;
use notify::{EventKind, RecursiveMode, Watcher};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::config::SiteConfig;

/// Options passed from CLI to the build pipeline.
pub struct BuildOpts {
    pub verbose: bool,
    pub quiet: bool,
}

/// Result status for a single output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    New,
    Updated,
    Unchanged,
}

/// Per-kind tally of written files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub new: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl Tally {
    pub fn record(&mut self, status: FileStatus) {
        match status {
            FileStatus::New => self.new += 1,
            FileStatus::Updated => self.updated += 1,
            FileStatus::Unchanged => self.unchanged += 1,
        }
    }

    fn describe(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.new > 0 {
            parts.push(format!("{} new", self.new));
        }
        if self.updated > 0 {
            parts.push(format!("{} updated", self.updated));
        }
        if self.unchanged > 0 {
            parts.push(format!("{} unchanged", self.unchanged));
        }
        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

/// Aggregate report from the build pipeline.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Tally,
    pub assets: Tally,
    pub skipped_assets: usize,
    pub warnings: Vec<String>,
}

impl BuildReport {
    pub fn print_summary(&self) {
        println!();
        println!("{}", "Build complete!".green().bold());

        if let Some(pages) = self.pages.describe() {
            println!("Pages: {pages}");
        }
        if let Some(assets) = self.assets.describe() {
            println!("Assets: {assets}");
        }
        if self.skipped_assets > 0 {
            println!("Skipped: {} file(s)", self.skipped_assets);
        }

        for w in &self.warnings {
            println!("{} {}", "WARNING:".yellow(), w);
        }
    }
}

/// Print one file status line, the way every build step reports progress.
pub(crate) fn print_status(status: FileStatus, label: &str, opts: &BuildOpts) {
    if opts.quiet {
        return;
    }
    match status {
        FileStatus::New => println!("  {} {} (new)", "+".green(), label),
        FileStatus::Updated => println!("  {} {} (updated)", "~".yellow(), label),
        FileStatus::Unchanged => {
            if opts.verbose {
                println!("  {} {} (unchanged)", "-".dimmed(), label);
            }
        }
    }
}

/// SHA-256 of a byte slice, hex encoded.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Write `bytes` to `dst` unless it already holds exactly that content.
pub fn write_if_changed(dst: &Path, bytes: &[u8]) -> Result<FileStatus> {
    let status = if dst.exists() {
        let existing =
            fs::read(dst).with_context(|| format!("Failed to read {}", dst.display()))?;
        if content_hash(&existing) == content_hash(bytes) {
            return Ok(FileStatus::Unchanged);
        }
        FileStatus::Updated
    } else {
        FileStatus::New
    };

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(dst, bytes).with_context(|| format!("Failed to write {}", dst.display()))?;
    Ok(status)
}

/// Resolved input and output locations for one build.
struct SitePaths {
    content: PathBuf,
    static_dir: PathBuf,
    template: PathBuf,
    out: PathBuf,
}

impl SitePaths {
    fn resolve(root: &Path, config: &SiteConfig) -> Self {
        Self {
            content: root.join(&config.content_dir),
            static_dir: root.join(&config.static_dir),
            template: root.join(&config.template),
            out: root.join(&config.out_dir),
        }
    }
}

/// Refuse to delete a directory that holds the site's own inputs.
fn check_clean_target(root: &Path, paths: &SitePaths) -> Result<()> {
    let out = paths.out.canonicalize().unwrap_or_else(|_| paths.out.clone());
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    for input in [&paths.content, &paths.static_dir, &paths.template] {
        let input = input.canonicalize().unwrap_or_else(|_| input.clone());
        if out == root || input.starts_with(&out) {
            anyhow::bail!(
                "Refusing to clean output directory {}: it contains site sources",
                out.display()
            );
        }
    }
    Ok(())
}

/// Run the full build pipeline: clean, copy static assets, generate pages.
pub fn run_build(root: &Path, config: &SiteConfig, opts: &BuildOpts) -> Result<BuildReport> {
    let paths = SitePaths::resolve(root, config);
    let basepath = config.basepath();
    let mut report = BuildReport::default();

    if !opts.quiet {
        println!(
            "{} {} {}",
            "mdsite build".bold(),
            format!("basepath {basepath}").dimmed(),
            format!("in {}", root.display()).dimmed()
        );
    }

    if !paths.content.is_dir() {
        anyhow::bail!("Content directory not found: {}", paths.content.display());
    }
    if !paths.template.is_file() {
        anyhow::bail!("Template not found: {}", paths.template.display());
    }

    if config.clean && paths.out.exists() {
        check_clean_target(root, &paths)?;
        fs::remove_dir_all(&paths.out)
            .with_context(|| format!("Failed to clean {}", paths.out.display()))?;
    }
    fs::create_dir_all(&paths.out)
        .with_context(|| format!("Failed to create {}", paths.out.display()))?;

    if !opts.quiet {
        println!();
        println!("{}", "[Assets]".bold());
    }
    if paths.static_dir.is_dir() {
        assets::copy_static(&paths.static_dir, &paths.out, opts, &mut report)?;
    } else {
        report.warnings.push(format!(
            "Static directory not found: {} -- skipping assets",
            paths.static_dir.display()
        ));
    }

    if !opts.quiet {
        println!();
        println!("{}", "[Pages]".bold());
    }
    pages::generate_pages_recursive(
        &paths.content,
        &paths.template,
        &paths.out,
        &basepath,
        opts,
        &mut report,
    )?;

    if report.pages == Tally::default() {
        report.warnings.push(format!(
            "No index.md files found under {}",
            paths.content.display()
        ));
    }

    Ok(report)
}

/// Watch the site sources and rebuild on each change.
///
/// Debounces rapid events (e.g. editors that write in stages) with a 200ms window.
/// Rebuilds after the first never clean the output directory. Ctrl+C exits.
pub fn watch_and_rebuild(root: &Path, config: &SiteConfig, opts: &BuildOpts) -> Result<()> {
    let paths = SitePaths::resolve(root, config);
    let out = paths.out.canonicalize().unwrap_or_else(|_| paths.out.clone());

    let rebuild_config = SiteConfig {
        clean: false,
        ..config.clone()
    };

    println!(
        "{} {} for changes (Ctrl+C to stop)",
        "Watching".cyan().bold(),
        root.display()
    );

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    watcher.watch(&paths.content, RecursiveMode::Recursive)?;
    watcher.watch(&paths.template, RecursiveMode::NonRecursive)?;
    if paths.static_dir.is_dir() {
        watcher.watch(&paths.static_dir, RecursiveMode::Recursive)?;
    }

    let mut last_rebuild = Instant::now();
    let debounce = Duration::from_millis(200);

    loop {
        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(event) => {
                let relevant = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );
                let outside_output = event.paths.iter().any(|p| !p.starts_with(&out));

                if relevant && outside_output && last_rebuild.elapsed() > debounce {
                    // Small delay to let the editor finish writing
                    std::thread::sleep(Duration::from_millis(50));

                    match run_build(root, &rebuild_config, opts) {
                        Ok(report) => {
                            if !opts.quiet {
                                report.print_summary();
                            }
                        }
                        Err(e) => {
                            eprintln!("{} {:#}", "Build error:".red().bold(), e);
                        }
                    }
                    last_rebuild = Instant::now();
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
