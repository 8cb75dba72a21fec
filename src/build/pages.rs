use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{BuildOpts, BuildReport, FileStatus, print_status, write_if_changed};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Source file name that becomes a page.
const PAGE_SOURCE: &str = "index.md";
const PAGE_OUTPUT: &str = "index.html";

/// Fill `template` with the rendered document and its title.
///
/// Root-relative `href="/` and `src="/` links anywhere in the result are
/// rewritten to start with `basepath`.
pub fn render_page(markdown: &str, template: &str, basepath: &str) -> Result<String> {
    let content = mdsite_parse::markdown_to_html(markdown)?;
    let title = mdsite_parse::extract_title(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace("href=\"/", &format!("href=\"{basepath}"))
        .replace("src=\"/", &format!("src=\"{basepath}"));
    Ok(page)
}

/// Render one Markdown file through the template into `dest_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    basepath: &str,
) -> Result<FileStatus> {
    let markdown = fs::read_to_string(from_path)
        .with_context(|| format!("Failed to read {}", from_path.display()))?;
    let template = fs::read_to_string(template_path)
        .with_context(|| format!("Failed to read {}", template_path.display()))?;

    let page = render_page(&markdown, &template, basepath)
        .with_context(|| format!("Failed to render {}", from_path.display()))?;

    write_if_changed(dest_path, page.as_bytes())
}

/// Generate `index.html` for every `index.md` under `content_dir`, mirroring
/// the directory layout under `dest_dir`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    basepath: &str,
    opts: &BuildOpts,
    report: &mut BuildReport,
) -> Result<()> {
    for entry in WalkDir::new(content_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() != PAGE_SOURCE {
            continue;
        }

        let rel_dir = entry
            .path()
            .parent()
            .and_then(|dir| dir.strip_prefix(content_dir).ok())
            .unwrap_or_else(|| Path::new(""));
        let dest_path = dest_dir.join(rel_dir).join(PAGE_OUTPUT);

        let status = generate_page(entry.path(), template_path, &dest_path, basepath)?;
        report.pages.record(status);

        let label = rel_dir.join(PAGE_OUTPUT);
        print_status(status, &label.display().to_string(), opts);
    }

    Ok(())
}
