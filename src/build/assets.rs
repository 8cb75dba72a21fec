use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::{BuildOpts, BuildReport, print_status, write_if_changed};

/// Alternate data streams copied over from Windows (`name:Zone.Identifier`)
/// and similar names with a colon are never published.
fn is_skipped(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().contains(':')
}

/// Copy the static tree from `src` into `dst`, preserving layout.
///
/// Files whose content already matches the destination are left alone.
pub fn copy_static(src: &Path, dst: &Path, opts: &BuildOpts, report: &mut BuildReport) -> Result<()> {
    let walker = WalkDir::new(src)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_skipped(entry));

    for entry in walker {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src)?;
        let dest_path = dst.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path)
                .with_context(|| format!("Failed to create {}", dest_path.display()))?;
            continue;
        }

        let bytes = fs::read(entry.path())
            .with_context(|| format!("Failed to read {}", entry.path().display()))?;
        let status = write_if_changed(&dest_path, &bytes)?;
        report.assets.record(status);
        print_status(status, &rel.display().to_string(), opts);
    }

    report.skipped_assets += count_skipped(src);
    Ok(())
}

fn count_skipped(src: &Path) -> usize {
    WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(is_skipped)
        .count()
}
