use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Scaffold a new site at the given path.
///
/// Existing files are never overwritten.
pub fn init_site(path: Option<&str>, quiet: bool) -> Result<()> {
    let target = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let site_name = target
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "my-site".to_string());

    if !quiet {
        println!(
            "{} {} at {}",
            "Initializing".green().bold(),
            site_name,
            target.display()
        );
    }

    let files = [
        (CONFIG_FILE, generate_config_json()),
        ("content/index.md", generate_index_md(&site_name)),
        ("static/index.css", STARTER_CSS.to_string()),
        ("template.html", STARTER_TEMPLATE.to_string()),
    ];

    for (rel, contents) in &files {
        let created = write_new(&target, rel, contents)?;
        if !quiet {
            if created {
                println!("  {} {}", "Created".green(), rel);
            } else {
                println!("  {} {} (exists)", "Kept".dimmed(), rel);
            }
        }
    }

    if !quiet {
        println!();
        println!("{}", "Done! Next steps:".bold());
        println!("  1. Write pages as content/<path>/index.md");
        println!("  2. Run `mdsite build` to generate the site into docs/");
    }

    Ok(())
}

/// Write `contents` to `root/rel` unless the file already exists.
fn write_new(root: &Path, rel: &str, contents: &str) -> Result<bool> {
    let path = root.join(rel);
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(true)
}

fn generate_config_json() -> String {
    let config = serde_json::json!({
        "contentDir": "content",
        "staticDir": "static",
        "template": "template.html",
        "outDir": "docs",
        "basepath": "/",
        "clean": true,
    });
    serde_json::to_string_pretty(&config).unwrap_or_default() + "\n"
}

fn generate_index_md(name: &str) -> String {
    // Inline markers in a directory name would be unpaired delimiters.
    let name = name.replace(['_', '*', '`'], " ");
    format!(
        "# {name}\n\
         \n\
         Welcome to **{name}**.\n\
         \n\
         - Edit `content/index.md` to change this page\n\
         - Add pages as `content/<path>/index.md`\n"
    )
}

const STARTER_CSS: &str = "body {
  max-width: 48rem;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  font-family: -apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif;
  line-height: 1.7;
}

pre {
  padding: 1rem;
  overflow-x: auto;
  background: #f4f4f4;
}

blockquote {
  border-left: 3px solid #3b82f6;
  padding-left: 1rem;
}
";

const STARTER_TEMPLATE: &str = "<!doctype html>
<html>
  <head>
    <meta charset=\"utf-8\" />
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />
    <title>{{ Title }}</title>
    <link href=\"/index.css\" rel=\"stylesheet\" />
  </head>
  <body>
    <article>{{ Content }}</article>
  </body>
</html>
";
