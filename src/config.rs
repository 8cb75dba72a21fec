use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "mdsite.json";

/// Top-level mdsite.json schema.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Prefix for root-relative `href="/` and `src="/` links.
    #[serde(default = "default_basepath")]
    pub basepath: String,

    /// Remove the output directory before building.
    #[serde(default = "default_clean")]
    pub clean: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            static_dir: default_static_dir(),
            template: default_template(),
            out_dir: default_out_dir(),
            basepath: default_basepath(),
            clean: default_clean(),
        }
    }
}

fn default_content_dir() -> String {
    "content".to_string()
}
fn default_static_dir() -> String {
    "static".to_string()
}
fn default_template() -> String {
    "template.html".to_string()
}
fn default_out_dir() -> String {
    "docs".to_string()
}
fn default_basepath() -> String {
    "/".to_string()
}
fn default_clean() -> bool {
    true
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub content_dir: Option<String>,
    pub static_dir: Option<String>,
    pub template: Option<String>,
    pub out_dir: Option<String>,
    pub basepath: Option<String>,
    pub no_clean: bool,
}

impl SiteConfig {
    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.content_dir {
            self.content_dir = dir;
        }
        if let Some(dir) = overrides.static_dir {
            self.static_dir = dir;
        }
        if let Some(template) = overrides.template {
            self.template = template;
        }
        if let Some(dir) = overrides.out_dir {
            self.out_dir = dir;
        }
        if let Some(basepath) = overrides.basepath {
            self.basepath = basepath;
        }
        if overrides.no_clean {
            self.clean = false;
        }
        self
    }

    /// The basepath with exactly one trailing `/`.
    pub fn basepath(&self) -> String {
        format!("{}/", self.basepath.trim_end_matches('/'))
    }
}

/// Load config from an mdsite.json file, or return defaults if missing.
pub fn load_config(root: &Path) -> Result<SiteConfig> {
    let config_path = root.join(CONFIG_FILE);

    if config_path.exists() {
        let raw = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: SiteConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(config)
    } else {
        Ok(SiteConfig::default())
    }
}
