use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

mod build;
mod config;
mod init;

#[derive(Parser)]
#[command(name = "mdsite", version, about = "Static site generator for Markdown content")]
struct Cli {
    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum RenderFormat {
    Html,
    Json,
    Terminal,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and render every content/**/index.md through the template
    Build {
        /// Directory holding the Markdown pages
        #[arg(long)]
        content: Option<String>,

        /// Directory of assets copied verbatim
        #[arg(long = "static")]
        static_dir: Option<String>,

        /// HTML template with {{ Title }} and {{ Content }} placeholders
        #[arg(long)]
        template: Option<String>,

        /// Output directory
        #[arg(long)]
        out: Option<String>,

        /// Prefix for root-relative links, e.g. /my-repo/
        #[arg(long)]
        basepath: Option<String>,

        /// Keep existing files in the output directory
        #[arg(long)]
        no_clean: bool,

        /// Show unchanged files too
        #[arg(long)]
        verbose: bool,

        /// Rebuild whenever a source file changes
        #[arg(long)]
        watch: bool,
    },

    /// Render a single Markdown file to stdout
    Render {
        /// Path to the .md file
        file: String,

        /// Output format
        #[arg(long, value_enum, default_value = "html")]
        format: RenderFormat,
    },

    /// Check that Markdown file(s) render and have a title
    Check {
        /// Path to the .md file(s)
        files: Vec<String>,
    },

    /// Scaffold a new site
    Init {
        /// Directory to initialize (default: current directory)
        path: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            content,
            static_dir,
            template,
            out,
            basepath,
            no_clean,
            verbose,
            watch,
        } => {
            let root = std::env::current_dir()?;
            let config = config::load_config(&root)?.apply(config::Overrides {
                content_dir: content,
                static_dir,
                template,
                out_dir: out,
                basepath,
                no_clean,
            });
            let opts = build::BuildOpts {
                verbose,
                quiet: cli.quiet,
            };

            let report = build::run_build(&root, &config, &opts)?;
            if !cli.quiet {
                report.print_summary();
            }
            if watch {
                build::watch_and_rebuild(&root, &config, &opts)?;
            }
        }
        Commands::Render { file, format } => {
            handle_render(&file, format)?;
        }
        Commands::Check { files } => {
            handle_check(&files)?;
        }
        Commands::Init { path } => {
            init::init_site(path.as_deref(), cli.quiet)?;
        }
    }

    Ok(())
}

fn handle_render(file: &str, format: RenderFormat) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

    let output = match format {
        RenderFormat::Html => mdsite_parse::markdown_to_html(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", file, e))?,
        RenderFormat::Json => {
            let blocks = mdsite_parse::parse_blocks(&content)
                .map_err(|e| anyhow::anyhow!("{}: {}", file, e))?;
            mdsite_parse::to_json(&blocks)?
        }
        RenderFormat::Terminal => mdsite_parse::render_term::to_terminal(&content)
            .map_err(|e| anyhow::anyhow!("{}: {}", file, e))?,
    };

    println!("{output}");
    Ok(())
}

fn handle_check(files: &[String]) -> Result<()> {
    let mut has_errors = false;

    for file in files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {}", file, e))?;

        let result = mdsite_parse::markdown_to_html(&content)
            .and_then(|_| mdsite_parse::extract_title(&content));

        match result {
            Ok(title) => println!("{}: {} {}", file, "OK".green(), format!("({title})").dimmed()),
            Err(e) => {
                has_errors = true;
                println!("{}: {}: {}", file, "error".red().bold(), e);
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }

    Ok(())
}
