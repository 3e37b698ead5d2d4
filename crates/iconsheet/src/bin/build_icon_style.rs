//! Build themed icon stylesheets from a directory of per-theme SVG folders.
//!
//! Run with: build-icon-style <SRC_DIR> <DEST_DIR> [INCLUDE_THEMES] [-d]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use iconsheet::cli::{exit_with, init_logging, parse_named};
use iconsheet::require_argument;
use iconsheet::style::options::{EmitOptions, OutputLayout, StyleVariant, parse_theme_list};
use iconsheet::style::rules::OutputFormat;
use iconsheet::style::selector::ThemeScope;
use iconsheet::style::{Result, emitter::StyleEmitter};

#[derive(Parser, Debug)]
#[command(name = "build-icon-style", version, about, long_about = None)]
struct Cli {
    /// Directory holding one subdirectory of SVG icons per theme
    src_dir: String,

    /// Output directory, emptied before every build
    dest_dir: String,

    /// Comma-separated themes to include (default: all)
    include_themes: Option<String>,

    /// Also write the icon maps as JSON
    #[arg(short, long)]
    debug: bool,

    /// TOML file with emitter options
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Icon property scheme: background or mask
    #[arg(long, value_parser = parse_named("variant", StyleVariant::from_name))]
    variant: Option<StyleVariant>,

    /// Theme selector: body-data-theme, data-icon-theme or ancestor-class
    #[arg(long, value_parser = parse_named("scope", ThemeScope::from_name))]
    scope: Option<ThemeScope>,

    /// File layout: per-theme or combined
    #[arg(long, value_parser = parse_named("layout", OutputLayout::from_name))]
    layout: Option<OutputLayout>,

    /// Stylesheet syntax: scss or css
    #[arg(long, value_parser = parse_named("format", OutputFormat::from_name))]
    format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Options from the config file (or defaults) with flags applied on top.
    fn options(&self) -> Result<EmitOptions> {
        let mut options = match self.config {
            Some(ref path) => EmitOptions::from_file(path)?,
            None => EmitOptions::default(),
        };

        if let Some(ref csv) = self.include_themes {
            let themes = parse_theme_list(csv);
            if !themes.is_empty() {
                options.include_themes = Some(themes);
            }
        }
        if self.debug {
            options.debug = true;
        }
        if let Some(variant) = self.variant {
            options.variant = variant;
        }
        if let Some(scope) = self.scope {
            options.scope = scope;
        }
        if let Some(layout) = self.layout {
            options.layout = layout;
        }
        if let Some(format) = self.format {
            options.format = format;
        }

        Ok(options)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let src_dir = require_argument("srcDir", &cli.src_dir)?;
    let dest_dir = require_argument("destDir", &cli.dest_dir)?;

    let options = cli.options()?;
    tracing::debug!(?options, "resolved options");

    let report = StyleEmitter::new(options).build(src_dir, dest_dir)?;
    tracing::info!(
        themes = report.themes.len(),
        rules = report.rules,
        "wrote {} files",
        report.files.len()
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    exit_with(run(&cli))
}
