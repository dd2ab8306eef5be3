//! Command-line driver: load a configuration, draw it, optionally keep
//! redrawing while the file changes.

use crate::backends::{SvgPen, TerminalPen};
use crate::watcher::{is_content_change, ConfigWatcher};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::{Path, PathBuf};
use stitch_core::{render, RenderConfig};

/// Render repeating stitch patterns over a grid
#[derive(Parser, Debug)]
#[command(name = "stitchgrid", version, about)]
pub struct Args {
    /// JSON render configuration (built-in pattern if omitted)
    pub config: Option<PathBuf>,

    /// Write the drawing to an SVG file
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Draw a preview in the terminal (default when --svg is not given)
    #[arg(long)]
    pub preview: bool,

    /// Redraw whenever the configuration file changes
    #[arg(long, requires = "config")]
    pub watch: bool,

    /// Draw the background reference grid
    #[arg(long)]
    pub show_grid: bool,

    /// Only show the finished drawing, not each layer as it is added
    #[arg(long)]
    pub no_animation: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl Args {
    /// Load the configuration and apply command-line overrides
    pub fn load_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };
        if self.show_grid {
            config.background.enabled = true;
        }
        if self.no_animation {
            config.no_animation = true;
        }
        config.validate()?;
        Ok(config)
    }

    fn wants_preview(&self) -> bool {
        self.preview || self.svg.is_none()
    }
}

pub fn run(args: &Args) -> Result<()> {
    let config = args.load_config()?;

    if args.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    draw(&config, args)?;

    if args.watch {
        if let Some(path) = &args.config {
            watch(path, args)?;
        }
    }
    Ok(())
}

/// One full render to every requested output
fn draw(config: &RenderConfig, args: &Args) -> Result<()> {
    if let Some(path) = &args.svg {
        let mut pen = SvgPen::new();
        let stats = render(config, &mut pen);
        pen.save(path)?;
        println!(
            "{} Wrote {} to {}",
            "✓".bright_green(),
            stats,
            path.display().to_string().cyan()
        );
    }

    if args.wants_preview() {
        let mut pen = TerminalPen::stdout(config.grid());
        let stats = render(config, &mut pen);
        pen.finish().context("failed to print preview")?;
        log::info!("preview: {}", stats);
    }
    Ok(())
}

/// Reload the configuration and draw it again
fn redraw(args: &Args) -> Result<()> {
    let config = args.load_config()?;
    draw(&config, args)
}

fn watch(path: &Path, args: &Args) -> Result<()> {
    let (_watcher, rx) = ConfigWatcher::watching(path)
        .with_context(|| format!("failed to watch {}", path.display()))?;

    println!(
        "{} Watching {} for changes (Ctrl+C to stop)",
        "👀".bright_yellow(),
        path.display().to_string().cyan()
    );

    for result in rx {
        match result {
            Ok(event) if is_content_change(&event) => {
                println!("{} {}", "↻".bright_blue(), "Configuration changed, redrawing".bold());
                // Keep watching; the next save may fix it
                if let Err(e) = redraw(args) {
                    println!("{} {:#}", "Error:".bright_red().bold(), e);
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("watch error: {}", e),
        }
    }
    Ok(())
}
