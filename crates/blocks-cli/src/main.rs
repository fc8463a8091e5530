//! Building Blocks CLI - copy UI components into a project

use anyhow::{Context, Result};
use blocks_core::{ProductConfig, RunArgs};
use clap::{CommandFactory, FromArgMatches, Parser};
use colored::Colorize;
use std::path::PathBuf;

/// Template tree next to the workspace, used when nothing else is configured
const BUNDLED_TEMPLATE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../templates");

/// Building Blocks product configuration
#[derive(Clone)]
pub struct BuildingBlocksConfig;

impl ProductConfig for BuildingBlocksConfig {
    fn name(&self) -> &'static str {
        "building-blocks"
    }

    fn display_name(&self) -> &'static str {
        "Building Blocks"
    }

    fn cli_description(&self) -> &'static str {
        "CLI for copying Building Blocks components into your project"
    }

    fn docs_url(&self) -> &'static str {
        "https://blackmax-designs.gitbook.io/building-block-v2.0"
    }

    fn template_dir_env(&self) -> &'static str {
        "BUILDING_BLOCKS_TEMPLATE_DIR"
    }
}

#[derive(Parser, Debug)]
#[command(name = "building-blocks")]
#[command(version)]
pub struct Args {
    /// Component to install, along with its dependencies
    #[arg(short, long, value_name = "NAME")]
    pub add: Option<String>,

    /// List available components
    #[arg(short, long)]
    pub list: bool,

    /// Local directory to use for templates instead of the bundled ones (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

/// Pick the template root: flag, then env override, then next to the executable,
/// then the workspace copy
fn resolve_template_dir<C: ProductConfig>(config: &C, flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }

    if let Ok(dir) = std::env::var(config.template_dir_env()) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from(BUNDLED_TEMPLATE_DIR))
}

/// Parse the command line, taking the about text from the product config
fn parse_args<C: ProductConfig>(config: &C) -> Args {
    let matches = Args::command()
        .about(config.cli_description())
        .get_matches();
    Args::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
}

async fn run(args: Args) -> Result<i32> {
    let config = BuildingBlocksConfig;
    let working_dir = std::env::current_dir().context("Failed to read current directory")?;

    let run_args = RunArgs {
        add: args.add,
        list: args.list,
        template_root: resolve_template_dir(&config, args.template_dir),
        working_dir,
    };

    blocks_core::run(&config, run_args).await
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = parse_args(&BuildingBlocksConfig);

    let code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            1
        }
    };

    let _ = console::Term::stderr().show_cursor();
    std::process::exit(code);
}
