//! CLI definitions and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use fontheader_core::{
    FONTS, FontconvertTool, GenerateContext, HttpFetcher, clean,
    config::{FONTCONVERT_TOOL, OUTPUT_FILE, RESOURCES_DIR},
    generate,
};

#[derive(Parser)]
#[command(name = "fontheader")]
#[command(about = "Generate the embedded font header from upstream TTF sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GenerateArgs {
    /// Directory for cached TTF downloads.
    #[arg(long, default_value = RESOURCES_DIR)]
    pub resources_dir: PathBuf,
    /// Path of the generated header.
    #[arg(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,
    /// Conversion tool, invoked as `<tool> <ttf-path> <size>`.
    #[arg(long, default_value = FONTCONVERT_TOOL)]
    pub tool: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch any missing TTF sources and regenerate the header.
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Remove the resources cache and the generated header.
    Clean {
        #[arg(long, default_value = RESOURCES_DIR)]
        resources_dir: PathBuf,
        #[arg(long, default_value = OUTPUT_FILE)]
        output: PathBuf,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Generate { args } => {
                debug!(
                    "generate: resources_dir={}, output={}, tool={}",
                    args.resources_dir.display(),
                    args.output.display(),
                    args.tool.display()
                );
                let ctx = GenerateContext::new(args.resources_dir, args.output);
                let converter = FontconvertTool::new(args.tool);
                generate(&ctx, FONTS, &HttpFetcher, &converter)?;
            }
            Commands::Clean {
                resources_dir,
                output,
            } => {
                debug!(
                    "clean: resources_dir={}, output={}",
                    resources_dir.display(),
                    output.display()
                );
                clean(&resources_dir, &output)?;
            }
        }
        Ok(())
    }
}
