//! CLI definitions and command dispatch.

use std::{
    io::{Stdout, stdin, stdout},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use availablefonts_core::FontBrowser;
use availablefonts_font_source::{DirectoryPermissions, LocalFontSource, Osc52Clipboard};
use clap::{Parser, Subcommand};

use crate::{browse, render::View};

#[derive(Parser)]
#[command(name = "availablefonts", version)]
#[command(about = "List the fonts installed on this machine and preview text in them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Font directory to scan instead of the platform defaults (repeatable)
    #[arg(long = "font-dir", value_name = "DIR")]
    pub font_dirs: Vec<PathBuf>,
}

impl SourceArgs {
    pub fn source(&self) -> LocalFontSource {
        if self.font_dirs.is_empty() {
            LocalFontSource::default()
        } else {
            LocalFontSource::new(self.font_dirs.iter().cloned())
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the installed fonts once and print them
    List {
        #[command(flatten)]
        source: SourceArgs,
        /// Only show fonts whose family contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Text to preview in every font
        #[arg(short, long)]
        preview: Option<String>,
    },
    /// Browse the installed fonts interactively
    Browse {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Commands {
    pub async fn run(self) -> Result<ExitCode> {
        match self {
            Commands::List { source, search, preview } => {
                let mut browser = browser(&source);
                browser.fetch().await;
                if let Some(search) = search {
                    browser.submit_filter(search);
                }
                if let Some(preview) = preview {
                    browser.submit_preview(preview);
                }
                print!("{}", View(browser.session()));
                if browser.state().error().is_some() {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Commands::Browse { source } => {
                let mut browser = browser(&source);
                browse::run(&mut browser, stdin().lock(), stdout()).await?;
            }
        }
        Ok(ExitCode::SUCCESS)
    }
}

fn browser(
    args: &SourceArgs,
) -> FontBrowser<LocalFontSource, DirectoryPermissions, Osc52Clipboard<Stdout>> {
    let source = args.source();
    let permissions = DirectoryPermissions::from(&source);
    FontBrowser::new(source, permissions, Osc52Clipboard::stdout())
}
