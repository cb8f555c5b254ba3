//! Line-based interactive browser.

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use anyhow::{Context, Result};
use availablefonts_core::{
    Clipboard, FontBrowser, FontSource, PermissionQuery, view::LOADING_LABEL,
};
use log::debug;

use crate::render::View;

const HELP: &str = "\
Commands:
  fetch            fetch the installed fonts
  preview [TEXT]   render TEXT in every font
  search [TEXT]    show fonts whose family contains TEXT (empty shows all)
  copy N           copy the family of font N to the clipboard
  help             show this help
  quit             leave";

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Fetch,
    Preview(String),
    Search(String),
    Copy(usize),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("copy needs a font number")]
    MissingIndex,
    #[error("'{0}' is not a font number")]
    BadIndex(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "fetch" => Ok(Command::Fetch),
            "preview" => Ok(Command::Preview(rest.to_string())),
            "search" => Ok(Command::Search(rest.to_string())),
            "copy" if rest.is_empty() => Err(CommandError::MissingIndex),
            "copy" => match rest.parse::<usize>() {
                Ok(index) if index > 0 => Ok(Command::Copy(index)),
                _ => Err(CommandError::BadIndex(rest.to_string())),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Read commands from `input` until `quit` or end of input.
pub async fn run<S, P, C>(
    browser: &mut FontBrowser<S, P, C>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<()>
where
    S: FontSource,
    P: PermissionQuery,
    C: Clipboard,
{
    write!(out, "{}", View(browser.session()))?;
    writeln!(out, "Type 'fetch' to start, 'help' for commands.")?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };
        debug!("Command: {command:?}");

        match command {
            Command::Fetch => {
                writeln!(out, "{LOADING_LABEL}")?;
                browser.fetch().await;
            }
            Command::Preview(text) => browser.submit_preview(text),
            Command::Search(text) => browser.submit_filter(text),
            Command::Copy(index) => {
                let font = browser
                    .state()
                    .catalog()
                    .and_then(|catalog| catalog.shown().get(index - 1))
                    .cloned();
                match font {
                    Some(font) => {
                        browser.copy_family(&font);
                        writeln!(out, "Copied '{}'", font.family)?;
                    }
                    None => writeln!(out, "No font #{index}")?,
                }
                continue;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        }

        write!(out, "{}", View(browser.session()))?;
    }

    Ok(())
}
