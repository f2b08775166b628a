use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};

use crate::audible::{DateWindow, parse_date};
use crate::ops::Operation;


#[derive(Parser, Debug)]
#[command(name = "kaudiobooks")]
#[command(about = "Keep an audiobook library tidy: chapter names, directory names and ID3 tags")]
pub struct Cli {
    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// Library root, or a single audiobook directory or chapter file
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct AudibleArgs {
    /// Directory holding the downloaded containers
    #[arg(long, env = "KAUDIOBOOKS_AUDIBLE_DIR")]
    pub audible_dir: Option<PathBuf>,

    /// Only titles added on or after this date (YYYY-MM-DD[THH:MM:SS])
    #[arg(long, value_parser = date_arg)]
    pub start_date: Option<NaiveDateTime>,

    /// Only titles added on or before this date (YYYY-MM-DD[THH:MM:SS])
    #[arg(long, value_parser = date_arg)]
    pub end_date: Option<NaiveDateTime>,
}

impl AudibleArgs {
    pub fn window(&self) -> DateWindow {
        DateWindow {
            start: self.start_date,
            end: self.end_date,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Delete cover art and playlists from audiobook directories
    Purge {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Set tags from "album -- track -- title.mp3" chapter names
    NameToTag {
        #[command(flatten)]
        tree: TreeArgs,
        /// Number chapters by their position in the directory
        #[arg(long)]
        renumber: bool,
    },
    /// Rename chapters from their tags
    TagToName {
        #[command(flatten)]
        tree: TreeArgs,
        /// Number chapters by their position in the directory
        #[arg(long)]
        renumber: bool,
    },
    /// Set album and artist from "album -- author" directory names
    DirnameToTag {
        #[command(flatten)]
        tree: TreeArgs,
        /// Number chapters by their position in the directory
        #[arg(long)]
        renumber: bool,
        /// Also rename chapters from the updated tags
        #[arg(long)]
        rename: bool,
    },
    /// Rename audiobook directories from the first chapter's tags
    TagToDirname {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Replace reserved characters in audiobook directory names
    SanitizeDirnames {
        #[command(flatten)]
        tree: TreeArgs,
    },
    /// Replace chapter titles with "[ n ]"
    OverwriteTitleFromTrack {
        #[command(flatten)]
        tree: TreeArgs,
        /// Number chapters by their position in the directory
        #[arg(long)]
        renumber: bool,
        /// Title for the first chapter; the rest are numbered from 1
        #[arg(long)]
        intro: Option<String>,
    },
    /// Download the Audible library
    Download {
        #[command(flatten)]
        audible: AudibleArgs,
    },
    /// Convert downloaded containers into chapter files
    Convert {
        #[command(flatten)]
        audible: AudibleArgs,
        /// Conversions running at the same time
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        jobs: Option<usize>,
    },
    /// Print the effective settings as TOML
    ShowConfig,
}

impl Command {
    /// The tree operation behind this subcommand, with its arguments.
    pub fn tree_operation(&self) -> Option<(&TreeArgs, Operation)> {
        let found = match self {
            Command::Purge { tree } => (tree, Operation::Purge),
            Command::NameToTag { tree, renumber } => (
                tree,
                Operation::NameToTag {
                    renumber: *renumber,
                },
            ),
            Command::TagToName { tree, renumber } => (
                tree,
                Operation::TagToName {
                    renumber: *renumber,
                },
            ),
            Command::DirnameToTag {
                tree,
                renumber,
                rename,
            } => (
                tree,
                Operation::DirnameToTag {
                    renumber: *renumber,
                    rename: *rename,
                },
            ),
            Command::TagToDirname { tree } => (tree, Operation::TagToDirname),
            Command::SanitizeDirnames { tree } => (tree, Operation::SanitizeDirnames),
            Command::OverwriteTitleFromTrack {
                tree,
                renumber,
                intro,
            } => (
                tree,
                Operation::OverwriteTitleFromTrack {
                    renumber: *renumber,
                    intro: intro.clone(),
                },
            ),
            Command::Download { .. } | Command::Convert { .. } | Command::ShowConfig => {
                return None;
            }
        };
        Some(found)
    }
}

fn date_arg(value: &str) -> Result<NaiveDateTime, String> {
    parse_date(value).map_err(|e| e.to_string())
}
