//! Command-line surface for the notebook.
//!
//! Subcommands map one-to-one onto the list/create/detail/edit views and
//! the tag management actions of the notebook.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "marknote")]
#[command(about = "marknote - markdown notes with tags, stored locally")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// SQLite file holding notes and tags (overrides MARKNOTE_DB_PATH)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (overrides MARKNOTE_LOG_LEVEL)
    #[arg(short = 'l', long, global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files (overrides MARKNOTE_LOG_DIR)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List notes, optionally filtered by title and tags
    List {
        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,
        /// Required tag id (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Show one note with its tags
    Show { id: String },
    /// Create a note
    New(NoteArgs),
    /// Replace a note's title, body and tags
    Edit {
        id: String,
        #[command(flatten)]
        note: NoteArgs,
    },
    /// Delete a note
    Delete { id: String },
    /// Manage tags
    #[command(subcommand)]
    Tag(TagCommand),
    /// Resolve a view path such as `/`, `/new`, `/<id>` or `/<id>/edit`
    Open { path: String },
}

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub markdown: String,
    /// Tag id to attach (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum TagCommand {
    /// List all tags
    List,
    /// Create a tag
    Add { label: String },
    /// Rename a tag
    Rename { id: String, label: String },
    /// Delete a tag; notes keep their reference
    Delete { id: String },
}
