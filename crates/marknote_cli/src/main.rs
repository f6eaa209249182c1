//! `marknote` command-line front end.
//!
//! Stands in for the presentation layer: validates form input, then drives
//! `marknote_core::Notebook` over a SQLite-backed store.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command, NoteArgs, TagCommand};
use log::info;
use marknote_core::{
    init_logging, KeyValueStore, Note, NoteData, NoteFilter, Notebook, NotebookConfig, Screen,
    SqliteStore, Tag,
};

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = NotebookConfig::from_env()?.with_overrides(
        cli.db,
        cli.log_level.as_deref(),
        cli.log_dir,
    )?;

    if let Some(log_dir) = config.log_dir.as_ref() {
        init_logging(config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let store = SqliteStore::open(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let mut notebook = Notebook::new(store);
    execute(&mut notebook, cli.command)
}

fn execute<S: KeyValueStore>(notebook: &mut Notebook<S>, command: Command) -> Result<()> {
    info!(
        "event=cli_command module=cli status=start command={}",
        command_name(&command)
    );
    match command {
        Command::List { title, tags } => {
            let notes = notebook.list_notes(&NoteFilter {
                title,
                tag_ids: tags,
            });
            print_list(&notes);
        }
        Command::Show { id } => match notebook.note_with_tags(&id) {
            Some(note) => print_detail(&note),
            None => bail!("note not found: {id}"),
        },
        Command::New(args) => {
            let data = note_data(notebook, args)?;
            let note = notebook.create_note(&data)?;
            println!("{}", note.id);
        }
        Command::Edit { id, note } => {
            let data = note_data(notebook, note)?;
            if !notebook.update_note(&id, &data)? {
                bail!("note not found: {id}");
            }
        }
        Command::Delete { id } => {
            // Deleting an unknown note is not an error.
            notebook.delete_note(&id)?;
        }
        Command::Tag(TagCommand::List) => print_tags(&notebook.available_tags()),
        Command::Tag(TagCommand::Add { label }) => {
            let label = required("label", label)?;
            let tag = notebook.add_tag(label)?;
            println!("{}", tag.id);
        }
        Command::Tag(TagCommand::Rename { id, label }) => {
            let label = required("label", label)?;
            if !notebook.update_tag(&id, label)? {
                bail!("tag not found: {id}");
            }
        }
        Command::Tag(TagCommand::Delete { id }) => {
            notebook.delete_tag(&id)?;
        }
        Command::Open { path } => match notebook.open_route(&path) {
            Screen::List { notes, .. } => print_list(&notes),
            Screen::Create { available_tags } => print_tags(&available_tags),
            Screen::Detail(note) => print_detail(&note),
            Screen::Edit { note, .. } => print_detail(&note),
        },
    }
    Ok(())
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::List { .. } => "list",
        Command::Show { .. } => "show",
        Command::New(_) => "new",
        Command::Edit { .. } => "edit",
        Command::Delete { .. } => "delete",
        Command::Tag(TagCommand::List) => "tag_list",
        Command::Tag(TagCommand::Add { .. }) => "tag_add",
        Command::Tag(TagCommand::Rename { .. }) => "tag_rename",
        Command::Tag(TagCommand::Delete { .. }) => "tag_delete",
        Command::Open { .. } => "open",
    }
}

/// Validates form input and resolves tag ids against known tags.
fn note_data<S: KeyValueStore>(notebook: &Notebook<S>, args: NoteArgs) -> Result<NoteData> {
    let title = required("title", args.title)?;
    let markdown = required("markdown", args.markdown)?;
    let tags = notebook.tags_by_id(&args.tags);
    if tags.len() != args.tags.len() {
        let known: Vec<&str> = tags.iter().map(|tag| tag.id.as_str()).collect();
        let unknown: Vec<&str> = args
            .tags
            .iter()
            .map(String::as_str)
            .filter(|id| !known.contains(id))
            .collect();
        bail!("unknown tag id(s): {}", unknown.join(", "));
    }
    Ok(NoteData::new(title, markdown, tags))
}

fn required(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        bail!("{field} cannot be empty");
    }
    Ok(value)
}

fn print_list(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes.");
        return;
    }
    for note in notes {
        println!("{}\t{}\t{}", note.id, note.title, tag_labels(&note.tags));
    }
}

fn print_detail(note: &Note) {
    println!("# {}", note.title);
    if !note.tags.is_empty() {
        println!("tags: {}", tag_labels(&note.tags));
    }
    println!();
    println!("{}", note.markdown);
}

fn print_tags(tags: &[Tag]) {
    for tag in tags {
        println!("{}\t{}", tag.id, tag.label);
    }
}

fn tag_labels(tags: &[Tag]) -> String {
    tags.iter()
        .map(|tag| tag.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
