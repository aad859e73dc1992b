//! Command-line driver over the notes core.
//!
//! # Responsibility
//! - Exercise every core operation (list/search/add/edit/pin/delete, theme)
//!   from a terminal, holding no durable state of its own.
//! - Keep output deterministic for quick local sanity checks.

use std::env;
use std::process::ExitCode;

use tacknote_core::db::open_db;
use tacknote_core::{
    core_version, default_log_level, init_logging, ping, NoteColor, NoteId, NotePatch, NoteStore,
    SqliteNoteRepository, SqliteThemeRepository, ThemePreference, ThemeRepository,
};

const DB_PATH_ENV: &str = "TACKNOTE_DB";
const LOG_DIR_ENV: &str = "TACKNOTE_LOG_DIR";
const DEFAULT_DB_PATH: &str = "tacknote.db";

const USAGE: &str = "usage: tacknote <command>

commands:
  list [query]                      list notes, pinned first; optional search
  add <title> [content] [color]     create a note
  edit <id> [--title t] [--content c] [--color c]
  pin <id>                          toggle the pinned flag
  rm <id>                           delete a note
  theme [dark|light]                show or set the theme preference
  version                           print core version";

fn main() -> ExitCode {
    if let Ok(log_dir) = env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), &log_dir) {
            eprintln!("tacknote: logging disabled: {err}");
        }
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(1);
    };

    match run(command, &args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("tacknote: {message}");
            eprintln!("{USAGE}");
            ExitCode::from(1)
        }
        Err(CliError::Open(message)) => {
            eprintln!("tacknote: {message}");
            ExitCode::from(2)
        }
    }
}

enum CliError {
    Usage(String),
    Open(String),
}

fn run(command: &str, rest: &[String]) -> Result<(), CliError> {
    if command == "version" {
        println!("tacknote_core ping={}", ping());
        println!("tacknote_core version={}", core_version());
        return Ok(());
    }

    let db_path = env::var(DB_PATH_ENV).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let conn = open_db(&db_path)
        .map_err(|err| CliError::Open(format!("cannot open `{db_path}`: {err}")))?;

    match command {
        "list" => {
            let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
            if let Some(query) = rest.first() {
                store.set_search_query(query.clone());
            }
            print_notes(&store);
            Ok(())
        }
        "add" => {
            let title = rest
                .first()
                .filter(|title| !title.trim().is_empty())
                .ok_or_else(|| CliError::Usage("add requires a non-empty title".to_string()))?;
            let content = rest.get(1).cloned().unwrap_or_default();
            let color = match rest.get(2) {
                Some(raw) => parse_color(raw)?,
                None => NoteColor::default(),
            };

            let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
            let id = store.add_note(title.clone(), content, color);
            println!("added {id}");
            Ok(())
        }
        "edit" => {
            let id = parse_id(rest.first())?;
            let patch = parse_patch(&rest[1..])?;

            let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
            if store.get(id).is_none() {
                return Err(CliError::Usage(format!("no note with id {id}")));
            }
            store.update_note(id, &patch);
            println!("updated {id}");
            Ok(())
        }
        "pin" => {
            let id = parse_id(rest.first())?;
            let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
            if store.get(id).is_none() {
                return Err(CliError::Usage(format!("no note with id {id}")));
            }
            store.toggle_pin(id);
            let pinned = store.get(id).map(|note| note.pinned).unwrap_or(false);
            println!("{} {id}", if pinned { "pinned" } else { "unpinned" });
            Ok(())
        }
        "rm" => {
            let id = parse_id(rest.first())?;
            let mut store = NoteStore::new(SqliteNoteRepository::new(&conn));
            if store.get(id).is_none() {
                return Err(CliError::Usage(format!("no note with id {id}")));
            }
            store.delete_note(id);
            println!("deleted {id}");
            Ok(())
        }
        "theme" => {
            let repo = SqliteThemeRepository::new(&conn);
            match rest.first() {
                Some(raw) => {
                    let theme = ThemePreference::parse(raw).ok_or_else(|| {
                        CliError::Usage(format!("unknown theme `{raw}`; expected dark|light"))
                    })?;
                    repo.save_theme(theme);
                    println!("theme={}", theme.as_str());
                }
                None => match repo.load_theme() {
                    Some(theme) => println!("theme={}", theme.as_str()),
                    None => println!("theme=unset (defaults to light)"),
                },
            }
            Ok(())
        }
        other => Err(CliError::Usage(format!("unknown command `{other}`"))),
    }
}

fn print_notes(store: &NoteStore<SqliteNoteRepository<'_>>) {
    if store.is_searching() && store.filtered_notes().is_empty() {
        println!("no notes match the query");
        return;
    }

    let pinned = store.pinned_notes();
    if !pinned.is_empty() {
        println!("Pinned ({})", pinned.len());
        for note in pinned {
            print_note_line(note);
        }
    }

    let others = store.other_notes();
    if !others.is_empty() {
        println!("Notes ({})", others.len());
        for note in others {
            print_note_line(note);
        }
    }
}

fn print_note_line(note: &tacknote_core::Note) {
    let tags = if note.tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", note.tags.join(", "))
    };
    println!(
        "  {}  {:<7} {}{tags}",
        note.id,
        note.color.as_str(),
        note.title
    );
}

fn parse_id(raw: Option<&String>) -> Result<NoteId, CliError> {
    let raw = raw.ok_or_else(|| CliError::Usage("missing note id".to_string()))?;
    NoteId::parse_str(raw).map_err(|_| CliError::Usage(format!("invalid note id `{raw}`")))
}

fn parse_color(raw: &str) -> Result<NoteColor, CliError> {
    NoteColor::parse(raw).ok_or_else(|| {
        let valid = NoteColor::all()
            .iter()
            .map(|color| color.as_str())
            .collect::<Vec<_>>()
            .join("|");
        CliError::Usage(format!("unknown color `{raw}`; expected {valid}"))
    })
}

fn parse_patch(args: &[String]) -> Result<NotePatch, CliError> {
    let mut patch = NotePatch::default();
    let mut index = 0;

    while index < args.len() {
        let flag = args[index].as_str();
        let value = args
            .get(index + 1)
            .ok_or_else(|| CliError::Usage(format!("{flag} requires a value")))?;

        match flag {
            "--title" => {
                if value.trim().is_empty() {
                    return Err(CliError::Usage("--title cannot be empty".to_string()));
                }
                patch.title = Some(value.clone());
            }
            "--content" => patch.content = Some(value.clone()),
            "--color" => patch.color = Some(parse_color(value)?),
            other => {
                return Err(CliError::Usage(format!("unknown flag `{other}`")));
            }
        }
        index += 2;
    }

    if patch == NotePatch::default() {
        return Err(CliError::Usage(
            "edit requires at least one of --title/--content/--color".to_string(),
        ));
    }

    Ok(patch)
}
