//! remindmarks command-line client.

use remindmarks::app::{App, HttpController};
use remindmarks::logging::init_logging;
use remindmarks::managers::bookmark_view::date_key;
use remindmarks::services::notification::ConsoleNotifier;
use remindmarks::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use remindmarks::types::bookmark::{Bookmark, BookmarkDraft, Tab};

use clap::Parser;

mod cli;

use crate::cli::{Cli, Command, ConfigCommand};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter());

    let engine = SettingsEngine::new(
        cli.config
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
    );

    let api_url = cli.api_url.as_deref();
    let exit_code = match cli.command {
        Command::Config(cmd) => run_config(engine, cmd),
        Command::List { today } => match connect(engine, api_url) {
            Some(controller) => list(controller, today).await,
            None => 1,
        },
        Command::Add(args) => match connect(engine, api_url) {
            Some(mut controller) => {
                let draft = BookmarkDraft::new(&args.title, &args.url, &args.remember_date);
                status(controller.submit_draft(draft).await.is_ok())
            }
            None => 1,
        },
        Command::Delete { title } => match connect(engine, api_url) {
            Some(mut controller) => {
                let deleted = controller.delete_by_title(&title).await.is_ok();
                if deleted {
                    println!(
                        "Deleted \"{}\". {} bookmark(s) left.",
                        title,
                        controller.bookmarks().len()
                    );
                }
                status(deleted)
            }
            None => 1,
        },
    };
    std::process::exit(exit_code);
}

fn status(ok: bool) -> i32 {
    if ok {
        0
    } else {
        1
    }
}

fn connect(engine: SettingsEngine, api_url: Option<&str>) -> Option<HttpController<ConsoleNotifier>> {
    match App::new(engine, api_url, ConsoleNotifier) {
        Ok(app) => Some(app.controller),
        Err(error) => {
            eprintln!("error: {error}");
            None
        }
    }
}

async fn list(mut controller: HttpController<ConsoleNotifier>, today_only: bool) -> i32 {
    if today_only {
        controller.select_tab(Tab::Today);
    }
    if controller.load_all().await.is_err() {
        return 1;
    }

    let visible = controller.visible_bookmarks();
    if visible.is_empty() {
        println!("No bookmarks.");
    }
    for bookmark in visible {
        let due = controller.is_due_today(&date_key(bookmark.remember_date));
        println!("{}", render_line(bookmark, due));
    }
    0
}

fn render_line(bookmark: &Bookmark, due: bool) -> String {
    let marker = if due { " (today!)" } else { "" };
    let host = bookmark.host().unwrap_or_else(|| "?".to_string());
    format!(
        "{}  {}{}\n    {} [{}]",
        bookmark.display_date(),
        bookmark.title,
        marker,
        bookmark.url,
        host
    )
}

fn run_config(mut engine: SettingsEngine, cmd: ConfigCommand) -> i32 {
    if let Err(error) = engine.load() {
        eprintln!("error: {error}");
        return 1;
    }

    let result = match cmd {
        ConfigCommand::Show => serde_json::to_string_pretty(engine.get_settings())
            .map(|json| {
                println!("# {}", engine.get_config_path());
                println!("{json}");
            })
            .map_err(|e| e.to_string()),
        ConfigCommand::Set { key, value } => {
            let value = serde_json::from_str(&value).unwrap_or(serde_json::Value::String(value));
            engine.set_value(&key, value).map_err(|e| e.to_string())
        }
        ConfigCommand::Reset => engine.reset().map_err(|e| e.to_string()),
    };

    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error}");
            1
        }
    }
}
