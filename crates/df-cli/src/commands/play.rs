//! Interactive play loop over a started session.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use df_core::UserId;
use df_engine::{EngineConfig, GameEngine, RollReport};
use df_narrative::FallbackNarrator;
use df_store::JsonStore;

use super::sheet::print_sheet;
use super::styled_outcome;

type Engine = GameEngine<JsonStore, FallbackNarrator>;

pub fn run(user: i64, data: &Path, seed: Option<u64>) -> Result<(), String> {
    let store = super::open_store(data)?;
    let user = UserId(user);
    let config = EngineConfig::default().with_seed(seed.unwrap_or_else(rand::random));
    let mut engine = GameEngine::new(store, FallbackNarrator::new(), config);

    let character = engine
        .active_character(user)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| {
            format!("no active character for user {user}; create one with `dusk new`")
        })?;

    let start = engine
        .start_session(user, character.id)
        .map_err(|e| e.to_string())?;

    println!("  --- {} ---", start.session.current_scene.bold());
    println!("{}", start.narrative);
    println!();
    println!("  Type what {} does. Also: roll, sheet, status, log, help, quit.", character.name);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush().ok();

        let mut line = String::new();
        let read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| e.to_string())?;
        if read == 0 {
            break; // EOF ends the session like `quit`
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let mut words = line.split_whitespace();
        let verb = words.next().unwrap_or("").to_lowercase();
        match verb.as_str() {
            "quit" | "q" => break,
            "sheet" => show_sheet(&engine, user)?,
            "status" => show_status(&engine, user)?,
            "log" => show_log(&engine, user)?,
            "help" => show_help(),
            "roll" => {
                let action_type = words.next().unwrap_or("general").to_string();
                let difficulty = words.next().and_then(|w| w.parse::<i32>().ok());
                let report = engine
                    .roll_dice(user, &action_type, difficulty, 0)
                    .map_err(|e| e.to_string())?;
                print_roll(&report);
            }
            _ => act(&mut engine, user, line)?,
        }
    }

    if let Some(session) = engine.active_session(user).map_err(|e| e.to_string())? {
        engine
            .end_session(user, session.id)
            .map_err(|e| e.to_string())?;
    }
    println!("  The story rests here. Farewell.");
    Ok(())
}

/// Run a free-text action; when it calls for dice, roll them right away.
fn act(engine: &mut Engine, user: UserId, line: &str) -> Result<(), String> {
    let report = engine
        .perform_action(user, line, "")
        .map_err(|e| e.to_string())?;

    if let Some(scene) = report.scene_change {
        println!("  --- {} ---", scene.label().bold());
    }
    println!("{}", report.narrative);

    if report.intent.requires_roll {
        let category = report
            .intent
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "general".to_string());
        println!(
            "  A {category} roll is called for (difficulty {}).",
            report.intent.difficulty.unwrap_or_default()
        );
        let roll = engine
            .roll_dice(user, &category, report.intent.difficulty, 0)
            .map_err(|e| e.to_string())?;
        print_roll(&roll);
    }
    Ok(())
}

fn print_roll(report: &RollReport) {
    println!("  {}", styled_outcome(&report.outcome));
    println!(
        "  Hope {}   Fear {}",
        report.character.hope.to_string().green(),
        report.character.fear.to_string().red()
    );
    println!("{}", report.narrative);
}

fn show_sheet(engine: &Engine, user: UserId) -> Result<(), String> {
    let character = engine
        .active_character(user)
        .map_err(|e| e.to_string())?
        .ok_or("no active character")?;
    print_sheet(&character);
    Ok(())
}

fn show_status(engine: &Engine, user: UserId) -> Result<(), String> {
    let character = engine
        .active_character(user)
        .map_err(|e| e.to_string())?
        .ok_or("no active character")?;
    let session = engine
        .active_session(user)
        .map_err(|e| e.to_string())?
        .ok_or("no active session")?;
    println!("  Scene: {}", session.current_scene);
    println!(
        "  Hope {}   Fear {}   HP {}",
        character.hope.to_string().green(),
        character.fear.to_string().red(),
        character.hit_points
    );
    println!("  Actions this session: {}", session.action_log.len());
    Ok(())
}

fn show_log(engine: &Engine, user: UserId) -> Result<(), String> {
    let session = engine
        .active_session(user)
        .map_err(|e| e.to_string())?
        .ok_or("no active session")?;
    if session.narrative_log.is_empty() {
        println!("  Nothing has happened yet.");
    } else {
        println!("{}", session.narrative_log);
    }
    Ok(())
}

fn show_help() {
    println!(
        "\
  Free text is treated as your character's action; actions that look
  like combat, investigation, magic, movement, or talking trigger a
  dice roll at that category's difficulty. Travel phrasing (\"go to
  the tavern\") changes the scene.

  roll [type] [difficulty]   Roll the dual dice yourself
  sheet                      Show the character sheet
  status                     Scene, pools, and hit points
  log                        Show the narrative so far
  quit                       End the session"
    );
}
