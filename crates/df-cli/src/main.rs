//! CLI front end for the Duskfall Hope/Fear engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dusk",
    about = "Duskfall — a Hope/Fear narrative dice engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a character (your previous one is retired)
    New {
        /// Character name
        name: String,

        /// Class: warrior, ranger, guardian, seraph, sorcerer, wizard
        #[arg(short, long)]
        class: String,

        /// Ancestry: human, elf, dwarf, halfling, orc
        #[arg(short, long)]
        ancestry: String,

        /// User id the character belongs to
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// State file (default: duskfall.json in the current directory)
        #[arg(short, long, default_value = "duskfall.json")]
        data: PathBuf,
    },

    /// Show the active character sheet
    Sheet {
        /// User id
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// State file
        #[arg(short, long, default_value = "duskfall.json")]
        data: PathBuf,
    },

    /// Roll the dual dice once and show the outcome
    Roll {
        /// Difficulty threshold
        #[arg(short = 'D', long)]
        difficulty: Option<i32>,

        /// Named tier: trivial, easy, moderate, hard, extreme
        #[arg(short, long, conflicts_with = "difficulty")]
        tier: Option<String>,

        /// Flat modifier added to the higher die
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        modifier: i32,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Start a session and play interactively
    Play {
        /// User id
        #[arg(short, long, default_value = "1")]
        user: i64,

        /// State file
        #[arg(short, long, default_value = "duskfall.json")]
        data: PathBuf,

        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New {
            name,
            class,
            ancestry,
            user,
            data,
        } => commands::new::run(&name, &class, &ancestry, user, &data),
        Commands::Sheet { user, data } => commands::sheet::run(user, &data),
        Commands::Roll {
            difficulty,
            tier,
            modifier,
            seed,
        } => commands::roll::run(difficulty, tier.as_deref(), modifier, seed),
        Commands::Play { user, data, seed } => commands::play::run(user, &data, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
