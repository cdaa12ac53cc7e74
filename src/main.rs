use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde::Serialize;

use carnage_check::interpreter::condition;
use carnage_check::interpreter::loader::ScriptLoader;
use carnage_check::interpreter::snapshot::GameState;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single check against a snapshot
    Check {
        /// The check, e.g. "UserHealth < OpponentHealth"
        #[arg(short, long)]
        condition: String,

        /// Snapshot file (YAML or JSON), defaults to $CARNAGE_STATE
        #[arg(short, long)]
        state: Option<String>,
    },
    /// List the commands of a script that may fire against a snapshot
    Script {
        /// Path to the script file
        #[arg(short, long)]
        file: String,

        /// Snapshot file (YAML or JSON), defaults to $CARNAGE_STATE
        #[arg(short, long)]
        state: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct ScriptReport<'a> {
    script: &'a str,
    dispatch: Option<&'a str>,
    executable: Vec<CommandReport<'a>>,
}

#[derive(Serialize)]
struct CommandReport<'a> {
    name: &'a str,
    action: &'a str,
}

fn load_state(path: Option<String>) -> Result<GameState> {
    let path = path
        .or_else(|| std::env::var("CARNAGE_STATE").ok())
        .context("No snapshot given: pass --state or set CARNAGE_STATE")?;

    log::info!("Using snapshot: {}", path);
    GameState::load(&path).with_context(|| format!("Failed to load snapshot {}", path))
}

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Check { condition: text, state } => {
            let check = condition::parse(&text)
                .with_context(|| format!("Invalid check '{}'", text))?;
            let state = load_state(state)?;

            let satisfied = check.is_satisfied(&state)?;
            println!("{}", satisfied);
        }
        Commands::Script { file, state, json } => {
            let script = ScriptLoader::new()
                .load_script(&file)
                .with_context(|| format!("Failed to load script {}", file))?;
            let state = load_state(state)?;

            let executable = script.executable(&state)?;
            let report = ScriptReport {
                script: script.name(),
                dispatch: executable.first().map(|c| c.name()),
                executable: executable
                    .iter()
                    .map(|c| CommandReport {
                        name: c.name(),
                        action: c.action(),
                    })
                    .collect(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Script: {}", report.script);
                for cmd in &report.executable {
                    println!("  {} -> {}", cmd.name, cmd.action);
                }
                match report.dispatch {
                    Some(name) => println!("Dispatch: {}", name),
                    None => println!("Dispatch: none"),
                }
            }
        }
    }

    Ok(())
}
