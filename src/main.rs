//! Neo Dash headless runner
//!
//! Plays a level without a renderer, jumping on scripted ticks, and reports
//! how the run ended. Useful for checking level playability and physics
//! tuning from the command line.
//!
//! ```text
//! neo-dash [LEVEL.json] [--tuning FILE] [--jump-at T1,T2,...] [--max-ticks N] [--seed S]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use neo_dash::sim::{GameEvent, GamePhase, TickOutcome};
use neo_dash::{Game, NeoDashError, Tuning, levels};

/// Parsed command line
#[derive(Debug)]
struct Args {
    level: Option<PathBuf>,
    tuning: Option<PathBuf>,
    jump_at: Vec<u64>,
    max_ticks: u64,
    seed: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            level: None,
            tuning: None,
            jump_at: Vec::new(),
            // Five minutes at the nominal tick rate
            max_ticks: 5 * 60 * 60,
            seed: 0,
        }
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<String>) -> Result<T, NeoDashError> {
    let value = value.ok_or_else(|| NeoDashError::InvalidArgument(format!("{flag} needs a value")))?;
    value
        .trim()
        .parse()
        .map_err(|_| NeoDashError::InvalidArgument(format!("{flag}: not a number: {value}")))
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args, NeoDashError> {
    let mut args = Args::default();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--tuning" => {
                let path = argv
                    .next()
                    .ok_or_else(|| NeoDashError::InvalidArgument("--tuning needs a path".into()))?;
                args.tuning = Some(PathBuf::from(path));
            }
            "--jump-at" => {
                let list = argv
                    .next()
                    .ok_or_else(|| NeoDashError::InvalidArgument("--jump-at needs a list".into()))?;
                args.jump_at = list
                    .split(',')
                    .filter(|s| !s.trim().is_empty())
                    .map(|s| parse_number("--jump-at", Some(s.to_string())))
                    .collect::<Result<_, _>>()?;
            }
            "--max-ticks" => args.max_ticks = parse_number("--max-ticks", argv.next())?,
            "--seed" => args.seed = parse_number("--seed", argv.next())?,
            flag if flag.starts_with("--") => {
                return Err(NeoDashError::InvalidArgument(format!("unknown flag {flag}")));
            }
            path => {
                if args.level.is_some() {
                    return Err(NeoDashError::InvalidArgument(format!(
                        "more than one level given: {path}"
                    )));
                }
                args.level = Some(PathBuf::from(path));
            }
        }
    }

    Ok(args)
}

fn run(args: Args) -> Result<GamePhase, NeoDashError> {
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path)?,
        None => Tuning::default(),
    };
    let level = match &args.level {
        Some(path) => levels::sanitize(levels::load_level_or_fallback(path), args.seed),
        None => levels::neo_genesis(),
    };

    let mut game = Game::new(level, tuning);
    let mut events: Vec<GameEvent> = Vec::new();
    let outcome = game.play_scripted(&args.jump_at, args.max_ticks, &mut events);

    let ticks = game.run().map(|r| r.ticks).unwrap_or_default();
    let score = game.run().map(|r| r.score()).unwrap_or_default();
    match outcome {
        Some(TickOutcome::Won) => println!("COMPLETE: '{}' in {ticks} ticks", game.level().name),
        Some(TickOutcome::Died { cause, obstacle }) => {
            println!("CRASHED: {cause:?} on obstacle {obstacle} at tick {ticks}, {score}%")
        }
        _ => println!("STOPPED: no result after {ticks} ticks, {score}%"),
    }
    log::debug!("{} notifications", events.len());

    Ok(game.phase())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Neo Dash (headless) starting...");

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(GamePhase::Victory) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}
