use std::env;
use std::io::{self, BufRead, Write};

use crate::battle::{CombatantInput, DamageRng, Rng, WeaponKind, WeaponSelection};
use crate::config::Config;
use crate::history::{read_history, summarize, FileHistory, HistorySink};
use crate::narration::describe_scoreboard;
use crate::odds::{estimate_matchup, DEFAULT_ODDS_ROUNDS, MAX_ODDS_ROUNDS};
use crate::parallel::WorkerPool;
use crate::server;
use crate::session::{Session, SessionError};

const USAGE: &str = "usage: heroes-vs <fight|play|serve|odds|history>";
const FIGHT_USAGE: &str =
    "usage: heroes-vs fight <hero> <sword|bow|book|-> <villain> <sword|bow|book|-> [seed] [--json]";
const ODDS_USAGE: &str = "usage: heroes-vs odds <hero-weapon> <villain-weapon> [rounds] [seed]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fight,
    Play,
    Serve,
    Odds,
    History,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("fight") => Some(Command::Fight),
        Some("play") => Some(Command::Play),
        Some("serve") => Some(Command::Serve),
        Some("odds") => Some(Command::Odds),
        Some("history") => Some(Command::History),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    let config = Config::from_env();
    match parse_command(args) {
        Some(Command::Fight) => handle_fight(args, &config),
        Some(Command::Play) => handle_play(&config),
        Some(Command::Serve) => handle_serve(&config),
        Some(Command::Odds) => handle_odds(args, &config),
        Some(Command::History) => handle_history(args, &config),
        None => {
            eprintln!("{USAGE}");
            2
        }
    }
}

const JSON_FLAG: &str = "--json";

/// Positional arguments after the command name, with the `--json` flag removed.
fn positional(args: &[String]) -> Vec<&str> {
    args.iter()
        .skip(2)
        .map(String::as_str)
        .filter(|arg| *arg != JSON_FLAG)
        .collect()
}

fn handle_fight(args: &[String], config: &Config) -> i32 {
    let rest = positional(args);
    let as_json = args.iter().any(|arg| arg == JSON_FLAG);
    let [hero_name, hero_weapon, villain_name, villain_weapon, extra @ ..] = rest.as_slice() else {
        eprintln!("{FIGHT_USAGE}");
        return 2;
    };

    let selections = WeaponSelection::parse(hero_weapon)
        .and_then(|hero| WeaponSelection::parse(villain_weapon).map(|villain| (hero, villain)));
    let (hero_selection, villain_selection) = match selections {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{FIGHT_USAGE}");
            return 2;
        }
    };

    let seed = parse_u64_arg(extra.first().copied(), "seed", config.seed);
    let rng = seed.map(Rng::new).unwrap_or_else(Rng::from_entropy);
    let mut session = Session::new(FileHistory::new(&config.history_path), rng);

    let hero = CombatantInput::new(*hero_name, hero_selection);
    let villain = CombatantInput::new(*villain_name, villain_selection);
    match session.fight(&hero, &villain) {
        Ok(report) if as_json => match serde_json::to_string_pretty(&report) {
            Ok(payload) => {
                println!("{payload}");
                0
            }
            Err(err) => {
                eprintln!("failed to serialize round report: {err}");
                1
            }
        },
        Ok(report) => {
            println!("{}", report.message);
            0
        }
        Err(SessionError::Battle(err)) => {
            eprintln!("{err}");
            1
        }
        Err(SessionError::History(err)) => {
            eprintln!("round not recorded: {err}");
            1
        }
    }
}

fn handle_play(config: &Config) -> i32 {
    let mut session = Session::new(FileHistory::new(&config.history_path), config.rng());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_play(stdin.lock(), stdout.lock(), &mut session) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("terminal error: {err}");
            1
        }
    }
}

fn prompt<In: BufRead, Out: Write>(
    input: &mut In,
    output: &mut Out,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim_end_matches(['\r', '\n']).to_string();
    if line.trim().eq_ignore_ascii_case("quit") {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Asks until the answer is a weapon or blank; blank means nothing selected.
fn prompt_weapon<In: BufRead, Out: Write>(
    input: &mut In,
    output: &mut Out,
    label: &str,
) -> io::Result<Option<WeaponSelection>> {
    loop {
        let Some(answer) = prompt(input, output, label)? else {
            return Ok(None);
        };
        match WeaponSelection::parse(&answer) {
            Ok(selection) => return Ok(Some(selection)),
            Err(err) => writeln!(output, "{err}. Choose sword, bow or book.")?,
        }
    }
}

/// Interactive rounds over any line-based terminal. Names carry over between rounds
/// (press enter to keep them); weapons are chosen fresh every round. `quit` or end of
/// input ends the session.
pub fn run_play<In, Out, H, R>(
    mut input: In,
    mut output: Out,
    session: &mut Session<H, R>,
) -> io::Result<()>
where
    In: BufRead,
    Out: Write,
    H: HistorySink,
    R: DamageRng,
{
    let mut hero_name = String::new();
    let mut villain_name = String::new();
    writeln!(output, "Heroes vs. Villains. Type 'quit' to leave.")?;

    loop {
        let hero_label = format!("Hero name [{hero_name}]: ");
        let Some(answer) = prompt(&mut input, &mut output, &hero_label)? else {
            break;
        };
        if !answer.trim().is_empty() {
            hero_name = answer;
        }
        let Some(hero_weapon) =
            prompt_weapon(&mut input, &mut output, "Hero weapon (sword/bow/book): ")?
        else {
            break;
        };

        let villain_label = format!("Villain name [{villain_name}]: ");
        let Some(answer) = prompt(&mut input, &mut output, &villain_label)? else {
            break;
        };
        if !answer.trim().is_empty() {
            villain_name = answer;
        }
        let Some(villain_weapon) =
            prompt_weapon(&mut input, &mut output, "Villain weapon (sword/bow/book): ")?
        else {
            break;
        };

        let hero = CombatantInput::new(hero_name.clone(), hero_weapon);
        let villain = CombatantInput::new(villain_name.clone(), villain_weapon);
        match session.fight(&hero, &villain) {
            Ok(report) => {
                writeln!(output, "{}", report.message)?;
                writeln!(
                    output,
                    "{}",
                    describe_scoreboard(
                        &report.scoreboard,
                        &report.result.hero.name,
                        &report.result.villain.name
                    )
                )?;
            }
            Err(SessionError::Battle(err)) => writeln!(output, "{err}")?,
            Err(SessionError::History(err)) => writeln!(output, "Round not recorded: {err}")?,
        }
    }

    writeln!(output, "Farewell.")?;
    Ok(())
}

fn handle_serve(config: &Config) -> i32 {
    match server::run_server(config) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("server error: {err}");
            1
        }
    }
}

fn handle_odds(args: &[String], config: &Config) -> i32 {
    let rest = positional(args);
    let [hero_raw, villain_raw, extra @ ..] = rest.as_slice() else {
        eprintln!("{ODDS_USAGE}");
        return 2;
    };
    let weapons = hero_raw
        .parse::<WeaponKind>()
        .and_then(|hero| villain_raw.parse::<WeaponKind>().map(|villain| (hero, villain)));
    let (hero_weapon, villain_weapon) = match weapons {
        Ok(pair) => pair,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{ODDS_USAGE}");
            return 2;
        }
    };

    let rounds = parse_u32_arg(extra.first().copied(), "rounds", DEFAULT_ODDS_ROUNDS)
        .min(MAX_ODDS_ROUNDS);
    let seed = parse_u64_arg(extra.get(1).copied(), "seed", config.seed).unwrap_or(7);

    let odds = estimate_matchup(hero_weapon, villain_weapon, rounds, seed, &WorkerPool::default());
    match serde_json::to_string_pretty(&odds) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize matchup odds: {err}");
            1
        }
    }
}

fn handle_history(args: &[String], config: &Config) -> i32 {
    let path = positional(args)
        .first()
        .map(|raw| std::path::PathBuf::from(*raw))
        .unwrap_or_else(|| config.history_path.clone());

    let records = match read_history(&path) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("failed to read history '{}': {err}", path.display());
            return 1;
        }
    };
    match serde_json::to_string_pretty(&summarize(&records)) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize history summary: {err}");
            1
        }
    }
}

fn parse_u32_arg(raw: Option<&str>, name: &str, default: u32) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&str>, name: &str, default: Option<u64>) -> Option<u64> {
    match raw {
        None => default,
        Some(value) => value.parse::<u64>().map(Some).unwrap_or_else(|_| {
            eprintln!("invalid {name} '{value}', ignoring");
            default
        }),
    }
}

/// Convenience for `main`: dispatch on the process arguments.
pub fn run_from_env() -> i32 {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args)
}
