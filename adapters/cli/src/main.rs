#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that replays Dohyo puzzles.

mod autoplay;
mod config;
mod interactive;

use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result as AnyResult};
use clap::{ArgAction, Args, Parser, Subcommand};
use dohyo_core::{Event, ScoreReport, ScriptEntry};
use dohyo_rendering::{Presenter, Scene, TextPresenter};
use dohyo_session::{Session, StepOutcome};
use dohyo_system_loader::parse_puzzle;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    autoplay::CancellationToken,
    config::{FileConfig, Overrides, RenderMode, Settings},
};

#[derive(Parser, Debug)]
#[command(
    name = "dohyo",
    version,
    about = "Replay ore-and-hole puzzles against command scripts"
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG wins when set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Execute the whole script and print the score
    Run(RunArgs),
    /// Step through the script with commands read from stdin
    Interactive(InteractiveArgs),
    /// Plan a command script; commands go to stdout, the score to stderr
    Solve(SolveArgs),
}

#[derive(Args, Debug)]
struct SolveArgs {
    /// Puzzle file (`N M` header then N rows), or `-` for stdin
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Puzzle file (`N M` header then N rows), or `-` for stdin
    #[arg(value_name = "PUZZLE")]
    puzzle: PathBuf,
    /// Command script, one `<opcode> <direction>` per line, or `-` for stdin
    #[arg(value_name = "COMMANDS")]
    commands: PathBuf,
    /// TOML file with `[playback]` and `[output]` settings
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    inputs: InputArgs,
    /// Pause between commands, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
    /// When to draw the board
    #[arg(long, value_enum)]
    render: Option<RenderMode>,
    /// Print the score report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct InteractiveArgs {
    #[command(flatten)]
    inputs: InputArgs,
    /// Pause between commands during `play`, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,
}

/// Entry point for the Dohyo command-line interface.
fn main() -> AnyResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        CliCommand::Run(args) => run(args),
        CliCommand::Interactive(args) => {
            let settings = resolve_settings(
                &args.inputs,
                Overrides {
                    delay_ms: args.delay_ms,
                    ..Overrides::default()
                },
            )?;
            if is_stdin(&args.inputs.puzzle) || is_stdin(&args.inputs.commands) {
                bail!("interactive mode reads control words from stdin; pass both inputs as files");
            }
            let session = load_session(&args.inputs)?;
            interactive::run(session, settings)
        }
        CliCommand::Solve(args) => solve(&args),
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn run(args: RunArgs) -> AnyResult<()> {
    let settings = resolve_settings(
        &args.inputs,
        Overrides {
            delay_ms: args.delay_ms,
            render: args.render,
            json: args.json,
        },
    )?;
    let mut session = load_session(&args.inputs)?;

    // JSON output owns stdout; the board is not drawn alongside it.
    let render = if settings.json {
        RenderMode::Never
    } else {
        settings.render
    };
    let mut presenter = TextPresenter::new(io::stdout());
    if render == RenderMode::EveryStep {
        presenter.present(&scene(&session, None))?;
    }

    // Nothing cancels a non-interactive run.
    let token = CancellationToken::new();
    let _ = autoplay::play(
        &mut session,
        settings.delay,
        &token,
        |session, outcome, events| {
            log_events(events);
            if render == RenderMode::EveryStep {
                presenter.present(&scene(session, Some(outcome)))?;
            }
            Ok(())
        },
    )?;

    if render == RenderMode::Final {
        presenter.present(&scene(&session, None))?;
    }

    let report = session.compute_score();
    info!(score = report.score, placed = report.placed_ore, "run finished");
    print_report(&report, settings.json)
}

fn solve(args: &SolveArgs) -> AnyResult<()> {
    let text = read_input(&args.puzzle)?;
    let layout = parse_puzzle(&text)
        .with_context(|| format!("invalid puzzle {}", args.puzzle.display()))?;

    let solution = dohyo_system_solver::solve(&layout);
    info!(commands = solution.commands().len(), "solution planned");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{solution}").context("failed to write solution")?;
    stdout.flush().context("failed to flush solution")?;
    eprintln!("{}", solution.report());
    Ok(())
}

fn resolve_settings(inputs: &InputArgs, overrides: Overrides) -> AnyResult<Settings> {
    let file = inputs
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    Ok(Settings::resolve(overrides, file))
}

fn load_session(inputs: &InputArgs) -> AnyResult<Session> {
    if is_stdin(&inputs.puzzle) && is_stdin(&inputs.commands) {
        bail!("only one of PUZZLE and COMMANDS may be read from stdin");
    }
    let puzzle = read_input(&inputs.puzzle)?;
    let commands = read_input(&inputs.commands)?;
    let session = Session::from_text(&puzzle, &commands)
        .with_context(|| format!("invalid puzzle {}", inputs.puzzle.display()))?;
    info!(
        dimension = session.layout().dimension(),
        commands = session.script().len(),
        malformed = session.script().malformed_count(),
        "session loaded"
    );
    Ok(session)
}

fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

fn read_input(path: &Path) -> AnyResult<String> {
    if is_stdin(path) {
        let mut text = String::new();
        let _ = io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn print_report(report: &ScoreReport, json: bool) -> AnyResult<()> {
    if json {
        let encoded =
            serde_json::to_string_pretty(report).context("failed to encode score report")?;
        println!("{encoded}");
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Records what a step did at `debug` level.
fn log_events(events: &[Event]) {
    for event in events {
        debug!(?event, "step event");
    }
}

/// Builds a frame of the current board, captioned with the step just taken.
fn scene(session: &Session, outcome: Option<StepOutcome>) -> Scene {
    let total = session.script().len();
    let status = match outcome {
        None => format!("step {}/{total}", session.cursor()),
        Some(StepOutcome::Finished) => format!("step {total}/{total}: script finished"),
        Some(StepOutcome::Executed { index, .. }) => match session.script().get(index) {
            Some(ScriptEntry::Command(command)) => {
                format!("step {}/{total}: {command}", index + 1)
            }
            Some(ScriptEntry::Malformed { line, reason }) => {
                format!("step {}/{total}: skipped `{line}` ({reason})", index + 1)
            }
            None => format!("step {}/{total}", index + 1),
        },
    };
    Scene::from_world(session.world()).with_status(status)
}
