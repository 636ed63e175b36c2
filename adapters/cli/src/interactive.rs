//! Line-driven stepping through a session.
//!
//! A reader thread forwards stdin lines over a channel so that `stop` can
//! cancel a `play` in progress while the main thread is busy stepping. Each
//! `play` line gets its own token as it is read, so a `stop` queued behind it
//! always reaches it.

use std::{
    io::{self, BufRead},
    sync::mpsc::{self, Receiver},
    thread,
};

use anyhow::Result as AnyResult;
use dohyo_rendering::{Presenter, TextPresenter};
use dohyo_session::{Session, StepOutcome};
use tracing::debug;

use crate::{
    autoplay::{self, CancellationToken, PlaybackEnd},
    config::Settings,
    log_events, scene,
};

const HELP: &str =
    "commands: step (s), back (b), play (p), stop, score, reset, show, help, quit (q)";

/// Control words accepted on stdin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Control {
    Step,
    Back,
    Play,
    Stop,
    Score,
    Reset,
    Show,
    Help,
    Quit,
}

impl Control {
    fn parse(line: &str) -> Option<Self> {
        let control = match line.trim().to_ascii_lowercase().as_str() {
            "step" | "s" => Self::Step,
            "back" | "b" => Self::Back,
            "play" | "p" => Self::Play,
            "stop" => Self::Stop,
            "score" => Self::Score,
            "reset" => Self::Reset,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "q" => Self::Quit,
            _ => return None,
        };
        Some(control)
    }
}

/// A stdin line and the playback token that was current when it was read.
struct Input {
    line: String,
    playback: CancellationToken,
}

/// Runs the prompt loop until `quit` or end of input.
pub(crate) fn run(mut session: Session, settings: Settings) -> AnyResult<()> {
    let inputs = spawn_reader();
    let mut presenter = TextPresenter::new(io::stdout());

    println!("{HELP}");
    presenter.present(&scene(&session, None))?;

    while let Ok(Input { line, playback }) = inputs.recv() {
        let Some(control) = Control::parse(&line) else {
            if !line.trim().is_empty() {
                println!("unknown command `{}`; type `help`", line.trim());
            }
            continue;
        };

        match control {
            Control::Step => match session.step_forward(&mut Vec::new()) {
                StepOutcome::Finished => println!("script finished"),
                outcome => presenter.present(&scene(&session, Some(outcome)))?,
            },
            Control::Back => {
                if session.step_back() {
                    presenter.present(&scene(&session, None))?;
                } else {
                    println!("nothing to undo");
                }
            }
            Control::Play => {
                let end = autoplay::play(
                    &mut session,
                    settings.delay,
                    &playback,
                    |session, outcome, events| {
                        log_events(events);
                        presenter.present(&scene(session, Some(outcome)))
                    },
                )?;
                if end == PlaybackEnd::Cancelled {
                    println!("stopped at step {}", session.cursor());
                }
            }
            // Handled by the reader, which cancels the latest `play`.
            Control::Stop => {}
            Control::Score => println!("{}", session.compute_score()),
            Control::Reset => {
                session.restart();
                presenter.present(&scene(&session, None))?;
            }
            Control::Show => presenter.present(&scene(&session, None))?,
            Control::Help => println!("{HELP}"),
            Control::Quit => break,
        }
    }

    debug!(cursor = session.cursor(), "interactive session closed");
    Ok(())
}

/// Forwards stdin lines, cancelling the latest `play` as soon as `stop` arrives.
fn spawn_reader() -> Receiver<Input> {
    let (sender, receiver) = mpsc::channel();
    let _reader = thread::spawn(move || {
        let mut playback = CancellationToken::new();
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            match Control::parse(&line) {
                Some(Control::Play) => playback = CancellationToken::new(),
                Some(Control::Stop) => playback.cancel(),
                _ => {}
            }
            let input = Input {
                line,
                playback: playback.clone(),
            };
            if sender.send(input).is_err() {
                break;
            }
        }
    });
    receiver
}
