//! Paced, cancellable playback of the remaining script.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::Duration,
};

use anyhow::Result as AnyResult;
use dohyo_core::Event;
use dohyo_session::{Session, StepOutcome};
use tracing::{debug, info};

/// Shared flag that asks a running playback to stop before its next step.
#[derive(Clone, Debug, Default)]
pub(crate) struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// How a playback ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PlaybackEnd {
    Completed,
    Cancelled,
}

/// Steps the session until the script is exhausted or `token` is cancelled.
///
/// `on_step` runs after every executed entry with the events it produced.
/// `delay` is slept between entries, never after the last one.
pub(crate) fn play<F>(
    session: &mut Session,
    delay: Duration,
    token: &CancellationToken,
    mut on_step: F,
) -> AnyResult<PlaybackEnd>
where
    F: FnMut(&Session, StepOutcome, &[Event]) -> AnyResult<()>,
{
    let mut events = Vec::new();
    loop {
        if token.is_cancelled() {
            info!(cursor = session.cursor(), "playback cancelled");
            return Ok(PlaybackEnd::Cancelled);
        }

        events.clear();
        let outcome = session.step_forward(&mut events);
        if outcome == StepOutcome::Finished {
            debug!("playback completed");
            return Ok(PlaybackEnd::Completed);
        }
        on_step(session, outcome, &events)?;

        if !delay.is_zero() && !session.is_finished() {
            thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str = "3 1\nAa.\n...\n...\n";

    fn session(commands: &str) -> Session {
        Session::from_text(PUZZLE, commands).expect("valid input")
    }

    #[test]
    fn plays_every_entry_when_uncancelled() {
        let mut session = session("1 R\n1 D\n1 U\n");
        let token = CancellationToken::new();
        let mut seen = Vec::new();

        let end = play(&mut session, Duration::ZERO, &token, |_, outcome, _| {
            seen.push(outcome);
            Ok(())
        })
        .expect("playback");

        assert_eq!(end, PlaybackEnd::Completed);
        assert_eq!(seen.len(), 3);
        assert!(session.is_finished());
    }

    #[test]
    fn cancellation_stops_before_next_step() {
        let mut session = session("1 R\n1 D\n1 U\n1 L\n");
        let token = CancellationToken::new();
        let canceller = token.clone();

        let end = play(&mut session, Duration::ZERO, &token, |session, _, _| {
            if session.cursor() == 2 {
                canceller.cancel();
            }
            Ok(())
        })
        .expect("playback");

        assert_eq!(end, PlaybackEnd::Cancelled);
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.undo_depth(), 2);
    }

    #[test]
    fn pre_cancelled_token_takes_no_step() {
        let mut session = session("1 R\n1 D\n");
        let token = CancellationToken::new();
        token.cancel();

        let end = play(&mut session, Duration::ZERO, &token, |_, _, _| Ok(())).expect("playback");

        assert_eq!(end, PlaybackEnd::Cancelled);
        assert_eq!(session.cursor(), 0);
        assert!(token.clone().is_cancelled(), "clones share the flag");
    }

    #[test]
    fn callback_errors_abort_playback() {
        let mut session = session("1 R\n1 D\n");
        let token = CancellationToken::new();

        let result = play(&mut session, Duration::ZERO, &token, |_, _, _| {
            Err(anyhow::anyhow!("sink closed"))
        });

        assert!(result.is_err());
        assert_eq!(session.cursor(), 1);
    }
}
