//! Session driver: prompts, input race, notices, final banner
//!
//! Generic over the line source and the output sink so a whole game can run
//! from a script into a buffer.

use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info};

use crate::core::input::{InputEvent, LineSource};
use crate::core::TurnEngine;
use crate::types::{GameSummary, Notice, TurnOutcome};
use crate::GameError;

pub const GUESS_PROMPT: &str =
    "Enter a letter or full word (or type 'steal' for other player to guess): ";

pub const STEAL_PROMPT: &str = "Other player, enter your full word guess: ";

/// How one game is presented
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Deadline per prompt; `None` waits forever
    pub guess_timeout: Option<Duration>,
    /// ANSI colors on notices and the banner
    pub color: bool,
    /// One JSON object per event instead of prose
    pub json: bool,
    /// Recorded in the summary
    pub genre: Option<String>,
}

/// Play until the engine reaches an outcome
pub async fn play<S, W>(
    engine: &mut TurnEngine,
    input: &mut S,
    out: &mut W,
    options: &SessionOptions,
) -> Result<GameSummary, GameError>
where
    S: LineSource,
    W: Write,
{
    let started_at = Utc::now();
    let timeout = options.guess_timeout;
    info!(
        cells = engine.display().len(),
        max_incorrect = engine.budget().max(),
        timed = timeout.is_some(),
        "game started"
    );

    if !options.json {
        writeln!(out)?;
        writeln!(out, "Let's start! Guess the word or letters:")?;
        if let Some(limit) = timeout {
            writeln!(out, "You have {} seconds per guess.", limit.as_secs())?;
        }
        writeln!(out, "{}", engine.display())?;
    }

    while !engine.is_over() {
        prompt(out, GUESS_PROMPT, options)?;
        let notice = match input.request_line(timeout).await {
            InputEvent::Line(line) => engine.submit_guess(&line),
            InputEvent::Expired => {
                end_prompt_line(out, options)?;
                engine.submit_timeout()
            }
            InputEvent::Closed => {
                end_prompt_line(out, options)?;
                engine.forfeit()
            }
        };
        emit(engine, notice, out, options)?;

        if notice == Notice::StealRequested {
            prompt(out, STEAL_PROMPT, options)?;
            let notice = match input.request_line(timeout).await {
                InputEvent::Line(line) => engine.submit_steal(Some(&line)),
                InputEvent::Expired => {
                    // The stealer may still be typing; that line is not the guesser's
                    input.abandon_pending();
                    end_prompt_line(out, options)?;
                    engine.submit_steal(None)
                }
                InputEvent::Closed => {
                    end_prompt_line(out, options)?;
                    engine.submit_steal(None)
                }
            };
            emit(engine, notice, out, options)?;
        }
    }

    let summary = GameSummary {
        outcome: engine.outcome().unwrap_or(TurnOutcome::Loss),
        phrase: engine.phrase().original().to_string(),
        genre: options.genre.clone(),
        incorrect: engine.budget().used(),
        max_incorrect: engine.budget().max(),
        events: engine.event_count(),
        started_at,
        finished_at: Utc::now(),
    };
    info!(outcome = %summary.outcome, events = summary.events, "game finished");

    if options.json {
        writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    } else if options.color {
        writeln!(out, "{}", summary.to_terminal_string())?;
    } else {
        writeln!(out, "{}", summary.announcement())?;
    }
    out.flush()?;

    Ok(summary)
}

fn prompt<W: Write>(out: &mut W, text: &str, options: &SessionOptions) -> Result<(), GameError> {
    if options.json {
        return Ok(());
    }
    match options.guess_timeout {
        Some(limit) => write!(out, "[{}s] {}", limit.as_secs(), text)?,
        None => write!(out, "{}", text)?,
    }
    out.flush()?;
    Ok(())
}

// The player never pressed Enter, so the cursor is still on the prompt line
fn end_prompt_line<W: Write>(out: &mut W, options: &SessionOptions) -> Result<(), GameError> {
    if !options.json {
        writeln!(out)?;
    }
    Ok(())
}

fn emit<W: Write>(
    engine: &TurnEngine,
    notice: Notice,
    out: &mut W,
    options: &SessionOptions,
) -> Result<(), GameError> {
    let report = engine.report(notice);
    debug!(event = %report.to_parseable_string(), "turn");
    if options.json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
        return Ok(());
    }

    if options.color {
        writeln!(out, "{}", report.to_terminal_string())?;
    } else {
        writeln!(out, "{}", notice.message())?;
    }
    if notice.redraws_display() {
        writeln!(out, "{}", report.display)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::ScriptedLines;
    use crate::types::SecretPhrase;

    fn engine(text: &str, max: u32) -> TurnEngine {
        TurnEngine::new(SecretPhrase::new(text).unwrap(), max)
    }

    fn plain() -> SessionOptions {
        SessionOptions::default()
    }

    #[tokio::test]
    async fn test_timeout_is_forwarded_to_every_prompt() {
        let mut e = engine("veep", 6);
        let mut input = ScriptedLines::from_lines(["steal", "nope", "veep"]);
        let options = SessionOptions {
            guess_timeout: Some(Duration::from_secs(45)),
            ..plain()
        };
        let mut out = Vec::new();
        play(&mut e, &mut input, &mut out, &options).await.unwrap();

        let limit = Some(Duration::from_secs(45));
        assert_eq!(input.requests(), &[limit, limit, limit]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[45s] Enter a letter"));
        assert!(text.contains("[45s] Other player"));
    }

    #[tokio::test]
    async fn test_json_mode_emits_one_object_per_line() {
        let mut e = engine("veep", 3);
        let mut input = ScriptedLines::from_lines(["z", "veep"]);
        let options = SessionOptions {
            json: true,
            ..plain()
        };
        let mut out = Vec::new();
        play(&mut e, &mut input, &mut out, &options).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            let _: serde_json::Value = serde_json::from_str(line).unwrap();
        }
        assert!(lines[0].contains("wrong_letter"));
        assert!(lines[2].contains("GUESSER_WINS"));
    }

    #[tokio::test]
    async fn test_closed_input_forfeits() {
        let mut e = engine("veep", 3);
        let mut input = ScriptedLines::new().line("e");
        let mut out = Vec::new();
        let summary = play(&mut e, &mut input, &mut out, &plain()).await.unwrap();

        assert_eq!(summary.outcome, TurnOutcome::Loss);
        assert_eq!(summary.incorrect, 0);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Input closed, game forfeited."));
        assert!(text.ends_with("You lose! The word was: veep\n"));
    }
}
