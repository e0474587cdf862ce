//! Timed Input Source: one line of text, or expiry
//!
//! `ReaderLines` races a blocking `read_line` on a dedicated thread against
//! `tokio::time::timeout`. The thread only reads when a prompt asks for a
//! line, so text piped ahead of time is never swallowed early.
//!
//! A line belongs to the prompt that is open when the read completes. If the
//! deadline fires first the read stays in flight; when it lands after the next
//! prompt opened it answers that prompt, and when it lands in between (no
//! prompt open) it is dropped for good. No line is ever delivered twice.
//!
//! The carry-over only holds while the same player is being asked. When the
//! prompt changes hands the caller abandons the read, and whatever it yields
//! is dropped even if the next prompt is already open.

use std::collections::VecDeque;
use std::io::{self, BufRead, BufReader};
use std::sync::mpsc as std_mpsc;
use std::thread;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Result of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A line, without its line terminator
    Line(String),
    /// The deadline elapsed first
    Expired,
    /// End of input, or the reader failed
    Closed,
}

/// Anything that can answer a prompt with a line or an expiry
#[allow(async_fn_in_trait)]
pub trait LineSource {
    /// Wait up to `timeout` for a line; `None` waits indefinitely
    async fn request_line(&mut self, timeout: Option<Duration>) -> InputEvent;

    /// Disown a read left in flight by an expired prompt, so its line never
    /// answers a later prompt
    fn abandon_pending(&mut self) {}
}

/// Lines from a blocking reader (stdin in the binary)
#[derive(Debug)]
pub struct ReaderLines {
    demand_tx: std_mpsc::Sender<()>,
    lines_rx: mpsc::UnboundedReceiver<String>,
    /// The reader thread owes us a line
    in_flight: bool,
    /// The in-flight read belongs to a prompt that changed hands
    abandoned: bool,
    closed: bool,
    discarded: u64,
}

impl ReaderLines {
    /// Start the reader thread.
    ///
    /// A plain thread rather than `spawn_blocking`: a read blocked on a
    /// terminal must not hold up runtime shutdown.
    pub fn spawn<R>(mut reader: R) -> io::Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (demand_tx, demand_rx) = std_mpsc::channel::<()>();
        let (lines_tx, lines_rx) = mpsc::unbounded_channel();

        thread::Builder::new()
            .name("line-reader".to_string())
            .spawn(move || {
                while demand_rx.recv().is_ok() {
                    let mut line = String::new();
                    match reader.read_line(&mut line) {
                        Ok(0) => {
                            debug!("input reached end of stream");
                            break;
                        }
                        Ok(_) => {
                            let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
                            if lines_tx.send(line.to_string()).is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!(error = %e, "read failed, closing input");
                            break;
                        }
                    }
                }
            })?;

        Ok(Self {
            demand_tx,
            lines_rx,
            in_flight: false,
            abandoned: false,
            closed: false,
            discarded: 0,
        })
    }

    pub fn stdin() -> io::Result<Self> {
        Self::spawn(BufReader::new(io::stdin()))
    }

    /// Lines dropped because they completed with no prompt open
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    fn drain_stale(&mut self) -> bool {
        loop {
            match self.lines_rx.try_recv() {
                Ok(stale) => {
                    self.in_flight = false;
                    self.abandoned = false;
                    self.discarded += 1;
                    warn!(line = %stale, "dropping line that arrived after its prompt expired");
                }
                Err(TryRecvError::Empty) => return true,
                Err(TryRecvError::Disconnected) => return false,
            }
        }
    }
}

impl LineSource for ReaderLines {
    async fn request_line(&mut self, timeout: Option<Duration>) -> InputEvent {
        if self.closed || !self.drain_stale() {
            self.closed = true;
            return InputEvent::Closed;
        }

        let deadline = timeout.map(|limit| Instant::now() + limit);
        loop {
            if !self.in_flight {
                if self.demand_tx.send(()).is_err() {
                    self.closed = true;
                    return InputEvent::Closed;
                }
                self.in_flight = true;
            }

            let received = match deadline {
                Some(at) => match tokio::time::timeout_at(at, self.lines_rx.recv()).await {
                    Ok(received) => received,
                    Err(_) => {
                        debug!(?timeout, "line request expired");
                        return InputEvent::Expired;
                    }
                },
                None => self.lines_rx.recv().await,
            };

            self.in_flight = false;
            match received {
                Some(line) if self.abandoned => {
                    self.abandoned = false;
                    self.discarded += 1;
                    warn!(line = %line, "dropping line meant for an abandoned prompt");
                }
                Some(line) => return InputEvent::Line(line),
                None => {
                    self.closed = true;
                    return InputEvent::Closed;
                }
            }
        }
    }

    fn abandon_pending(&mut self) {
        if self.in_flight {
            debug!("abandoning in-flight read");
            self.abandoned = true;
        }
    }
}

/// One scripted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Line(String),
    Expire,
}

/// In-memory source that replays a script, then reports `Closed`
#[derive(Debug, Default)]
pub struct ScriptedLines {
    steps: VecDeque<ScriptStep>,
    requests: Vec<Option<Duration>>,
}

impl ScriptedLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: lines.into_iter().map(|l| ScriptStep::Line(l.into())).collect(),
            requests: Vec::new(),
        }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.steps.push_back(ScriptStep::Line(text.into()));
        self
    }

    pub fn expire(mut self) -> Self {
        self.steps.push_back(ScriptStep::Expire);
        self
    }

    /// Timeouts passed to each request so far
    pub fn requests(&self) -> &[Option<Duration>] {
        &self.requests
    }

    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl LineSource for ScriptedLines {
    async fn request_line(&mut self, timeout: Option<Duration>) -> InputEvent {
        self.requests.push(timeout);
        match self.steps.pop_front() {
            Some(ScriptStep::Line(text)) => InputEvent::Line(text),
            Some(ScriptStep::Expire) => InputEvent::Expired,
            None => InputEvent::Closed,
        }
    }
}
