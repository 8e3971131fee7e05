//! Replay driver: a recorded message stream plus a real frame timer.
//!
//! Reads newline-delimited JSON envelopes, one message per line, and
//! interleaves them with render ticks from a [`tokio::time::Interval`]. Lines
//! that are blank are skipped; lines that do not parse are logged and
//! skipped. When the stream ends the driver yields one last tick, so the
//! final state is drawn, and then closes.

use std::time::Duration;

use huddle_core::{Game, PlayerId};
use huddle_proto::InboundMessage;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, Lines},
    time::{Interval, MissedTickBehavior},
};

use crate::{AppError, Driver, Input, MainView};

/// Driver replaying NDJSON messages from any buffered async reader.
#[derive(Debug)]
pub struct ReplayDriver<R> {
    lines: Lines<R>,
    ticker: Interval,
    line_no: u64,
    eof: bool,
    frames: u64,
}

impl<R: AsyncBufRead + Unpin> ReplayDriver<R> {
    /// Replay `reader`, ticking every `tick_interval`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(reader: R, tick_interval: Duration) -> Self {
        let mut ticker = tokio::time::interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        Self { lines: reader.lines(), ticker, line_no: 0, eof: false, frames: 0 }
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Next decodable message, or `None` at end of stream.
async fn read_message<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
    line_no: &mut u64,
) -> Result<Option<InboundMessage>, AppError> {
    while let Some(line) = lines.next_line().await? {
        *line_no += 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match InboundMessage::from_json(line) {
            Ok(message) => return Ok(Some(message)),
            Err(err) => tracing::warn!(line = *line_no, error = %err, "undecodable line, skipping"),
        }
    }
    Ok(None)
}

impl<R: AsyncBufRead + Unpin> Driver for ReplayDriver<R> {
    type Error = AppError;

    async fn next_input(&mut self) -> Result<Option<Input>, AppError> {
        if self.eof {
            return Ok(None);
        }

        tokio::select! {
            biased;

            _ = self.ticker.tick() => Ok(Some(Input::Tick)),
            message = read_message(&mut self.lines, &mut self.line_no) => match message? {
                Some(message) => Ok(Some(Input::Message(message))),
                None => {
                    tracing::info!(lines = self.line_no, "replay stream ended");
                    self.eof = true;
                    Ok(Some(Input::Tick))
                },
            },
        }
    }

    fn render(&mut self, view: &MainView, game: &Game) -> Result<(), AppError> {
        self.frames += 1;

        let turn = game.turn();
        tracing::debug!(
            frame = self.frames,
            players = game.player_count(),
            active = game.active_player_id().map(PlayerId::as_str),
            half = turn.half,
            mode = %turn.mode,
            dugouts = view.dugouts_visible(),
            float_texts = view.float_texts().len(),
            "render"
        );

        if let Some(action) = view.action_text() {
            tracing::debug!(player = %action.player, action = %action.action, "action text");
        }
        if let Some(animation) = view.block_dice() {
            tracing::debug!(
                key = animation.key(),
                outcome = animation.outcome(),
                resting = animation.final_frame(),
                "block dice"
            );
        }
        Ok(())
    }

    fn stop(&mut self) {
        tracing::info!(frames = self.frames, "replay driver stopped");
    }
}
