// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use revolver_core::auto_slide::AutoSlideState;
use revolver_core::trace::{
    AutoSlideEvent, CommitEvent, JumpEvent, LayoutEvent, PanelsReplacedEvent, TimerEvent,
    TraceSink,
};

use crate::{auto_state_name, direction_name, timer_action_name};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination, consuming the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn fmt_index(idx: Option<usize>) -> String {
    idx.map_or_else(|| "-".to_owned(), |i| i.to_string())
}

fn fmt_state(state: AutoSlideState) -> String {
    match state {
        AutoSlideState::Scheduled(token) => format!("scheduled(#{})", token.0),
        other => auto_state_name(other).to_owned(),
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        let _ = writeln!(self.writer, "[layout] slot={}x{}", e.width, e.height);
    }

    fn on_panels_replaced(&mut self, e: &PanelsReplacedEvent) {
        let _ = writeln!(
            self.writer,
            "[panels] {} -> {} current={}",
            e.old_count,
            e.new_count,
            fmt_index(e.current),
        );
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        let _ = writeln!(
            self.writer,
            "[commit] {} {} -> {} of {}",
            direction_name(e.direction),
            e.from,
            e.to,
            e.count,
        );
    }

    fn on_jump(&mut self, e: &JumpEvent) {
        let verdict = if e.accepted { "ok" } else { "REJECTED" };
        let _ = writeln!(
            self.writer,
            "[jump] {} -> {} of {} {verdict}",
            fmt_index(e.from),
            e.requested,
            e.count,
        );
    }

    fn on_auto_slide(&mut self, e: &AutoSlideEvent) {
        let _ = writeln!(
            self.writer,
            "[auto] {} -> {}",
            fmt_state(e.from),
            fmt_state(e.to),
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        let _ = writeln!(
            self.writer,
            "[timer] #{} {}",
            e.token.0,
            timer_action_name(e.action),
        );
    }

    fn on_destroy(&mut self) {
        let _ = writeln!(self.writer, "[destroy]");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use revolver_core::timer::TimerToken;
    use revolver_core::trace::{SlideDirection, TimerAction};

    fn output(sink: PrettyPrintSink<Vec<u8>>) -> String {
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn pretty_print_commit() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_commit(&CommitEvent {
            direction: SlideDirection::Backward,
            from: 0,
            to: 2,
            count: 3,
        });
        let output = output(sink);
        assert_eq!(output, "[commit] backward 0 -> 2 of 3\n");
    }

    #[test]
    fn pretty_print_rejected_jump() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_jump(&JumpEvent {
            from: Some(1),
            requested: 5,
            count: 3,
            accepted: false,
        });
        let output = output(sink);
        assert!(output.contains("REJECTED"), "got: {output}");
        assert!(output.contains("1 -> 5 of 3"), "got: {output}");
    }

    #[test]
    fn pretty_print_auto_slide_and_timer() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_auto_slide(&AutoSlideEvent {
            from: AutoSlideState::Disabled,
            to: AutoSlideState::Scheduled(TimerToken(4)),
        });
        sink.on_timer(&TimerEvent {
            token: TimerToken(4),
            action: TimerAction::Stale,
        });
        sink.on_destroy();
        let output = output(sink);
        assert_eq!(
            output,
            "[auto] disabled -> scheduled(#4)\n[timer] #4 stale\n[destroy]\n"
        );
    }

    #[test]
    fn pretty_print_empty_panels() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_panels_replaced(&PanelsReplacedEvent {
            old_count: 3,
            new_count: 0,
            current: None,
        });
        assert_eq!(output(sink), "[panels] 3 -> 0 current=-\n");
    }
}
