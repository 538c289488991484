// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace export.
//!
//! [`JsonLinesSink`] writes every event as one compact JSON object followed
//! by a newline. Each object carries an `"event"` name and a monotonically
//! increasing `"seq"` number, so output from several sliders can be merged
//! and re-sorted by tools.

use std::io::Write;

use serde_json::{Value, json};

use revolver_core::auto_slide::AutoSlideState;
use revolver_core::trace::{
    AutoSlideEvent, CommitEvent, JumpEvent, LayoutEvent, PanelsReplacedEvent, TimerEvent,
    TraceSink,
};

use crate::{auto_state_name, direction_name, timer_action_name};

/// Writes one JSON object per trace event.
pub struct JsonLinesSink<W: Write = Box<dyn Write>> {
    writer: W,
    seq: u64,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl JsonLinesSink {
    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer, seq: 0 }
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    /// Returns the destination, consuming the sink.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, name: &str, args: Value) {
        let line = json!({
            "seq": self.seq,
            "event": name,
            "args": args,
        });
        self.seq += 1;
        let _ = serde_json::to_writer(&mut self.writer, &line);
        let _ = self.writer.write_all(b"\n");
    }
}

fn state_value(state: AutoSlideState) -> Value {
    json!({
        "state": auto_state_name(state),
        "token": state.pending_token().map(|t| t.0),
    })
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.emit(
            "layout",
            json!({
                "width": e.width,
                "height": e.height,
            }),
        );
    }

    fn on_panels_replaced(&mut self, e: &PanelsReplacedEvent) {
        self.emit(
            "panels_replaced",
            json!({
                "old_count": e.old_count,
                "new_count": e.new_count,
                "current": e.current,
            }),
        );
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        self.emit(
            "commit",
            json!({
                "direction": direction_name(e.direction),
                "from": e.from,
                "to": e.to,
                "count": e.count,
            }),
        );
    }

    fn on_jump(&mut self, e: &JumpEvent) {
        self.emit(
            "jump",
            json!({
                "from": e.from,
                "requested": e.requested,
                "count": e.count,
                "accepted": e.accepted,
            }),
        );
    }

    fn on_auto_slide(&mut self, e: &AutoSlideEvent) {
        self.emit(
            "auto_slide",
            json!({
                "from": state_value(e.from),
                "to": state_value(e.to),
            }),
        );
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.emit(
            "timer",
            json!({
                "token": e.token.0,
                "action": timer_action_name(e.action),
            }),
        );
    }

    fn on_destroy(&mut self) {
        self.emit("destroy", Value::Null);
    }
}
