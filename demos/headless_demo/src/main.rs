// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted headless session that exercises the slider and its tracing.
//!
//! Drives a five-panel slider through drags in both directions, a few
//! auto-slide cycles, an app suspension, a rejected jump and a panel
//! replacement. Trace events go to a
//! [`PrettyPrintSink`](revolver_debug::pretty::PrettyPrintSink) on stdout and
//! a [`JsonLinesSink`](revolver_debug::json::JsonLinesSink) file.

use std::fs::File;
use std::io::BufWriter;

use kurbo::Rect;
use revolver_core::config::SliderConfig;
use revolver_core::time::Duration;
use revolver_core::trace::{
    AutoSlideEvent, CommitEvent, JumpEvent, LayoutEvent, PanelsReplacedEvent, TimerEvent,
    TraceSink,
};
use revolver_debug::json::JsonLinesSink;
use revolver_debug::pretty::PrettyPrintSink;
use revolver_harness::host::HeadlessHost;
use revolver_harness::observer::RecordingObserver;

const INTERVAL: Duration = Duration::from_secs(3);

/// Forwards every event to two sinks.
struct Tee<A, B>(A, B);

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.0.on_layout(e);
        self.1.on_layout(e);
    }

    fn on_panels_replaced(&mut self, e: &PanelsReplacedEvent) {
        self.0.on_panels_replaced(e);
        self.1.on_panels_replaced(e);
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        self.0.on_commit(e);
        self.1.on_commit(e);
    }

    fn on_jump(&mut self, e: &JumpEvent) {
        self.0.on_jump(e);
        self.1.on_jump(e);
    }

    fn on_auto_slide(&mut self, e: &AutoSlideEvent) {
        self.0.on_auto_slide(e);
        self.1.on_auto_slide(e);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.0.on_timer(e);
        self.1.on_timer(e);
    }

    fn on_destroy(&mut self) {
        self.0.on_destroy();
        self.1.on_destroy();
    }
}

fn main() {
    // -- sinks -------------------------------------------------------------
    let path = "revolver_trace.jsonl";
    let file = File::create(path).expect("failed to create revolver_trace.jsonl");
    let pretty = PrettyPrintSink::new(Box::new(std::io::stdout()));
    let json = JsonLinesSink::with_writer(BufWriter::new(file));

    // -- host --------------------------------------------------------------
    let panels = vec!["red", "orange", "yellow", "green", "blue"];
    let config = SliderConfig::new().with_auto_slide(INTERVAL);
    let mut host = HeadlessHost::new(Rect::new(0.0, 0.0, 390.0, 220.0), panels, config)
        .expect("valid slider config");
    host.slider_mut().set_trace_sink(Box::new(Tee(pretty, json)));
    let (recorder, weak) = RecordingObserver::shared();
    host.slider_mut().set_observer(weak);

    // -- script ------------------------------------------------------------
    println!("# drag forward");
    let _ = host.drag_path(&[450.0, 600.0, 780.0]);

    println!("# drag backward twice");
    let _ = host.drag_path(&[300.0, 120.0, 0.0]);
    let _ = host.drag_path(&[200.0, 0.0]);

    println!("# auto-slide for 10s");
    let fired = host.advance(Duration::from_secs(10));

    println!("# app goes to background for a minute");
    host.resign_active();
    let _ = host.advance(Duration::from_secs(60));
    host.become_active();

    println!("# jump out of range");
    if let Err(err) = host.update(|s| s.jump_to(9)) {
        println!("rejected: {err}");
    }

    println!("# replace panels");
    host.update(|s| s.set_panels(vec!["cyan", "magenta"]));
    let _ = host.advance(INTERVAL);

    let current = host.slider().current_panel().copied();
    let notifications = recorder.borrow().events.len();
    drop(host);

    println!(
        "current={} auto-advances={fired} notifications={notifications}",
        current.unwrap_or("-"),
    );
    println!("Wrote {path}");
}
