// Copyright 2026 the Revolver Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Test doubles shared by the unit tests in this crate.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use crate::time::Duration;
use crate::timer::{SlideTimer, TimerToken};

/// A [`SlideTimer`] that records every call and fires nothing on its own.
#[derive(Debug, Default)]
pub(crate) struct RecordingTimer {
    next: u64,
    pub(crate) scheduled: Vec<(TimerToken, Duration)>,
    pub(crate) cancelled: Vec<TimerToken>,
    pub(crate) fired: Vec<TimerToken>,
}

impl RecordingTimer {
    /// Tokens scheduled but neither cancelled nor fired.
    pub(crate) fn live(&self) -> Vec<TimerToken> {
        self.scheduled
            .iter()
            .map(|(t, _)| *t)
            .filter(|t| !self.cancelled.contains(t) && !self.fired.contains(t))
            .collect()
    }

    /// Marks `token` as delivered.
    pub(crate) fn fire(&mut self, token: TimerToken) {
        self.fired.push(token);
    }
}

impl SlideTimer for RecordingTimer {
    fn schedule(&mut self, after: Duration) -> TimerToken {
        self.next += 1;
        let token = TimerToken(self.next);
        self.scheduled.push((token, after));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.cancelled.push(token);
    }
}

/// A cloneable handle to a [`RecordingTimer`], for handing to a slider
/// while the test keeps inspecting it.
#[derive(Clone, Debug, Default)]
pub(crate) struct SharedTimer(pub(crate) Rc<RefCell<RecordingTimer>>);

impl SlideTimer for SharedTimer {
    fn schedule(&mut self, after: Duration) -> TimerToken {
        self.0.borrow_mut().schedule(after)
    }

    fn cancel(&mut self, token: TimerToken) {
        self.0.borrow_mut().cancel(token);
    }
}
