// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Cancellable deferred search.
//!
//! Each scheduled search gets its own timer thread and a shared cancellation
//! flag. Scheduling always cancels the previous timer first, so at most one
//! deferred search is pending at any time.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
        mpsc::Sender,
    },
    thread,
    time::Duration,
};

use crate::events::AppEvent;

struct PendingTimer {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

pub(crate) struct Debouncer {
    delay: Duration,
    event_tx: Sender<AppEvent>,
    next_id: u64,
    pending: Option<PendingTimer>,
}

impl Debouncer {
    pub(crate) fn new(delay: Duration, event_tx: Sender<AppEvent>) -> Self {
        Self {
            delay,
            event_tx,
            next_id: 0,
            pending: None,
        }
    }

    /// Cancels any pending timer and starts a new one for `query`.
    ///
    /// When the delay elapses without the timer being cancelled, an
    /// [`AppEvent::DebounceElapsed`] is posted to the event loop.
    pub(crate) fn schedule(&mut self, query: String) -> u64 {
        self.cancel();

        self.next_id += 1;
        let id = self.next_id;
        let cancelled = Arc::new(AtomicBool::new(false));

        let delay = self.delay;
        let event_tx = self.event_tx.clone();
        let timer_cancelled = Arc::clone(&cancelled);
        thread::spawn(move || {
            thread::sleep(delay);
            if !timer_cancelled.load(Ordering::Acquire) {
                let _ = event_tx.send(AppEvent::DebounceElapsed {
                    timer_id: id,
                    query,
                });
            }
        });

        self.pending = Some(PendingTimer { id, cancelled });
        id
    }

    /// Cancels the pending timer, if any. Returns whether one was pending.
    pub(crate) fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(timer) => {
                timer.cancelled.store(true, Ordering::Release);
                true
            }
            None => false,
        }
    }

    /// Consumes the pending timer if `timer_id` is the one that is pending.
    ///
    /// A timer can expire just before it is cancelled, leaving its event
    /// queued behind the cancellation. Such an event no longer matches the
    /// pending timer and is rejected here.
    pub(crate) fn fire(&mut self, timer_id: u64) -> bool {
        match &self.pending {
            Some(timer) if timer.id == timer_id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, RecvTimeoutError};

    use super::*;

    const DELAY: Duration = Duration::from_millis(40);

    #[test]
    fn posts_event_after_delay() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(DELAY, event_tx);

        let id = debouncer.schedule("bat".to_string());

        match event_rx.recv_timeout(DELAY * 20).unwrap() {
            AppEvent::DebounceElapsed { timer_id, query } => {
                assert_eq!(timer_id, id);
                assert_eq!(query, "bat");
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(debouncer.fire(id));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn cancelled_timer_posts_nothing() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(DELAY, event_tx);

        debouncer.schedule("bat".to_string());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        assert_eq!(
            event_rx.recv_timeout(DELAY * 4).unwrap_err(),
            RecvTimeoutError::Timeout
        );
    }

    #[test]
    fn rescheduling_supersedes_previous_timer() {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut debouncer = Debouncer::new(DELAY, event_tx);

        let first = debouncer.schedule("b".to_string());
        let second = debouncer.schedule("ba".to_string());

        assert!(!debouncer.fire(first));
        assert!(debouncer.is_pending());
        assert!(debouncer.fire(second));
        assert!(!debouncer.fire(second));
    }
}
