//! Timed continuations.
//!
//! The engine is synchronous; anything that happens "later" (the simulated
//! submission delay, counter animation ticks) is an entry here. The embedder
//! asks [`TimerQueue::next_deadline`] when to wake and the page fires due
//! entries in time order from `Page::advance`.

use std::time::Instant;

use vitrina_dom::NodeId;

use crate::transport::Lead;

#[derive(Debug)]
pub enum TimerKind {
    /// The 1500 ms submission wait elapsed; hand `lead` to the transport.
    Delivery { lead: Lead },
    /// Advance the number animation running on `block`.
    CountTick { block: NodeId },
}

#[derive(Debug)]
pub struct TimerEntry {
    pub at: Instant,
    pub kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<TimerEntry>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at: Instant, kind: TimerKind) {
        self.entries.push(TimerEntry { at, kind });
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.at).min()
    }

    /// Remove and return the earliest entry due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<TimerEntry> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.at <= now)
            .min_by_key(|(_, entry)| entry.at)
            .map(|(index, _)| index)?;
        Some(self.entries.swap_remove(index))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vitrina_dom::{Document, Viewport};

    fn some_node() -> NodeId {
        // Any NodeId works for ordering tests; mint one from a throwaway tree.
        let mut doc = Document::new(Viewport {
            width: 1.0,
            height: 1.0,
        });
        doc.create_element("div")
    }

    #[test]
    fn pops_in_time_order() {
        let mut timers = TimerQueue::new();
        let base = Instant::now();
        timers.schedule(
            base + Duration::from_millis(32),
            TimerKind::Delivery {
                lead: Lead {
                    name: "a".to_string(),
                    phone: "b".to_string(),
                    question: "c".to_string(),
                },
            },
        );
        let block = some_node();
        timers.schedule(base + Duration::from_millis(16), TimerKind::CountTick { block });

        assert_eq!(timers.next_deadline(), Some(base + Duration::from_millis(16)));
        let first = timers
            .pop_due(base + Duration::from_millis(40))
            .expect("due entry");
        assert!(matches!(first.kind, TimerKind::CountTick { .. }));
        let second = timers
            .pop_due(base + Duration::from_millis(40))
            .expect("due entry");
        assert!(matches!(second.kind, TimerKind::Delivery { .. }));
        assert!(timers.pop_due(base + Duration::from_millis(40)).is_none());
        assert!(timers.is_empty());
    }

    #[test]
    fn nothing_due_before_deadline() {
        let mut timers = TimerQueue::new();
        let base = Instant::now();
        let block = some_node();
        timers.schedule(base + Duration::from_millis(16), TimerKind::CountTick { block });
        assert!(timers.pop_due(base).is_none());
        assert!(!timers.is_empty());
    }
}
