//! Scroll-driven reveal and number animation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use vitrina_dom::{Document, NodeId};
use vitrina_types::{first_digit_run, replace_first};

use crate::selectors::{ANIMATED_REGIONS, selector};
use crate::timers::{TimerKind, TimerQueue};

/// Total running time of a number animation.
pub const COUNT_DURATION: Duration = Duration::from_millis(1500);
/// Fixed tick spacing of a number animation.
pub const COUNT_TICK: Duration = Duration::from_millis(16);

/// Fraction of an element that must be visible to count as intersecting.
const VISIBILITY_THRESHOLD: f32 = 0.1;
/// Contraction of the trigger zone from the viewport bottom, so reveal
/// fires slightly before center-screen arrival.
const BOTTOM_MARGIN: f32 = 50.0;

/// Per-element reveal record, owned here rather than read back from
/// presentation classes. Both flags are monotonic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealStatus {
    pub revealed: bool,
    pub animated: bool,
}

#[derive(Debug)]
struct CountAnimation {
    label: NodeId,
    /// Label text as it read before the animation started; every tick
    /// re-renders from this, not from the mutated label.
    template: String,
    run: String,
    target: u64,
    current: f64,
    increment: f64,
}

/// Watches a fixed set of page regions and reveals each once.
#[derive(Debug)]
pub struct RevealController {
    observed: Vec<NodeId>,
    status: HashMap<NodeId, RevealStatus>,
    animations: HashMap<NodeId, CountAnimation>,
}

impl RevealController {
    pub fn bind(doc: &Document) -> Self {
        let observed = doc.query_all(&selector(ANIMATED_REGIONS));
        tracing::debug!(count = observed.len(), "observing regions for reveal");
        Self {
            observed,
            status: HashMap::new(),
            animations: HashMap::new(),
        }
    }

    /// Current record for `node` (all-false when never evaluated).
    #[must_use]
    pub fn status(&self, node: NodeId) -> RevealStatus {
        self.status.get(&node).copied().unwrap_or_default()
    }

    /// Re-check every observed element against the trigger zone.
    ///
    /// Runs at startup and after every scroll or settled resize. Revealing
    /// is one-way: an element that leaves the zone keeps its `visible`
    /// state, and a stat block never animates twice.
    pub fn evaluate(&mut self, doc: &mut Document, timers: &mut TimerQueue, now: Instant) {
        for index in 0..self.observed.len() {
            let node = self.observed[index];
            let status = self.status.entry(node).or_default();
            if status.revealed || !is_intersecting(doc, node) {
                continue;
            }
            status.revealed = true;
            doc.add_class(node, "visible");

            if doc.has_class(node, "stat-block") && !status.animated {
                let Some(label) = doc.query_within(node, &selector("h4")) else {
                    continue;
                };
                status.animated = true;
                doc.add_class(node, "animated");

                let template = doc.text_content(label);
                let Some((run, target)) = first_digit_run(&template) else {
                    continue;
                };
                let ticks = COUNT_DURATION.as_millis() as f64 / COUNT_TICK.as_millis() as f64;
                let run = run.to_string();
                self.animations.insert(
                    node,
                    CountAnimation {
                        label,
                        run,
                        target,
                        current: 0.0,
                        increment: target as f64 / ticks,
                        template,
                    },
                );
                timers.schedule(now + COUNT_TICK, TimerKind::CountTick { block: node });
            }
        }
    }

    /// Advance the animation on `block` by one tick.
    ///
    /// `fired_at` is the tick's scheduled instant; the next tick is spaced
    /// from it, not from when the embedder got around to calling us.
    pub fn handle_tick(
        &mut self,
        doc: &mut Document,
        timers: &mut TimerQueue,
        fired_at: Instant,
        block: NodeId,
    ) {
        let Some(animation) = self.animations.get_mut(&block) else {
            return;
        };
        animation.current += animation.increment;
        let done = animation.current >= animation.target as f64;
        if done {
            animation.current = animation.target as f64;
        }
        let shown = animation.current.floor() as u64;
        let text = replace_first(&animation.template, &animation.run, shown);
        doc.set_text_content(animation.label, &text);

        if done {
            self.animations.remove(&block);
            tracing::debug!("number animation finished");
        } else {
            timers.schedule(fired_at + COUNT_TICK, TimerKind::CountTick { block });
        }
    }
}

fn is_intersecting(doc: &Document, node: NodeId) -> bool {
    let Some(rect) = doc.rect(node) else {
        return false;
    };
    if rect.height <= 0.0 {
        return false;
    }
    let root_top = doc.scroll_y();
    let root_bottom = root_top + doc.viewport().height - BOTTOM_MARGIN;
    let visible = rect.bottom().min(root_bottom) - rect.y.max(root_top);
    visible / rect.height >= VISIBILITY_THRESHOLD
}
