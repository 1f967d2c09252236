//! One-way visibility tracking for content cards.
//!
//! Registered elements are addressed by index. A reveal is permanent: once
//! an index is reported it is never reported again and nothing here can
//! un-reveal it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::{RevealConfig, RevealStrategy};

/// Class added to an element once it has scrolled into view.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Scroll strategy test: the element's top has passed `viewport - offset`.
#[must_use]
pub fn passed_scroll_line(top: f64, viewport_height: f64, offset_px: f64) -> bool {
    top < viewport_height - offset_px
}

/// Observer strategy test.
#[must_use]
pub fn meets_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

#[derive(Clone, Debug)]
pub struct RevealTracker {
    strategy: RevealStrategy,
    offset_px: f64,
    threshold: f64,
    revealed: Vec<bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new(count: usize, config: &RevealConfig) -> Self {
        Self {
            strategy: config.strategy,
            offset_px: config.scroll_offset_px,
            threshold: config.threshold,
            revealed: vec![false; count],
        }
    }

    #[must_use]
    pub fn strategy(&self) -> RevealStrategy {
        self.strategy
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|r| !**r).count()
    }

    /// Scroll check. `tops[i]` is element `i`'s current top relative to the
    /// viewport; extra or missing entries are ignored. Returns indices revealed
    /// by this call.
    pub fn on_scroll(&mut self, viewport_height: f64, tops: &[f64]) -> Vec<usize> {
        let mut newly = Vec::new();
        for (index, (revealed, top)) in self.revealed.iter_mut().zip(tops).enumerate() {
            if !*revealed && passed_scroll_line(*top, viewport_height, self.offset_px) {
                *revealed = true;
                newly.push(index);
            }
        }
        newly
    }

    /// Observer report for one element. Returns `true` when this report
    /// revealed it, so the caller can stop observing.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        let Some(revealed) = self.revealed.get_mut(index) else {
            return false;
        };
        if *revealed || !meets_threshold(is_intersecting, ratio, self.threshold) {
            return false;
        }
        *revealed = true;
        true
    }
}
