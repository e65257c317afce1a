//! Scroll reveal bookkeeping.
//!
//! Items start hidden and are revealed at most once, either when they first
//! intersect the viewport or immediately when the platform cannot observe
//! intersections.

/// How reveal items are made visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealMode {
    /// Reveal each item the first time its visible fraction reaches `threshold`.
    Observe { threshold: f64 },
    /// No intersection observer: everything is visible right away.
    Immediate,
}

impl RevealMode {
    /// Pick the mode from feature detection.
    pub fn detect(has_intersection_observer: bool, threshold: f64) -> Self {
        if has_intersection_observer {
            Self::Observe { threshold }
        } else {
            Self::Immediate
        }
    }
}

/// Tracks which of a fixed list of items have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    remaining: usize,
}

impl RevealTracker {
    /// Track `count` hidden items.
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
            remaining: count,
        }
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    /// Items still waiting to be revealed.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// All items revealed; observation can stop.
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    /// Apply intersection entries `(index, is_intersecting)` and return the
    /// indices that became visible. Those items should stop being observed.
    pub fn on_entries<I>(&mut self, entries: I) -> Vec<usize>
    where
        I: IntoIterator<Item = (usize, bool)>,
    {
        entries
            .into_iter()
            .filter(|&(_, intersecting)| intersecting)
            .filter_map(|(index, _)| self.mark(index).then_some(index))
            .collect()
    }

    /// Reveal everything not yet revealed, returning those indices.
    pub fn reveal_all(&mut self) -> Vec<usize> {
        (0..self.revealed.len()).filter(|&i| self.mark(i)).collect()
    }

    fn mark(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                self.remaining -= 1;
                true
            }
            _ => false,
        }
    }
}
