//! Pure view models for the cosmetic page behaviors: navigation toggle,
//! auto-advancing slider, scroll-triggered reveal.
//!
//! No timers or IO here. Adapters drive these through `Command`s and render
//! whatever state they hold.

/// Binary visibility toggle covering both navigation regions (links and
/// action buttons). One flag, flipped on each activation; nothing persists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    pub expanded: bool,
}

impl NavMenu {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

/// Cyclic index over a fixed slide sequence. Advances one step per tick and
/// wraps to zero after the last index. The translation offset is
/// `index * item_width`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    count: usize,
    index: usize,
    item_width: u32,
}

impl Slider {
    pub fn new(count: usize, item_width: u32) -> Self {
        Self {
            count,
            index: 0,
            item_width,
        }
    }

    /// Advance one step. No-op when the sequence is empty.
    pub fn advance(&mut self) {
        if self.count > 0 {
            self.index = (self.index + 1) % self.count;
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current translation offset in pixels.
    pub fn offset_px(&self) -> u32 {
        self.index as u32 * self.item_width
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Set of content items, each transitioning hidden -> visible the first time
/// its visible fraction meets `threshold`. One-directional: an item never
/// re-hides, and repeating the same sighting is harmless.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealGrid {
    visible: Vec<bool>,
    threshold: f64,
}

impl RevealGrid {
    pub fn new(count: usize, threshold: f64) -> Self {
        Self {
            visible: vec![false; count],
            threshold,
        }
    }

    /// Report how much of item `idx` is currently visible. Out-of-range
    /// indices are ignored.
    pub fn sighted(&mut self, idx: usize, fraction: f64) {
        if fraction >= self.threshold {
            if let Some(v) = self.visible.get_mut(idx) {
                *v = true;
            }
        }
    }

    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible.get(idx).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
