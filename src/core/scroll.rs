use crate::domain::model::{ScrollBehavior, ScrollMetrics, Section};
use crate::domain::ports::Viewport;

/// 進度超過這個百分比才顯示「回到頂端」按鈕
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 20.0;

/// 固定導覽列的高度補償，區塊頂端進入這個範圍就視為目前區塊
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

/// Scroll completion in `[0, 100]`.
///
/// A page that fits in the viewport has nothing to scroll and reports `0`.
pub fn compute_progress(metrics: &ScrollMetrics) -> f64 {
    let max_scroll = metrics.max_scroll();
    if max_scroll <= 0.0 || metrics.offset.is_nan() {
        return 0.0;
    }

    (metrics.offset / max_scroll * 100.0).clamp(0.0, 100.0)
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    progress: f64,
    attached: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the scroll listener. Returns `false` if one is already registered.
    pub fn attach(&mut self) -> bool {
        if self.attached {
            return false;
        }
        self.attached = true;
        tracing::debug!("Scroll listener attached");
        true
    }

    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            tracing::debug!("Scroll listener detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Recomputes progress for one scroll event. Events after `detach` are dropped.
    pub fn handle_scroll(&mut self, metrics: ScrollMetrics) -> Option<f64> {
        if !self.attached {
            return None;
        }

        self.progress = compute_progress(&metrics);
        tracing::trace!(offset = metrics.offset, progress = self.progress, "Scroll event");
        Some(self.progress)
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }
}

pub struct ProgressBar;

impl ProgressBar {
    pub fn width_percent(progress: f64) -> f64 {
        progress.clamp(0.0, 100.0)
    }

    /// Inline style width, e.g. `"42.5%"`.
    pub fn css_width(progress: f64) -> String {
        format!("{}%", Self::width_percent(progress))
    }
}

pub struct ScrollToTop;

impl ScrollToTop {
    pub fn is_visible(progress: f64) -> bool {
        progress > SCROLL_TO_TOP_THRESHOLD
    }

    pub fn activate<V: Viewport + ?Sized>(viewport: &mut V) {
        viewport.scroll_to(0.0, ScrollBehavior::Smooth);
    }
}

/// Top offset of every rendered section, used for navigation highlighting.
#[derive(Debug, Clone, Default)]
pub struct SectionLayout {
    tops: Vec<(Section, f64)>,
}

impl SectionLayout {
    pub fn new(tops: impl IntoIterator<Item = (Section, f64)>) -> Self {
        let mut tops: Vec<_> = tops.into_iter().collect();
        tops.sort_by(|a, b| a.1.total_cmp(&b.1));
        Self { tops }
    }

    pub fn is_empty(&self) -> bool {
        self.tops.is_empty()
    }

    pub fn active_section(&self, offset: f64) -> Section {
        let probe = offset + ACTIVE_SECTION_OFFSET;
        self.tops
            .iter()
            .take_while(|(_, top)| *top <= probe)
            .last()
            .map(|(section, _)| *section)
            .unwrap_or_default()
    }
}
