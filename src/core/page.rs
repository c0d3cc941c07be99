use crate::content::{site_content, NavItem, SiteContent};
use crate::core::scroll::{ProgressBar, ScrollToTop, ScrollTracker, SectionLayout};
use crate::core::submitter::{ContactForm, ContactFormSubmitter, SubmitOutcome};
use crate::domain::model::{ScrollMetrics, Section, SubmissionState};
use crate::domain::ports::{MessageRelay, Notifier, Viewport};

/// View-model for one page instance.
///
/// Scroll state and submission state are independent; each has a single
/// writer (this struct) for the lifetime of the page.
pub struct PortfolioPage<R: MessageRelay, N: Notifier> {
    content: SiteContent,
    tracker: ScrollTracker,
    layout: SectionLayout,
    active_section: Section,
    submitter: ContactFormSubmitter<R, N>,
}

impl<R: MessageRelay, N: Notifier> PortfolioPage<R, N> {
    pub fn new(relay: R, notifier: N) -> Self {
        Self::with_content(site_content(), relay, notifier)
    }

    pub fn with_content(content: SiteContent, relay: R, notifier: N) -> Self {
        Self {
            content,
            tracker: ScrollTracker::new(),
            layout: SectionLayout::default(),
            active_section: Section::Home,
            submitter: ContactFormSubmitter::new(relay, notifier),
        }
    }

    /// Attaches the scroll listener and mounts an empty contact form.
    pub fn mount(&mut self) {
        self.tracker.attach();
        self.submitter.mount(ContactForm::default());
        tracing::debug!("Portfolio page mounted");
    }

    /// Detaches the scroll listener and drops the form. An outstanding send
    /// still finishes but has no form left to clear.
    pub fn unmount(&mut self) {
        self.tracker.detach();
        self.submitter.unmount();
        tracing::debug!("Portfolio page unmounted");
    }

    /// Section offsets change whenever the host re-lays out the page.
    pub fn set_layout(&mut self, layout: SectionLayout) {
        self.layout = layout;
    }

    pub fn handle_scroll(&mut self, metrics: ScrollMetrics) -> f64 {
        if self.tracker.handle_scroll(metrics).is_some() && !self.layout.is_empty() {
            let active = self.layout.active_section(metrics.offset);
            if active != self.active_section {
                tracing::debug!(section = active.id(), "Active section changed");
                self.active_section = active;
            }
        }
        self.tracker.progress()
    }

    pub fn progress(&self) -> f64 {
        self.tracker.progress()
    }

    pub fn progress_bar_width(&self) -> String {
        ProgressBar::css_width(self.progress())
    }

    pub fn scroll_to_top_visible(&self) -> bool {
        ScrollToTop::is_visible(self.progress())
    }

    /// Activates the scroll-to-top control. A hidden control does nothing.
    pub fn scroll_to_top<V: Viewport + ?Sized>(&self, viewport: &mut V) -> bool {
        if !self.scroll_to_top_visible() {
            return false;
        }
        ScrollToTop::activate(viewport);
        true
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    /// Navigation entries paired with their highlight flag.
    pub fn navigation(&self) -> impl Iterator<Item = (&NavItem, bool)> + '_ {
        self.content
            .navigation
            .iter()
            .map(move |item| (item, item.is_active(self.active_section)))
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn contact_form(&self) -> &ContactFormSubmitter<R, N> {
        &self.submitter
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submitter.state()
    }

    pub fn submit_enabled(&self) -> bool {
        self.submitter.submit_enabled()
    }

    pub fn submit_label(&self) -> &'static str {
        self.submitter.submit_label()
    }

    pub async fn submit_contact(&self) -> SubmitOutcome {
        self.submitter.submit().await
    }
}
