//! Detail view state - FAQ accordion and the simulated contact form.
//!
//! Each rendered detail view owns its own [`DetailViewState`]; nothing here is
//! shared with the navigation layer or with sibling views.

use std::time::Duration;

/// Default delay before a simulated submission reports `Sent`.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(600);

/// Contact form progress. No data ever leaves the process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// How a contact form acknowledges a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBehavior {
    /// `Sending` for the configured delay, then a lasting confirmation
    Delayed,
    /// Confirmation at once, hidden again after `hide_after_ms`
    Instant { hide_after_ms: u64 },
}

/// Timer a submission asks the view to schedule.
///
/// Scheduling a new plan replaces whatever timer the view still holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// Nothing to schedule; any pending timer is left alone
    Skip,
    /// `complete_submission` after the delay
    Complete(Duration),
    /// `reset_submission` after the delay
    Hide(Duration),
}

impl SubmitPlan {
    pub fn delay(&self) -> Option<Duration> {
        match self {
            SubmitPlan::Skip => None,
            SubmitPlan::Complete(delay) | SubmitPlan::Hide(delay) => Some(*delay),
        }
    }

    /// Apply the plan's effect once its timer fires.
    pub fn fire(self, state: &mut DetailViewState) {
        match self {
            SubmitPlan::Skip => {}
            SubmitPlan::Complete(_) => state.complete_submission(),
            SubmitPlan::Hide(_) => state.reset_submission(),
        }
    }
}

/// Local interactive state of one detail view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetailViewState {
    /// At most one expanded FAQ entry
    pub open_faq: Option<String>,
    pub submission: SubmissionStatus,
}

impl DetailViewState {
    /// Toggle `id`. Opening one entry closes whichever was open.
    pub fn toggle_faq(&mut self, id: &str) {
        if self.open_faq.as_deref() == Some(id) {
            self.open_faq = None;
        } else {
            self.open_faq = Some(id.to_string());
        }
    }

    pub fn is_faq_open(&self, id: &str) -> bool {
        self.open_faq.as_deref() == Some(id)
    }

    /// `Idle | Sent -> Sending`. Returns false while already sending.
    pub fn begin_submission(&mut self) -> bool {
        if self.submission == SubmissionStatus::Sending {
            return false;
        }
        self.submission = SubmissionStatus::Sending;
        true
    }

    /// `Sending -> Sent`. Any other state is left alone.
    pub fn complete_submission(&mut self) {
        if self.submission == SubmissionStatus::Sending {
            self.submission = SubmissionStatus::Sent;
        }
    }

    /// `Sent -> Idle`, hiding the confirmation again.
    pub fn reset_submission(&mut self) {
        if self.submission == SubmissionStatus::Sent {
            self.submission = SubmissionStatus::Idle;
        }
    }

    /// Handle a form submission and say which timer to schedule.
    ///
    /// `Delayed` enters `Sending` and asks for completion after `delay`; a
    /// submit while already sending is `Skip`. `Instant` confirms at once and
    /// asks for the confirmation to be hidden later.
    pub fn submit(&mut self, behavior: SubmitBehavior, delay: Duration) -> SubmitPlan {
        match behavior {
            SubmitBehavior::Delayed => {
                if self.begin_submission() {
                    SubmitPlan::Complete(delay)
                } else {
                    SubmitPlan::Skip
                }
            }
            SubmitBehavior::Instant { hide_after_ms } => {
                self.begin_submission();
                self.complete_submission();
                SubmitPlan::Hide(Duration::from_millis(hide_after_ms))
            }
        }
    }

    pub fn is_sending(&self) -> bool {
        self.submission == SubmissionStatus::Sending
    }

    pub fn is_sent(&self) -> bool {
        self.submission == SubmissionStatus::Sent
    }
}

/// How a detail view is being rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetailMode {
    /// Active full-bleed view
    #[default]
    Full,
    /// Miniature inside the preview compositor
    Preview,
}

impl DetailMode {
    pub fn show_back_button(&self) -> bool {
        matches!(self, DetailMode::Full)
    }

    pub fn interactive(&self) -> bool {
        matches!(self, DetailMode::Full)
    }
}
