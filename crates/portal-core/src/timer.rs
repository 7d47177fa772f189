//! Scoped timers for the cosmetic delays (gate submit, contact form).
//!
//! A [`ScopedTask`] owns a cancellable handle and cancels it when dropped, so a
//! timer can never fire into a view that has already been torn down.

use tokio::task::JoinHandle;

/// Something that can stop a pending task.
pub trait CancelHandle {
    fn cancel(self);
}

impl<T> CancelHandle for JoinHandle<T> {
    fn cancel(self) {
        self.abort();
    }
}

/// Owns a pending task and cancels it on drop.
#[derive(Debug)]
pub struct ScopedTask<H: CancelHandle> {
    handle: Option<H>,
}

impl<H: CancelHandle> ScopedTask<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Cancel now instead of on drop.
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

impl<H: CancelHandle> Drop for ScopedTask<H> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }
}

/// Holds at most one pending task. Arming a new one cancels the previous.
///
/// A view keeps one slot per timer it runs; dropping the slot cancels
/// whatever is still pending.
#[derive(Debug)]
pub struct TimerSlot<H: CancelHandle> {
    current: Option<ScopedTask<H>>,
}

impl<H: CancelHandle> TimerSlot<H> {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Take ownership of `handle`, cancelling the task it replaces.
    pub fn arm(&mut self, handle: H) {
        self.current = Some(ScopedTask::new(handle));
    }

    /// Cancel the pending task, if any.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Whether a task is still owned (fired or not).
    pub fn is_armed(&self) -> bool {
        self.current.is_some()
    }
}

impl<H: CancelHandle> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::{DetailViewState, SubmissionStatus, SubmitBehavior, SubmitPlan};
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct CountingHandle(Arc<AtomicUsize>);

    impl CancelHandle for CountingHandle {
        fn cancel(self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    // Submits the way a detail view does: plan, then arm the slot.
    fn submit(
        state: &Arc<Mutex<DetailViewState>>,
        slot: &mut TimerSlot<JoinHandle<()>>,
        behavior: SubmitBehavior,
    ) -> SubmitPlan {
        let plan = state.lock().submit(behavior, Duration::from_millis(600));
        if let Some(delay) = plan.delay() {
            let state = Arc::clone(state);
            slot.arm(tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                plan.fire(&mut state.lock());
            }));
        }
        plan
    }

    #[test]
    fn test_drop_cancels() {
        let cancels = Arc::new(AtomicUsize::new(0));
        {
            let _task = ScopedTask::new(CountingHandle(Arc::clone(&cancels)));
        }
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_explicit_cancel_runs_once() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let task = ScopedTask::new(CountingHandle(Arc::clone(&cancels)));
        task.cancel();
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_arm_cancels_previous() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut slot = TimerSlot::new();

        slot.arm(CountingHandle(Arc::clone(&first)));
        assert_eq!(first.load(Ordering::SeqCst), 0);

        slot.arm(CountingHandle(Arc::clone(&second)));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);
        assert!(slot.is_armed());

        drop(slot);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_cancels_pending() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let mut slot = TimerSlot::new();
        slot.arm(CountingHandle(Arc::clone(&cancels)));
        slot.clear();
        assert!(!slot.is_armed());
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_completes_after_delay() {
        let state = Arc::new(Mutex::new(DetailViewState::default()));
        let mut slot = TimerSlot::new();
        submit(&state, &mut slot, SubmitBehavior::Delayed);
        assert_eq!(state.lock().submission, SubmissionStatus::Sending);

        tokio::time::sleep(Duration::from_millis(599)).await;
        assert_eq!(state.lock().submission, SubmissionStatus::Sending);

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(state.lock().submission, SubmissionStatus::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_submit_schedules_no_second_timer() {
        let state = Arc::new(Mutex::new(DetailViewState::default()));
        let mut slot = TimerSlot::new();
        submit(&state, &mut slot, SubmitBehavior::Delayed);

        tokio::time::sleep(Duration::from_millis(300)).await;
        // Skip leaves the first timer armed and untouched
        assert_eq!(submit(&state, &mut slot, SubmitBehavior::Delayed), SubmitPlan::Skip);
        assert!(slot.is_armed());

        // Completes on the original schedule, not 600ms after the second click
        tokio::time::sleep(Duration::from_millis(301)).await;
        assert_eq!(state.lock().submission, SubmissionStatus::Sent);
    }

    #[tokio::test(start_paused = true)]
    async fn test_instant_resubmit_restarts_hide_timer() {
        let behavior = SubmitBehavior::Instant { hide_after_ms: 4000 };
        let state = Arc::new(Mutex::new(DetailViewState::default()));
        let mut slot = TimerSlot::new();

        submit(&state, &mut slot, behavior);
        assert_eq!(state.lock().submission, SubmissionStatus::Sent);

        tokio::time::sleep(Duration::from_millis(3000)).await;
        submit(&state, &mut slot, behavior);

        // The first hide timer was cancelled when the second was armed
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(state.lock().submission, SubmissionStatus::Sent);

        tokio::time::sleep(Duration::from_millis(2600)).await;
        assert_eq!(state.lock().submission, SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_slot_before_fire_leaves_state_untouched() {
        let state = Arc::new(Mutex::new(DetailViewState::default()));
        let mut slot = TimerSlot::new();
        submit(&state, &mut slot, SubmitBehavior::Delayed);
        drop(slot);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(state.lock().submission, SubmissionStatus::Sending);
    }
}
