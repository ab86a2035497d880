//! Cancel-then-delay-then-fetch debouncing for search input.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Debounces a stream of triggers so only the most recent one runs.
///
/// Each `submit` aborts the previous in-flight task — superseded
/// keystrokes are cancelled, not merely ignored, so the backend never
/// sees the intermediate queries — then waits out the quiet period
/// before running the new one. An aborted task never applies its result.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    in_flight: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// The quiet period the source app uses between keystroke and fetch.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(400);

    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: None,
        }
    }

    /// Schedules `task` to run after the quiet period, cancelling any
    /// previously scheduled or running task.
    pub fn submit<F, Fut>(&mut self, task: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.in_flight = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task().await;
        }));
    }

    /// Cancels the scheduled task, if any. Called on view dismissal so an
    /// in-flight request cannot write into a dead screen.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn only_the_latest_submission_runs() {
        let applied = Arc::new(AtomicU32::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        for keystroke in 1..=3u32 {
            let applied = Arc::clone(&applied);
            debouncer.submit(move || async move {
                applied.store(keystroke, Ordering::SeqCst);
            });
            tokio::task::yield_now().await;
            // Next keystroke arrives inside the quiet period.
            tokio::time::advance(Duration::from_millis(100)).await;
        }

        tokio::time::advance(Duration::from_millis(500)).await;
        tokio::task::yield_now().await;

        assert_eq!(
            applied.load(Ordering::SeqCst),
            3,
            "only the final keystroke's task should have applied"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_runs_before_the_quiet_period_elapses() {
        let applied = Arc::new(AtomicU32::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        let flag = Arc::clone(&applied);
        debouncer.submit(move || async move {
            flag.store(1, Ordering::SeqCst);
        });
        // Let the spawned task register its sleep before moving the paused
        // clock, or the auto-advance skips straight past the deadline.
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(300)).await;
        tokio::task::yield_now().await;
        assert_eq!(applied.load(Ordering::SeqCst), 0);

        tokio::time::advance(Duration::from_millis(200)).await;
        tokio::task::yield_now().await;
        assert_eq!(applied.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_prevents_any_application() {
        let applied = Arc::new(AtomicU32::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(400));

        let flag = Arc::clone(&applied);
        debouncer.submit(move || async move {
            flag.store(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::advance(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(applied.load(Ordering::SeqCst), 0);
    }
}
