//! Delayed reply delivery.
//!
//! The text is chosen up front; only the simulated "thinking" delay runs in a
//! background task. Dropping or cancelling the [`PendingReply`] aborts that
//! task and the text is discarded.

use std::time::Duration;

use folio_core::traits::{Picker, Responder};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A reply that becomes available once its delay has elapsed.
///
/// Aborts the underlying task on drop.
pub struct PendingReply {
    handle: Option<JoinHandle<String>>,
}

impl PendingReply {
    /// Spawn a task that yields `text` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn deliver(text: String, delay: Duration) -> Self {
        Self::from_handle(tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            text
        }))
    }

    pub(crate) fn from_handle(handle: JoinHandle<String>) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Abandon the reply. Safe to call more than once.
    pub fn cancel(&self) {
        if let Some(h) = &self.handle {
            h.abort();
        }
    }

    /// Whether the delay has run out (or the reply was cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the reply. Returns `None` if it was cancelled.
    pub async fn wait(mut self) -> Option<String> {
        let handle = self.handle.as_mut()?;
        match handle.await {
            Ok(text) => Some(text),
            Err(e) if e.is_cancelled() => {
                debug!("reply cancelled before delivery");
                None
            }
            Err(e) => {
                warn!("reply task failed: {e}");
                None
            }
        }
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            h.abort();
        }
    }
}

/// Compose a reply now and deliver it after the responder's latency.
///
/// The jitter is drawn from the same picker as the response, so a seeded
/// picker reproduces both.
pub fn respond(
    responder: &dyn Responder,
    query: &str,
    subject: Option<&str>,
    picker: &mut dyn Picker,
) -> PendingReply {
    let text = responder.compose(query, subject, picker);
    let latency = responder.latency();
    let jitter = picker.pick(latency.span_ms() as usize) as u64;
    let delay = latency.delay(jitter);
    debug!("{}: reply ready in {}ms", responder.name(), delay.as_millis());
    PendingReply::deliver(text, delay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_instant_delivery() {
        let reply = PendingReply::deliver("hi".into(), Duration::ZERO);
        assert_eq!(reply.wait().await.as_deref(), Some("hi"));
    }

    #[tokio::test]
    async fn test_waits_for_delay() {
        let start = Instant::now();
        let reply = PendingReply::deliver("later".into(), Duration::from_millis(60));
        assert!(!reply.is_finished());
        assert_eq!(reply.wait().await.as_deref(), Some("later"));
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[tokio::test]
    async fn test_cancel_discards_text() {
        let start = Instant::now();
        let reply = PendingReply::deliver("never".into(), Duration::from_secs(60));
        reply.cancel();
        reply.cancel();
        assert_eq!(reply.wait().await, None);
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    /// A slow reply task that drops `alive` when it is aborted.
    fn watched_reply(alive: oneshot::Sender<()>) -> PendingReply {
        PendingReply::from_handle(tokio::spawn(async move {
            let _alive = alive;
            tokio::time::sleep(Duration::from_secs(60)).await;
            String::from("late")
        }))
    }

    #[tokio::test]
    async fn test_cancel_finishes_task_early() {
        let reply = PendingReply::deliver("late".into(), Duration::from_secs(60));
        reply.cancel();
        let deadline = Instant::now() + Duration::from_secs(2);
        while !reply.is_finished() {
            assert!(Instant::now() < deadline, "cancelled task still running");
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }

    #[tokio::test]
    async fn test_drop_aborts_task() {
        let (alive, gone) = oneshot::channel();
        let reply = watched_reply(alive);
        drop(reply);
        let outcome = tokio::time::timeout(Duration::from_secs(2), gone).await;
        assert!(
            matches!(outcome, Ok(Err(_))),
            "task should be aborted, dropping its sender"
        );
    }

    #[tokio::test]
    async fn test_abandoned_wait_aborts_task() {
        let (alive, gone) = oneshot::channel();
        let reply = watched_reply(alive);
        let waited = tokio::time::timeout(Duration::from_millis(20), reply.wait()).await;
        assert!(waited.is_err(), "wait should still be pending");
        let outcome = tokio::time::timeout(Duration::from_secs(2), gone).await;
        assert!(matches!(outcome, Ok(Err(_))));
    }

    #[tokio::test]
    async fn test_finished_after_delivery() {
        let reply = PendingReply::deliver("done".into(), Duration::ZERO);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(reply.is_finished());
    }
}
