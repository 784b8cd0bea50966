use crate::app::event::AppEvent;
use crate::ledger::FieldId;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tokio::time::Instant;

/// A pending dwell expiry for one field.
///
/// The timer task sleeps until the deadline and then posts
/// `AppEvent::FlashExpired`. Dropping the handle aborts the task, so a timer
/// never outlives the slot that owns it.
#[derive(Debug)]
pub struct FlashTimer {
    generation: u64,
    handle: AbortHandle,
}

impl FlashTimer {
    pub fn spawn(
        field: FieldId,
        generation: u64,
        deadline: Instant,
        tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let task = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(AppEvent::FlashExpired { field, generation });
        });
        Self {
            generation,
            handle: task.abort_handle(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for FlashTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
