use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(150);

/// When a recomputation requested by a criteria change actually runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecomputePolicy {
    Immediate,
    Debounced(Duration),
}

impl Default for RecomputePolicy {
    fn default() -> Self {
        RecomputePolicy::Debounced(DEFAULT_DEBOUNCE)
    }
}

/// Runs the last scheduled job once the policy's quiet period has elapsed.
///
/// Scheduling a new job aborts the pending one. Must be used inside a tokio
/// runtime unless the policy is [`RecomputePolicy::Immediate`].
pub struct Debouncer {
    policy: RecomputePolicy,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(policy: RecomputePolicy) -> Self {
        Self {
            policy,
            pending: Mutex::new(None),
        }
    }

    pub fn policy(&self) -> RecomputePolicy {
        self.policy
    }

    pub fn schedule<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        match self.policy {
            RecomputePolicy::Immediate => job(),
            RecomputePolicy::Debounced(delay) => {
                let handle = tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    job();
                });
                *self.pending.lock().unwrap() = Some(handle);
            }
        }
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
