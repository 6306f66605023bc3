use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A deferred unit of work. Fires at most once.
pub type Task = Box<dyn FnOnce() + Send>;

/// Handle to one scheduled task. Consuming it with [`cancel`] guarantees
/// the task never fires; a task that already ran is unaffected.
/// Dropping the handle does NOT cancel.
///
/// [`cancel`]: ScheduleHandle::cancel
pub struct ScheduleHandle {
    cancel: Box<dyn FnOnce() + Send>,
}

impl ScheduleHandle {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Box::new(cancel),
        }
    }

    pub fn cancel(self) {
        (self.cancel)()
    }
}

impl fmt::Debug for ScheduleHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduleHandle").finish()
    }
}

/// The delayed-continuation capability the reveal engine runs on.
///
/// Contract: the task fires at most once, no earlier than `delay`, and
/// never after its handle was cancelled.
pub trait Scheduler: Send + Sync {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduleHandle;
}

/// Scheduler backed by the tokio runtime. Must be used from inside one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> ScheduleHandle {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
        let abort = handle.abort_handle();
        ScheduleHandle::new(move || abort.abort())
    }
}

/// Deterministic scheduler for tests and headless playback.
///
/// Tasks queue up in FIFO order and only run when the caller says so via
/// [`tick`] or [`run_to_idle`]. Delays are recorded nowhere: the engine
/// keeps at most one continuation outstanding, so arrival order is
/// already execution order.
///
/// [`tick`]: ManualScheduler::tick
/// [`run_to_idle`]: ManualScheduler::run_to_idle
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<VecDeque<PendingTask>>,
}

struct PendingTask {
    task: Task,
    cancelled: Arc<AtomicBool>,
}

impl ManualScheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Scheduled tasks that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Fire the oldest live task. Returns false when nothing is left.
    pub fn tick(&self) -> bool {
        loop {
            let entry = self.queue.lock().unwrap().pop_front();
            match entry {
                Some(pending) => {
                    if pending.cancelled.load(Ordering::SeqCst) {
                        continue;
                    }
                    // Run outside the queue lock: the task may reschedule.
                    (pending.task)();
                    return true;
                }
                None => return false,
            }
        }
    }

    /// Tick until the queue drains; returns how many tasks fired.
    pub fn run_to_idle(&self) -> usize {
        let mut fired = 0;
        while self.tick() {
            fired += 1;
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, _delay: Duration, task: Task) -> ScheduleHandle {
        let cancelled = Arc::new(AtomicBool::new(false));
        self.queue.lock().unwrap().push_back(PendingTask {
            task,
            cancelled: cancelled.clone(),
        });
        ScheduleHandle::new(move || cancelled.store(true, Ordering::SeqCst))
    }
}
