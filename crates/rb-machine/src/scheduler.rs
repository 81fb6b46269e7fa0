//! One-shot deferred execution with cancel handles
//!
//! Reveals go through the [`Scheduler`] seam: [`ThreadScheduler`] sleeps on a
//! spawned thread for real sessions, and [`ManualScheduler`] queues tasks to
//! be fired on demand so tests and demos control time explicitly.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

/// A deferred unit of work
pub type Task = Box<dyn FnOnce() + Send>;

/// One-shot scheduling seam
pub trait Scheduler: Send + Sync {
    /// Schedule `task` to run once after `delay`
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Cancel handle for a scheduled task.
///
/// Cancelling never interrupts a task that has already started; it only
/// guarantees a task that has not run yet never will.
#[derive(Debug, Clone, Default)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
}

impl TimerHandle {
    /// Create a live (non-cancelled) handle
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the task cancelled
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check whether the task was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Production scheduler: one spawned thread per task
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::new();
        let guard = handle.clone();
        std::thread::spawn(move || {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            if guard.is_cancelled() {
                log::trace!("scheduled task cancelled, skipping");
                return;
            }
            task();
        });
        handle
    }
}

/// Deterministic scheduler: tasks queue up until fired explicitly
#[derive(Default)]
pub struct ManualScheduler {
    queue: Mutex<VecDeque<(TimerHandle, Task)>>,
}

impl ManualScheduler {
    /// Create an empty scheduler
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued tasks (cancelled ones included until fired past)
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Run the next non-cancelled task; returns whether one ran.
    ///
    /// The queue lock is released before the task runs so tasks may schedule
    /// follow-up work.
    pub fn fire_next(&self) -> bool {
        loop {
            let entry = self.queue.lock().pop_front();
            match entry {
                Some((handle, task)) => {
                    if handle.is_cancelled() {
                        continue;
                    }
                    task();
                    return true;
                }
                None => return false,
            }
        }
    }

    /// Run every queued non-cancelled task; returns how many ran
    pub fn fire_all(&self) -> usize {
        let mut fired = 0;
        while self.fire_next() {
            fired += 1;
        }
        fired
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, _delay: Duration, task: Task) -> TimerHandle {
        let handle = TimerHandle::new();
        self.queue.lock().push_back((handle.clone(), task));
        handle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_manual_fire_order() {
        let scheduler = ManualScheduler::new();
        let log = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let sink = Arc::clone(&log);
            scheduler.schedule(Duration::ZERO, Box::new(move || sink.lock().push(i)));
        }

        assert_eq!(scheduler.pending(), 3);
        assert_eq!(scheduler.fire_all(), 3);
        assert_eq!(*log.lock(), vec![0, 1, 2]);
        assert!(!scheduler.fire_next());
    }

    #[test]
    fn test_manual_cancel_skips_task() {
        let scheduler = ManualScheduler::new();
        let ran = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&ran);
        let handle = scheduler.schedule(
            Duration::ZERO,
            Box::new(move || {
                sink.fetch_add(1, Ordering::SeqCst);
            }),
        );
        handle.cancel();
        assert!(handle.is_cancelled());

        assert_eq!(scheduler.fire_all(), 0);
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_task_may_schedule_follow_up() {
        let scheduler = Arc::new(ManualScheduler::new());
        let ran = Arc::new(AtomicUsize::new(0));

        let inner_scheduler = Arc::clone(&scheduler);
        let sink = Arc::clone(&ran);
        scheduler.schedule(
            Duration::ZERO,
            Box::new(move || {
                let sink = Arc::clone(&sink);
                inner_scheduler.schedule(
                    Duration::ZERO,
                    Box::new(move || {
                        sink.fetch_add(1, Ordering::SeqCst);
                    }),
                );
            }),
        );

        assert_eq!(scheduler.fire_all(), 2);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_thread_scheduler_fires() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        ThreadScheduler.schedule(
            Duration::from_millis(10),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        assert!(rx.recv_timeout(Duration::from_secs(2)).is_ok());
    }

    #[test]
    fn test_thread_scheduler_cancel() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let handle = ThreadScheduler.schedule(
            Duration::from_millis(100),
            Box::new(move || {
                let _ = tx.send(());
            }),
        );
        handle.cancel();
        assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
    }
}
