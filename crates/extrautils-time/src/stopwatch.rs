//! Stopwatches for timing tasks.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::trace;

use crate::error::StopwatchError;
use crate::format::format_nanos;

/// Read access shared by all stopwatch flavours.
pub trait Stopwatch {
    /// Whether the stopwatch is running.
    fn is_started(&self) -> bool;

    /// Nanoseconds since the stopwatch was started.
    ///
    /// Can be called repeatedly; the stopwatch keeps running.
    fn stop(&self) -> Result<u64, StopwatchError>;

    /// Running time formatted by [`format_nanos`].
    fn formatted(&self) -> Result<String, StopwatchError> {
        self.stop().map(format_nanos)
    }
}

/// A single-owner stopwatch.
///
/// ```
/// use extrautils_time::{Stopwatch, TaskStopwatch};
///
/// let mut watch = TaskStopwatch::new();
/// assert!(watch.stop().is_err());
///
/// watch.start().unwrap();
/// let first = watch.stop().unwrap();
/// assert!(watch.stop().unwrap() >= first);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStopwatch {
    started_at: Option<Instant>,
}

impl TaskStopwatch {
    /// A stopwatch that has not been started yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A stopwatch that is already running.
    pub fn started() -> Self {
        TaskStopwatch {
            started_at: Some(Instant::now()),
        }
    }

    /// Starts the stopwatch. Fails if it is already running.
    pub fn start(&mut self) -> Result<(), StopwatchError> {
        if self.started_at.is_some() {
            return Err(StopwatchError::AlreadyStarted);
        }
        self.started_at = Some(Instant::now());
        Ok(())
    }
}

impl Stopwatch for TaskStopwatch {
    fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    fn stop(&self) -> Result<u64, StopwatchError> {
        let started_at = self.started_at.ok_or(StopwatchError::NotStarted)?;
        let nanos = u64::try_from(started_at.elapsed().as_nanos()).unwrap_or(u64::MAX);
        trace!(nanos, "stopwatch read");
        Ok(nanos)
    }
}

/// A stopwatch that can be shared between threads.
///
/// Same contract as [`TaskStopwatch`], with every operation taking `&self`.
#[derive(Debug, Default)]
pub struct SyncTaskStopwatch {
    inner: Mutex<TaskStopwatch>,
}

impl SyncTaskStopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started() -> Self {
        SyncTaskStopwatch {
            inner: Mutex::new(TaskStopwatch::started()),
        }
    }

    /// Starts the stopwatch. Fails if it is already running.
    pub fn start(&self) -> Result<(), StopwatchError> {
        self.lock().start()
    }

    fn lock(&self) -> MutexGuard<'_, TaskStopwatch> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Stopwatch for SyncTaskStopwatch {
    fn is_started(&self) -> bool {
        self.lock().is_started()
    }

    fn stop(&self) -> Result<u64, StopwatchError> {
        self.lock().stop()
    }
}
