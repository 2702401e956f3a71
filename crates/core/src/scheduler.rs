//! Host scheduler abstraction
//!
//! The game loop never waits on its own. After each tick it asks the host to
//! call it again by handing over a [`TickHandle`]; the host delivers that
//! handle back to [`GameLoop::on_tick`](crate::GameLoop::on_tick) with the
//! current timestamp. Cancelling tells the scheduler to forget the handle,
//! and the game loop itself refuses any handle that is not the one it is
//! currently waiting for, so a tick the host already dequeued is harmless.

/// Identifies one requested tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Timer capability provided by the host
pub trait Scheduler {
    /// Arrange for `handle` to be delivered on a later frame.
    fn schedule_next(&mut self, handle: TickHandle);

    /// Drop `handle` if it has not been delivered yet.
    fn cancel(&mut self, handle: TickHandle);
}

/// Scheduler for hosts that run their own frame loop.
///
/// Keeps at most one pending handle; the host polls it once per frame with
/// [`FrameScheduler::take_due`]. Tests use it the same way with synthetic
/// timestamps.
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler {
    pending: Option<TickHandle>,
    scheduled: u64,
    cancelled: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle waiting for the next frame, if any
    pub fn pending(&self) -> Option<TickHandle> {
        self.pending
    }

    /// Take the pending handle to deliver it this frame
    pub fn take_due(&mut self) -> Option<TickHandle> {
        self.pending.take()
    }

    /// Number of ticks requested so far
    pub fn scheduled(&self) -> u64 {
        self.scheduled
    }

    /// Number of pending ticks dropped by `cancel`
    pub fn cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl Scheduler for FrameScheduler {
    fn schedule_next(&mut self, handle: TickHandle) {
        self.scheduled += 1;
        self.pending = Some(handle);
    }

    fn cancel(&mut self, handle: TickHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
