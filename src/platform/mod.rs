//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame on web, manual stepping elsewhere)
//! - Keyboard state

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::KeyState;

/// Identifies one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Source of display-refresh ticks
///
/// Each request yields exactly one future callback carrying the returned
/// handle. Cancelled handles never fire.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler driven by hand (tests, headless runs)
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    /// Total cancellations that removed a pending frame
    pub cancelled: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested and not yet fired or cancelled
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Fire the oldest pending frame
    pub fn pop_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame();
        let b = sched.request_frame();
        assert_ne!(a, b);
        assert_eq!(sched.pending(), &[a, b]);
    }

    #[test]
    fn test_cancel_removes_pending() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame();
        let b = sched.request_frame();
        sched.cancel_frame(a);
        assert_eq!(sched.pending(), &[b]);
        assert_eq!(sched.cancelled, 1);

        // Already gone
        sched.cancel_frame(a);
        assert_eq!(sched.cancelled, 1);
    }

    #[test]
    fn test_pop_due_is_fifo() {
        let mut sched = ManualScheduler::new();
        let a = sched.request_frame();
        let b = sched.request_frame();
        assert_eq!(sched.pop_due(), Some(a));
        assert_eq!(sched.pop_due(), Some(b));
        assert_eq!(sched.pop_due(), None);
    }
}
