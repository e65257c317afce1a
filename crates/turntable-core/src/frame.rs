//! Frame scheduling abstraction.
//!
//! The coast animation never loops on its own; it asks a [`FrameScheduler`]
//! for one frame at a time and is stepped by the host when that frame fires.

/// Identifier of a requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Something that can run a callback on the next animation frame.
pub trait FrameScheduler {
    /// Request a single callback on the next frame. `None` if the platform
    /// refused, in which case no callback will run.
    fn request_frame(&mut self) -> Option<FrameHandle>;

    /// Cancel a previously requested frame. Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Deterministic scheduler that only records requests.
///
/// Used by headless drivers (the simulator binary, tests) which decide
/// themselves when a frame "fires".
#[derive(Debug, Clone, Default)]
pub struct ManualFrames {
    next_id: i32,
    pending: Vec<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrames {
    /// Create a scheduler with no pending frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the oldest pending frame, as if the browser were about to run it.
    pub fn take_due(&mut self) -> Option<FrameHandle> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Frames requested but not yet fired or cancelled.
    pub fn pending(&self) -> &[FrameHandle] {
        &self.pending
    }

    /// Total number of `request_frame` calls.
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Total number of effective `cancel_frame` calls.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        self.requested += 1;
        Some(handle)
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
    fn test_request_and_take() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame();
        let b = frames.request_frame();
        assert_ne!(a, b);
        assert_eq!(frames.take_due(), a);
        assert_eq!(frames.take_due(), b);
        assert_eq!(frames.take_due(), None);
        assert_eq!(frames.requested(), 2);
    }

    #[test]
    fn test_cancel_unknown_is_ignored() {
        let mut frames = ManualFrames::new();
        let a = frames.request_frame().unwrap();
        frames.cancel_frame(FrameHandle(99));
        assert_eq!(frames.cancelled(), 0);
        frames.cancel_frame(a);
        assert_eq!(frames.cancelled(), 1);
        assert!(frames.pending().is_empty());
    }
}
