// Bookkeeping for the pending requestAnimationFrame id.
//
// A tick only keeps the loop going while the slot still holds the id that
// fired it. `stop()` empties the slot; `stop()` then `start()` from inside a
// tick puts a fresh id there, and that new frame owns the loop instead.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: Cell<Option<i32>>,
}

impl FrameSlot {
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Id of the frame that will run next, or is running now.
    #[inline]
    pub fn current(&self) -> Option<i32> {
        self.pending.get()
    }

    #[inline]
    pub fn set(&self, id: Option<i32>) {
        self.pending.set(id);
    }

    #[inline]
    pub fn take(&self) -> Option<i32> {
        self.pending.take()
    }

    /// Whether the tick started for `fired` may request the next frame.
    #[inline]
    pub fn owns(&self, fired: Option<i32>) -> bool {
        fired.is_some() && self.pending.get() == fired
    }
}
