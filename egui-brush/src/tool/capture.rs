use emath::Pos2;
use log::debug;

/// Subscription of one gesture to global pointer input.
///
/// While a capture is held, [`BrushTool`](crate::BrushTool) reads motion and
/// releases from the whole window instead of only its own widget. The capture
/// remembers the last position it forwarded, so a frame in which the pointer
/// rests produces no move. It is consumed by the committing action, or
/// released on drop if the tool goes away mid-gesture.
#[derive(Debug)]
#[must_use = "Dropping a capture ends the gesture subscription"]
pub struct PointerCapture {
    gesture: u64,
    last_pos: Pos2,
    released: bool,
}

impl PointerCapture {
    pub fn acquire(gesture: u64, origin: Pos2) -> Self {
        debug!("Capture pointer for gesture {gesture} at {origin:?}");
        Self {
            gesture,
            last_pos: origin,
            released: false,
        }
    }

    /// Returns `pos` if it differs from the last forwarded position.
    pub fn track(&mut self, pos: Pos2) -> Option<Pos2> {
        if pos == self.last_pos {
            return None;
        }
        self.last_pos = pos;
        Some(pos)
    }

    pub fn release(mut self) {
        self.released = true;
        debug!(
            "Release pointer for gesture {} at {:?}",
            self.gesture, self.last_pos
        );
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        if !self.released {
            debug!("Pointer capture of gesture {} dropped mid-gesture", self.gesture);
        }
    }
}

#[cfg(test)]
mod tests {
    use emath::pos2;

    use super::*;

    #[test]
    fn track_skips_resting_pointer() {
        let mut capture = PointerCapture::acquire(1, pos2(10.0, 10.0));
        assert_eq!(None, capture.track(pos2(10.0, 10.0)));
        assert_eq!(Some(pos2(12.0, 10.0)), capture.track(pos2(12.0, 10.0)));
        assert_eq!(None, capture.track(pos2(12.0, 10.0)));
        assert_eq!(Some(pos2(10.0, 10.0)), capture.track(pos2(10.0, 10.0)));
        capture.release();
    }
}
