//! Single-pointer tap/drag classification.
//!
//! One [`GestureSession`] exists per pressed pointer. Every move on that
//! pointer yields a horizontal drag delta; the release yields a tap only when
//! the press was short and stayed within the movement slop on both axes.
//! A second simultaneous pointer aborts the session, since multi-touch is not
//! rotation input.

use crate::config::GestureThresholds;
use glam::Vec2;
use smallvec::SmallVec;

/// Wall-clock milliseconds, as delivered by DOM event timestamps.
pub type Millis = f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Touch,
    Mouse,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub position: Vec2,
    pub timestamp: Millis,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub pointer_id: i32,
    pub kind: PointerKind,
    pub start_position: Vec2,
    pub start_timestamp: Millis,
    pub last_x: f32,
    pub still_tappable: bool,
}

impl GestureSession {
    fn open(sample: &PointerSample) -> Self {
        Self {
            pointer_id: sample.pointer_id,
            kind: sample.kind,
            start_position: sample.position,
            start_timestamp: sample.timestamp,
            last_x: sample.position.x,
            still_tappable: true,
        }
    }

    fn exceeds_slop(&self, position: Vec2, threshold: f32) -> bool {
        let d = (position - self.start_position).abs();
        d.x >= threshold || d.y >= threshold
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// Horizontal movement since the previous sample of the same session.
    Drag { delta_x: f32 },
    /// A short, still press. Reported at the press position.
    Tap { at: Vec2 },
}

#[derive(Clone, Debug, Default)]
pub struct GestureTracker {
    thresholds: GestureThresholds,
    session: Option<GestureSession>,
    // pointers that aborted a session and are still down
    stray: SmallVec<[i32; 4]>,
}

impl GestureTracker {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            session: None,
            stray: SmallVec::new(),
        }
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn pointer_down(&mut self, sample: PointerSample) {
        // a pointer cannot go down twice; its release was never delivered
        if self.release_stray(sample.pointer_id) {
            log::debug!("[gesture] pointer {} reused; dropping stale entry", sample.pointer_id);
        }
        if let Some(open) = self.session.take() {
            log::debug!(
                "[gesture] pointer {} joined pointer {}; aborting session",
                sample.pointer_id,
                open.pointer_id
            );
            self.stray.push(open.pointer_id);
            self.stray.push(sample.pointer_id);
            return;
        }
        if !self.stray.is_empty() {
            self.stray.push(sample.pointer_id);
            return;
        }
        self.session = Some(GestureSession::open(&sample));
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        let threshold = self.thresholds.move_threshold;
        let session = self
            .session
            .as_mut()
            .filter(|s| s.pointer_id == sample.pointer_id)?;
        if session.still_tappable && session.exceeds_slop(sample.position, threshold) {
            session.still_tappable = false;
        }
        let delta_x = sample.position.x - session.last_x;
        session.last_x = sample.position.x;
        Some(GestureEvent::Drag { delta_x })
    }

    pub fn pointer_up(&mut self, sample: PointerSample) -> Option<GestureEvent> {
        if self.release_stray(sample.pointer_id) {
            return None;
        }
        let session = match self.session {
            Some(s) if s.pointer_id == sample.pointer_id => s,
            _ => return None,
        };
        self.session = None;

        let still = session.still_tappable
            && !session.exceeds_slop(sample.position, self.thresholds.move_threshold);
        let elapsed = sample.timestamp - session.start_timestamp;
        if still && elapsed < self.thresholds.tap_max_duration_ms {
            Some(GestureEvent::Tap {
                at: session.start_position,
            })
        } else {
            None
        }
    }

    /// Pointer cancelled by the platform, or the mouse left the surface.
    pub fn pointer_cancel(&mut self, pointer_id: i32) {
        if self.release_stray(pointer_id) {
            return;
        }
        if self.session.map_or(false, |s| s.pointer_id == pointer_id) {
            self.session = None;
        }
    }

    fn release_stray(&mut self, pointer_id: i32) -> bool {
        match self.stray.iter().position(|&id| id == pointer_id) {
            Some(i) => {
                self.stray.swap_remove(i);
                true
            }
            None => false,
        }
    }
}
