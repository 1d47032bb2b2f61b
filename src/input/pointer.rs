//! Pointer tracking for the animated background.
//!
//! Raw pointer positions are rescaled to normalized device coordinates:
//! both axes in [-1, 1], Y pointing up. The tracker is the single writer
//! of a [`PointerContext`]; any number of readers (the animator, the orbs)
//! sample it once per frame.
//!
//! Everything runs on the UI thread. The shared cell is `Rc<Cell<_>>`, so
//! handles can't cross threads and a read always sees the last complete
//! write.

use std::cell::Cell;
use std::rc::Rc;

use crate::render::layout::Bounds;

/// Normalized pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };
}

/// Map a position inside `viewport` to [-1, 1] on both axes.
///
/// Left edge → -1, right edge → 1, top edge → 1, bottom edge → -1.
/// Positions outside the viewport are clamped; a degenerate viewport
/// maps everything to the center.
pub fn normalize(px: f32, py: f32, viewport: Bounds) -> PointerState {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return PointerState::CENTER;
    }
    let u = (px - viewport.x) / viewport.width;
    let v = (py - viewport.y) / viewport.height;
    PointerState {
        x: (u * 2.0 - 1.0).clamp(-1.0, 1.0),
        y: (1.0 - v * 2.0).clamp(-1.0, 1.0),
    }
}

/// Create a pointer context: one writer, cloneable readers.
pub fn pointer_context() -> (PointerWriter, PointerReader) {
    let cell = Rc::new(Cell::new(PointerState::CENTER));
    (PointerWriter { cell: Rc::clone(&cell) }, PointerReader { cell })
}

/// The only handle that can change the pointer state. Not `Clone`.
#[derive(Debug)]
pub struct PointerWriter {
    cell: Rc<Cell<PointerState>>,
}

impl PointerWriter {
    pub fn set(&self, state: PointerState) {
        self.cell.set(state);
    }

    pub fn reader(&self) -> PointerReader {
        PointerReader { cell: Rc::clone(&self.cell) }
    }
}

/// Read-only view of the pointer state.
#[derive(Debug, Clone)]
pub struct PointerReader {
    cell: Rc<Cell<PointerState>>,
}

impl PointerReader {
    pub fn get(&self) -> PointerState {
        self.cell.get()
    }
}

/// Subscribes to pointer movement for the lifetime of the background.
///
/// Holds the context's writer while subscribed; [`release`](Self::release)
/// drops it, after which movement events are ignored.
#[derive(Debug)]
pub struct PointerTracker {
    writer: Option<PointerWriter>,
    /// Number of accepted movement events
    events: u64,
}

impl PointerTracker {
    pub fn subscribe(writer: PointerWriter) -> Self {
        log::debug!("Pointer tracker subscribed");
        Self {
            writer: Some(writer),
            events: 0,
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.writer.is_some()
    }

    pub fn events(&self) -> u64 {
        self.events
    }

    /// Handle a pointer move at `(px, py)`. Returns `false` once released.
    pub fn on_move(&mut self, px: f32, py: f32, viewport: Bounds) -> bool {
        match &self.writer {
            Some(writer) => {
                writer.set(normalize(px, py, viewport));
                self.events += 1;
                true
            }
            None => false,
        }
    }

    /// Drop the subscription. Idempotent.
    pub fn release(&mut self) {
        if self.writer.take().is_some() {
            log::debug!("Pointer tracker released after {} events", self.events);
        }
    }
}

impl Drop for PointerTracker {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Bounds {
        Bounds::new(0.0, 0.0, 1280.0, 800.0)
    }

    #[test]
    fn test_center_maps_to_origin() {
        let p = normalize(640.0, 400.0, viewport());
        assert!(p.x.abs() < 1e-6 && p.y.abs() < 1e-6, "got {:?}", p);
    }

    #[test]
    fn test_corners_map_to_extremes() {
        assert_eq!(normalize(0.0, 0.0, viewport()), PointerState { x: -1.0, y: 1.0 });
        assert_eq!(normalize(1280.0, 800.0, viewport()), PointerState { x: 1.0, y: -1.0 });
        assert_eq!(normalize(1280.0, 0.0, viewport()), PointerState { x: 1.0, y: 1.0 });
        assert_eq!(normalize(0.0, 800.0, viewport()), PointerState { x: -1.0, y: -1.0 });
    }

    #[test]
    fn test_inside_viewport_stays_in_range() {
        let vp = Bounds::new(100.0, 50.0, 333.0, 217.0);
        for i in 0..=20 {
            for j in 0..=20 {
                let px = vp.x + vp.width * i as f32 / 20.0;
                let py = vp.y + vp.height * j as f32 / 20.0;
                let p = normalize(px, py, vp);
                assert!((-1.0..=1.0).contains(&p.x), "x out of range: {:?}", p);
                assert!((-1.0..=1.0).contains(&p.y), "y out of range: {:?}", p);
            }
        }
    }

    #[test]
    fn test_outside_viewport_is_clamped() {
        let p = normalize(-500.0, 5000.0, viewport());
        assert_eq!(p, PointerState { x: -1.0, y: -1.0 });
    }

    #[test]
    fn test_degenerate_viewport() {
        let p = normalize(10.0, 10.0, Bounds::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(p, PointerState::CENTER);
    }

    #[test]
    fn test_tracker_writes_until_released() {
        let (writer, reader) = pointer_context();
        let mut tracker = PointerTracker::subscribe(writer);

        assert_eq!(reader.get(), PointerState::CENTER);
        assert!(tracker.on_move(0.0, 0.0, viewport()));
        assert_eq!(reader.get(), PointerState { x: -1.0, y: 1.0 });

        tracker.release();
        assert!(!tracker.is_subscribed());
        assert!(!tracker.on_move(1280.0, 800.0, viewport()));
        // Last value before release is kept
        assert_eq!(reader.get(), PointerState { x: -1.0, y: 1.0 });
        assert_eq!(tracker.events(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let (writer, reader) = pointer_context();
        let second = writer.reader();
        writer.set(PointerState { x: 0.5, y: 0.5 });
        writer.set(PointerState { x: -0.25, y: 0.75 });
        assert_eq!(reader.get(), second.get());
        assert_eq!(reader.get(), PointerState { x: -0.25, y: 0.75 });
    }
}
